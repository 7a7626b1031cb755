//! # Infiniscroll - an endless, virtualized feed for the terminal
//!
//! Rows arrive page by page from a simulated, slow data source. Each row's
//! height and color are derived deterministically from its key, and only the
//! rows intersecting the viewport are drawn. Scrolling to the top loads the
//! next page and prepends it without moving what is on screen.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`, `core::raw_msg`): events that can change the state
//! - **Update** (`core::update`): pure function from message and state to new state
//! - **Command** (`core::cmd`): side effects such as page fetches
//! - **View** (`presentation::components`): rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use infiniscroll::core::{
//!     cmd::Cmd,
//!     msg::{feed::FeedMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Feed(FeedMsg::LoadFirstPage), state);
//!
//! assert!(state.feed.is_fetching_next_page);
//! assert_eq!(commands, vec![Cmd::FetchPage { offset: 0 }]);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Key hashing, row visuals, pages and the virtualizer
//! - [`core`] - State, messages, update and command execution
//! - [`infrastructure`] - Terminal, CLI, configuration and the page source
//! - [`integration`] - Runtime and the main loop
//! - [`presentation`] - Components, widgets, styles and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
