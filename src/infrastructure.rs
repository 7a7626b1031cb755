//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The paginated row source

pub mod cli;
pub mod config;
pub mod page_source;
pub mod tui;
