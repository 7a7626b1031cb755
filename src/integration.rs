//! Integration layer
//!
//! Wires the Elm core to the terminal:
//! - `Runtime` runs translate, update and command execution
//! - `AppRunner` owns the event loop
//! - `Renderer` draws the components

pub mod app_runner;
pub mod renderer;
pub mod runtime;
