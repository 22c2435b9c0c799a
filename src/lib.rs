//! Urban Dictionary TUI library
//!
//! Core components for looking up words from the terminal.

pub mod app;
pub mod event;
pub mod fetch;
pub mod logging;
pub mod state;
pub mod ui;
