//! Terminal User Interface module
//!
//! This module provides the interactive interface using ratatui: the
//! two-panel budget view, the entry dialogs, and the event loop.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
