//! TUI (Text User Interface) module for sortvis
//!
//! Terminal UI built on ratatui/crossterm: the race app, its modals and the
//! bar chart widget.

pub mod app;
pub mod race_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use race_app::{RaceApp, RaceState};
pub use theme::{current_theme, Theme};
