//! sortvis - animated side-by-side comparison of elementary sorting
//! algorithms in the terminal.
//!
//! Each algorithm runs as a resumable step driver over its own copy of a
//! shared array. A playback controller resumes it whenever the pause
//! requested by its previous step has elapsed, and a renderer turns every
//! yielded step into an animated scene the TUI samples each frame.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod playback;
pub mod render;
pub mod sort;
pub mod trace;
pub mod tui;

pub use config::Config;
pub use error::{ConfigError, InputError};
pub use orchestrator::Orchestrator;
