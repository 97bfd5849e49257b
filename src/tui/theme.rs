//! Theme configuration for TUI and CLI
//!
//! Chrome colors for the terminal UI (borders, hints, modals) and ANSI
//! helpers for plain CLI output. Bar fills come from the configured
//! [`Palette`](crate::render::Palette), not from here.

use ratatui::style::{Color, Style};

use crate::playback::PlaybackState;

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (labels, help text)
    pub text_primary: Color,
    /// Secondary/dimmed text color (status line, footer hints)
    pub text_secondary: Color,
    /// Accent color for key hints and active borders
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }
}

impl Theme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Panel border color for a lane in the given state.
    pub fn lane_border_style(&self, state: PlaybackState) -> Style {
        match state {
            PlaybackState::Idle => self.text_secondary_style(),
            PlaybackState::Running => self.accent_style(),
            PlaybackState::StopRequested => self.error_style(),
        }
    }

    // ANSI color helpers for CLI output

    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ansi::RESET)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ansi::RESET
        )
    }

    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ansi::RESET)
    }
}

/// Raw ANSI sequences for diff-style CLI output.
pub mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

pub fn current_theme() -> Theme {
    Theme::default()
}
