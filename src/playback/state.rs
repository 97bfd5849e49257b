//! Playback state and scheduler results.

use std::fmt;

use crate::sort::Step;

/// Lifecycle of one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    /// Cancellation requested; the driver has not observed it yet
    StopRequested,
}

impl PlaybackState {
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Running => "running",
            PlaybackState::StopRequested => "stopping",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What one call to `PlaybackController::advance` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The driver yielded a step; its request should be rendered now
    Render(Step),
    /// A pause is still running
    Waiting,
    /// The driver finished or was cancelled; the controller is Idle again
    Finished,
    /// No run is active
    Idle,
}
