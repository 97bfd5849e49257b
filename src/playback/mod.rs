//! Per-algorithm playback controller.
//!
//! A controller owns the array model of its lane and the step driver that
//! mutates it. It never sleeps: the caller invokes [`PlaybackController::advance`]
//! with the current time and the controller resumes its driver only once the
//! pause requested by the previous step has elapsed.

mod state;

pub use state::{Advance, PlaybackState};

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::Timings;
use crate::model::ArrayModel;
use crate::sort::{Algorithm, CancelToken, DriverPoll, Hold, StepDriver};

pub struct PlaybackController {
    algorithm: Algorithm,
    model: ArrayModel,
    state: PlaybackState,
    cancel: CancelToken,
    driver: Option<Box<dyn StepDriver>>,
    wake_at: Option<Instant>,
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state)
            .field("values", &self.model.values())
            .field("wake_at", &self.wake_at)
            .finish()
    }
}

impl PlaybackController {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            model: ArrayModel::default(),
            state: PlaybackState::Idle,
            cancel: CancelToken::new(),
            driver: None,
            wake_at: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn model(&self) -> &ArrayModel {
        &self.model
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != PlaybackState::Idle
    }

    /// Replace the model with a fresh copy of `values`.
    ///
    /// Returns false, leaving the model alone, while a run is active.
    pub fn seed(&mut self, values: &[u32]) -> bool {
        if self.is_running() {
            return false;
        }
        self.model = ArrayModel::from_values(values);
        true
    }

    /// Begin a run. No-op returning false if one is already active.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.cancel.reset();
        self.driver = Some(self.algorithm.driver());
        self.wake_at = Some(now);
        self.state = PlaybackState::Running;
        debug!(algorithm = %self.algorithm, len = self.model.len(), "run started");
        true
    }

    /// Request cancellation; the driver notices at its next poll point.
    pub fn stop(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.cancel.cancel();
        self.state = PlaybackState::StopRequested;
        debug!(algorithm = %self.algorithm, "stop requested");
        true
    }

    /// Resume the driver once if its pause has elapsed.
    ///
    /// Pauses are resolved against `timings` when the step is yielded, so a
    /// speed change takes effect from the next pause on.
    pub fn advance(&mut self, now: Instant, timings: &Timings) -> Advance {
        let Some(driver) = self.driver.as_mut() else {
            return Advance::Idle;
        };
        if self.wake_at.is_some_and(|wake| now < wake) {
            return Advance::Waiting;
        }

        match driver.resume(&mut self.model, &self.cancel) {
            DriverPoll::Step(step) => {
                let pause = match step.hold {
                    Hold::Pulse => timings.pulse,
                    Hold::Settle => timings.settle,
                    Hold::None => Duration::ZERO,
                };
                self.wake_at = Some(now + pause);
                Advance::Render(step)
            }
            DriverPoll::Done => {
                let cancelled = self.state == PlaybackState::StopRequested;
                self.driver = None;
                self.wake_at = None;
                self.state = PlaybackState::Idle;
                debug!(algorithm = %self.algorithm, cancelled, sorted = self.model.is_sorted(), "run finished");
                Advance::Finished
            }
        }
    }

    /// When the driver next wants to resume, if a run is active.
    pub fn next_wake(&self) -> Option<Instant> {
        self.driver.as_ref().and(self.wake_at)
    }
}
