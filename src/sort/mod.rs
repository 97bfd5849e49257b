//! Step drivers for the three sorting algorithms.
//!
//! Each driver is a resumable state machine over an [`ArrayModel`]. Every
//! call to [`StepDriver::resume`] runs the algorithm up to its next
//! suspension point and hands back the render to show together with how long
//! to hold it. The playback controller decides when to resume again, which
//! lets several drivers interleave on one thread.
//!
//! # Cadence
//!
//! - comparison: pulse render of the compared indices, hold for the pulse
//!   duration, then read the comparison
//! - swap: pulse render of the pair, hold pulse, swap, full render of the
//!   pair, hold settle
//! - end (finished or cancelled): one unannotated full render, no hold
//!
//! Cancellation is polled at the top of every outer and inner iteration.

mod bubble;
mod insertion;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::model::ArrayModel;
use crate::render::{Highlight, RenderRequest};

/// The algorithms shown side by side, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Selection,
    Bubble,
    Insertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Selection, Algorithm::Bubble, Algorithm::Insertion];

    /// Short name used on the command line and in traces.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
        }
    }

    /// Panel title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
        }
    }

    /// Fresh driver positioned at the start of the algorithm.
    pub fn driver(&self) -> Box<dyn StepDriver> {
        match self {
            Algorithm::Selection => Box::new(SelectionSort::new()),
            Algorithm::Bubble => Box::new(BubbleSort::new()),
            Algorithm::Insertion => Box::new(InsertionSort::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown algorithm '{}'", s))
    }
}

/// How long a yielded render is held before the driver resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hold {
    /// Short color-only beat
    Pulse,
    /// Long beat while bars travel
    Settle,
    /// Resume immediately
    None,
}

/// What a step shows, derived from its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Compare,
    Mark,
    Swap,
    Clear,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Mark => "mark",
            StepKind::Swap => "swap",
            StepKind::Clear => "clear",
        }
    }
}

/// One suspension point of a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub request: RenderRequest,
    pub hold: Hold,
}

impl Step {
    pub(crate) fn compare(highlight: Highlight) -> Self {
        Self {
            request: RenderRequest::pulse(highlight),
            hold: Hold::Pulse,
        }
    }

    pub(crate) fn mark_swap(a: usize, b: usize) -> Self {
        Self {
            request: RenderRequest::pulse(swap_highlight(a, b)),
            hold: Hold::Pulse,
        }
    }

    pub(crate) fn swapped(a: usize, b: usize) -> Self {
        Self {
            request: RenderRequest::settle(swap_highlight(a, b)),
            hold: Hold::Settle,
        }
    }

    pub(crate) fn clear() -> Self {
        Self {
            request: RenderRequest::default(),
            hold: Hold::None,
        }
    }

    pub fn kind(&self) -> StepKind {
        let highlight = &self.request.highlight;
        if highlight.swap.is_some() {
            if self.request.animate_position {
                StepKind::Swap
            } else {
                StepKind::Mark
            }
        } else if highlight.is_empty() {
            StepKind::Clear
        } else {
            StepKind::Compare
        }
    }
}

fn swap_highlight(a: usize, b: usize) -> Highlight {
    Highlight {
        swap: Some((a, b)),
        ..Default::default()
    }
}

/// Result of resuming a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverPoll {
    /// Suspended at a step
    Step(Step),
    /// Finished or cancelled; the final clearing render was already yielded
    Done,
}

/// Cooperative stop signal shared between a controller and its driver.
///
/// Cloning yields another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// A resumable sorting procedure.
///
/// Implementations may only mutate `model` through [`ArrayModel::swap`].
pub trait StepDriver {
    /// Run until the next suspension point.
    fn resume(&mut self, model: &mut ArrayModel, cancel: &CancelToken) -> DriverPoll;
}
