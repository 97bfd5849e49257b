//! Insertion sort driver.
//!
//! The element being inserted walks left through a chain of adjacent swaps,
//! each one a full compare, mark, swap cadence, rather than a single shift.

use super::{CancelToken, DriverPoll, Step, StepDriver};
use crate::model::ArrayModel;
use crate::render::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Outer,
    Inner { j: usize },
    Evaluate { j: usize },
    Swap { j: usize },
    /// Element at `i` has landed; clear highlights before the next one
    Placed,
    Finish,
    Done,
}

/// Insertion sort over adjacent swaps.
#[derive(Debug)]
pub struct InsertionSort {
    i: usize,
    phase: Phase,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self {
            i: 1,
            phase: Phase::Outer,
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepDriver for InsertionSort {
    fn resume(&mut self, model: &mut ArrayModel, cancel: &CancelToken) -> DriverPoll {
        let n = model.len();
        loop {
            match self.phase {
                Phase::Outer => {
                    if cancel.is_cancelled() || self.i >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.phase = Phase::Inner { j: self.i };
                }
                Phase::Inner { j: 0 } => self.phase = Phase::Placed,
                Phase::Inner { j } => {
                    if cancel.is_cancelled() {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.phase = Phase::Evaluate { j };
                    return DriverPoll::Step(Step::compare(Highlight {
                        compared: vec![j - 1, j],
                        current: Some(j),
                        min: None,
                        swap: None,
                    }));
                }
                Phase::Evaluate { j } => {
                    if model.value(j - 1) > model.value(j) {
                        self.phase = Phase::Swap { j };
                        return DriverPoll::Step(Step::mark_swap(j, j - 1));
                    }
                    self.phase = Phase::Placed;
                }
                Phase::Swap { j } => {
                    model.swap(j, j - 1);
                    self.phase = Phase::Inner { j: j - 1 };
                    return DriverPoll::Step(Step::swapped(j, j - 1));
                }
                Phase::Placed => {
                    self.i += 1;
                    self.phase = Phase::Outer;
                    return DriverPoll::Step(Step::clear());
                }
                Phase::Finish => {
                    self.phase = Phase::Done;
                    return DriverPoll::Step(Step::clear());
                }
                Phase::Done => return DriverPoll::Done,
            }
        }
    }
}
