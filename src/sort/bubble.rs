//! Bubble sort driver.

use super::{CancelToken, DriverPoll, Step, StepDriver};
use crate::model::ArrayModel;
use crate::render::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pass,
    Inner { j: usize },
    Evaluate { j: usize },
    Swap { j: usize },
    Finish,
    Done,
}

/// Bubble sort: `n - 1` passes over adjacent pairs, each pass shrinking the
/// unsorted region by one. Equal neighbours are never swapped.
#[derive(Debug)]
pub struct BubbleSort {
    pass: usize,
    phase: Phase,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self {
            pass: 0,
            phase: Phase::Pass,
        }
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepDriver for BubbleSort {
    fn resume(&mut self, model: &mut ArrayModel, cancel: &CancelToken) -> DriverPoll {
        let n = model.len();
        loop {
            match self.phase {
                Phase::Pass => {
                    if cancel.is_cancelled() || self.pass + 1 >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.phase = Phase::Inner { j: 0 };
                }
                // Unsorted boundary: j + 1 < n - pass
                Phase::Inner { j } if j + 1 + self.pass >= n => {
                    self.pass += 1;
                    self.phase = Phase::Pass;
                }
                Phase::Inner { j } => {
                    if cancel.is_cancelled() {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.phase = Phase::Evaluate { j };
                    return DriverPoll::Step(Step::compare(Highlight {
                        compared: vec![j, j + 1],
                        current: Some(j),
                        min: None,
                        swap: None,
                    }));
                }
                Phase::Evaluate { j } => {
                    if model.value(j) > model.value(j + 1) {
                        self.phase = Phase::Swap { j };
                        return DriverPoll::Step(Step::mark_swap(j, j + 1));
                    }
                    self.phase = Phase::Inner { j: j + 1 };
                }
                Phase::Swap { j } => {
                    model.swap(j, j + 1);
                    self.phase = Phase::Inner { j: j + 1 };
                    return DriverPoll::Step(Step::swapped(j, j + 1));
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
