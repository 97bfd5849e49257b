//! Selection sort driver.

use super::{CancelToken, DriverPoll, Step, StepDriver};
use crate::model::ArrayModel;
use crate::render::Highlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Top of the outer loop for `i`
    Outer,
    /// Top of the inner loop for `j`
    Inner { j: usize },
    /// Compare render has been held; read the comparison
    Evaluate { j: usize },
    /// Perform the swap of `i` and `min`
    Swap,
    Finish,
    Done,
}

/// Selection sort: find the leftmost minimum of the unsorted tail and swap
/// it into position `i`.
#[derive(Debug)]
pub struct SelectionSort {
    i: usize,
    min: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self {
            i: 0,
            min: 0,
            phase: Phase::Outer,
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl StepDriver for SelectionSort {
    fn resume(&mut self, model: &mut ArrayModel, cancel: &CancelToken) -> DriverPoll {
        let n = model.len();
        loop {
            match self.phase {
                Phase::Outer => {
                    if cancel.is_cancelled() || self.i + 1 >= n {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.min = self.i;
                    self.phase = Phase::Inner { j: self.i + 1 };
                }
                Phase::Inner { j } if j >= n => {
                    if cancel.is_cancelled() {
                        self.phase = Phase::Finish;
                    } else if self.min != self.i {
                        self.phase = Phase::Swap;
                        return DriverPoll::Step(Step::mark_swap(self.i, self.min));
                    } else {
                        self.i += 1;
                        self.phase = Phase::Outer;
                    }
                }
                Phase::Inner { j } => {
                    if cancel.is_cancelled() {
                        self.phase = Phase::Finish;
                        continue;
                    }
                    self.phase = Phase::Evaluate { j };
                    return DriverPoll::Step(Step::compare(Highlight {
                        compared: vec![j],
                        current: Some(self.i),
                        min: Some(self.min),
                        swap: None,
                    }));
                }
                Phase::Evaluate { j } => {
                    if model.value(j) < model.value(self.min) {
                        self.min = j;
                    }
                    self.phase = Phase::Inner { j: j + 1 };
                }
                Phase::Swap => {
                    let (i, min) = (self.i, self.min);
                    model.swap(i, min);
                    self.i += 1;
                    self.phase = Phase::Outer;
                    return DriverPoll::Step(Step::swapped(i, min));
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
