//! Headless playback on a virtual clock.
//!
//! Drives real [`PlaybackController`]s exactly as the TUI does, except that
//! instead of waiting for wall-clock pauses the clock jumps straight to the
//! earliest pending wake-up. The result records every step each driver
//! yielded and the virtual time it was yielded at.

use std::time::Instant;

use serde::Serialize;

use crate::config::Timings;
use crate::playback::{Advance, PlaybackController};
use crate::render::{Highlight, Tier};
use crate::sort::{Algorithm, Hold, StepKind};

/// One yielded step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub algorithm: Algorithm,
    /// 1-based position within this algorithm's run
    pub step: usize,
    pub kind: StepKind,
    pub highlight: Highlight,
    pub tier: Tier,
    pub hold: Hold,
    /// Virtual time since the run started
    pub elapsed_ms: u64,
    /// Array contents right after the step
    pub values: Vec<u32>,
}

/// End state of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub algorithm: Algorithm,
    pub values: Vec<u32>,
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub cancelled: bool,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// Steps of all algorithms in the order they were yielded
    pub steps: Vec<TraceStep>,
    /// One summary per algorithm, in the order requested
    pub summaries: Vec<TraceSummary>,
}

impl Trace {
    /// Steps of a single algorithm, in order.
    pub fn steps_for(&self, algorithm: Algorithm) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter().filter(move |step| step.algorithm == algorithm)
    }
}

/// Run `algorithms` concurrently over copies of `values`.
///
/// With `stop_after`, each lane is asked to stop once it has yielded that
/// many steps; the steps it still yields before noticing are recorded too.
pub fn run_trace(algorithms: &[Algorithm], values: &[u32], timings: Timings, stop_after: Option<usize>) -> Trace {
    let start = Instant::now();
    let mut now = start;
    let mut lanes: Vec<(PlaybackController, usize, bool)> = algorithms
        .iter()
        .map(|&algorithm| {
            let mut controller = PlaybackController::new(algorithm);
            controller.seed(values);
            controller.start(start);
            (controller, 0, false)
        })
        .collect();

    let mut trace = Trace::default();
    let mut finished_at = vec![0u64; lanes.len()];

    while lanes.iter().any(|(controller, _, _)| controller.is_running()) {
        for (idx, (controller, count, cancelled)) in lanes.iter_mut().enumerate() {
            let elapsed_ms = now.saturating_duration_since(start).as_millis() as u64;
            match controller.advance(now, &timings) {
                Advance::Render(step) => {
                    *count += 1;
                    trace.steps.push(TraceStep {
                        algorithm: controller.algorithm(),
                        step: *count,
                        kind: step.kind(),
                        tier: step.request.tier(),
                        highlight: step.request.highlight,
                        hold: step.hold,
                        elapsed_ms,
                        values: controller.model().values(),
                    });
                    if stop_after.is_some_and(|limit| *count >= limit) && controller.stop() {
                        *cancelled = true;
                    }
                }
                Advance::Finished => finished_at[idx] = elapsed_ms,
                Advance::Waiting | Advance::Idle => {}
            }
        }

        if let Some(wake) = lanes.iter().filter_map(|(controller, _, _)| controller.next_wake()).min() {
            now = now.max(wake);
        }
    }

    trace.summaries = lanes
        .iter()
        .zip(finished_at)
        .map(|((controller, count, cancelled), elapsed_ms)| {
            let algorithm = controller.algorithm();
            let steps: Vec<&TraceStep> = trace.steps_for(algorithm).collect();
            TraceSummary {
                algorithm,
                values: controller.model().values(),
                steps: *count,
                comparisons: steps.iter().filter(|s| s.kind == StepKind::Compare).count(),
                swaps: steps.iter().filter(|s| s.kind == StepKind::Swap).count(),
                cancelled: *cancelled,
                elapsed_ms,
            }
        })
        .collect();
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timings() -> Timings {
        Timings::from_settle_ms(1000)
    }

    #[test]
    fn selection_on_three_one_two() {
        let trace = run_trace(&[Algorithm::Selection], &[3, 1, 2], timings(), None);
        let summary = &trace.summaries[0];
        assert_eq!(summary.values, vec![1, 2, 3]);
        assert_eq!(summary.comparisons, 3);
        assert_eq!(summary.swaps, 2);
        assert!(!summary.cancelled);

        let swaps: Vec<Vec<u32>> = trace
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Swap)
            .map(|s| s.values.clone())
            .collect();
        assert_eq!(swaps, vec![vec![1, 3, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn virtual_time_adds_up_holds() {
        // 3 compares + 2 marks at 300 ms, 2 swaps at 1000 ms
        let trace = run_trace(&[Algorithm::Selection], &[3, 1, 2], timings(), None);
        assert_eq!(trace.summaries[0].elapsed_ms, 5 * 300 + 2 * 1000);
    }

    #[test]
    fn all_lanes_sort_the_same_input() {
        let trace = run_trace(&Algorithm::ALL, &[9, 4, 7, 1, 8, 2], timings(), None);
        assert_eq!(trace.summaries.len(), 3);
        for summary in &trace.summaries {
            assert_eq!(summary.values, vec![1, 2, 4, 7, 8, 9]);
        }
    }

    #[test]
    fn lanes_interleave_on_the_clock() {
        let trace = run_trace(&Algorithm::ALL, &[3, 1, 2], timings(), None);
        let first_three: Vec<Algorithm> = trace.steps.iter().take(3).map(|s| s.algorithm).collect();
        assert_eq!(first_three, Algorithm::ALL.to_vec());
        assert!(trace.steps.windows(2).all(|w| w[0].elapsed_ms <= w[1].elapsed_ms));
    }

    #[test]
    fn step_numbers_count_per_algorithm() {
        let trace = run_trace(&Algorithm::ALL, &[2, 1], timings(), None);
        for algorithm in Algorithm::ALL {
            let numbers: Vec<usize> = trace.steps_for(algorithm).map(|s| s.step).collect();
            assert_eq!(numbers, (1..=numbers.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn stop_after_cancels_early() {
        let values = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        let trace = run_trace(&[Algorithm::Selection], &values, timings(), Some(2));
        let summary = &trace.summaries[0];
        assert!(summary.cancelled);
        assert_eq!(summary.comparisons, 2);
        assert_eq!(summary.values, values.to_vec());
        assert_eq!(trace.steps.last().map(|s| s.kind), Some(StepKind::Clear));
    }
}
