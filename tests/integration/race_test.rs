//! Library-level tests driving a full race on a virtual clock

use std::time::{Duration, Instant};

use sortvis::model::MAX_ARRAY_SIZE;
use sortvis::{Config, InputError, Orchestrator};

/// Tick until every lane is idle again, jumping the clock to each wake-up.
fn race_to_completion(orchestrator: &mut Orchestrator, start: Instant) -> Instant {
    let mut now = start;
    for _ in 0..100_000 {
        if orchestrator.tick(now).finished {
            return now;
        }
        now = orchestrator.next_wake().unwrap_or(now).max(now);
    }
    panic!("race did not finish");
}

#[test]
fn all_three_lanes_end_sorted() {
    let start = Instant::now();
    let mut orchestrator = Orchestrator::new(Config::default(), Some(42), start);
    let mut expected = orchestrator.values().to_vec();
    expected.sort_unstable();

    assert!(orchestrator.run(start));
    let end = race_to_completion(&mut orchestrator, start);

    assert!(!orchestrator.is_running());
    assert!(orchestrator.controls().run_enabled);
    assert!(!orchestrator.controls().stop_enabled);
    for lane in orchestrator.lanes() {
        assert_eq!(lane.controller.model().values(), expected, "{}", lane.algorithm());
        assert_eq!(lane.renderer.scene().len(), expected.len());
    }
    assert!(!orchestrator.is_animating(end + Duration::from_secs(10)));
}

#[test]
fn stopping_leaves_a_permutation_and_reenables_run() {
    let start = Instant::now();
    let mut orchestrator = Orchestrator::new(Config::default(), Some(3), start);
    orchestrator.set_manual_array("90,80,70,60,50,40,30,20,10", start).unwrap();
    let mut expected = orchestrator.values().to_vec();
    expected.sort_unstable();

    orchestrator.run(start);
    let mut now = start;
    for _ in 0..5 {
        orchestrator.tick(now);
        now = orchestrator.next_wake().unwrap_or(now).max(now);
    }
    assert!(orchestrator.stop());
    assert!(!orchestrator.controls().stop_enabled);

    race_to_completion(&mut orchestrator, now);
    assert!(orchestrator.controls().run_enabled);
    for lane in orchestrator.lanes() {
        let mut values = lane.controller.model().values();
        values.sort_unstable();
        assert_eq!(values, expected);
    }
}

#[test]
fn array_changes_are_refused_mid_race() {
    let start = Instant::now();
    let mut orchestrator = Orchestrator::new(Config::default(), Some(9), start);
    let before = orchestrator.values().to_vec();
    orchestrator.run(start);

    assert_eq!(orchestrator.generate(start), Err(InputError::SortInProgress));
    assert_eq!(
        orchestrator.set_array_size("20", start),
        Err(InputError::SortInProgress)
    );
    assert_eq!(orchestrator.values(), before.as_slice());
}

#[test]
fn size_input_is_validated_before_anything_changes() {
    let start = Instant::now();
    let mut orchestrator = Orchestrator::new(Config::default(), Some(1), start);
    let before = orchestrator.values().to_vec();

    let too_big = (MAX_ARRAY_SIZE + 1).to_string();
    assert!(orchestrator.set_array_size(&too_big, start).is_err());
    assert!(orchestrator.set_array_size("abc", start).is_err());
    assert_eq!(orchestrator.values(), before.as_slice());

    assert_eq!(orchestrator.set_array_size("30", start), Ok(30));
    assert_eq!(orchestrator.values().len(), 30);
    assert_eq!(orchestrator.config().array.size, 30);
}

#[test]
fn speed_controls_stay_in_range() {
    let mut orchestrator = Orchestrator::new(Config::default(), Some(5), Instant::now());

    for _ in 0..100 {
        orchestrator.faster();
    }
    assert_eq!(orchestrator.config().timing.settle_ms, 100);
    assert_eq!(orchestrator.timings().pulse, Duration::from_millis(50));

    for _ in 0..100 {
        orchestrator.slower();
    }
    assert_eq!(orchestrator.config().timing.settle_ms, 3000);
    assert_eq!(orchestrator.timings().pulse, Duration::from_millis(900));
}
