//! Integration tests for the trace command

use tempfile::TempDir;

use crate::helpers::run_sortvis;

#[test]
fn selection_trace_on_three_one_two() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_sortvis(
        &dir,
        &["trace", "--algorithm", "selection", "--array", "3,1,2", "--min", "1"],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout, @r"
    selection: [3, 1, 2]
      1 compare compared=[1] current=0 min=0 -> [3, 1, 2]
      2 compare compared=[2] current=0 min=1 -> [3, 1, 2]
      3 mark    swap=(0,1) -> [3, 1, 2]
      4 swap    swap=(0,1) -> [1, 3, 2]
      5 compare compared=[2] current=1 min=1 -> [1, 3, 2]
      6 mark    swap=(1,2) -> [1, 3, 2]
      7 swap    swap=(1,2) -> [1, 2, 3]
      8 clear   - -> [1, 2, 3]
    sorted [1, 2, 3] in 8 steps (3 comparisons, 2 swaps)
    ");
}

#[test]
fn every_algorithm_sorts_the_same_array() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(&dir, &["trace", "--array", "40,10,30,20"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("selection: [40, 10, 30, 20]"));
    assert!(stdout.contains("bubble: [40, 10, 30, 20]"));
    assert!(stdout.contains("insertion: [40, 10, 30, 20]"));
    assert_eq!(stdout.matches("sorted [10, 20, 30, 40]").count(), 3);
}

#[test]
fn seeded_random_traces_repeat() {
    let dir = TempDir::new().unwrap();
    let args = ["trace", "--seed", "7", "--size", "8"];
    let (first, _, first_code) = run_sortvis(&dir, &args);
    let (second, _, second_code) = run_sortvis(&dir, &args);

    assert_eq!(first_code, 0);
    assert_eq!(second_code, 0);
    assert_eq!(first, second);
}

#[test]
fn json_output_is_one_object_per_line() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(
        &dir,
        &["trace", "--json", "--algorithm", "bubble", "--array", "20,10"],
    );

    assert_eq!(exit_code, 0);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[..4].iter().all(|line| line["type"] == "step"));
    assert_eq!(lines[0]["kind"], "compare");
    assert_eq!(lines[2]["kind"], "swap");
    assert_eq!(lines[2]["values"], serde_json::json!([10, 20]));

    let summary = &lines[4];
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["algorithm"], "bubble");
    assert_eq!(summary["comparisons"], 1);
    assert_eq!(summary["swaps"], 1);
    assert_eq!(summary["cancelled"], false);
}

#[test]
fn stop_after_reports_a_stopped_sort() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sortvis(
        &dir,
        &[
            "trace",
            "--algorithm",
            "bubble",
            "--array",
            "50,40,30,20,10",
            "--stop-after",
            "2",
        ],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("stopped ["));
    assert!(!stdout.contains("sorted ["));
}

#[test]
fn value_below_minimum_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_sortvis(&dir, &["trace", "--array", "3,1,2"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("All values must be between 5 and 100."));
}

#[test]
fn too_few_numbers_are_rejected() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_sortvis(&dir, &["trace", "--array", "42,abc"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Please enter at least 2 valid numbers, separated by commas."));
}

#[test]
fn unknown_algorithm_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_sortvis(&dir, &["trace", "--algorithm", "quick"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("quick"));
}

#[test]
fn out_of_range_decimal_is_not_dropped() {
    let dir = TempDir::new().unwrap();
    for list in ["10,20,500.5", "10,20,", "10,20,99999999999999999999"] {
        let (stdout, stderr, exit_code) = run_sortvis(&dir, &["trace", "--array", list]);

        assert_eq!(exit_code, 1, "{} was accepted: {}", list, stdout);
        assert!(stderr.contains("All values must be between 5 and 100."));
    }
}
