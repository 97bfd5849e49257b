//! Trace command: print the steps each algorithm takes.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use sortvis::cli::TraceArgs;
use sortvis::model::{parse_manual_array, ArrayModel};
use sortvis::trace::{run_trace, Trace, TraceStep, TraceSummary};
use sortvis::Config;

/// One line of `--json` output.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsonLine<'a> {
    Step(&'a TraceStep),
    Summary(&'a TraceSummary),
}

pub fn handle_trace(args: &TraceArgs, config_path: &Path) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    if let Some(min) = args.min {
        config.array.min_value = min;
    }
    if let Some(max) = args.max {
        config.array.max_value = max;
    }
    if let Some(size) = args.size {
        config.array.size = size;
    }
    config.validate()?;

    let values = match &args.array {
        Some(list) => parse_manual_array(list, config.bounds())?,
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            ArrayModel::random_values(&mut rng, config.array.size, config.bounds())
        }
    };

    let trace = run_trace(
        &args.algorithm.algorithms(),
        &values,
        config.timings(),
        args.stop_after,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&mut out, &trace)?;
    } else {
        write_text(&mut out, &values, &trace)?;
    }
    out.flush()?;
    Ok(())
}

/// Steps in the order they were yielded, then the summaries.
fn write_json(out: &mut impl Write, trace: &Trace) -> Result<()> {
    for step in &trace.steps {
        writeln!(out, "{}", serde_json::to_string(&JsonLine::Step(step))?)?;
    }
    for summary in &trace.summaries {
        writeln!(out, "{}", serde_json::to_string(&JsonLine::Summary(summary))?)?;
    }
    Ok(())
}

/// One block per algorithm: header, numbered steps, summary.
fn write_text(out: &mut impl Write, values: &[u32], trace: &Trace) -> io::Result<()> {
    for (idx, summary) in trace.summaries.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}: {:?}", summary.algorithm, values)?;
        for step in trace.steps_for(summary.algorithm) {
            writeln!(
                out,
                "{:>3} {:<7} {} -> {:?}",
                step.step,
                step.kind.label(),
                step.highlight,
                step.values
            )?;
        }
        writeln!(
            out,
            "{} {:?} in {} steps ({} comparisons, {} swaps)",
            if summary.cancelled { "stopped" } else { "sorted" },
            summary.values,
            summary.steps,
            summary.comparisons,
            summary.swaps
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis::config::Timings;
    use sortvis::sort::Algorithm;

    fn text_for(algorithms: &[Algorithm], values: &[u32]) -> String {
        let trace = run_trace(algorithms, values, Timings::from_settle_ms(1000), None);
        let mut out = Vec::new();
        write_text(&mut out, values, &trace).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_steps_and_summary() {
        let text = text_for(&[Algorithm::Bubble], &[2, 1]);
        assert_eq!(
            text,
            "bubble: [2, 1]\n\
             \x20 1 compare compared=[0,1] current=0 -> [2, 1]\n\
             \x20 2 mark    swap=(0,1) -> [2, 1]\n\
             \x20 3 swap    swap=(0,1) -> [1, 2]\n\
             \x20 4 clear   - -> [1, 2]\n\
             sorted [1, 2] in 4 steps (1 comparisons, 1 swaps)\n"
        );
    }

    #[test]
    fn text_separates_algorithms() {
        let text = text_for(&Algorithm::ALL, &[1, 2]);
        assert_eq!(text.matches("sorted [1, 2]").count(), 3);
        assert!(text.contains("\n\nbubble: [1, 2]\n"));
        assert!(text.contains("\n\ninsertion: [1, 2]\n"));
    }

    #[test]
    fn json_lines_are_tagged() {
        let trace = run_trace(&[Algorithm::Selection], &[2, 1], Timings::from_settle_ms(1000), None);
        let mut out = Vec::new();
        write_json(&mut out, &trace).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines[0]["type"], "step");
        assert_eq!(lines[0]["algorithm"], "selection");
        assert_eq!(lines[0]["kind"], "compare");
        assert_eq!(lines[0]["tier"], "color_only");
        let last = lines.last().unwrap();
        assert_eq!(last["type"], "summary");
        assert_eq!(last["values"], serde_json::json!([1, 2]));
    }
}
