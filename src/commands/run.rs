//! Run command: the interactive race.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use sortvis::cli::RunArgs;
use sortvis::tui::RaceApp;
use sortvis::{Config, Orchestrator};

/// Apply command line overrides to the loaded config and validate it.
pub fn effective_config(args: &RunArgs, config_path: &Path) -> Result<Config> {
    let mut config = Config::load_from(config_path)?;
    if let Some(size) = args.size {
        config.array.size = size;
    }
    if let Some(speed) = args.speed {
        config.timing.settle_ms = speed;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(not(tarpaulin_include))]
pub fn handle_run(args: &RunArgs, config_path: &Path) -> Result<()> {
    let config = effective_config(args, config_path)?;
    let now = Instant::now();
    let mut orchestrator = Orchestrator::new(config, args.seed, now);
    if let Some(array) = &args.array {
        orchestrator.set_manual_array(array, now)?;
    }
    info!(
        size = orchestrator.values().len(),
        settle_ms = orchestrator.config().timing.settle_ms,
        "starting race"
    );

    // Everything that can fail on bad input has run before the terminal is taken over
    let mut app = RaceApp::new(orchestrator)?;
    if args.start {
        app.autostart();
    }
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn overrides_replace_file_values() {
        let dir = TempDir::new().unwrap();
        let args = RunArgs {
            size: Some(20),
            speed: Some(500),
            ..Default::default()
        };
        let config = effective_config(&args, &dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.array.size, 20);
        assert_eq!(config.timing.settle_ms, 500);
    }

    #[test]
    fn out_of_range_overrides_are_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let too_big = RunArgs {
            size: Some(51),
            ..Default::default()
        };
        assert!(effective_config(&too_big, &path).is_err());

        let too_fast = RunArgs {
            speed: Some(10),
            ..Default::default()
        };
        assert!(effective_config(&too_fast, &path).is_err());
    }
}
