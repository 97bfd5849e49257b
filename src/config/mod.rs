//! Configuration for sortvis.
//!
//! A single [`Config`] is loaded at startup and handed to the orchestrator,
//! which owns it from then on; speed and size controls mutate that
//! instance.
//!
//! The file lives at `$SORTVIS_CONFIG` when set, otherwise
//! `<config_dir>/sortvis/config.toml`. A missing file means defaults.

mod migrate;

pub use migrate::{migrate_config, MigrateResult};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{ValueBounds, MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::render::{Layout, Palette};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SORTVIS_CONFIG";

/// Shortest pulse, whatever the settle duration.
const MIN_PULSE_MS: u64 = 50;

/// Longest settle duration a config may allow.
pub const MAX_SETTLE_MS: u64 = 60_000;

/// Animation and pause durations derived from the speed control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Positional animation and post-swap pause
    pub settle: Duration,
    /// Color-only animation and highlight pause
    pub pulse: Duration,
}

impl Timings {
    /// Pulse is `max(50, floor(settle * 0.3))` milliseconds.
    pub fn from_settle_ms(settle_ms: u64) -> Self {
        let pulse_ms = (settle_ms.saturating_mul(3) / 10).max(MIN_PULSE_MS);
        Self {
            settle: Duration::from_millis(settle_ms),
            pulse: Duration::from_millis(pulse_ms),
        }
    }
}

/// Array generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Length of generated arrays
    pub size: usize,
    /// Smallest allowed value
    pub min_value: u32,
    /// Largest allowed value
    pub max_value: u32,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: 15,
            min_value: 5,
            max_value: 100,
        }
    }
}

/// Speed control settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Settle duration in milliseconds
    pub settle_ms: u64,
    /// Lower end of the speed control
    pub min_settle_ms: u64,
    /// Upper end of the speed control
    pub max_settle_ms: u64,
    /// Increment applied by one key press
    pub speed_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: 1000,
            min_settle_ms: 100,
            max_settle_ms: 3000,
            speed_step_ms: 100,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub array: ArrayConfig,
    pub timing: TimingConfig,
    pub palette: Palette,
    pub layout: Layout,
}

impl Config {
    /// Default config location, honouring `$SORTVIS_CONFIG`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("sortvis").join("config.toml"))
    }

    /// `explicit` when given (the `--config` flag), else [`Config::config_path`].
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Load and validate `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let array = &self.array;
        if array.min_value > array.max_value {
            return Err(ConfigError::Invalid(format!(
                "array.min_value ({}) is greater than array.max_value ({})",
                array.min_value, array.max_value
            )));
        }
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&array.size) {
            return Err(ConfigError::Invalid(format!(
                "array.size must be between {} and {}",
                MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
            )));
        }
        let timing = &self.timing;
        if timing.min_settle_ms == 0 || timing.min_settle_ms > timing.max_settle_ms {
            return Err(ConfigError::Invalid(
                "timing.min_settle_ms must be positive and not above timing.max_settle_ms".to_string(),
            ));
        }
        if timing.max_settle_ms > MAX_SETTLE_MS {
            return Err(ConfigError::Invalid(format!(
                "timing.max_settle_ms must not exceed {}",
                MAX_SETTLE_MS
            )));
        }
        if !(timing.min_settle_ms..=timing.max_settle_ms).contains(&timing.settle_ms) {
            return Err(ConfigError::Invalid(format!(
                "timing.settle_ms must be between {} and {}",
                timing.min_settle_ms, timing.max_settle_ms
            )));
        }
        let layout = &self.layout;
        if layout.width <= 0.0 || layout.height <= 0.0 || !(0.0..1.0).contains(&layout.padding) {
            return Err(ConfigError::Invalid(
                "layout needs a positive size and a padding in [0, 1)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bounds(&self) -> ValueBounds {
        ValueBounds {
            min: self.array.min_value,
            max: self.array.max_value,
        }
    }

    pub fn timings(&self) -> Timings {
        Timings::from_settle_ms(self.timing.settle_ms)
    }

    /// Set the settle duration, clamped to the speed control range.
    pub fn set_settle_ms(&mut self, settle_ms: u64) -> u64 {
        let clamped = settle_ms.clamp(self.timing.min_settle_ms, self.timing.max_settle_ms);
        self.timing.settle_ms = clamped;
        clamped
    }

    /// Nudge the settle duration by `steps` increments of `speed_step_ms`.
    pub fn step_settle_ms(&mut self, steps: i64) -> u64 {
        let delta = self.timing.speed_step_ms as i64 * steps;
        let next = (self.timing.settle_ms as i64 + delta).max(0) as u64;
        self.set_settle_ms(next)
    }
}
