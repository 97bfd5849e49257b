//! Runs the three algorithm lanes side by side.
//!
//! The orchestrator owns the configuration, the shared random source and
//! one lane per algorithm. All lanes are seeded with copies of the same
//! array. `tick` is the cooperative scheduler: the event loop calls it every
//! frame and each lane resumes its driver when its pause has elapsed.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::{Config, Timings};
use crate::error::InputError;
use crate::model::{parse_array_size, parse_manual_array, ArrayModel};
use crate::playback::{Advance, PlaybackController};
use crate::render::{RenderRequest, Renderer};
use crate::sort::Algorithm;

/// One algorithm with its model, driver and scene.
#[derive(Debug)]
pub struct Lane {
    pub controller: PlaybackController,
    pub renderer: Renderer,
}

impl Lane {
    fn new(algorithm: Algorithm, config: &Config) -> Self {
        Self {
            controller: PlaybackController::new(algorithm),
            renderer: Renderer::new(config.layout, config.palette.clone()),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.controller.algorithm()
    }
}

/// Which run controls currently accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub run_enabled: bool,
    pub stop_enabled: bool,
}

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// At least one lane applied a new render
    pub rendered: bool,
    /// The joint run ended during this tick
    pub finished: bool,
}

pub struct Orchestrator {
    config: Config,
    lanes: Vec<Lane>,
    controls: Controls,
    rng: StdRng,
    values: Vec<u32>,
    running: bool,
}

impl Orchestrator {
    /// Create the lanes and seed them with a first random array.
    ///
    /// A `seed` makes the generated arrays reproducible.
    pub fn new(config: Config, seed: Option<u64>, now: Instant) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let lanes = Algorithm::ALL
            .iter()
            .map(|&algorithm| Lane::new(algorithm, &config))
            .collect();
        let mut orchestrator = Self {
            config,
            lanes,
            controls: Controls {
                run_enabled: true,
                stop_enabled: false,
            },
            rng,
            values: Vec::new(),
            running: false,
        };
        orchestrator.reseed_random(now);
        orchestrator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn timings(&self) -> Timings {
        self.config.timings()
    }

    /// Values of the most recently seeded array.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// True from `run` until every lane is Idle again.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seed all lanes with a new random array of the configured size.
    pub fn generate(&mut self, now: Instant) -> Result<(), InputError> {
        self.ensure_idle()?;
        self.reseed_random(now);
        Ok(())
    }

    /// Validate a size typed by the user, store it and regenerate.
    pub fn set_array_size(&mut self, input: &str, now: Instant) -> Result<usize, InputError> {
        self.ensure_idle()?;
        let size = parse_array_size(input).map_err(|err| {
            warn!(input, %err, "array size rejected");
            err
        })?;
        self.config.array.size = size;
        self.reseed_random(now);
        Ok(size)
    }

    /// Validate a comma separated list typed by the user and seed it.
    pub fn set_manual_array(&mut self, input: &str, now: Instant) -> Result<(), InputError> {
        self.ensure_idle()?;
        let values = parse_manual_array(input, self.config.bounds()).map_err(|err| {
            warn!(input, %err, "manual array rejected");
            err
        })?;
        self.seed_values(&values, now)
    }

    /// Seed every lane with its own copy of `values` and draw it.
    pub fn seed_values(&mut self, values: &[u32], now: Instant) -> Result<(), InputError> {
        self.ensure_idle()?;
        self.seed_lanes(values, now);
        Ok(())
    }

    fn seed_lanes(&mut self, values: &[u32], now: Instant) {
        let timings = self.timings();
        for lane in &mut self.lanes {
            lane.controller.seed(values);
            lane.renderer
                .render(lane.controller.model(), &RenderRequest::default(), &timings, now);
        }
        self.values = values.to_vec();
        self.controls = Controls {
            run_enabled: true,
            stop_enabled: false,
        };
        info!(len = values.len(), "arrays seeded");
    }

    /// Start all lanes. Ignored while the run control is disabled.
    pub fn run(&mut self, now: Instant) -> bool {
        if !self.controls.run_enabled {
            return false;
        }
        for lane in &mut self.lanes {
            lane.controller.start(now);
        }
        self.running = true;
        self.controls = Controls {
            run_enabled: false,
            stop_enabled: true,
        };
        info!(len = self.values.len(), settle_ms = self.config.timing.settle_ms, "run started");
        true
    }

    /// Ask every lane to stop. Ignored while the stop control is disabled.
    pub fn stop(&mut self) -> bool {
        if !self.controls.stop_enabled {
            return false;
        }
        for lane in &mut self.lanes {
            lane.controller.stop();
        }
        self.controls.stop_enabled = false;
        info!("stop requested");
        true
    }

    /// Set the settle duration, clamped to the configured range.
    pub fn set_settle_ms(&mut self, settle_ms: u64) -> u64 {
        self.config.set_settle_ms(settle_ms)
    }

    /// Shorter settle: one speed step faster.
    pub fn faster(&mut self) -> u64 {
        self.config.step_settle_ms(-1)
    }

    pub fn slower(&mut self) -> u64 {
        self.config.step_settle_ms(1)
    }

    /// Advance every lane whose pause has elapsed.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let timings = self.timings();
        let mut outcome = TickOutcome::default();

        for lane in &mut self.lanes {
            match lane.controller.advance(now, &timings) {
                Advance::Render(step) => {
                    lane.renderer
                        .render(lane.controller.model(), &step.request, &timings, now);
                    outcome.rendered = true;
                }
                Advance::Finished => {
                    info!(algorithm = %lane.algorithm(), "lane finished");
                }
                Advance::Waiting | Advance::Idle => {}
            }
        }

        if self.running && self.lanes.iter().all(|lane| !lane.controller.is_running()) {
            self.running = false;
            self.controls = Controls {
                run_enabled: true,
                stop_enabled: false,
            };
            outcome.finished = true;
            info!("all lanes finished");
        }
        outcome
    }

    /// Earliest pending wake-up across lanes.
    pub fn next_wake(&self) -> Option<Instant> {
        self.lanes
            .iter()
            .filter_map(|lane| lane.controller.next_wake())
            .min()
    }

    /// Whether any scene still has a transition in flight at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.lanes
            .iter()
            .any(|lane| lane.renderer.scene().is_animating(now))
    }

    fn ensure_idle(&self) -> Result<(), InputError> {
        if self.running {
            warn!("array change rejected while sorting");
            return Err(InputError::SortInProgress);
        }
        Ok(())
    }

    fn reseed_random(&mut self, now: Instant) {
        let values = ArrayModel::random_values(&mut self.rng, self.config.array.size, self.config.bounds());
        self.seed_lanes(&values, now);
    }
}
