//! Retained scene of animated bars, keyed by item id.
//!
//! Reconciliation follows enter/update/exit:
//! - enter: a new id starts at zero height on the baseline, in its target
//!   band and color
//! - update: every node transitions from whatever it displays *now* to its
//!   target, according to the tier
//! - exit: ids missing from the targets are dropped immediately

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use super::color::Rgb;
use super::projector::BarTarget;
use super::request::Tier;
use crate::config::Timings;
use crate::model::ItemId;

/// Cubic in-out easing.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Values that can be interpolated.
pub trait Lerp: Copy {
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Lerp for Rgb {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self.mix(to, t)
    }
}

/// Bar geometry in layout units. The bar always stands on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Lerp for Geometry {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Geometry {
            x: mix(self.x, to.x),
            width: mix(self.width, to.width),
            height: mix(self.height, to.height),
        }
    }
}

/// A value moving from `from` to `to` over `duration`, starting at `start`.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Lerp> Tween<T> {
    pub fn fixed(value: T, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    pub fn sample(&self, now: Instant) -> T {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from.lerp(&self.to, ease_cubic_in_out(t))
    }

    /// Start a new transition from the currently displayed value.
    pub fn retarget(&mut self, to: T, duration: Duration, now: Instant) {
        let from = self.sample(now);
        *self = Self {
            from,
            to,
            start: now,
            duration,
        };
    }

    pub fn snap(&mut self, to: T, now: Instant) {
        *self = Self::fixed(to, now);
    }

    pub fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) < self.duration
    }
}

/// One bar with its label value.
#[derive(Debug, Clone)]
pub struct BarNode {
    pub value: u32,
    geometry: Tween<Geometry>,
    fill: Tween<Rgb>,
}

/// A bar as displayed at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFrame {
    pub id: ItemId,
    pub value: u32,
    pub geometry: Geometry,
    pub color: Rgb,
}

/// The drawing surface of one panel.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: BTreeMap<ItemId, BarNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Bring the scene in line with `targets`.
    pub fn reconcile(&mut self, targets: &[BarTarget], tier: Tier, timings: &Timings, now: Instant) {
        self.nodes
            .retain(|id, _| targets.iter().any(|target| target.id == *id));

        for target in targets {
            let geometry = Geometry {
                x: target.x,
                width: target.width,
                height: target.height,
            };
            let node = self.nodes.entry(target.id).or_insert_with(|| BarNode {
                value: target.value,
                geometry: Tween::fixed(
                    Geometry {
                        height: 0.0,
                        ..geometry
                    },
                    now,
                ),
                fill: Tween::fixed(target.color, now),
            });
            node.value = target.value;

            match tier {
                Tier::Full => {
                    node.geometry.retarget(geometry, timings.settle, now);
                    node.fill.retarget(target.color, timings.settle, now);
                }
                Tier::ColorOnly => {
                    node.geometry.snap(geometry, now);
                    node.fill.retarget(target.color, timings.pulse, now);
                }
                Tier::Instant => {
                    node.geometry.snap(geometry, now);
                    node.fill.snap(target.color, now);
                }
            }
        }
    }

    /// Every bar as displayed at `now`, ordered by id.
    pub fn sample(&self, now: Instant) -> Vec<BarFrame> {
        self.nodes
            .iter()
            .map(|(&id, node)| BarFrame {
                id,
                value: node.value,
                geometry: node.geometry.sample(now),
                color: node.fill.sample(now),
            })
            .collect()
    }

    /// Whether any transition is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.nodes
            .values()
            .any(|node| node.geometry.is_running(now) || node.fill.is_running(now))
    }
}
