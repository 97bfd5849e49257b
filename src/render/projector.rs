//! Projection of an array model onto bar targets.
//!
//! Geometry is expressed in layout units (a fixed virtual canvas) so that
//! animations are independent of the terminal size; widgets scale the
//! sampled geometry to their area at draw time.

use serde::{Deserialize, Serialize};

use super::color::{Palette, Rgb};
use super::request::Highlight;
use crate::model::{Item, ItemId};

/// Virtual canvas for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// Inner and outer band padding, as a fraction of the band step
    pub padding: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 300.0,
            padding: 0.1,
        }
    }
}

/// Evenly spaced bands over `[0, width]`, centered, with equal inner and
/// outer padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(count: usize, width: f64, padding: f64) -> Self {
        let n = count as f64;
        let step = width / (n - padding + padding * 2.0).max(1.0);
        let start = (width - step * (n - padding)) * 0.5;
        Self {
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of band `idx`.
    pub fn position(&self, idx: usize) -> f64 {
        self.start + self.step * idx as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Where and how one item should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarTarget {
    pub id: ItemId,
    pub value: u32,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

/// Fill color for the bar at `idx`.
///
/// Priority: swap pair, then current, then minimum, then compared.
pub fn color_for(idx: usize, highlight: &Highlight, palette: &Palette) -> Rgb {
    if highlight.in_swap(idx) {
        palette.swap
    } else if highlight.current == Some(idx) {
        palette.current
    } else if highlight.min == Some(idx) {
        palette.min
    } else if highlight.compared.contains(&idx) {
        palette.compare
    } else {
        palette.default
    }
}

/// Compute the target of every item.
///
/// The vertical scale is rebuilt from the largest live value on each call,
/// so the tallest bar always spans the full layout height.
pub fn project(items: &[Item], highlight: &Highlight, layout: &Layout, palette: &Palette) -> Vec<BarTarget> {
    let bands = BandScale::new(items.len(), layout.width, layout.padding);
    let max = items.iter().map(|item| item.value).max().unwrap_or(0);

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let height = if max == 0 {
                0.0
            } else {
                f64::from(item.value) / f64::from(max) * layout.height
            };
            BarTarget {
                id: item.id,
                value: item.value,
                x: bands.position(idx),
                width: bands.bandwidth(),
                height,
                color: color_for(idx, highlight, palette),
            }
        })
        .collect()
}
