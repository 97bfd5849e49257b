//! Render requests issued by the sort drivers.

use std::fmt;

use serde::Serialize;

/// Which bars to highlight in one redraw.
///
/// Purely visual; has no effect on the array model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Indices under comparison
    pub compared: Vec<usize>,
    /// Index the algorithm is currently working on
    pub current: Option<usize>,
    /// Running minimum (selection sort)
    pub min: Option<usize>,
    /// Pair about to be, or just, swapped
    pub swap: Option<(usize, usize)>,
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        self.compared.is_empty() && self.current.is_none() && self.min.is_none() && self.swap.is_none()
    }

    pub fn in_swap(&self, idx: usize) -> bool {
        self.swap.is_some_and(|(a, b)| a == idx || b == idx)
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let mut parts = Vec::new();
        if !self.compared.is_empty() {
            let list: Vec<String> = self.compared.iter().map(|i| i.to_string()).collect();
            parts.push(format!("compared=[{}]", list.join(",")));
        }
        if let Some(current) = self.current {
            parts.push(format!("current={}", current));
        }
        if let Some(min) = self.min {
            parts.push(format!("min={}", min));
        }
        if let Some((a, b)) = self.swap {
            parts.push(format!("swap=({},{})", a, b));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// How a redraw animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Geometry and color transition together over the settle duration
    Full,
    /// Geometry snaps, color cross-fades over the pulse duration
    ColorOnly,
    /// Everything snaps
    Instant,
}

/// A single render request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    #[serde(flatten)]
    pub highlight: Highlight,
    pub animate_position: bool,
    pub animate_color: bool,
}

impl Default for RenderRequest {
    /// Unannotated redraw with full animation.
    fn default() -> Self {
        Self {
            highlight: Highlight::default(),
            animate_position: true,
            animate_color: true,
        }
    }
}

impl RenderRequest {
    /// Highlight-only redraw used while comparing or marking a swap.
    pub fn pulse(highlight: Highlight) -> Self {
        Self {
            highlight,
            animate_position: false,
            animate_color: true,
        }
    }

    /// Redraw after a mutation, letting bars travel to their new slots.
    pub fn settle(highlight: Highlight) -> Self {
        Self {
            highlight,
            animate_position: true,
            animate_color: false,
        }
    }

    /// Redraw with no animation at all.
    pub fn instant() -> Self {
        Self {
            highlight: Highlight::default(),
            animate_position: false,
            animate_color: false,
        }
    }

    pub fn tier(&self) -> Tier {
        if self.animate_position {
            Tier::Full
        } else if self.animate_color {
            Tier::ColorOnly
        } else {
            Tier::Instant
        }
    }
}
