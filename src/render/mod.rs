//! Rendering pipeline: requests, projection and the animated scene.
//!
//! - `request`: the render call issued by sort drivers (`RenderRequest`)
//! - `projector`: pure mapping from array + highlight to bar targets
//! - `scene`: retained, id-keyed bars with tiered transitions
//! - `color`: RGB values and the highlight palette

pub mod color;
pub mod projector;
pub mod request;
pub mod scene;

pub use color::{Palette, Rgb};
pub use projector::{color_for, project, BandScale, BarTarget, Layout};
pub use request::{Highlight, RenderRequest, Tier};
pub use scene::{BarFrame, Geometry, Scene};

use std::time::Instant;

use crate::config::Timings;
use crate::model::ArrayModel;

/// Owns the scene of one panel and applies render requests to it.
#[derive(Debug, Clone)]
pub struct Renderer {
    scene: Scene,
    layout: Layout,
    palette: Palette,
}

impl Renderer {
    pub fn new(layout: Layout, palette: Palette) -> Self {
        Self {
            scene: Scene::new(),
            layout,
            palette,
        }
    }

    /// Project `model` with the request's highlight and reconcile the scene.
    pub fn render(&mut self, model: &ArrayModel, request: &RenderRequest, timings: &Timings, now: Instant) {
        let targets = project(model.items(), &request.highlight, &self.layout, &self.palette);
        self.scene.reconcile(&targets, request.tier(), timings, now);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
