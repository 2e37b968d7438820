//! The drawing seam between the widget and its host.
//!
//! A [`DrawSurface`] is the widget's root layer: it keeps an ordered list of
//! attached shape layers and runs the two animations the widget asks for.

use std::time::Duration;

use kurbo::{BezPath, Cap, Join};

use crate::types::Color;

/// Handle to a layer attached to a surface. Never reused by the same surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// Stroke and fill settings for a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub stroke: Color,
    pub fill: Color,
    pub line_width: f64,
    pub line_cap: Cap,
    pub line_join: Join,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            stroke: Color::CLEAR,
            fill: Color::CLEAR,
            line_width: 1.0,
            line_cap: Cap::Butt,
            line_join: Join::Miter,
        }
    }
}

/// A path plus its paint; what one layer draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub path: BezPath,
    pub paint: Paint,
}

impl Shape {
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            paint: Paint::default(),
        }
    }

    pub fn stroke(mut self, color: Color, width: f64) -> Self {
        self.paint.stroke = color;
        self.paint.line_width = width;
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.paint.fill = color;
        self
    }

    pub fn caps(mut self, cap: Cap, join: Join) -> Self {
        self.paint.line_cap = cap;
        self.paint.line_join = join;
        self
    }

    pub fn is_stroked(&self) -> bool {
        !self.paint.stroke.is_clear() && self.paint.line_width > 0.0
    }

    pub fn is_filled(&self) -> bool {
        !self.paint.fill.is_clear()
    }
}

/// Host display tree the checkbox draws onto.
pub trait DrawSurface {
    /// Attach a new layer on top of the existing ones.
    fn attach(&mut self, shape: Shape) -> LayerId;

    /// Attach a new layer at `index` in paint order, 0 being the bottom.
    /// Indices past the top attach on top.
    fn attach_at(&mut self, index: usize, shape: Shape) -> LayerId;

    /// Remove a layer. Returns false if it was not attached; never fails.
    fn detach(&mut self, id: LayerId) -> bool;

    /// Opacity of the whole control.
    fn set_opacity(&mut self, opacity: f32);

    /// Reveal the layer's stroke from 0 to its full length over `duration`.
    fn animate_stroke_reveal(&mut self, id: LayerId, duration: Duration);

    /// Fade the layer's opacity to zero over `duration`. The layer stays attached.
    fn fade_out(&mut self, id: LayerId, duration: Duration);

    /// Advance the surface's animation clock.
    fn advance(&mut self, _dt: Duration) {}
}
