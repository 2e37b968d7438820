//! In-memory display tree.

use std::time::Duration;

use crate::animation::{Animation, Easing};
use crate::surface::{DrawSurface, LayerId, Shape};

/// One attached layer and its animated properties.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    shape: Shape,
    stroke_end: f32,
    stroke_end_animation: Option<Animation>,
    opacity: f32,
    opacity_animation: Option<Animation>,
}

impl Layer {
    fn new(id: LayerId, shape: Shape) -> Self {
        Self {
            id,
            shape,
            stroke_end: 1.0,
            stroke_end_animation: None,
            opacity: 1.0,
            opacity_animation: None,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Fraction of the stroke visible at `now`.
    pub fn stroke_end(&self, now: Duration) -> f32 {
        self.stroke_end_animation
            .map(|a| a.value_at(now))
            .unwrap_or(self.stroke_end)
    }

    pub fn opacity(&self, now: Duration) -> f32 {
        self.opacity_animation
            .map(|a| a.value_at(now))
            .unwrap_or(self.opacity)
    }

    pub fn is_animating(&self) -> bool {
        self.stroke_end_animation.is_some() || self.opacity_animation.is_some()
    }

    /// Fold finished animations into the static values.
    fn settle(&mut self, now: Duration) {
        if let Some(animation) = self.stroke_end_animation {
            if animation.is_finished(now) {
                self.stroke_end = animation.to;
                self.stroke_end_animation = None;
            }
        }
        if let Some(animation) = self.opacity_animation {
            if animation.is_finished(now) {
                self.opacity = animation.to;
                self.opacity_animation = None;
            }
        }
    }
}

/// Retained layer list with a virtual animation clock.
#[derive(Debug)]
pub struct Scene {
    layers: Vec<Layer>,
    next_id: u64,
    now: Duration,
    opacity: f32,
    /// Reduced motion flag - when true, animations complete instantly.
    reduced_motion: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            next_id: 0,
            now: Duration::ZERO,
            opacity: 1.0,
            reduced_motion: false,
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, reveals and fades jump straight to their end values.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Layers in paint order, bottom first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.layer(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Current time on the scene clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns true if any layer is mid-animation.
    pub fn has_active_animations(&self) -> bool {
        self.layers.iter().any(Layer::is_animating)
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }
}

impl DrawSurface for Scene {
    fn attach(&mut self, shape: Shape) -> LayerId {
        self.attach_at(self.layers.len(), shape)
    }

    fn attach_at(&mut self, index: usize, shape: Shape) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.layers.len());
        self.layers.insert(index, Layer::new(id, shape));
        log::trace!(
            "[scene] attached {:?} at {} ({} layers)",
            id,
            index,
            self.layers.len()
        );
        id
    }

    fn detach(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        let removed = self.layers.len() != before;
        if removed {
            log::trace!("[scene] detached {:?}", id);
        }
        removed
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    fn animate_stroke_reveal(&mut self, id: LayerId, duration: Duration) {
        let now = self.now;
        let reduced_motion = self.reduced_motion;
        let Some(layer) = self.layer_mut(id) else {
            return;
        };
        if reduced_motion {
            layer.stroke_end = 1.0;
            layer.stroke_end_animation = None;
            return;
        }
        layer.stroke_end_animation =
            Some(Animation::new(0.0, 1.0, now, duration, Easing::Linear));
    }

    fn fade_out(&mut self, id: LayerId, duration: Duration) {
        let now = self.now;
        let reduced_motion = self.reduced_motion;
        let Some(layer) = self.layer_mut(id) else {
            return;
        };
        if reduced_motion {
            layer.opacity = 0.0;
            layer.opacity_animation = None;
            return;
        }
        // Start from the currently displayed value so a fade never jumps.
        let from = layer.opacity(now);
        layer.opacity_animation =
            Some(Animation::new(from, 0.0, now, duration, Easing::EaseInOut));
    }

    fn advance(&mut self, dt: Duration) {
        self.now += dt;
        let now = self.now;
        for layer in &mut self.layers {
            layer.settle(now);
        }
    }
}
