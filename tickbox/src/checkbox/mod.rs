//! The checkbox widget.
//!
//! A `Checkbox` owns three layers on its [`DrawSurface`]: the background
//! panel, the box outline and, while on, the mark. All geometry is derived
//! from the reference length, the width of the frame it was set up with.

mod events;
mod render;

use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::scene::Scene;
use crate::surface::{DrawSurface, LayerId};
use crate::timer::Timers;
use crate::types::{Color, Rect};

/// Opacity applied while a touch is being tracked.
const PRESSED_OPACITY: f32 = 0.7;

/// Receives the new state after every touch-driven toggle.
///
/// Programmatic changes through [`Checkbox::set_on`] are not reported.
pub trait CheckboxDelegate {
    fn checkbox_toggled(&self, is_on: bool);
}

/// Visual configuration of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckboxStyle {
    pub background: Color,
    pub box_border_color: Color,
    pub box_border_width: f64,
    pub checkmark_color: Color,
    pub checkmark_stroke_width: f64,
    pub animation_duration: Duration,
    pub animate_on_toggle: bool,
    pub use_x_mark: bool,
}

impl CheckboxStyle {
    /// Defaults for a control of the given reference length.
    pub fn for_length(length: f64) -> Self {
        Self {
            background: Color::WHITE,
            box_border_color: Color::from_components(0.4, 0.4, 0.4, 1.0),
            box_border_width: 0.04 * length,
            checkmark_color: Color::BLACK,
            checkmark_stroke_width: 0.10 * length,
            animation_duration: Duration::from_millis(500),
            animate_on_toggle: true,
            use_x_mark: false,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn box_border_color(mut self, color: Color) -> Self {
        self.box_border_color = color;
        self
    }

    pub fn box_border_width(mut self, width: f64) -> Self {
        self.box_border_width = width;
        self
    }

    pub fn checkmark_color(mut self, color: Color) -> Self {
        self.checkmark_color = color;
        self
    }

    pub fn checkmark_stroke_width(mut self, width: f64) -> Self {
        self.checkmark_stroke_width = width;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn animate_on_toggle(mut self, animate: bool) -> Self {
        self.animate_on_toggle = animate;
        self
    }

    pub fn use_x_mark(mut self, use_x: bool) -> Self {
        self.use_x_mark = use_x;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    /// Detach the mark layer left fading after an animated off-toggle.
    RemoveMark(LayerId),
}

pub struct Checkbox<S: DrawSurface = Scene> {
    surface: S,
    frame: Rect,
    reference_length: f64,
    on: bool,
    style: CheckboxStyle,
    opacity: f32,
    background: Option<LayerId>,
    outline: Option<LayerId>,
    mark: Option<LayerId>,
    delegate: Option<Weak<dyn CheckboxDelegate>>,
    deferred: Timers<Deferred>,
}

impl<S: DrawSurface> Checkbox<S> {
    /// Set up a checkbox in `frame`. Only the width is used; the control is square.
    pub fn new(frame: Rect, surface: S) -> Self {
        let mut checkbox = Self {
            surface,
            frame: frame.squared(),
            reference_length: frame.width,
            on: false,
            style: CheckboxStyle::for_length(frame.width),
            opacity: 1.0,
            background: None,
            outline: None,
            mark: None,
            delegate: None,
            deferred: Timers::new(),
        };
        checkbox.draw_layers();
        checkbox
    }

    pub fn with_style(frame: Rect, surface: S, style: CheckboxStyle) -> Self {
        let mut checkbox = Self::new(frame, surface);
        checkbox.apply_style(style);
        checkbox
    }

    fn draw_layers(&mut self) {
        self.draw_background();
        self.draw_box();
        self.draw_mark();

        log::debug!(
            "[checkbox] set up at ({}, {}) with reference length {}",
            self.frame.x,
            self.frame.y,
            self.reference_length
        );
    }

    /// Tear down every layer and rebuild at `frame` with default style.
    ///
    /// Style overrides do not survive; reapply them afterwards. The on/off
    /// state is kept, and the mark is redrawn if on.
    pub fn adjust_frame(&mut self, frame: Rect) {
        let layers = [self.background.take(), self.outline.take(), self.mark.take()];
        for id in layers.into_iter().flatten() {
            self.surface.detach(id);
        }

        self.frame = frame.squared();
        self.reference_length = frame.width;
        self.style = CheckboxStyle::for_length(frame.width);
        self.draw_layers();
    }

    /// Replace every style attribute at once and redraw all layers.
    pub fn apply_style(&mut self, style: CheckboxStyle) {
        self.style = style;
        self.draw_background();
        self.draw_box();
        self.draw_mark();
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.style.background = color;
        self.draw_background();
    }

    pub fn set_box_border_color(&mut self, color: Color) {
        self.style.box_border_color = color;
        self.draw_box();
    }

    pub fn set_box_border_width(&mut self, width: f64) {
        self.style.box_border_width = width;
        self.draw_box();
    }

    pub fn set_checkmark_color(&mut self, color: Color) {
        self.style.checkmark_color = color;
        self.draw_mark();
    }

    pub fn set_checkmark_stroke_width(&mut self, width: f64) {
        self.style.checkmark_stroke_width = width;
        self.draw_mark();
    }

    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.style.animation_duration = duration;
        self.draw_mark();
    }

    pub fn set_use_x_mark(&mut self, use_x: bool) {
        self.style.use_x_mark = use_x;
        self.draw_mark();
    }

    pub fn set_animate_on_toggle(&mut self, animate: bool) {
        self.style.animate_on_toggle = animate;
        self.draw_mark();
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Set the state directly. Never notifies the delegate.
    ///
    /// `animated` forces an animated reveal for this call only. Turning off
    /// always removes the mark immediately.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        let saved = self.style.animate_on_toggle;
        if animated {
            self.style.animate_on_toggle = true;
        }

        self.on = on;
        if on {
            self.draw_mark();
        } else {
            self.remove_mark();
        }

        self.style.animate_on_toggle = saved;
    }

    /// Register the delegate. Only a weak reference is kept.
    pub fn set_delegate<D: CheckboxDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let delegate: Rc<dyn CheckboxDelegate> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Advance time: runs the surface's animations and any due deferred actions.
    pub fn advance(&mut self, dt: Duration) {
        self.surface.advance(dt);
        for action in self.deferred.advance(dt) {
            self.run_deferred(action);
        }
    }

    fn run_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::RemoveMark(id) => {
                // The mark may have been replaced or torn down since this was posted.
                if self.mark == Some(id) {
                    self.mark = None;
                    self.surface.detach(id);
                    log::debug!("[checkbox] removed faded mark {:?}", id);
                } else {
                    log::trace!("[checkbox] stale mark removal for {:?} ignored", id);
                }
            }
        }
    }

    fn notify_delegate(&self) {
        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            delegate.checkbox_toggled(self.on);
        }
    }

    pub fn style(&self) -> &CheckboxStyle {
        &self.style
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn reference_length(&self) -> f64 {
        self.reference_length
    }

    /// Control opacity: 1.0, or 0.7 while a touch is tracked.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn background_layer(&self) -> Option<LayerId> {
        self.background
    }

    pub fn outline_layer(&self) -> Option<LayerId> {
        self.outline
    }

    pub fn mark_layer(&self) -> Option<LayerId> {
        self.mark
    }

    /// Number of deferred actions still waiting to run.
    pub fn pending_actions(&self) -> usize {
        self.deferred.len()
    }
}
