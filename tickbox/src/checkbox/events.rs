//! Touch handling for the Checkbox.

use crate::event::{TouchEvent, TouchOutcome};
use crate::surface::DrawSurface;
use crate::types::Point;

use super::{Checkbox, Deferred, PRESSED_OPACITY};

impl<S: DrawSurface> Checkbox<S> {
    pub fn handle_touch(&mut self, event: TouchEvent) -> TouchOutcome {
        match event {
            TouchEvent::Began { .. } => self.touch_began(),
            TouchEvent::Ended { location } => self.touch_ended(location),
            TouchEvent::Cancelled => {
                self.set_pressed(false);
                TouchOutcome::Released
            }
        }
    }

    /// Dim the control as press feedback. Never changes state.
    pub fn touch_began(&mut self) -> TouchOutcome {
        self.set_pressed(true);
        TouchOutcome::Tracking
    }

    /// Restore opacity and toggle if the touch lifted inside the frame.
    pub fn touch_ended(&mut self, location: Option<Point>) -> TouchOutcome {
        self.set_pressed(false);

        let inside = location.is_some_and(|point| self.frame.contains(point));
        if !inside {
            return TouchOutcome::Released;
        }

        if self.on {
            self.on = false;
            if self.style.animate_on_toggle {
                self.fade_out_mark();
            } else {
                self.remove_mark();
            }
        } else {
            self.on = true;
            self.draw_mark();
        }

        log::debug!("[checkbox] toggled {}", if self.on { "on" } else { "off" });
        self.notify_delegate();
        TouchOutcome::Toggled { is_on: self.on }
    }

    /// Fade the mark over half the animation duration, then detach it.
    ///
    /// Removal is a separately scheduled action rather than a completion
    /// callback of the fade.
    fn fade_out_mark(&mut self) {
        let Some(id) = self.mark else {
            return;
        };
        let half = self.style.animation_duration / 2;
        self.surface.fade_out(id, half);
        self.deferred.schedule(half, Deferred::RemoveMark(id));
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.opacity = if pressed { PRESSED_OPACITY } else { 1.0 };
        self.surface.set_opacity(self.opacity);
    }
}
