//! Layer drawing for the Checkbox. Every redraw detaches the old layer and
//! attaches a fresh one; layers are never mutated in place.
//!
//! Paint order is fixed by role: background, then outline, then the mark.

use crate::shapes::{background_panel, box_outline, rect_path, MarkPath};
use crate::surface::{DrawSurface, Shape};
use crate::types::Color;

use super::Checkbox;

impl<S: DrawSurface> Checkbox<S> {
    pub(super) fn draw_background(&mut self) {
        if let Some(old) = self.background.take() {
            self.surface.detach(old);
        }

        let panel = background_panel(self.reference_length);
        let shape = Shape::new(rect_path(panel)).fill(self.style.background);
        // Always the bottom layer, whatever was drawn after it.
        self.background = Some(self.surface.attach_at(0, shape));
    }

    pub(super) fn draw_box(&mut self) {
        if let Some(old) = self.outline.take() {
            self.surface.detach(old);
        }

        let path = box_outline(self.reference_length, self.style.box_border_width);
        let shape = Shape::new(path)
            .stroke(self.style.box_border_color, self.style.box_border_width)
            .fill(Color::CLEAR);
        let above_background = usize::from(self.background.is_some());
        self.outline = Some(self.surface.attach_at(above_background, shape));
        log::trace!("[checkbox] box outline redrawn");
    }

    /// Draw the mark for the current style. No-op while off.
    pub(super) fn draw_mark(&mut self) {
        if !self.on {
            return;
        }
        if let Some(old) = self.mark.take() {
            self.surface.detach(old);
        }

        let style = self.style;
        let variant = MarkPath::select(style.animate_on_toggle, style.use_x_mark);
        let fill = if variant.is_filled() {
            style.checkmark_color
        } else {
            Color::CLEAR
        };
        let shape = Shape::new(variant.path(self.reference_length))
            .stroke(style.checkmark_color, style.checkmark_stroke_width)
            .fill(fill)
            .caps(variant.line_cap(), variant.line_join());

        let id = self.surface.attach(shape);
        if style.animate_on_toggle {
            self.surface
                .animate_stroke_reveal(id, style.animation_duration);
        }
        self.mark = Some(id);
        log::trace!("[checkbox] mark redrawn as {:?}", variant);
    }

    /// Detach the mark right away, whatever state it is in.
    pub(super) fn remove_mark(&mut self) {
        if let Some(id) = self.mark.take() {
            self.surface.detach(id);
        }
    }
}
