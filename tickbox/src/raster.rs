//! Software rasterizer for scenes.
//!
//! One scene unit is one pixel. Pixels are sampled at their centers; strokes
//! cover every pixel within half the line width of a segment and fills use
//! kurbo's nonzero winding rule. Two pixel rows pack into one terminal cell.

use kurbo::{
    Affine, BezPath, Cap, ParamCurve, ParamCurveArclen, ParamCurveNearest, PathSeg, Point,
    Shape as _,
};

use crate::buffer::{Buffer, Cell};
use crate::scene::{Layer, Scene};
use crate::shapes::ACCURACY;
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; usize::from(width) * usize::from(height)],
        }
    }

    /// A canvas covering a terminal of `cols` x `rows` cells.
    pub fn for_terminal(cols: u16, rows: u16, background: Rgb) -> Self {
        Self::new(cols, rows.saturating_mul(2), background)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)])
    }

    /// Paint every layer of `scene` with its local origin at `origin`.
    pub fn paint_scene(&mut self, scene: &Scene, origin: Point) {
        let now = scene.now();
        for layer in scene.layers() {
            let opacity = scene.opacity() * layer.opacity(now);
            if opacity <= 0.0 {
                continue;
            }
            self.paint_layer(layer, origin, opacity, layer.stroke_end(now));
        }
    }

    fn paint_layer(&mut self, layer: &Layer, origin: Point, opacity: f32, stroke_end: f32) {
        let shape = layer.shape();
        let path = Affine::translate(origin.to_vec2()) * shape.path.clone();

        if shape.is_filled() {
            let color = shape.paint.fill;
            let alpha = color.alpha() * opacity;
            let rgb = color.to_rgb();
            self.cover(|p| path.contains(p), rgb, alpha);
        }

        if shape.is_stroked() {
            let segments = visible_segments(&path, f64::from(stroke_end));
            if segments.is_empty() {
                return;
            }
            let color = shape.paint.stroke;
            let alpha = color.alpha() * opacity;
            let rgb = color.to_rgb();
            let half = shape.paint.line_width / 2.0;
            let round = shape.paint.line_cap == Cap::Round;
            self.cover(
                |p| segments.iter().any(|seg| stroke_covers(seg, p, half, round)),
                rgb,
                alpha,
            );
        }
    }

    /// Blend `color` into every pixel whose center satisfies `inside`, once.
    fn cover(&mut self, inside: impl Fn(Point) -> bool, color: Rgb, alpha: f32) {
        let width = usize::from(self.width);
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            let center = Point::new((i % width) as f64 + 0.5, (i / width) as f64 + 0.5);
            if inside(center) {
                *pixel = pixel.blend(color, alpha);
            }
        }
    }

    /// Pack pixel rows in pairs into half-block cells.
    pub fn to_buffer(&self) -> Buffer {
        let rows = self.height.div_ceil(2);
        let mut buffer = Buffer::new(self.width, rows);
        for row in 0..rows {
            for x in 0..self.width {
                let top = self.pixel(x, row * 2).unwrap_or_default();
                let bottom = self.pixel(x, row * 2 + 1).unwrap_or(top);
                buffer.set(x, row, Cell::pixels(top, bottom));
            }
        }
        buffer
    }
}

/// Segments making up the first `fraction` of the total stroke length.
fn visible_segments(path: &BezPath, fraction: f64) -> Vec<PathSeg> {
    let mut budget = path.perimeter(ACCURACY) * fraction.clamp(0.0, 1.0);
    let mut out = Vec::new();

    for seg in path.segments() {
        if budget <= 0.0 {
            break;
        }
        let length = seg.arclen(ACCURACY);
        if length <= budget {
            out.push(seg);
        } else {
            let t = seg.inv_arclen(budget, ACCURACY);
            out.push(seg.subsegment(0.0..t));
        }
        budget -= length;
    }
    out
}

/// Whether the stroke of `seg` covers `p`. Butt caps end flush with the
/// segment, so points beyond either end are never covered.
fn stroke_covers(seg: &PathSeg, p: Point, half_width: f64, round_caps: bool) -> bool {
    if seg.nearest(p, ACCURACY).distance_sq > half_width * half_width {
        return false;
    }
    if round_caps {
        return true;
    }
    let (start, end) = (seg.start(), seg.end());
    let axis = end - start;
    let extent = axis.hypot2();
    extent > 0.0 && (0.0..=extent).contains(&axis.dot(p - start))
}
