//! Checkbox geometry. Every coordinate is a fraction of the reference length.

use kurbo::{BezPath, Cap, Join, Point, Rect, Shape as _};

/// Tolerance used when converting shapes to paths and measuring them.
pub const ACCURACY: f64 = 0.01;

const ANIMATED_CHECK: [(f64, f64); 3] = [(0.25, 0.42), (0.48, 0.66), (0.77, 0.005)];

const STATIC_CHECK: [(f64, f64); 6] = [
    (0.25, 0.42),
    (0.46, 0.68),
    (0.79, 0.015),
    (0.78, 0.005),
    (0.455, 0.57),
    (0.27, 0.395),
];

const X_MARK: [[(f64, f64); 2]; 2] = [[(0.3, 0.3), (0.7, 0.7)], [(0.7, 0.3), (0.3, 0.7)]];

/// Near and far edges of the box outline.
const BOX_NEAR: f64 = 0.15;
const BOX_FAR: f64 = 0.85;

/// Inset and side of the background panel.
const PANEL_INSET: f64 = 0.2;
const PANEL_SIDE: f64 = 0.6;

/// Which mark is drawn for a given `(animate, use_x)` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkPath {
    /// Thin two-segment check, stroked only.
    AnimatedCheck,
    /// Closed six-point check outline, stroked and filled.
    StaticCheck,
    /// Two crossing diagonals with round caps.
    XMark,
}

impl MarkPath {
    pub fn select(animate: bool, use_x: bool) -> Self {
        match (animate, use_x) {
            (_, true) => MarkPath::XMark,
            (true, false) => MarkPath::AnimatedCheck,
            (false, false) => MarkPath::StaticCheck,
        }
    }

    pub fn path(self, length: f64) -> BezPath {
        let scale = |(x, y): (f64, f64)| Point::new(x * length, y * length);
        match self {
            MarkPath::AnimatedCheck => polyline(ANIMATED_CHECK.map(scale)),
            MarkPath::StaticCheck => {
                let mut path = polyline(STATIC_CHECK.map(scale));
                path.close_path();
                path
            }
            MarkPath::XMark => {
                let mut path = BezPath::new();
                for [from, to] in X_MARK {
                    path.move_to(scale(from));
                    path.line_to(scale(to));
                }
                path
            }
        }
    }

    /// The static check is the only filled variant.
    pub fn is_filled(self) -> bool {
        matches!(self, MarkPath::StaticCheck)
    }

    pub fn line_cap(self) -> Cap {
        match self {
            MarkPath::XMark => Cap::Round,
            _ => Cap::Butt,
        }
    }

    pub fn line_join(self) -> Join {
        match self {
            MarkPath::XMark => Join::Round,
            _ => Join::Miter,
        }
    }
}

fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, point) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path
}

/// Box outline: three sides plus a final segment back to the starting corner's
/// inset position. The path is left open; it is never closed.
pub fn box_outline(length: f64, border_width: f64) -> BezPath {
    let half = 0.5 * border_width;
    let near = BOX_NEAR * length;
    let far = BOX_FAR * length;

    polyline([
        Point::new(near, near + half),
        Point::new(far - half, near + half),
        Point::new(far - half, far - half),
        Point::new(near + half, far - half),
        Point::new(near + half, near + half),
    ])
}

/// Square behind the box, in control-local coordinates.
pub fn background_panel(length: f64) -> Rect {
    Rect::from_origin_size(
        (PANEL_INSET * length, PANEL_INSET * length),
        (PANEL_SIDE * length, PANEL_SIDE * length),
    )
}

/// Closed path covering `rect`.
pub fn rect_path(rect: Rect) -> BezPath {
    rect.to_path(ACCURACY)
}
