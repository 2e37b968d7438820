use crate::types::Point;

/// Touch input delivered by the host, in the host's coordinate space
/// (the same space as the checkbox frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// A touch started on the control. The widget does not read `location`;
    /// hosts use it to route the touch to the control it landed on.
    Began { location: Point },
    /// The touch lifted. `location` is `None` when the host lost track of it.
    Ended { location: Option<Point> },
    /// The host aborted tracking (e.g. the gesture was taken by a parent).
    Cancelled,
}

/// What the control did with a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Touch began; the control is showing press feedback.
    Tracking,
    /// Released inside: the state flipped to `is_on`.
    Toggled { is_on: bool },
    /// Released outside, without a location, or cancelled.
    Released,
}

// Conversion from crossterm mouse input. One terminal cell covers two pixel
// rows (half-block rendering), so the touch lands on the cell's pixel center.
impl TouchEvent {
    pub fn from_mouse(mouse: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};

        let location = Point::new(
            f64::from(mouse.column) + 0.5,
            f64::from(mouse.row) * 2.0 + 1.0,
        );
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(TouchEvent::Began { location }),
            MouseEventKind::Up(MouseButton::Left) => Some(TouchEvent::Ended {
                location: Some(location),
            }),
            _ => None,
        }
    }
}
