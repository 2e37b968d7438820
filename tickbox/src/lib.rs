//! A self-drawn checkbox: vector box and mark, animated stroke reveal on
//! toggle, and a weakly held delegate told about touch-driven changes.

pub mod animation;
pub mod buffer;
pub mod checkbox;
pub mod event;
pub mod raster;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod terminal;
pub mod timer;
pub mod types;

pub use animation::{Animation, Easing};
pub use kurbo::{BezPath, Cap, Join, PathEl};
pub use buffer::{Buffer, Cell};
pub use checkbox::{Checkbox, CheckboxDelegate, CheckboxStyle};
pub use event::{TouchEvent, TouchOutcome};
pub use raster::Canvas;
pub use scene::{Layer, Scene};
pub use shapes::MarkPath;
pub use surface::{DrawSurface, LayerId, Paint, Shape};
pub use terminal::Terminal;
pub use timer::Timers;
pub use types::*;
