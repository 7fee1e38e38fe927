mod descriptor;
mod point;
mod rect;
mod size;

pub use point::{Point, PointPatch};
pub use rect::{Rect, RectPatch};
pub use size::{Size, SizePatch};
