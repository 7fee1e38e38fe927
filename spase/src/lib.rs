//! Points, sizes and rectangles, plus scroll-aware element geometry built on
//! top of them.

pub mod env;
pub mod error;
pub mod fov;
pub mod hit;
mod resolve;
pub mod snapshot;
pub mod types;

pub use env::{Environment, RectOptions, Reference, Target, ViewportMetrics};
pub use error::{DescriptorError, ResolutionFailure};
pub use fov::{fov, position_info, try_fov, Fov, FovOptions, PositionInfo};
pub use hit::{hit_test, try_hit_test, Operand};
pub use snapshot::Snapshot;
pub use types::*;
