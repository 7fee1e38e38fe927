//! Error types

mod descriptor;
mod resolution;

pub use descriptor::*;
pub use resolution::*;
