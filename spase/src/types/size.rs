use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor;
use crate::error::DescriptorError;

const KIND: &str = "Size";

/// A width and height on a 2D plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SizePatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a size from a `[width, height]` or `{"width": .., "height": ..}`
    /// descriptor.
    pub fn from_descriptor(value: &Value) -> Result<Self, DescriptorError> {
        let [width, height] = descriptor::numbers(KIND, value, ["width", "height"])?;
        Ok(Self::new(width, height))
    }

    pub fn is_valid_descriptor(value: &Value) -> bool {
        Self::from_descriptor(value).is_ok()
    }

    pub fn with(self, patch: SizePatch) -> Self {
        Self {
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
        }
    }

    /// Swaps width and height.
    #[doc(alias = "invert")]
    pub const fn rotate(self) -> Self {
        Self::new(self.height, self.width)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.width, self.height]
    }

    pub fn to_json(self) -> Value {
        serde_json::json!({ "width": self.width, "height": self.height })
    }
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Self::new(width, height)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl TryFrom<&[f64]> for Size {
    type Error = DescriptorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        descriptor::slice(KIND, values).map(Self::from)
    }
}

impl TryFrom<&Value> for Size {
    type Error = DescriptorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_descriptor(value)
    }
}

impl TryFrom<Value> for Size {
    type Error = DescriptorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_descriptor(&value)
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul for Size {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.width * rhs.width, self.height * rhs.height)
    }
}

impl Div for Size {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.width / rhs.width, self.height / rhs.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size(width={}, height={})", self.width, self.height)
    }
}
