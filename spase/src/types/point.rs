use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor;
use crate::error::DescriptorError;

const KIND: &str = "Point";

/// A point on a 2D plane.
///
/// Arithmetic is component-wise IEEE-754 math with no clamping, so dividing
/// by a zero component yields an infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Partial override applied by [`Point::with`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct PointPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point from an `[x, y]` or `{"x": .., "y": ..}` descriptor.
    pub fn from_descriptor(value: &Value) -> Result<Self, DescriptorError> {
        let [x, y] = descriptor::numbers(KIND, value, ["x", "y"])?;
        Ok(Self::new(x, y))
    }

    pub fn is_valid_descriptor(value: &Value) -> bool {
        Self::from_descriptor(value).is_ok()
    }

    /// Returns a copy with the fields set in `patch` replaced.
    pub fn with(self, patch: PointPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
        }
    }

    /// Swaps the `x` and `y` values.
    #[doc(alias = "invert")]
    pub const fn reflect(self) -> Self {
        Self::new(self.y, self.x)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn to_json(self) -> Value {
        serde_json::json!({ "x": self.x, "y": self.y })
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = DescriptorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        descriptor::slice(KIND, values).map(Self::from)
    }
}

impl TryFrom<&Value> for Point {
    type Error = DescriptorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_descriptor(value)
    }
}

impl TryFrom<Value> for Point {
    type Error = DescriptorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_descriptor(&value)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Point {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Point::default(), Point::ZERO);
        assert!(Point::ZERO.is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_from_array_and_object_descriptors() {
        assert_eq!(Point::from_descriptor(&json!([3, 4])).unwrap(), Point::new(3.0, 4.0));
        assert_eq!(
            Point::from_descriptor(&json!({ "x": 5, "y": 6.5 })).unwrap(),
            Point::new(5.0, 6.5)
        );
        assert_eq!(Point::from([1.0, 2.0]), Point::new(1.0, 2.0));
        assert_eq!(Point::try_from(&[7.0, 8.0][..]).unwrap(), Point::new(7.0, 8.0));
    }

    #[test]
    fn test_rejects_malformed_descriptors() {
        assert_eq!(
            Point::from_descriptor(&json!([1])),
            Err(DescriptorError::arity("Point", 2, 1))
        );
        assert_eq!(
            Point::from_descriptor(&json!({ "x": 1 })),
            Err(DescriptorError::missing_field("Point", "y"))
        );
        assert_eq!(
            Point::from_descriptor(&json!("foo")),
            Err(DescriptorError::shape("Point"))
        );
        assert_eq!(
            Point::from_descriptor(&json!([1, "2"])),
            Err(DescriptorError::not_numeric("Point", "y"))
        );
        assert!(Point::try_from(&[1.0, 2.0, 3.0][..]).is_err());
        assert!(!Point::is_valid_descriptor(&json!({ "width": 1, "height": 2 })));
    }

    #[test]
    fn test_with_overrides_only_given_fields() {
        let p = Point::new(7.0, 8.0);
        assert_eq!(p.with(PointPatch::default()), p);
        assert_eq!(p.with(PointPatch { x: Some(9.0), y: None }), Point::new(9.0, 8.0));
        assert_eq!(p.with(PointPatch { x: None, y: Some(10.0) }), Point::new(7.0, 10.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new(8.0, 9.0);
        let b = Point::new(2.0, 3.0);
        assert_eq!(a + b, Point::new(10.0, 12.0));
        assert_eq!(a - b, Point::new(6.0, 6.0));
        assert_eq!(a * b, Point::new(16.0, 27.0));
        assert_eq!(a / b, Point::new(4.0, 3.0));
        assert_eq!(Point::new(11.0, 22.0).reflect(), Point::new(22.0, 11.0));
    }

    #[test]
    fn test_divide_by_zero_is_not_guarded() {
        let p = Point::new(1.0, 0.0) / Point::ZERO;
        assert!(p.x.is_infinite());
        assert!(p.y.is_nan());
    }

    #[test]
    fn test_array_and_json_round_trip() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.to_array(), [3.0, 4.0]);
        assert_eq!(p.to_json(), json!({ "x": 3.0, "y": 4.0 }));
        assert_eq!(Point::from(p.to_array()), p);
        assert_eq!(Point::from_descriptor(&p.to_json()).unwrap(), p);

        let encoded = serde_json::to_string(&p).unwrap();
        let decoded: Point = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, p);
        assert!(serde_json::from_str::<Point>("[1]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "Point(x=1, y=2.5)");
    }
}
