use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor;
use super::{Point, Size};
use crate::error::DescriptorError;

const KIND: &str = "Rect";

/// An axis-aligned rectangle.
///
/// Only `left`, `top`, `width` and `height` are stored; `right` and `bottom`
/// are derived so the six bounds can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "RectJson", try_from = "Value")]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Partial override applied by [`Rect::with`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct RectPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Canonical six-field JSON form.
#[derive(Serialize)]
struct RectJson {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
    width: f64,
    height: f64,
}

impl From<Rect> for RectJson {
    fn from(rect: Rect) -> Self {
        Self {
            top: rect.top,
            right: rect.right(),
            bottom: rect.bottom(),
            left: rect.left,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl Rect {
    /// The canonical empty rectangle. Degenerate intersections and failed
    /// resolutions both collapse to this value.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            left: x,
            top: y,
            width,
            height,
        }
    }

    pub const fn from_point_and_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn from_bounds(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Creates a rectangle from a descriptor.
    ///
    /// Accepted forms are `[x, y, width, height]`, `{x, y, width, height}` and
    /// the six-field `{top, right, bottom, left, width, height}` produced by
    /// [`Rect::to_json`]. In the six-field form `right` and `bottom` must equal
    /// `left + width` and `top + height`.
    pub fn from_descriptor(value: &Value) -> Result<Self, DescriptorError> {
        match value {
            Value::Object(map) if !map.contains_key("x") && map.contains_key("left") => {
                let [top, right, bottom, left, width, height] = descriptor::fields(
                    KIND,
                    map,
                    ["top", "right", "bottom", "left", "width", "height"],
                )?;
                let rect = Self::new(left, top, width, height);
                if rect.right() != right {
                    return Err(DescriptorError::inconsistent(KIND, "right"));
                }
                if rect.bottom() != bottom {
                    return Err(DescriptorError::inconsistent(KIND, "bottom"));
                }
                Ok(rect)
            }
            _ => {
                let [x, y, width, height] =
                    descriptor::numbers(KIND, value, ["x", "y", "width", "height"])?;
                Ok(Self::new(x, y, width, height))
            }
        }
    }

    pub fn is_valid_descriptor(value: &Value) -> bool {
        Self::from_descriptor(value).is_ok()
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.right() - self.left) / 2.0 + self.left,
            (self.bottom() - self.top) / 2.0 + self.top,
        )
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.area() == 0.0
    }

    /// True when every field is zero, i.e. this is [`Rect::ZERO`].
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn with(self, patch: RectPatch) -> Self {
        Self {
            left: patch.x.unwrap_or(self.left),
            top: patch.y.unwrap_or(self.top),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
        }
    }

    /// Swaps width and height, keeping the top-left corner.
    pub const fn rotate(self) -> Self {
        Self::new(self.left, self.top, self.height, self.width)
    }

    pub const fn invert(self) -> Self {
        self.rotate()
    }

    /// Moves the rectangle by `offset`.
    pub fn translate(self, offset: Point) -> Self {
        Self::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn concat(&self, other: &Rect) -> Rect {
        Self::from_bounds(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Overlap of `self` and `other`.
    ///
    /// A zero-area overlap is returned as [`Rect::ZERO`] so that later
    /// intersections against it stay empty.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let width = (self.right().min(other.right()) - self.left.max(other.left)).max(0.0);
        let height = (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0);
        let rect = Self::new(
            self.left.max(other.left),
            self.top.max(other.top),
            width,
            height,
        );

        if rect.is_empty() {
            Self::ZERO
        } else {
            rect
        }
    }

    /// Left-folds [`Rect::intersection`] over `rects`.
    ///
    /// An empty sequence yields [`Rect::ZERO`]; a single rectangle is
    /// returned as-is.
    pub fn intersect_chain<I>(rects: I) -> Rect
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut rects = rects.into_iter();
        let Some(first) = rects.next() else {
            return Self::ZERO;
        };
        rects.fold(first, |current, next| current.intersection(&next))
    }

    /// Closed-bounds containment: points on the edges are inside.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// True when the two rectangles share a non-zero area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    pub fn to_json(self) -> Value {
        serde_json::json!({
            "top": self.top,
            "right": self.right(),
            "bottom": self.bottom(),
            "left": self.left,
            "width": self.width,
            "height": self.height,
        })
    }
}

impl From<(Point, Size)> for Rect {
    fn from((origin, size): (Point, Size)) -> Self {
        Self::from_point_and_size(origin, size)
    }
}

impl From<[f64; 4]> for Rect {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl TryFrom<&[f64]> for Rect {
    type Error = DescriptorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        descriptor::slice(KIND, values).map(Self::from)
    }
}

impl TryFrom<&Value> for Rect {
    type Error = DescriptorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_descriptor(value)
    }
}

impl TryFrom<Value> for Rect {
    type Error = DescriptorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_descriptor(&value)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect(top={}, right={}, bottom={}, left={}, width={}, height={})",
            self.top,
            self.right(),
            self.bottom(),
            self.left,
            self.width,
            self.height
        )
    }
}
