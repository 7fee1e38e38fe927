//! The environment a rectangle is resolved against.
//!
//! Element geometry and viewport state are owned by the host UI. The
//! [`Environment`] trait is the only way the resolving operations reach
//! them, so every query works on whatever snapshot the host hands in.

use std::fmt::Debug;

use crate::error::ResolutionFailure;
use crate::types::{Point, Rect, Size};

/// Geometry queries a host UI provides for its visual elements.
pub trait Environment {
    /// Handle to a visual element.
    type Node: Clone + Debug;

    /// The element's unclamped box in client (viewport-relative) space.
    fn bounding_box(&self, node: &Self::Node) -> Result<Rect, ResolutionFailure>;

    /// The element's full scrollable content extent.
    fn scroll_size(&self, node: &Self::Node) -> Result<Size, ResolutionFailure>;

    /// The element's children in document order.
    fn children(&self, node: &Self::Node) -> Result<Vec<Self::Node>, ResolutionFailure>;

    /// The root element of the document.
    fn document_element(&self) -> Self::Node;

    /// Current viewport size and scroll offset.
    fn viewport(&self) -> ViewportMetrics;
}

/// Raw viewport state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Client size of the document element.
    pub document_client_size: Size,
    /// Inner size of the window, if the host reports one.
    pub inner_size: Option<Size>,
    /// Window scroll offset, if the host reports one.
    pub page_offset: Option<Point>,
    /// Scroll position of the scrolling element. Used when `page_offset`
    /// is unavailable.
    pub scrolling_element_offset: Point,
}

impl ViewportMetrics {
    /// Unscrolled viewport whose document and window agree on `size`.
    pub fn new(size: Size) -> Self {
        Self {
            document_client_size: size,
            inner_size: Some(size),
            page_offset: Some(Point::ZERO),
            scrolling_element_offset: Point::ZERO,
        }
    }

    pub fn document_client_size(mut self, size: Size) -> Self {
        self.document_client_size = size;
        self
    }

    pub fn inner_size(mut self, size: Option<Size>) -> Self {
        self.inner_size = size;
        self
    }

    pub fn page_offset(mut self, offset: Option<Point>) -> Self {
        self.page_offset = offset;
        self
    }

    pub fn scrolling_element_offset(mut self, offset: Point) -> Self {
        self.scrolling_element_offset = offset;
        self
    }

    /// The effective scroll offset.
    pub fn scroll_offset(&self) -> Point {
        self.page_offset.unwrap_or(self.scrolling_element_offset)
    }
}

/// Something that can be resolved into a [`Rect`].
#[derive(Debug, Clone, PartialEq)]
pub enum Target<N> {
    /// An already resolved rectangle. Returned unchanged.
    Rect(Rect),
    /// The window. Resolves through the document element.
    Window,
    Element(N),
    /// Several elements, resolved to the rectangle covering all of them.
    Elements(Vec<N>),
}

impl<N> Target<N> {
    pub fn element(node: impl Into<N>) -> Self {
        Self::Element(node.into())
    }

    pub fn elements<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<N>,
    {
        Self::Elements(nodes.into_iter().map(Into::into).collect())
    }
}

impl<N> From<Rect> for Target<N> {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

/// The coordinate frame a resolved rectangle is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<N> {
    /// Document coordinates.
    Window,
    /// Relative to the element's top-left corner.
    Element(N),
}

impl<N> Default for Reference<N> {
    fn default() -> Self {
        Self::Window
    }
}

/// Options for resolving a [`Target`].
#[derive(Debug, Clone, PartialEq)]
pub struct RectOptions<N> {
    /// Reference frame. `None` uses the operation's default: the window for
    /// [`Rect::from_target`], the parent for the `from_children_*` family.
    pub reference: Option<Reference<N>>,

    /// Use each element's scrollable extent instead of its clipped box.
    pub overflow: bool,
}

impl<N> Default for RectOptions<N> {
    fn default() -> Self {
        Self {
            reference: None,
            overflow: false,
        }
    }
}

impl<N> RectOptions<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative to `node`.
    pub fn reference(mut self, node: impl Into<N>) -> Self {
        self.reference = Some(Reference::Element(node.into()));
        self
    }

    /// Resolve in document coordinates, even where the operation would
    /// default to another frame.
    pub fn relative_to_window(mut self) -> Self {
        self.reference = Some(Reference::Window);
        self
    }

    pub fn overflow(mut self, overflow: bool) -> Self {
        self.overflow = overflow;
        self
    }

    /// Fills in `fallback` when no reference was chosen.
    pub(crate) fn or_reference(&self, fallback: &N) -> Self
    where
        N: Clone,
    {
        Self {
            reference: Some(
                self.reference
                    .clone()
                    .unwrap_or_else(|| Reference::Element(fallback.clone())),
            ),
            overflow: self.overflow,
        }
    }
}
