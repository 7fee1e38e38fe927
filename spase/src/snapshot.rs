use std::collections::HashMap;

use crate::env::{Environment, ViewportMetrics};
use crate::error::ResolutionFailure;
use crate::types::{Point, Rect, Size};

/// An [`Environment`] backed by a captured layout.
///
/// Elements are identified by string ids. Boxes are stored in client space,
/// exactly as a host's bounding-box query would report them at capture time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: String,
    viewport: ViewportMetrics,
    boxes: HashMap<String, Rect>,
    /// Scrollable extents for elements whose content overflows their box.
    scroll_sizes: HashMap<String, Size>,
    children: HashMap<String, Vec<String>>,
}

impl Snapshot {
    pub const ROOT: &'static str = "root";

    /// Creates a snapshot containing only the document element.
    ///
    /// The document element spans the document client size and sits at the
    /// negated scroll offset, as a scrolled document does in client space.
    pub fn new(viewport: ViewportMetrics) -> Self {
        let root_box = Rect::from_point_and_size(
            Point::ZERO - viewport.scroll_offset(),
            viewport.document_client_size,
        );

        Self {
            root: Self::ROOT.to_string(),
            viewport,
            boxes: HashMap::from([(Self::ROOT.to_string(), root_box)]),
            scroll_sizes: HashMap::new(),
            children: HashMap::new(),
        }
    }

    /// Adds an element under the document element.
    pub fn element(self, id: impl Into<String>, bounds: Rect) -> Self {
        let root = self.root.clone();
        self.child(root, id, bounds)
    }

    /// Adds an element as the last child of `parent`.
    pub fn child(mut self, parent: impl Into<String>, id: impl Into<String>, bounds: Rect) -> Self {
        let id = id.into();
        self.children.entry(parent.into()).or_default().push(id.clone());
        self.boxes.insert(id, bounds);
        self
    }

    /// Records the scrollable extent of an element.
    pub fn with_scroll_size(mut self, id: impl Into<String>, size: Size) -> Self {
        self.scroll_sizes.insert(id.into(), size);
        self
    }

    /// Drops an element's geometry, as if it had been removed from the
    /// document. It stays listed among its parent's children.
    pub fn detach(mut self, id: &str) -> Self {
        self.boxes.remove(id);
        self
    }

    /// Scrolls the window to `offset`, moving every client box accordingly.
    pub fn scroll_to(mut self, offset: Point) -> Self {
        let delta = self.viewport.scroll_offset() - offset;
        for rect in self.boxes.values_mut() {
            *rect = rect.translate(delta);
        }
        self.viewport.page_offset = Some(offset);
        self
    }

    pub fn viewport_metrics(&self) -> &ViewportMetrics {
        &self.viewport
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.boxes.get(id).copied()
    }

    fn lookup(&self, id: &str) -> Result<Rect, ResolutionFailure> {
        self.get(id).ok_or_else(|| ResolutionFailure::detached(id))
    }
}

impl Environment for Snapshot {
    type Node = String;

    fn bounding_box(&self, node: &String) -> Result<Rect, ResolutionFailure> {
        self.lookup(node)
    }

    fn scroll_size(&self, node: &String) -> Result<Size, ResolutionFailure> {
        let bounds = self.lookup(node)?;
        Ok(self
            .scroll_sizes
            .get(node)
            .copied()
            .unwrap_or_else(|| bounds.size()))
    }

    fn children(&self, node: &String) -> Result<Vec<String>, ResolutionFailure> {
        self.lookup(node)?;
        Ok(self.children.get(node).cloned().unwrap_or_default())
    }

    fn document_element(&self) -> String {
        self.root.clone()
    }

    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }
}
