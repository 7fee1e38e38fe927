//! Field-of-view of an element within a reference frame.

use std::slice;

use crate::env::{Environment, RectOptions, Reference, Target};
use crate::error::ResolutionFailure;
use crate::resolve::resolve_nodes;
use crate::types::{Point, Rect};

/// How far an element has been scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fov {
    /// Distance from the element's top-left corner to the reference's
    /// bottom-right corner. Negative while the element is still below or to
    /// the right of the visible region.
    pub position: Point,
    /// `position` divided by the element's size. Not clamped to `0..=1`.
    pub step: Point,
    /// The part of the element visible within the reference.
    pub rect: Rect,
}

/// [`Fov`] under the names used for scroll progress tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionInfo {
    pub position: Point,
    pub step: Point,
    pub visible_rect: Rect,
}

impl From<Fov> for PositionInfo {
    fn from(fov: Fov) -> Self {
        Self {
            position: fov.position,
            step: fov.step,
            visible_rect: fov.rect,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FovOptions<N> {
    pub reference: Reference<N>,
}

impl<N> Default for FovOptions<N> {
    fn default() -> Self {
        Self {
            reference: Reference::Window,
        }
    }
}

impl<N> FovOptions<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(mut self, node: impl Into<N>) -> Self {
        self.reference = Reference::Element(node.into());
        self
    }
}

pub fn try_fov<E: Environment>(
    env: &E,
    element: &E::Node,
    options: &FovOptions<E::Node>,
) -> Result<Fov, ResolutionFailure> {
    let reference_rect = match &options.reference {
        Reference::Window => Rect::from_viewport(env),
        Reference::Element(node) => {
            resolve_nodes(env, slice::from_ref(node), &RectOptions::default())?
        }
    };
    let rect_options = RectOptions {
        reference: Some(options.reference.clone()),
        overflow: false,
    };
    let rect = resolve_nodes(env, slice::from_ref(element), &rect_options)?;

    let position = Point::new(
        reference_rect.right() - rect.left,
        reference_rect.bottom() - rect.top,
    );
    let step = position / Point::new(rect.width, rect.height);

    let mut targets = vec![Target::Element(element.clone())];
    if let Reference::Element(node) = &options.reference {
        targets.push(Target::Element(node.clone()));
    }
    let visible = Rect::try_intersecting(env, &targets)?;

    log::debug!(
        "[fov] {:?}: position={} step={} visible={}",
        element,
        position,
        step,
        visible
    );

    Ok(Fov {
        position,
        step,
        rect: visible,
    })
}

/// Computes the field-of-view of `element`, or `None` if either the element
/// or the reference cannot be resolved.
pub fn fov<E: Environment>(
    env: &E,
    element: &E::Node,
    options: &FovOptions<E::Node>,
) -> Option<Fov> {
    match try_fov(env, element, options) {
        Ok(fov) => Some(fov),
        Err(err) => {
            log::warn!("[fov] cannot compute field-of-view: {}", err);
            None
        }
    }
}

/// Same computation as [`fov`], reported as a [`PositionInfo`].
pub fn position_info<E: Environment>(
    env: &E,
    element: &E::Node,
    options: &FovOptions<E::Node>,
) -> Option<PositionInfo> {
    fov(env, element, options).map(PositionInfo::from)
}
