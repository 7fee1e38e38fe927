//! Resolving elements into rectangles.
//!
//! Every operation here has a `try_*` form that surfaces
//! [`ResolutionFailure`] and a plain form that logs the failure and returns
//! [`Rect::ZERO`] instead.

use std::slice;

use crate::env::{Environment, RectOptions, Reference, Target};
use crate::error::ResolutionFailure;
use crate::types::{Point, Rect};

impl Rect {
    /// The currently visible region of the document.
    ///
    /// The size is the larger of the document's client size and the window's
    /// inner size, since some hosts report a zero window before layout. The
    /// origin is the current scroll offset.
    pub fn from_viewport<E: Environment>(env: &E) -> Rect {
        let metrics = env.viewport();
        let client = metrics.document_client_size;
        let inner = metrics.inner_size.unwrap_or_default();

        Rect::from_point_and_size(
            metrics.scroll_offset(),
            (client.width.max(inner.width), client.height.max(inner.height)).into(),
        )
    }

    pub fn try_from_target<E: Environment>(
        env: &E,
        target: &Target<E::Node>,
        options: &RectOptions<E::Node>,
    ) -> Result<Rect, ResolutionFailure> {
        match target {
            Target::Rect(rect) => Ok(*rect),
            Target::Window => {
                let root = env.document_element();
                resolve_nodes(env, slice::from_ref(&root), options)
            }
            Target::Element(node) => resolve_nodes(env, slice::from_ref(node), options),
            Target::Elements(nodes) => resolve_nodes(env, nodes, options),
        }
    }

    /// Resolves `target` into a rectangle in the frame chosen by `options`.
    ///
    /// Multiple elements resolve to the rectangle covering all of them; an
    /// empty element list resolves to [`Rect::ZERO`].
    pub fn from_target<E: Environment>(
        env: &E,
        target: &Target<E::Node>,
        options: &RectOptions<E::Node>,
    ) -> Rect {
        degrade("from_target", Self::try_from_target(env, target, options))
    }

    pub fn try_from_children_of<E: Environment>(
        env: &E,
        parent: &E::Node,
        options: &RectOptions<E::Node>,
    ) -> Result<Rect, ResolutionFailure> {
        let children = env.children(parent)?;
        resolve_nodes(env, &children, &options.or_reference(parent))
    }

    /// Rectangle covering all children of `parent`, relative to `parent`
    /// unless `options` names another reference.
    pub fn from_children_of<E: Environment>(
        env: &E,
        parent: &E::Node,
        options: &RectOptions<E::Node>,
    ) -> Rect {
        degrade(
            "from_children_of",
            Self::try_from_children_of(env, parent, options),
        )
    }

    pub fn try_from_children_before<E: Environment>(
        env: &E,
        parent: &E::Node,
        index: isize,
        options: &RectOptions<E::Node>,
    ) -> Result<Rect, ResolutionFailure> {
        let children = env.children(parent)?;
        if index <= 0 {
            return Ok(Rect::ZERO);
        }
        let end = (index as usize).min(children.len());
        resolve_nodes(env, &children[..end], &options.or_reference(parent))
    }

    /// Rectangle covering the children of `parent` before `index`.
    ///
    /// `index <= 0` selects nothing; an index past the last child selects
    /// every child.
    pub fn from_children_before<E: Environment>(
        env: &E,
        parent: &E::Node,
        index: isize,
        options: &RectOptions<E::Node>,
    ) -> Rect {
        degrade(
            "from_children_before",
            Self::try_from_children_before(env, parent, index, options),
        )
    }

    pub fn try_from_children_after<E: Environment>(
        env: &E,
        parent: &E::Node,
        index: isize,
        options: &RectOptions<E::Node>,
    ) -> Result<Rect, ResolutionFailure> {
        let children = env.children(parent)?;
        let start = if index < 0 {
            0
        } else if index >= children.len() as isize - 1 {
            return Ok(Rect::ZERO);
        } else {
            index as usize + 1
        };
        resolve_nodes(env, &children[start..], &options.or_reference(parent))
    }

    /// Rectangle covering the children of `parent` after `index`.
    ///
    /// A negative index selects every child; an index at or past the last
    /// child selects nothing.
    pub fn from_children_after<E: Environment>(
        env: &E,
        parent: &E::Node,
        index: isize,
        options: &RectOptions<E::Node>,
    ) -> Rect {
        degrade(
            "from_children_after",
            Self::try_from_children_after(env, parent, index, options),
        )
    }

    pub fn try_from_child_at<E: Environment>(
        env: &E,
        parent: &E::Node,
        index: isize,
        options: &RectOptions<E::Node>,
    ) -> Result<Rect, ResolutionFailure> {
        let children = env.children(parent)?;
        let Some(child) = usize::try_from(index).ok().and_then(|i| children.get(i)) else {
            log::debug!(
                "[rect] child index {} out of range for {:?} ({} children)",
                index,
                parent,
                children.len()
            );
            return Ok(Rect::ZERO);
        };
        resolve_nodes(env, slice::from_ref(child), &options.or_reference(parent))
    }

    /// Rectangle of the child of `parent` at `index`, or [`Rect::ZERO`] when
    /// there is no such child.
    pub fn from_child_at<E: Environment>(
        env: &E,
        parent: &E::Node,
        index: isize,
        options: &RectOptions<E::Node>,
    ) -> Rect {
        degrade(
            "from_child_at",
            Self::try_from_child_at(env, parent, index, options),
        )
    }

    pub fn try_intersecting<E: Environment>(
        env: &E,
        targets: &[Target<E::Node>],
    ) -> Result<Rect, ResolutionFailure> {
        intersect_targets(env, targets)
    }

    /// Chained intersection of `targets`, each resolved in document
    /// coordinates.
    ///
    /// A single target is intersected with the viewport. Once the running
    /// intersection becomes empty it stays [`Rect::ZERO`].
    pub fn intersecting<E: Environment>(env: &E, targets: &[Target<E::Node>]) -> Rect {
        degrade("intersecting", Self::try_intersecting(env, targets))
    }
}

/// Resolves `nodes` and folds them into their covering rectangle.
pub(crate) fn resolve_nodes<E: Environment>(
    env: &E,
    nodes: &[E::Node],
    options: &RectOptions<E::Node>,
) -> Result<Rect, ResolutionFailure> {
    if nodes.is_empty() {
        return Ok(Rect::ZERO);
    }

    // Client space -> document space -> reference space.
    let scroll = env.viewport().scroll_offset();
    let origin = match &options.reference {
        None | Some(Reference::Window) => Point::ZERO,
        Some(Reference::Element(reference)) => {
            resolve_nodes(env, slice::from_ref(reference), &RectOptions::default())?.origin()
        }
    };
    let offset = scroll - origin;

    let rect = nodes.iter().try_fold(None, |covered: Option<Rect>, node| {
        let rect = client_box(env, node, options.overflow)?.translate(offset);
        Ok::<_, ResolutionFailure>(Some(match covered {
            Some(covered) => covered.concat(&rect),
            None => rect,
        }))
    })?;

    let rect = rect.unwrap_or_default();
    log::trace!("[rect] resolved {} node(s) to {}", nodes.len(), rect);
    Ok(rect)
}

fn client_box<E: Environment>(
    env: &E,
    node: &E::Node,
    overflow: bool,
) -> Result<Rect, ResolutionFailure> {
    let bounds = env.bounding_box(node)?;
    if !overflow {
        return Ok(bounds);
    }
    let extent = env.scroll_size(node)?;
    Ok(Rect::from_point_and_size(bounds.origin(), extent))
}

/// Folds the intersection of `targets`, pairing a lone target with the
/// viewport.
pub(crate) fn intersect_targets<'a, E, I>(env: &E, targets: I) -> Result<Rect, ResolutionFailure>
where
    E: Environment,
    E::Node: 'a,
    I: IntoIterator<Item = &'a Target<E::Node>>,
{
    let options = RectOptions::default();
    let mut rects = targets
        .into_iter()
        .map(|target| Rect::try_from_target(env, target, &options))
        .collect::<Result<Vec<_>, _>>()?;

    if rects.len() == 1 {
        rects.push(Rect::from_viewport(env));
    }

    Ok(Rect::intersect_chain(rects))
}

fn degrade(operation: &str, result: Result<Rect, ResolutionFailure>) -> Rect {
    result.unwrap_or_else(|err| {
        log::warn!("[rect] {} failed, returning an empty rect: {}", operation, err);
        Rect::ZERO
    })
}
