use crate::env::{Environment, RectOptions, Target};
use crate::error::ResolutionFailure;
use crate::resolve::intersect_targets;
use crate::types::{Point, Rect};

/// One side of a hit test.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<N> {
    Point(Point),
    /// Rectangles and/or elements. Each member is resolved on its own.
    Regions(Vec<Target<N>>),
}

impl<N> Operand<N> {
    pub fn element(node: impl Into<N>) -> Self {
        Self::Regions(vec![Target::element(node)])
    }

    pub fn elements<I>(nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<N>,
    {
        Self::Regions(
            nodes
                .into_iter()
                .map(|node| Target::Element(node.into()))
                .collect(),
        )
    }
}

impl<N> From<Point> for Operand<N> {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl<N> From<Rect> for Operand<N> {
    fn from(rect: Rect) -> Self {
        Self::Regions(vec![Target::Rect(rect)])
    }
}

impl<N> From<Vec<Rect>> for Operand<N> {
    fn from(rects: Vec<Rect>) -> Self {
        Self::Regions(rects.into_iter().map(Target::Rect).collect())
    }
}

impl<N> From<Target<N>> for Operand<N> {
    fn from(target: Target<N>) -> Self {
        Self::Regions(vec![target])
    }
}

impl<N> From<Vec<Target<N>>> for Operand<N> {
    fn from(targets: Vec<Target<N>>) -> Self {
        Self::Regions(targets)
    }
}

/// Hit-tests two operands.
///
/// - A point against regions hits if it lies within the closed bounds of any
///   region.
/// - Two points hit if they are equal.
/// - Regions against regions hit if the chained intersection of all of them
///   has a non-zero area.
///
/// A resolution failure never counts as a hit.
pub fn hit_test<E: Environment>(env: &E, a: &Operand<E::Node>, b: &Operand<E::Node>) -> bool {
    try_hit_test(env, a, b).unwrap_or_else(|err| {
        log::warn!("[hit] hit test failed, reporting no hit: {}", err);
        false
    })
}

pub fn try_hit_test<E: Environment>(
    env: &E,
    a: &Operand<E::Node>,
    b: &Operand<E::Node>,
) -> Result<bool, ResolutionFailure> {
    match (a, b) {
        (Operand::Point(point), Operand::Regions(regions))
        | (Operand::Regions(regions), Operand::Point(point)) => {
            point_in_any(env, *point, regions)
        }
        (Operand::Point(a), Operand::Point(b)) => Ok(a == b),
        (Operand::Regions(a), Operand::Regions(b)) => {
            let overlap = intersect_targets(env, a.iter().chain(b))?;
            log::trace!("[hit] overlap of {} region(s): {}", a.len() + b.len(), overlap);
            Ok(!overlap.is_empty())
        }
    }
}

fn point_in_any<E: Environment>(
    env: &E,
    point: Point,
    regions: &[Target<E::Node>],
) -> Result<bool, ResolutionFailure> {
    let options = RectOptions::default();
    for region in regions {
        if Rect::try_from_target(env, region, &options)?.contains_point(point) {
            return Ok(true);
        }
    }
    Ok(false)
}

impl Rect {
    /// Hit-tests this rectangle against `other`.
    pub fn contains<E: Environment>(&self, env: &E, other: impl Into<Operand<E::Node>>) -> bool {
        hit_test(env, &Operand::from(*self), &other.into())
    }
}
