//! Curve data carriers.

use pq_core::Real;

/// One performance sample: volumetric flow (CFM) against water-column
/// pressure. The pressure's unit is tracked by the surrounding stage, not
/// by the point itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub flow: Real,
    pub pressure: Real,
}

impl Point {
    pub fn new(flow: Real, pressure: Real) -> Self {
        Self { flow, pressure }
    }
}

/// An ordered sequence of samples forming a piecewise-linear curve.
///
/// Flow values increase strictly from first to last (the parser enforces
/// this; positive-factor rescaling preserves it). A curve is immutable once
/// built; every pipeline stage produces a fresh one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest flow values, when the curve has any samples.
    pub fn flow_range(&self) -> Option<(Real, Real)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.flow, last.flow)),
            _ => None,
        }
    }
}

impl FromIterator<Point> for Curve {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
