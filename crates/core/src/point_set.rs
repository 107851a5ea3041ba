//! Immutable sparse set of cell coordinates.
//!
//! Backs the selection model: membership, bounding box queries, and the
//! edge extension/shrink steps that rubber-band selections are built from.
//! Every mutating operation returns a new set; the receiver is never
//! modified in place.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::point::{Axis, Point};

/// A sparse set of unique [`Point`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    points: FxHashSet<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn has(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// A new set with `point` added.
    pub fn add(&self, point: Point) -> Self {
        let mut points = self.points.clone();
        points.insert(point);
        Self { points }
    }

    /// A new set with `point` removed.
    pub fn remove(&self, point: Point) -> Self {
        let mut points = self.points.clone();
        points.remove(&point);
        Self { points }
    }

    /// A new set keeping only the points the predicate accepts.
    pub fn filter(&self, pred: impl Fn(Point) -> bool) -> Self {
        Self {
            points: self.points.iter().copied().filter(|p| pred(*p)).collect(),
        }
    }

    /// Component-wise minimum over all members: the smallest row paired with
    /// the smallest column, i.e. the top-left corner of the bounding box.
    /// `None` for the empty set.
    pub fn min(&self) -> Option<Point> {
        let row = self.points.iter().map(|p| p.row).min()?;
        let column = self.points.iter().map(|p| p.column).min()?;
        Some(Point { row, column })
    }

    /// Component-wise maximum: the bottom-right corner of the bounding box.
    /// `None` for the empty set.
    pub fn max(&self) -> Option<Point> {
        let row = self.points.iter().map(|p| p.row).max()?;
        let column = self.points.iter().map(|p| p.column).max()?;
        Some(Point { row, column })
    }

    /// A new set where every point sitting on the set's edge along `axis`
    /// also appears shifted by `delta`. The edge is the maximum coordinate
    /// when `delta` is positive, the minimum when negative. Shifts that
    /// would move a coordinate below zero are dropped.
    pub fn extend_edge(&self, axis: Axis, delta: isize) -> Self {
        let Some(edge) = self.edge(axis, delta) else {
            return self.clone();
        };
        let mut points = self.points.clone();
        for point in &self.points {
            if point.along(axis) == edge {
                if let Some(shifted) = point.offset(axis, delta) {
                    points.insert(shifted);
                }
            }
        }
        Self { points }
    }

    /// A new set with every point on the set's edge along `axis` removed.
    /// As with [`extend_edge`](Self::extend_edge), positive `delta` targets
    /// the maximum edge and negative the minimum.
    pub fn shrink_edge(&self, axis: Axis, delta: isize) -> Self {
        let Some(edge) = self.edge(axis, delta) else {
            return self.clone();
        };
        self.filter(|p| p.along(axis) != edge)
    }

    fn edge(&self, axis: Axis, delta: isize) -> Option<usize> {
        let corner = if delta > 0 { self.max()? } else { self.min()? };
        Some(corner.along(axis))
    }

    /// Iterate members in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Members sorted row-major. The stable conversion used wherever
    /// enumeration order matters (commit logs, tests).
    pub fn to_vec(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.points.iter().copied().collect();
        points.sort();
        points
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
