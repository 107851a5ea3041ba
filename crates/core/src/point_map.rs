//! Immutable sparse map from cell coordinates to values.
//!
//! Follows the same discipline as [`PointSet`](crate::point_set::PointSet):
//! every mutating operation returns a new map. Used for clipboard contents
//! and per-cell dependency sets.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A sparse map with unique [`Point`] keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMap<V> {
    entries: FxHashMap<Point, V>,
}

impl<V> Default for PointMap<V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<V> PointMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, point: Point) -> bool {
        self.entries.contains_key(&point)
    }

    pub fn get(&self, point: Point) -> Option<&V> {
        self.entries.get(&point)
    }

    /// Component-wise minimum over all keys. `None` for the empty map.
    pub fn min_key(&self) -> Option<Point> {
        let row = self.entries.keys().map(|p| p.row).min()?;
        let column = self.entries.keys().map(|p| p.column).min()?;
        Some(Point { row, column })
    }

    /// Component-wise maximum over all keys. `None` for the empty map.
    pub fn max_key(&self) -> Option<Point> {
        let row = self.entries.keys().map(|p| p.row).max()?;
        let column = self.entries.keys().map(|p| p.column).max()?;
        Some(Point { row, column })
    }

    /// Entries sorted row-major by key. Bulk operations over the map
    /// (clipboard pastes, commit logs) fold over this order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &V)> {
        let mut entries: Vec<(Point, &V)> = self.entries.iter().map(|(p, v)| (*p, v)).collect();
        entries.sort_by_key(|(p, _)| *p);
        entries.into_iter()
    }
}

impl<V: Clone> PointMap<V> {
    /// A new map with `point` bound to `value`.
    pub fn set(&self, point: Point, value: V) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(point, value);
        Self { entries }
    }

    /// A new map with `point` unbound.
    pub fn remove(&self, point: Point) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(&point);
        Self { entries }
    }

    /// A new map keeping only the entries the predicate accepts.
    pub fn filter(&self, pred: impl Fn(&V, Point) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|&(&point, value)| pred(value, point))
                .map(|(&point, value)| (point, value.clone()))
                .collect(),
        }
    }

    /// A new map with every value transformed, keys unchanged.
    pub fn map_values<U>(&self, f: impl Fn(&V) -> U) -> PointMap<U> {
        PointMap {
            entries: self.entries.iter().map(|(p, v)| (*p, f(v))).collect(),
        }
    }
}

impl<V> FromIterator<(Point, V)> for PointMap<V> {
    fn from_iter<I: IntoIterator<Item = (Point, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
