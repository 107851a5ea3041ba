use serde::{Deserialize, Serialize};

/// A cell coordinate: row and column, both zero-based.
///
/// Points compare by value, and order row-major (row first, then column),
/// which is the enumeration order used everywhere a stable order matters.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The coordinate along the given axis.
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }

    /// This point with the coordinate along `axis` replaced by `index`.
    pub fn with(&self, axis: Axis, index: usize) -> Self {
        match axis {
            Axis::Row => Self { row: index, ..*self },
            Axis::Column => Self { column: index, ..*self },
        }
    }

    /// This point shifted by `delta` along `axis`, or `None` if the shift
    /// would move the coordinate below zero.
    pub fn offset(&self, axis: Axis, delta: isize) -> Option<Self> {
        let shifted = self.along(axis).checked_add_signed(delta)?;
        Some(self.with(axis, shifted))
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// One of the two grid axes. Selects which coordinate of a [`Point`] an
/// edge-growth or navigation operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Row,
    Column,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_orders_row_major() {
        let mut points = vec![Point::new(1, 0), Point::new(0, 2), Point::new(0, 1)];
        points.sort();
        assert_eq!(
            points,
            vec![Point::new(0, 1), Point::new(0, 2), Point::new(1, 0)]
        );
    }

    #[test]
    fn test_along_and_with() {
        let p = Point::new(3, 7);
        assert_eq!(p.along(Axis::Row), 3);
        assert_eq!(p.along(Axis::Column), 7);
        assert_eq!(p.with(Axis::Row, 0), Point::new(0, 7));
        assert_eq!(p.with(Axis::Column, 0), Point::new(3, 0));
    }

    #[test]
    fn test_offset_underflow_is_none() {
        let p = Point::new(0, 2);
        assert_eq!(p.offset(Axis::Row, -1), None);
        assert_eq!(p.offset(Axis::Column, -1), Some(Point::new(0, 1)));
        assert_eq!(p.offset(Axis::Row, 2), Some(Point::new(2, 2)));
    }

    #[test]
    fn test_point_serde_round_trip() {
        let p = Point::new(4, 9);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"row":4,"column":9}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
