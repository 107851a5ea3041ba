//! Rectangular grid of optional cells, plus the text (de)serialization used
//! for clipboard interchange.
//!
//! A matrix is an array of rows; absent cells are `None`. All rows share one
//! width, and constructors normalize ragged input by padding short rows.
//! Like the coordinate containers, mutating operations return a new matrix.

use serde::{Deserialize, Serialize};

use gridstate_core::{Axis, Point, PointMap};

/// Grid dimensions derived from the row/column vectors, never stored
/// separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub rows: usize,
    pub columns: usize,
}

impl Size {
    /// The extent along the given axis.
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.columns,
        }
    }
}

/// A rectangular array of rows of optional cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    rows: Vec<Vec<Option<T>>>,
}

impl<T> Matrix<T> {
    /// An empty matrix of the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| (0..columns).map(|_| None).collect())
                .collect(),
        }
    }

    /// Build a matrix from rows, padding short rows to the longest width so
    /// the rectangular invariant holds.
    pub fn from_rows(mut rows: Vec<Vec<Option<T>>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            while row.len() < columns {
                row.push(None);
            }
        }
        Self { rows }
    }

    pub fn size(&self) -> Size {
        Size {
            rows: self.rows.len(),
            columns: self.rows.first().map(Vec::len).unwrap_or(0),
        }
    }

    /// Whether `(row, column)` addresses a cell inside the grid.
    pub fn has(&self, row: usize, column: usize) -> bool {
        let size = self.size();
        row < size.rows && column < size.columns
    }

    /// The cell at `(row, column)`, or `None` if absent or out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row)?.get(column)?.as_ref()
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl<T: Clone> Matrix<T> {
    /// A new matrix with `value` at `(row, column)`. Only the touched row
    /// differs from the receiver; an out-of-bounds write returns the matrix
    /// unchanged.
    pub fn set(&self, row: usize, column: usize, value: T) -> Self {
        self.replace(row, column, Some(value))
    }

    /// A new matrix with the cell at `(row, column)` absent.
    pub fn unset(&self, row: usize, column: usize) -> Self {
        self.replace(row, column, None)
    }

    fn replace(&self, row: usize, column: usize, value: Option<T>) -> Self {
        if !self.has(row, column) {
            return self.clone();
        }
        let mut rows = self.rows.clone();
        rows[row][column] = value;
        Self { rows }
    }

    /// A new matrix grown downward with empty rows until it has at least
    /// `required_rows` rows. Never shrinks.
    pub fn pad(&self, required_rows: usize) -> Self {
        let size = self.size();
        if required_rows <= size.rows {
            return self.clone();
        }
        let mut rows = self.rows.clone();
        for _ in size.rows..required_rows {
            rows.push((0..size.columns).map(|_| None).collect());
        }
        Self { rows }
    }

    /// Every present cell keyed by its coordinates.
    pub fn to_point_map(&self) -> PointMap<T> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.iter().enumerate().filter_map(move |(column, cell)| {
                    cell.as_ref().map(|cell| (Point { row, column }, cell.clone()))
                })
            })
            .collect()
    }

    /// Parse clipboard text into a matrix: rows split on newlines, cells on
    /// tabs, each raw fragment passed through `factory`.
    pub fn split(text: &str, factory: impl Fn(&str) -> T) -> Self {
        Self::from_rows(
            text.split('\n')
                .map(|line| {
                    line.split('\t')
                        .map(|fragment| Some(factory(fragment)))
                        .collect()
                })
                .collect(),
        )
    }

    /// Serialize to the tab/newline clipboard format [`split`](Self::split)
    /// consumes. Absent cells become empty fragments.
    pub fn join(&self, f: impl Fn(&T) -> String) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(&f).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Every point in the rectangle spanned by `a` and `b`, inclusive of both
/// corners, in row-major order. The corners may be given in any order.
pub fn inclusive_range(a: Point, b: Point) -> Vec<Point> {
    let (top, bottom) = (a.row.min(b.row), a.row.max(b.row));
    let (left, right) = (a.column.min(b.column), a.column.max(b.column));
    (top..=bottom)
        .flat_map(|row| (left..=right).map(move |column| Point { row, column }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_empty_and_rectangular() {
        let m: Matrix<i32> = Matrix::new(2, 3);
        assert_eq!(m.size(), Size { rows: 2, columns: 3 });
        assert!(m.has(1, 2));
        assert!(!m.has(2, 0));
        assert!(!m.has(0, 3));
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn test_from_rows_pads_ragged_input() {
        let m = Matrix::from_rows(vec![vec![Some(1)], vec![Some(2), Some(3)]]);
        assert_eq!(m.size(), Size { rows: 2, columns: 2 });
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 1), Some(&3));
    }

    #[test]
    fn test_set_leaves_receiver_untouched() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        let written = m.set(1, 1, 7);
        assert_eq!(m.get(1, 1), None);
        assert_eq!(written.get(1, 1), Some(&7));
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        let written = m.set(5, 5, 7);
        assert_eq!(written, m);
    }

    #[test]
    fn test_unset_clears_cell() {
        let m = Matrix::new(1, 1).set(0, 0, 7);
        assert_eq!(m.unset(0, 0).get(0, 0), None);
    }

    #[test]
    fn test_pad_grows_down_never_shrinks() {
        let m: Matrix<i32> = Matrix::new(2, 3);
        let padded = m.pad(4);
        assert_eq!(padded.size(), Size { rows: 4, columns: 3 });
        assert_eq!(m.pad(1).size(), Size { rows: 2, columns: 3 });
    }

    #[test]
    fn test_inclusive_range_covers_both_corners() {
        let range = inclusive_range(Point::new(2, 3), Point::new(0, 1));
        assert_eq!(range.len(), 9);
        assert_eq!(range[0], Point::new(0, 1));
        assert_eq!(range[8], Point::new(2, 3));
        assert!(range.contains(&Point::new(1, 2)));
    }

    #[test]
    fn test_inclusive_range_single_point() {
        let p = Point::new(4, 4);
        assert_eq!(inclusive_range(p, p), vec![p]);
    }

    #[test]
    fn test_to_point_map_skips_absent_cells() {
        let m = Matrix::new(2, 2).set(0, 1, "a").set(1, 0, "b");
        let map = m.to_point_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Point::new(0, 1)), Some(&"a"));
        assert_eq!(map.get(Point::new(1, 0)), Some(&"b"));
        assert!(!map.has(Point::new(0, 0)));
    }

    #[test]
    fn test_split_parses_tabs_and_newlines() {
        let m = Matrix::split("a\tb\nc", str::to_owned);
        assert_eq!(m.size(), Size { rows: 2, columns: 2 });
        assert_eq!(m.get(0, 1), Some(&"b".to_string()));
        assert_eq!(m.get(1, 0), Some(&"c".to_string()));
        // Ragged second row was padded.
        assert_eq!(m.get(1, 1), None);
    }

    #[test]
    fn test_join_round_trips_split() {
        let text = "a\tb\nc\td";
        let m = Matrix::split(text, str::to_owned);
        assert_eq!(m.join(Clone::clone), text);
    }
}
