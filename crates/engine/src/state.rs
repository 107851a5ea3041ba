//! The aggregate state the engine transitions, and the partial patch
//! actions return.
//!
//! The embedding layer owns the authoritative [`StoreState`]. Actions never
//! mutate it; they return a [`StatePatch`] the embedder merges in (or `None`
//! for a complete no-op).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use gridstate_core::{Point, PointMap, PointSet};

use crate::cell::CellBase;
use crate::matrix::Matrix;

/// Whether the active cell is being navigated or typed into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    View,
    Edit,
}

/// Layout metadata reported by the presentation layer for one cell; split
/// into its row and column halves for storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowDimensions {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnDimensions {
    pub left: f64,
    pub width: f64,
}

/// One cell's value transition, emitted in commit logs for callers that
/// implement change tracking or undo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellChange<C> {
    pub prev_cell: Option<C>,
    pub next_cell: Option<C>,
}

/// The full editing state for one grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreState<C> {
    /// Authoritative cell contents.
    pub data: Matrix<C>,
    /// Highlighted cells.
    pub selected: PointSet,
    /// The focused cell driving navigation and editing.
    pub active: Option<Point>,
    pub mode: Mode,
    /// Clipboard contents captured by the last copy/cut.
    pub copied: PointMap<C>,
    /// Whether the clipboard originated from a cut.
    pub cut: bool,
    /// Whether the last clipboard interaction was a paste.
    pub has_pasted: bool,
    /// Per-cell dependency sets, maintained for formula-aware embedders.
    pub bindings: PointMap<PointSet>,
    /// Layout caches, opaque to selection logic.
    pub row_dimensions: FxHashMap<usize, RowDimensions>,
    pub column_dimensions: FxHashMap<usize, ColumnDimensions>,
    /// Last cell written by a direct edit.
    pub last_changed: Option<Point>,
    /// Most recent batch of cell changes, for change logging.
    pub last_commit: Option<Vec<CellChange<C>>>,
    /// Pointer drag-selection in progress.
    pub dragging: bool,
}

impl<C: CellBase> StoreState<C> {
    /// Fresh state over the given grid: nothing selected, nothing active,
    /// view mode, empty clipboard.
    pub fn new(data: Matrix<C>) -> Self {
        Self {
            data,
            selected: PointSet::new(),
            active: None,
            mode: Mode::View,
            copied: PointMap::new(),
            cut: false,
            has_pasted: false,
            bindings: PointMap::new(),
            row_dimensions: FxHashMap::default(),
            column_dimensions: FxHashMap::default(),
            last_changed: None,
            last_commit: None,
            dragging: false,
        }
    }
}

/// A partial state update. Every field is optional; `None` fields leave the
/// corresponding state untouched. `active` and `last_changed` are doubly
/// optional so a patch can explicitly null them.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePatch<C> {
    pub data: Option<Matrix<C>>,
    pub selected: Option<PointSet>,
    pub active: Option<Option<Point>>,
    pub mode: Option<Mode>,
    pub copied: Option<PointMap<C>>,
    pub cut: Option<bool>,
    pub has_pasted: Option<bool>,
    pub bindings: Option<PointMap<PointSet>>,
    pub row_dimensions: Option<FxHashMap<usize, RowDimensions>>,
    pub column_dimensions: Option<FxHashMap<usize, ColumnDimensions>>,
    pub last_changed: Option<Option<Point>>,
    pub last_commit: Option<Vec<CellChange<C>>>,
    pub dragging: Option<bool>,
}

impl<C> Default for StatePatch<C> {
    fn default() -> Self {
        Self {
            data: None,
            selected: None,
            active: None,
            mode: None,
            copied: None,
            cut: None,
            has_pasted: None,
            bindings: None,
            row_dimensions: None,
            column_dimensions: None,
            last_changed: None,
            last_commit: None,
            dragging: None,
        }
    }
}

impl<C: CellBase> StatePatch<C> {
    /// Shallow-merge this patch into `state`, field by field.
    pub fn apply(self, state: &mut StoreState<C>) {
        if let Some(data) = self.data {
            state.data = data;
        }
        if let Some(selected) = self.selected {
            state.selected = selected;
        }
        if let Some(active) = self.active {
            state.active = active;
        }
        if let Some(mode) = self.mode {
            state.mode = mode;
        }
        if let Some(copied) = self.copied {
            state.copied = copied;
        }
        if let Some(cut) = self.cut {
            state.cut = cut;
        }
        if let Some(has_pasted) = self.has_pasted {
            state.has_pasted = has_pasted;
        }
        if let Some(bindings) = self.bindings {
            state.bindings = bindings;
        }
        if let Some(row_dimensions) = self.row_dimensions {
            state.row_dimensions = row_dimensions;
        }
        if let Some(column_dimensions) = self.column_dimensions {
            state.column_dimensions = column_dimensions;
        }
        if let Some(last_changed) = self.last_changed {
            state.last_changed = last_changed;
        }
        if let Some(last_commit) = self.last_commit {
            state.last_commit = Some(last_commit);
        }
        if let Some(dragging) = self.dragging {
            state.dragging = dragging;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_new_state_matches_initial_defaults() {
        let state: StoreState<Cell> = StoreState::new(Matrix::new(2, 2));
        assert!(state.selected.is_empty());
        assert_eq!(state.active, None);
        assert_eq!(state.mode, Mode::View);
        assert!(state.copied.is_empty());
        assert!(!state.cut);
        assert!(!state.has_pasted);
        assert!(state.bindings.is_empty());
        assert_eq!(state.last_changed, None);
        assert_eq!(state.last_commit, None);
        assert!(!state.dragging);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut state: StoreState<Cell> = StoreState::new(Matrix::new(2, 2));
        state.active = Some(Point::new(1, 1));

        let patch = StatePatch {
            mode: Some(Mode::Edit),
            ..Default::default()
        };
        patch.apply(&mut state);

        assert_eq!(state.mode, Mode::Edit);
        // Untouched fields survive the merge.
        assert_eq!(state.active, Some(Point::new(1, 1)));
    }

    #[test]
    fn test_patch_can_null_active() {
        let mut state: StoreState<Cell> = StoreState::new(Matrix::new(2, 2));
        state.active = Some(Point::new(0, 0));

        let patch: StatePatch<Cell> = StatePatch {
            active: Some(None),
            ..Default::default()
        };
        patch.apply(&mut state);

        assert_eq!(state.active, None);
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&Mode::View).unwrap(), r#""view""#);
        assert_eq!(serde_json::to_string(&Mode::Edit).unwrap(), r#""edit""#);
    }
}
