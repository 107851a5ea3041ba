//! Pure state transitions.
//!
//! Every action takes the current [`StoreState`] plus event-specific
//! arguments and returns either a [`StatePatch`] for the embedder to merge,
//! or `None` when the event has no observable effect (vetoed edit, no active
//! cell, out-of-bounds target, redundant layout report, empty paste). The
//! engine holds no state of its own between calls.

use gridstate_core::{Axis, Point, PointMap, PointSet};

use crate::cell::CellBase;
use crate::matrix::{self, Matrix};
use crate::state::{
    CellChange, ColumnDimensions, Dimensions, Mode, RowDimensions, StatePatch, StoreState,
};

/// The cell currently addressed by `active`, if any.
pub(crate) fn get_active<C: CellBase>(state: &StoreState<C>) -> Option<&C> {
    let active = state.active?;
    state.data.get(active.row, active.column)
}

pub(crate) fn is_active_read_only<C: CellBase>(state: &StoreState<C>) -> bool {
    get_active(state).map(CellBase::read_only).unwrap_or(false)
}

/// Replace the grid wholesale, reconciling everything that addresses into
/// it: `active` is nulled if out of bounds, `selected` and the `bindings`
/// keys and point sets are filtered to the new extent.
pub fn set_data<C: CellBase>(state: &StoreState<C>, data: Matrix<C>) -> Option<StatePatch<C>> {
    let active = state
        .active
        .filter(|point| data.has(point.row, point.column));
    let selected = state.selected.filter(|point| data.has(point.row, point.column));
    let bindings = state
        .bindings
        .filter(|_, point| data.has(point.row, point.column))
        .map_values(|points| points.filter(|point| data.has(point.row, point.column)));
    Some(StatePatch {
        data: Some(data),
        active: Some(active),
        selected: Some(selected),
        bindings: Some(bindings),
        ..Default::default()
    })
}

/// Shift-click: select the inclusive rectangle between the active cell and
/// `point`. No-op without an active cell or when `point` is the active cell.
pub fn select<C: CellBase>(state: &StoreState<C>, point: Point) -> Option<StatePatch<C>> {
    let active = state.active?;
    if point == active {
        return None;
    }
    Some(StatePatch {
        selected: Some(matrix::inclusive_range(point, active).into_iter().collect()),
        mode: Some(Mode::View),
        ..Default::default()
    })
}

/// Click-to-focus: make `point` the active cell and the sole selection.
/// Clicking the cell that is already active starts editing it.
pub fn activate<C: CellBase>(state: &StoreState<C>, point: Point) -> Option<StatePatch<C>> {
    let mode = if state.active == Some(point) {
        Mode::Edit
    } else {
        Mode::View
    };
    Some(StatePatch {
        selected: Some([point].into_iter().collect()),
        active: Some(Some(point)),
        mode: Some(mode),
        ..Default::default()
    })
}

/// Write `cell` at `active`, recording the edit and replacing the cell's
/// dependency set. Vetoed while the active cell is read-only.
pub fn set_cell_data<C: CellBase>(
    state: &StoreState<C>,
    active: Point,
    cell: C,
    bindings: &[Point],
) -> Option<StatePatch<C>> {
    if is_active_read_only(state) {
        return None;
    }
    Some(StatePatch {
        mode: Some(Mode::Edit),
        data: Some(state.data.set(active.row, active.column, cell)),
        last_changed: Some(Some(active)),
        bindings: Some(
            state
                .bindings
                .set(active, bindings.iter().copied().collect()),
        ),
        ..Default::default()
    })
}

/// Merge layout metadata for one cell's row and column. No-op when both
/// stored halves already match, so redundant layout reports cause no churn.
pub fn set_cell_dimensions<C: CellBase>(
    state: &StoreState<C>,
    point: Point,
    dimensions: Dimensions,
) -> Option<StatePatch<C>> {
    let prev_row = state.row_dimensions.get(&point.row);
    let prev_column = state.column_dimensions.get(&point.column);
    if let (Some(row), Some(column)) = (prev_row, prev_column) {
        if row.top == dimensions.top
            && row.height == dimensions.height
            && column.left == dimensions.left
            && column.width == dimensions.width
        {
            return None;
        }
    }
    let mut row_dimensions = state.row_dimensions.clone();
    row_dimensions.insert(
        point.row,
        RowDimensions {
            top: dimensions.top,
            height: dimensions.height,
        },
    );
    let mut column_dimensions = state.column_dimensions.clone();
    column_dimensions.insert(
        point.column,
        ColumnDimensions {
            left: dimensions.left,
            width: dimensions.width,
        },
    );
    Some(StatePatch {
        row_dimensions: Some(row_dimensions),
        column_dimensions: Some(column_dimensions),
        ..Default::default()
    })
}

/// Capture every selected cell's current value as the clipboard. An absent
/// cell is captured as an empty cell, keeping the clipboard's minimum key at
/// the selection's top-left corner.
pub fn copy<C: CellBase>(state: &StoreState<C>) -> Option<StatePatch<C>> {
    let copied: PointMap<C> = state
        .selected
        .iter()
        .map(|point| {
            let cell = state
                .data
                .get(point.row, point.column)
                .cloned()
                .unwrap_or_else(|| C::from_text(""));
            (point, cell)
        })
        .collect();
    Some(StatePatch {
        copied: Some(copied),
        cut: Some(false),
        has_pasted: Some(false),
        ..Default::default()
    })
}

/// Like [`copy`], but the following paste will clear the source cells.
pub fn cut<C: CellBase>(state: &StoreState<C>) -> Option<StatePatch<C>> {
    let mut patch = copy(state)?;
    patch.cut = Some(true);
    Some(patch)
}

/// Paste clipboard text at the active cell.
///
/// The text is parsed into a grid; its minimum coordinate is the paste's
/// local origin, and every entry lands translated by `active - origin`. The
/// grid is padded downward if the paste exceeds the current row count.
/// After a cut, the original source cells are cleared, each contributing a
/// removal record interleaved before the corresponding write in the parse
/// order (row-major). Destinations shallow-merge the pasted cell over the
/// existing one; entries falling outside the padded grid contribute only
/// their removal half.
pub fn paste<C: CellBase>(state: &StoreState<C>, text: &str) -> Option<StatePatch<C>> {
    if text.is_empty() {
        return None;
    }
    let active = state.active?;

    let copied_matrix = Matrix::split(text, C::from_text);
    let copied = copied_matrix.to_point_map();
    let origin = copied.min_key()?;
    let source_origin = state.copied.min_key();

    let required_rows = active.row + copied_matrix.size().rows;
    let mut data = state.data.pad(required_rows);
    let mut selected = PointSet::new();
    let mut changes: Vec<CellChange<C>> = Vec::new();

    for (point, value) in copied.iter() {
        if state.cut {
            if let Some(source_origin) = source_origin {
                let source = Point {
                    row: source_origin.row + (point.row - origin.row),
                    column: source_origin.column + (point.column - origin.column),
                };
                data = data.unset(source.row, source.column);
                changes.push(CellChange {
                    prev_cell: Some(value.clone()),
                    next_cell: None,
                });
            }
        }

        let target = Point {
            row: active.row + (point.row - origin.row),
            column: active.column + (point.column - origin.column),
        };
        if !data.has(target.row, target.column) {
            continue;
        }

        let prev = data.get(target.row, target.column).cloned();
        let next = value.merge_over(prev.as_ref());
        changes.push(CellChange {
            prev_cell: prev,
            next_cell: Some(next.clone()),
        });
        data = data.set(target.row, target.column, next);
        selected = selected.add(target);
    }

    Some(StatePatch {
        data: Some(data),
        selected: Some(selected),
        cut: Some(false),
        has_pasted: Some(true),
        mode: Some(Mode::View),
        last_commit: Some(changes),
        ..Default::default()
    })
}

/// Enter edit mode. No-op without an active cell; vetoed while the active
/// cell is read-only.
pub fn edit<C: CellBase>(state: &StoreState<C>) -> Option<StatePatch<C>> {
    state.active?;
    if is_active_read_only(state) {
        return None;
    }
    Some(StatePatch {
        mode: Some(Mode::Edit),
        ..Default::default()
    })
}

/// Leave edit mode.
pub fn view<C: CellBase>(_state: &StoreState<C>) -> Option<StatePatch<C>> {
    Some(StatePatch {
        mode: Some(Mode::View),
        ..Default::default()
    })
}

/// Empty every selected cell's value, preserving its other attributes, and
/// log one change record per cell. No-op without an active cell; vetoed
/// while the active cell is read-only.
pub fn clear<C: CellBase>(state: &StoreState<C>) -> Option<StatePatch<C>> {
    state.active?;
    if is_active_read_only(state) {
        return None;
    }

    let mut data = state.data.clone();
    let mut changes = Vec::new();
    for point in state.selected.to_vec() {
        let prev = state.data.get(point.row, point.column).cloned();
        let next = prev
            .as_ref()
            .map(CellBase::cleared)
            .unwrap_or_else(|| C::from_text(""));
        changes.push(CellChange {
            prev_cell: prev,
            next_cell: Some(next.clone()),
        });
        data = data.set(point.row, point.column, next);
    }

    Some(StatePatch {
        data: Some(data),
        last_commit: Some(changes),
        ..Default::default()
    })
}

/// Clear the active cell. The selection is untouched.
pub fn blur<C: CellBase>(_state: &StoreState<C>) -> Option<StatePatch<C>> {
    Some(StatePatch {
        active: Some(None),
        ..Default::default()
    })
}

/// Record a batch of changes without touching the grid. For callers that
/// compute their own mutations but still want them in the change log.
pub fn commit<C: CellBase>(changes: Vec<CellChange<C>>) -> Option<StatePatch<C>> {
    Some(StatePatch {
        last_commit: Some(changes),
        ..Default::default()
    })
}

/// Move the active cell by a delta. An out-of-bounds destination leaves the
/// position alone but still forces view mode; an in-bounds move collapses
/// the selection onto the destination.
pub fn go<C: CellBase>(
    state: &StoreState<C>,
    row_delta: isize,
    column_delta: isize,
) -> Option<StatePatch<C>> {
    let active = state.active?;
    let next = active
        .row
        .checked_add_signed(row_delta)
        .zip(active.column.checked_add_signed(column_delta))
        .map(|(row, column)| Point { row, column });
    let next = match next {
        Some(point) if state.data.has(point.row, point.column) => point,
        _ => {
            return Some(StatePatch {
                mode: Some(Mode::View),
                ..Default::default()
            })
        }
    };
    Some(StatePatch {
        active: Some(Some(next)),
        selected: Some([next].into_iter().collect()),
        mode: Some(Mode::View),
        ..Default::default()
    })
}

/// Jump to a grid edge. Each direction is -1 (toward index 0), 0 (hold this
/// axis), or +1 (toward the last index); the exact distance is computed per
/// axis and delegated to [`go`].
pub fn go_to_end<C: CellBase>(
    state: &StoreState<C>,
    row_direction: isize,
    column_direction: isize,
) -> Option<StatePatch<C>> {
    let active = state.active?;
    let size = state.data.size();

    let distance = |direction: isize, current: usize, last: usize| -> isize {
        match direction {
            1 => (last - current) as isize,
            -1 => -(current as isize),
            _ => 0,
        }
    };

    go(
        state,
        distance(row_direction, active.row, size.rows.saturating_sub(1)),
        distance(column_direction, active.column, size.columns.saturating_sub(1)),
    )
}

/// ctrl+shift toward the start of `axis`: walk the near edge of the
/// selection out to index 0, then walk the far edge in to the active cell.
/// Edge-by-edge stepping, O(distance moved); grid extents stay small enough
/// that this beats the bookkeeping of a direct bounding-box update.
pub fn grow_smaller<C: CellBase>(state: &StoreState<C>, axis: Axis) -> Option<StatePatch<C>> {
    let active = state.active?;
    let min_selected = state.selected.min()?.along(axis);
    let max_selected = state.selected.max()?.along(axis);
    let active_index = active.along(axis);

    let mut selected = state.selected.clone();
    for _ in 0..min_selected {
        selected = selected.extend_edge(axis, -1);
    }
    for _ in 0..max_selected.saturating_sub(active_index) {
        selected = selected.shrink_edge(axis, 1);
    }

    let data = &state.data;
    Some(StatePatch {
        selected: Some(selected.filter(|point| data.has(point.row, point.column))),
        ..Default::default()
    })
}

/// ctrl+shift toward the end of `axis`: the mirror of [`grow_smaller`].
/// Walks the far edge out to the last index, then the near edge in to the
/// active cell.
pub fn grow_larger<C: CellBase>(state: &StoreState<C>, axis: Axis) -> Option<StatePatch<C>> {
    let active = state.active?;
    let min_selected = state.selected.min()?.along(axis);
    let max_selected = state.selected.max()?.along(axis);
    let active_index = active.along(axis);
    let last = state.data.size().along(axis).saturating_sub(1);

    let mut selected = state.selected.clone();
    for _ in 0..last.saturating_sub(max_selected) {
        selected = selected.extend_edge(axis, 1);
    }
    for _ in 0..active_index.saturating_sub(min_selected) {
        selected = selected.shrink_edge(axis, -1);
    }

    let data = &state.data;
    Some(StatePatch {
        selected: Some(selected.filter(|point| data.has(point.row, point.column))),
        ..Default::default()
    })
}

/// shift+Arrow: single-step selection resize. If the cell adjacent to the
/// active cell on the side opposite `delta` is selected, the selection is
/// shrinking back over the active cell; otherwise it extends outward.
pub fn modify_edge<C: CellBase>(
    state: &StoreState<C>,
    axis: Axis,
    delta: isize,
) -> Option<StatePatch<C>> {
    let active = state.active?;

    let shrinking = active
        .offset(axis, -delta)
        .map(|opposite| state.selected.has(opposite))
        .unwrap_or(false);
    let selected = if shrinking {
        state.selected.shrink_edge(axis, -delta)
    } else {
        state.selected.extend_edge(axis, delta)
    };

    let data = &state.data;
    Some(StatePatch {
        selected: Some(selected.filter(|point| data.has(point.row, point.column))),
        ..Default::default()
    })
}

/// Pointer drag-selection began.
pub fn drag_start<C: CellBase>(_state: &StoreState<C>) -> Option<StatePatch<C>> {
    Some(StatePatch {
        dragging: Some(true),
        ..Default::default()
    })
}

/// Pointer drag-selection ended.
pub fn drag_end<C: CellBase>(_state: &StoreState<C>) -> Option<StatePatch<C>> {
    Some(StatePatch {
        dragging: Some(false),
        ..Default::default()
    })
}
