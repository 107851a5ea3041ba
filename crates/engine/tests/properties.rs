//! Property tests for the navigation and range primitives.

use proptest::prelude::*;

use gridstate_core::{Axis, Point};
use gridstate_engine::actions;
use gridstate_engine::matrix::inclusive_range;
use gridstate_engine::{Cell, Matrix, StoreState};

fn store_with_active(rows: usize, columns: usize, active: Point) -> StoreState<Cell> {
    let mut state = StoreState::new(Matrix::new(rows, columns));
    actions::activate(&state, active)
        .expect("activate always patches")
        .apply(&mut state);
    state
}

fn dispatch<F>(state: &mut StoreState<Cell>, action: F)
where
    F: FnOnce(&StoreState<Cell>) -> Option<gridstate_engine::StatePatch<Cell>>,
{
    if let Some(patch) = action(state) {
        patch.apply(state);
    }
}

proptest! {
    #[test]
    fn inclusive_range_has_exact_cardinality(
        r1 in 0usize..20,
        c1 in 0usize..20,
        r2 in 0usize..20,
        c2 in 0usize..20,
    ) {
        let a = Point::new(r1, c1);
        let b = Point::new(r2, c2);
        let range = inclusive_range(a, b);

        prop_assert_eq!(range.len(), (r1.abs_diff(r2) + 1) * (c1.abs_diff(c2) + 1));
        prop_assert!(range.contains(&a));
        prop_assert!(range.contains(&b));
    }

    #[test]
    fn go_to_end_reaches_the_exact_edge(
        rows in 1usize..10,
        columns in 1usize..10,
        row_seed in 0usize..10,
        column_seed in 0usize..10,
    ) {
        let active = Point::new(row_seed % rows, column_seed % columns);
        let state = store_with_active(rows, columns, active);

        let mut up = state.clone();
        dispatch(&mut up, |s| actions::go_to_end(s, -1, 0));
        prop_assert_eq!(up.active, Some(Point::new(0, active.column)));

        let mut down = state.clone();
        dispatch(&mut down, |s| actions::go_to_end(s, 1, 0));
        prop_assert_eq!(down.active, Some(Point::new(rows - 1, active.column)));

        let mut right = state.clone();
        dispatch(&mut right, |s| actions::go_to_end(s, 0, 1));
        prop_assert_eq!(right.active, Some(Point::new(active.row, columns - 1)));

        // Direction zero holds both axes.
        let mut hold = state.clone();
        dispatch(&mut hold, |s| actions::go_to_end(s, 0, 0));
        prop_assert_eq!(hold.active, Some(active));
    }

    #[test]
    fn grow_round_trip_is_stable(
        rows in 1usize..8,
        columns in 1usize..8,
        row_seed in 0usize..8,
        column_seed in 0usize..8,
    ) {
        let active = Point::new(row_seed % rows, column_seed % columns);
        let mut state = store_with_active(rows, columns, active);

        // One larger/smaller round trip pins the selection; repeating the
        // pair must not move it again, on either axis.
        for axis in [Axis::Row, Axis::Column] {
            dispatch(&mut state, |s| actions::grow_larger(s, axis));
            dispatch(&mut state, |s| actions::grow_smaller(s, axis));
            let first = state.selected.to_vec();

            dispatch(&mut state, |s| actions::grow_larger(s, axis));
            dispatch(&mut state, |s| actions::grow_smaller(s, axis));
            prop_assert_eq!(state.selected.to_vec(), first);
        }
    }

    #[test]
    fn grow_results_stay_in_bounds(
        rows in 1usize..8,
        columns in 1usize..8,
        row_seed in 0usize..8,
        column_seed in 0usize..8,
    ) {
        let active = Point::new(row_seed % rows, column_seed % columns);
        let mut state = store_with_active(rows, columns, active);

        dispatch(&mut state, |s| actions::grow_larger(s, Axis::Row));
        dispatch(&mut state, |s| actions::grow_smaller(s, Axis::Column));

        let data = state.data.clone();
        prop_assert!(state
            .selected
            .iter()
            .all(|point| data.has(point.row, point.column)));
        prop_assert!(state.selected.has(active));
    }
}
