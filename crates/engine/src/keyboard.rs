//! Keyboard dispatch: fixed handler tables selected by mode and modifier
//! combination.
//!
//! The tables are process-wide constants built once; dispatch is a pure
//! lookup. Edit mode overrides every modifier; after that the priority is
//! shift+meta, ctrl+shift, shift, ctrl, meta, then the unmodified table. A
//! key absent from the selected table makes the whole event a no-op.

use gridstate_core::Axis;

use crate::actions;
use crate::cell::CellBase;
use crate::state::{Mode, StatePatch, StoreState};

/// Named keys the engine reacts to. Character-producing keys go through
/// [`key_press`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Enter,
    Backspace,
    Escape,
}

impl Key {
    /// Map a DOM-style key name to a named key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Tab" => Some(Self::Tab),
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Modifier flags carried by a raw input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

/// A raw key-down event reduced to what dispatch needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// One dispatchable handler: the action plus its bound arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandler {
    Go { rows: isize, columns: isize },
    GoToEnd { rows: isize, columns: isize },
    GrowSmaller(Axis),
    GrowLarger(Axis),
    ModifyEdge(Axis, isize),
    Edit,
    View,
    Clear,
    Blur,
}

impl KeyHandler {
    /// Run the bound action against the current state.
    pub fn apply<C: CellBase>(&self, state: &StoreState<C>) -> Option<StatePatch<C>> {
        match *self {
            Self::Go { rows, columns } => actions::go(state, rows, columns),
            Self::GoToEnd { rows, columns } => actions::go_to_end(state, rows, columns),
            Self::GrowSmaller(axis) => actions::grow_smaller(state, axis),
            Self::GrowLarger(axis) => actions::grow_larger(state, axis),
            Self::ModifyEdge(axis, delta) => actions::modify_edge(state, axis, delta),
            Self::Edit => actions::edit(state),
            Self::View => actions::view(state),
            Self::Clear => actions::clear(state),
            Self::Blur => actions::blur(state),
        }
    }
}

static KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[
    (Key::ArrowUp, KeyHandler::Go { rows: -1, columns: 0 }),
    (Key::ArrowDown, KeyHandler::Go { rows: 1, columns: 0 }),
    (Key::ArrowLeft, KeyHandler::Go { rows: 0, columns: -1 }),
    (Key::ArrowRight, KeyHandler::Go { rows: 0, columns: 1 }),
    (Key::Tab, KeyHandler::Go { rows: 0, columns: 1 }),
    (Key::Enter, KeyHandler::Edit),
    (Key::Backspace, KeyHandler::Clear),
    (Key::Escape, KeyHandler::Blur),
];

static EDIT_KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[
    (Key::Escape, KeyHandler::View),
    (Key::Tab, KeyHandler::Go { rows: 0, columns: 1 }),
    (Key::Enter, KeyHandler::Go { rows: 1, columns: 0 }),
];

static CONTROL_KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[
    (Key::ArrowUp, KeyHandler::GoToEnd { rows: -1, columns: 0 }),
    (Key::ArrowDown, KeyHandler::GoToEnd { rows: 1, columns: 0 }),
    (Key::ArrowLeft, KeyHandler::GoToEnd { rows: 0, columns: -1 }),
    (Key::ArrowRight, KeyHandler::GoToEnd { rows: 0, columns: 1 }),
];

static CONTROL_SHIFT_KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[
    (Key::ArrowUp, KeyHandler::GrowSmaller(Axis::Row)),
    (Key::ArrowDown, KeyHandler::GrowLarger(Axis::Row)),
    (Key::ArrowLeft, KeyHandler::GrowSmaller(Axis::Column)),
    (Key::ArrowRight, KeyHandler::GrowLarger(Axis::Column)),
];

static SHIFT_KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[
    (Key::ArrowUp, KeyHandler::ModifyEdge(Axis::Row, -1)),
    (Key::ArrowDown, KeyHandler::ModifyEdge(Axis::Row, 1)),
    (Key::ArrowLeft, KeyHandler::ModifyEdge(Axis::Column, -1)),
    (Key::ArrowRight, KeyHandler::ModifyEdge(Axis::Column, 1)),
];

// Reserved extension points; intentionally unbound.
static SHIFT_META_KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[];
static META_KEY_DOWN_HANDLERS: &[(Key, KeyHandler)] = &[];

fn handler_table<C>(state: &StoreState<C>, modifiers: Modifiers) -> &'static [(Key, KeyHandler)] {
    // Order matters: edit mode overrides all modifiers.
    if state.mode == Mode::Edit {
        EDIT_KEY_DOWN_HANDLERS
    } else if modifiers.shift && modifiers.meta {
        SHIFT_META_KEY_DOWN_HANDLERS
    } else if modifiers.ctrl && modifiers.shift {
        CONTROL_SHIFT_KEY_DOWN_HANDLERS
    } else if modifiers.shift {
        SHIFT_KEY_DOWN_HANDLERS
    } else if modifiers.ctrl {
        CONTROL_KEY_DOWN_HANDLERS
    } else if modifiers.meta {
        META_KEY_DOWN_HANDLERS
    } else {
        KEY_DOWN_HANDLERS
    }
}

/// The handler a key-down event dispatches to, if any.
pub fn key_down_handler<C>(state: &StoreState<C>, event: &KeyboardEvent) -> Option<KeyHandler> {
    handler_table(state, event.modifiers)
        .iter()
        .find(|(key, _)| *key == event.key)
        .map(|(_, handler)| *handler)
}

/// Dispatch a key-down event. `None` when no handler is bound or the bound
/// action has no effect.
pub fn key_down<C: CellBase>(
    state: &StoreState<C>,
    event: &KeyboardEvent,
) -> Option<StatePatch<C>> {
    key_down_handler(state, event)?.apply(state)
}

/// A character-producing key press: starts editing the active cell from view
/// mode. Vetoed while the active cell is read-only or the meta modifier is
/// held.
pub fn key_press<C: CellBase>(
    state: &StoreState<C>,
    modifiers: Modifiers,
) -> Option<StatePatch<C>> {
    if actions::is_active_read_only(state) || modifiers.meta {
        return None;
    }
    if state.mode == Mode::View && state.active.is_some() {
        return Some(StatePatch {
            mode: Some(Mode::Edit),
            ..Default::default()
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("a"), None);
    }

    #[test]
    fn test_every_table_entry_is_unique_per_key() {
        for table in [
            KEY_DOWN_HANDLERS,
            EDIT_KEY_DOWN_HANDLERS,
            CONTROL_KEY_DOWN_HANDLERS,
            CONTROL_SHIFT_KEY_DOWN_HANDLERS,
            SHIFT_KEY_DOWN_HANDLERS,
        ] {
            for (i, (key, _)) in table.iter().enumerate() {
                assert!(
                    table.iter().skip(i + 1).all(|(other, _)| other != key),
                    "duplicate binding for {key:?}"
                );
            }
        }
    }

    #[test]
    fn test_reserved_tables_are_empty() {
        assert!(SHIFT_META_KEY_DOWN_HANDLERS.is_empty());
        assert!(META_KEY_DOWN_HANDLERS.is_empty());
    }
}
