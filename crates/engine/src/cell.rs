use serde::{Deserialize, Serialize};

/// The engine's seam to arbitrary cell types.
///
/// Actions never inspect cell contents directly; everything they need is
/// expressed here: the read-only veto, clearing a value in place while
/// keeping other attributes, the paste merge, and the clipboard cell
/// factory.
pub trait CellBase: Clone {
    /// Whether direct edits to this cell are vetoed.
    fn read_only(&self) -> bool {
        false
    }

    /// This cell with its value emptied and every other attribute preserved.
    fn cleared(&self) -> Self;

    /// Shallow-merge this (pasted) cell over an existing destination cell:
    /// fields the paste carries win, fields it does not carry keep the
    /// destination's values. The default replaces the destination outright.
    fn merge_over(&self, existing: Option<&Self>) -> Self {
        let _ = existing;
        self.clone()
    }

    /// Build a cell from one raw clipboard fragment.
    fn from_text(text: &str) -> Self;
}

/// The default cell: a text value plus a read-only flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    #[serde(default)]
    pub read_only: bool,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            read_only: false,
        }
    }

    pub fn locked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            read_only: true,
        }
    }
}

impl CellBase for Cell {
    fn read_only(&self) -> bool {
        self.read_only
    }

    fn cleared(&self) -> Self {
        Self {
            value: String::new(),
            read_only: self.read_only,
        }
    }

    // A pasted cell carries only a value; the destination keeps its flags.
    fn merge_over(&self, existing: Option<&Self>) -> Self {
        Self {
            value: self.value.clone(),
            read_only: existing.map(|cell| cell.read_only).unwrap_or(false),
        }
    }

    fn from_text(text: &str) -> Self {
        Self::new(text)
    }
}
