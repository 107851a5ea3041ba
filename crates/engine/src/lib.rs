pub mod actions;
pub mod cell;
pub mod keyboard;
pub mod matrix;
pub mod state;

pub use cell::{Cell, CellBase};
pub use matrix::{Matrix, Size};
pub use state::{CellChange, Dimensions, Mode, StatePatch, StoreState};
