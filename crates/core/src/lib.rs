pub mod point;
pub mod point_map;
pub mod point_set;

pub use point::{Axis, Point};
pub use point_map::PointMap;
pub use point_set::PointSet;
