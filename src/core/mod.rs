pub mod format;
pub mod numeric;
pub mod text;
pub mod types;

pub use types::{Bounding, Coordinate, distance};
