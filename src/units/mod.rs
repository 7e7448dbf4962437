//! Physical units: dimension vectors and their serialized form

pub mod dimension;
pub mod representation;
pub mod si;

pub use dimension::Dimension;
pub use representation::{UnitParseError, UnitRepresentation};
