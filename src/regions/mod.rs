//! Region geometry.
//!
//! ## Key Types
//!
//! - `Region`: one layer of a zone (shape + negation flag)
//! - `Shape`: box or vertically unbounded column
//! - `Bounds`: inclusive min/max block corners

pub mod bounds;
pub mod region;

pub use bounds::Bounds;
pub use region::{Region, Shape};
