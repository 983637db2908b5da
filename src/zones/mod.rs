//! Zones: named, per-world stacks of regions.
//!
//! ## Key Types
//!
//! - `Zone`: name, world id and the ordered region stack, with the layered
//!   containment test

pub mod zone;

pub use zone::Zone;
