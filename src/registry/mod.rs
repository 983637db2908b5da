//! The zone registry and its shared, lock-guarded handle.
//!
//! ## Key Types
//!
//! - `ZoneRegistry`: name -> zone store with queries, dirty tracking and
//!   zone file persistence
//! - `SharedZoneRegistry`: one registry behind one lock, for hosts that
//!   touch zones from more than one thread

pub mod store;
pub mod shared;

pub use store::ZoneRegistry;
pub use shared::SharedZoneRegistry;
