//! # voxel-zones
//!
//! Named spatial zones for voxel game servers.
//!
//! Operators describe an area by stacking simple shapes, some of which cut
//! area out again, then ask "which zones contain this point of this world?".
//! The whole set of zones is kept in one flat, hand-editable text file.
//!
//! ## Design Principles
//!
//! 1. **Layering Over Geometry**: Zones are not polygons. A zone is an ordered
//!    stack of boxes and columns; the topmost shape covering a point decides.
//!
//! 2. **Copy-on-Read**: The registry never hands out its live zones. Zone
//!    clones share structure (`im::Vector`), so copies are O(1).
//!
//! 3. **One Lock**: The registry itself is unsynchronized. Shared access goes
//!    through `SharedZoneRegistry`, which holds one lock per operation,
//!    file I/O included.
//!
//! ## Example
//!
//! ```
//! use voxel_zones::{Region, Zone, ZoneRegistry};
//!
//! let mut registry = ZoneRegistry::new("zones.txt");
//! registry.register(Zone::new("spawn", "w1").with_region(Region::cuboid((0, 0, 0), (9, 9, 9))));
//! registry.add_region_if_present("spawn", Region::cuboid((2, 2, 2), (4, 4, 4)).negated());
//!
//! let spawn = registry.get("spawn").unwrap();
//! assert!(spawn.contains("w1", 0, 0, 0));
//! assert!(!spawn.contains("w1", 3, 3, 3));
//! assert!(!spawn.contains("w2", 0, 0, 0));
//! ```
//!
//! ## Modules
//!
//! - `core`: Block/chunk coordinates, host positions, configuration
//! - `regions`: Region shapes and containment
//! - `zones`: Layered zones
//! - `format`: The zone file reader and writer
//! - `registry`: The zone registry and its shared handle
//! - `error`: Persistence errors

pub mod core;
pub mod error;
pub mod format;
pub mod regions;
pub mod registry;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    BlockPos, ColumnPos,
    ChunkCoord, CHUNK_SIZE,
    Position, Positioned,
    RegistryConfig,
};

pub use crate::error::{ParseError, ZoneError, ZoneResult};

pub use crate::regions::{Bounds, Region, Shape};

pub use crate::zones::Zone;

pub use crate::registry::{SharedZoneRegistry, ZoneRegistry};
