//! Named zones built from layered regions.
//!
//! A `Zone` belongs to one world and holds an ordered stack of regions.
//! Regions are layered bottom to top in the order they were added; at any
//! point, the topmost region covering that point decides membership:
//!
//! - a normal region puts the point **in** the zone
//! - a negating region cuts the point **out** of the zone
//! - no covering region means the point is outside
//!
//! ```
//! use voxel_zones::regions::Region;
//! use voxel_zones::zones::Zone;
//!
//! let mut spawn = Zone::new("spawn", "w1");
//! spawn.add_region(Region::cuboid((0, 0, 0), (9, 9, 9)));
//! spawn.add_region(Region::cuboid((2, 2, 2), (4, 4, 4)).negated());
//!
//! assert!(spawn.contains("w1", 0, 0, 0));
//! assert!(!spawn.contains("w1", 3, 3, 3));
//! assert!(!spawn.contains("w2", 0, 0, 0));
//! ```
//!
//! ## Copies
//!
//! The region stack is an `im::Vector`, so cloning a zone is O(1) and the
//! clone is fully independent: later changes to either side are invisible to
//! the other.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BlockPos, Position};
use crate::regions::Region;

/// A named area of one world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    name: String,
    world_id: String,
    /// Bottom to top. Never re-sorted.
    regions: Vector<Region>,
}

impl Zone {
    /// Create an empty zone.
    pub fn new(name: impl Into<String>, world_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world_id: world_id.into(),
            regions: Vector::new(),
        }
    }

    /// Add a region on top of the stack, builder style.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.add_region(region);
        self
    }

    /// Zone name (the registry key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World this zone belongs to.
    #[must_use]
    pub fn world_id(&self) -> &str {
        &self.world_id
    }

    /// Regions, bottom to top.
    #[must_use]
    pub fn regions(&self) -> &Vector<Region> {
        &self.regions
    }

    /// Number of regions in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the zone has no regions (and so contains nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Add a region on top of the stack.
    ///
    /// No validation is done against world bounds.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push_back(region);
    }

    /// Remove every region.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// A copy of this zone under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            world_id: self.world_id.clone(),
            regions: self.regions.clone(),
        }
    }

    /// Whether block `(x, y, z)` in `world_id` is in this zone.
    #[must_use]
    pub fn contains(&self, world_id: &str, x: i32, y: i32, z: i32) -> bool {
        self.resolve(world_id, |r| r.contains(x, y, z))
    }

    /// Whether block position `pos` in `world_id` is in this zone.
    #[must_use]
    pub fn contains_block(&self, world_id: &str, pos: BlockPos) -> bool {
        self.contains(world_id, pos.x, pos.y, pos.z)
    }

    /// Whether block column `(x, z)` in `world_id` is in this zone, testing
    /// each region's horizontal footprint only.
    #[must_use]
    pub fn contains_xz(&self, world_id: &str, x: i32, z: i32) -> bool {
        self.resolve(world_id, |r| r.contains_xz(x, z))
    }

    /// Whether continuous point `(x, y, z)` in `world_id` is in this zone.
    #[must_use]
    pub fn contains_point(&self, world_id: &str, x: f64, y: f64, z: f64) -> bool {
        self.resolve(world_id, |r| r.contains_point(x, y, z))
    }

    /// Whether continuous horizontal point `(x, z)` in `world_id` is in this
    /// zone, testing each region's horizontal footprint only.
    #[must_use]
    pub fn contains_point_xz(&self, world_id: &str, x: f64, z: f64) -> bool {
        self.resolve(world_id, |r| r.contains_point_xz(x, z))
    }

    /// Whether `position` is in this zone.
    #[must_use]
    pub fn contains_position(&self, position: &Position) -> bool {
        self.contains_point(&position.world_id, position.x, position.y, position.z)
    }

    /// Topmost covering region decides; nothing covering means outside.
    fn resolve<F>(&self, world_id: &str, covers: F) -> bool
    where
        F: Fn(&Region) -> bool,
    {
        if world_id != self.world_id {
            return false;
        }

        self.regions
            .iter()
            .rev()
            .find(|r| covers(r))
            .map_or(false, |r| !r.is_negating())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {} regions)", self.name, self.world_id, self.regions.len())
    }
}
