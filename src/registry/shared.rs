//! A lock-guarded registry handle for the whole server.
//!
//! `SharedZoneRegistry` is the one instance the host's composition root owns
//! and hands out. It wraps a `ZoneRegistry` in a single `parking_lot::Mutex`.
//!
//! ## Locking contract
//!
//! Every method takes the lock for its entire duration, file I/O included,
//! so queries never observe a half-applied `load` and two saves never race.
//! There is no read/write split: queries and mutations exclude each other.
//!
//! Compound operations that must be atomic (for example "check the zone's
//! world, then add a chunk") go through `with_lock`:
//!
//! ```
//! use voxel_zones::{Region, SharedZoneRegistry, Zone, ZoneRegistry};
//!
//! let zones = SharedZoneRegistry::new(ZoneRegistry::new("zones.txt"));
//! zones.register(Zone::new("farm", "overworld"));
//!
//! let added = zones.with_lock(|registry| {
//!     let zone = registry.get("farm")?;
//!     if zone.world_id() != "overworld" {
//!         return None;
//!     }
//!     registry.add_region_if_present("farm", Region::chunk_at(-1, -1))
//! });
//!
//! assert_eq!(added.map(|zone| zone.len()), Some(1));
//! ```
//!
//! Results are copies, so callers can keep them after the lock is released.

use std::sync::Arc;

use parking_lot::Mutex;

use super::store::ZoneRegistry;
use crate::core::{Position, Positioned, RegistryConfig};
use crate::error::ZoneResult;
use crate::regions::Region;
use crate::zones::Zone;

/// Cloneable handle to one registry behind one lock.
#[derive(Clone, Debug)]
pub struct SharedZoneRegistry {
    inner: Arc<Mutex<ZoneRegistry>>,
}

impl SharedZoneRegistry {
    /// Take ownership of `registry`.
    #[must_use]
    pub fn new(registry: ZoneRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Create a shared, empty registry from configuration.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(ZoneRegistry::from_config(config))
    }

    /// Run `f` with exclusive access to the registry.
    ///
    /// Don't call back into this handle from inside `f`; the lock is not
    /// reentrant.
    pub fn with_lock<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut ZoneRegistry) -> R,
    {
        let mut registry = self.inner.lock();
        f(&mut *registry)
    }

    /// See `ZoneRegistry::register`.
    pub fn register(&self, zone: Zone) -> Option<Zone> {
        self.with_lock(|r| r.register(zone))
    }

    /// See `ZoneRegistry::deregister`.
    pub fn deregister(&self, name: &str) -> Option<Zone> {
        self.with_lock(|r| r.deregister(name))
    }

    /// See `ZoneRegistry::rename`.
    pub fn rename(&self, old_name: &str, new_name: impl Into<String>) -> Option<Zone> {
        self.with_lock(|r| r.rename(old_name, new_name))
    }

    /// See `ZoneRegistry::add_region_if_present`.
    pub fn add_region_if_present(&self, name: &str, region: Region) -> Option<Zone> {
        self.with_lock(|r| r.add_region_if_present(name, region))
    }

    /// See `ZoneRegistry::clear_regions_if_present`.
    pub fn clear_regions_if_present(&self, name: &str) -> Option<Zone> {
        self.with_lock(|r| r.clear_regions_if_present(name))
    }

    /// See `ZoneRegistry::get`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Zone> {
        self.with_lock(|r| r.get(name))
    }

    /// See `ZoneRegistry::contains`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.with_lock(|r| r.contains(name))
    }

    /// See `ZoneRegistry::len`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with_lock(|r| r.len())
    }

    /// See `ZoneRegistry::is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_lock(|r| r.is_empty())
    }

    /// See `ZoneRegistry::is_dirty`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.with_lock(|r| r.is_dirty())
    }

    /// See `ZoneRegistry::list`.
    #[must_use]
    pub fn list(&self) -> Vec<Zone> {
        self.with_lock(|r| r.list())
    }

    /// See `ZoneRegistry::list_names`.
    #[must_use]
    pub fn list_names(&self) -> Vec<String> {
        self.with_lock(|r| r.list_names())
    }

    /// See `ZoneRegistry::zones_at`.
    #[must_use]
    pub fn zones_at(&self, world_id: &str, x: i32, y: i32, z: i32) -> Vec<Zone> {
        self.with_lock(|r| r.zones_at(world_id, x, y, z))
    }

    /// See `ZoneRegistry::zone_names_at`.
    #[must_use]
    pub fn zone_names_at(&self, world_id: &str, x: i32, y: i32, z: i32) -> Vec<String> {
        self.with_lock(|r| r.zone_names_at(world_id, x, y, z))
    }

    /// See `ZoneRegistry::zones_at_xz`.
    #[must_use]
    pub fn zones_at_xz(&self, world_id: &str, x: i32, z: i32) -> Vec<Zone> {
        self.with_lock(|r| r.zones_at_xz(world_id, x, z))
    }

    /// See `ZoneRegistry::zone_names_at_xz`.
    #[must_use]
    pub fn zone_names_at_xz(&self, world_id: &str, x: i32, z: i32) -> Vec<String> {
        self.with_lock(|r| r.zone_names_at_xz(world_id, x, z))
    }

    /// See `ZoneRegistry::zones_at_point`.
    #[must_use]
    pub fn zones_at_point(&self, world_id: &str, x: f64, y: f64, z: f64) -> Vec<Zone> {
        self.with_lock(|r| r.zones_at_point(world_id, x, y, z))
    }

    /// See `ZoneRegistry::zone_names_at_point`.
    #[must_use]
    pub fn zone_names_at_point(&self, world_id: &str, x: f64, y: f64, z: f64) -> Vec<String> {
        self.with_lock(|r| r.zone_names_at_point(world_id, x, y, z))
    }

    /// See `ZoneRegistry::zones_containing`.
    #[must_use]
    pub fn zones_containing(&self, position: &Position) -> Vec<Zone> {
        self.with_lock(|r| r.zones_containing(position))
    }

    /// See `ZoneRegistry::zone_names_containing`.
    #[must_use]
    pub fn zone_names_containing(&self, position: &Position) -> Vec<String> {
        self.with_lock(|r| r.zone_names_containing(position))
    }

    /// The entity's position is read before the lock is taken.
    #[must_use]
    pub fn zones_containing_entity<P>(&self, entity: &P) -> Vec<Zone>
    where
        P: Positioned + ?Sized,
    {
        let position = entity.position();
        self.zones_containing(&position)
    }

    /// See `ZoneRegistry::zone_names_containing_entity`.
    #[must_use]
    pub fn zone_names_containing_entity<P>(&self, entity: &P) -> Vec<String>
    where
        P: Positioned + ?Sized,
    {
        let position = entity.position();
        self.zone_names_containing(&position)
    }

    /// See `ZoneRegistry::save`. The lock is held while writing.
    pub fn save(&self) -> ZoneResult<bool> {
        self.with_lock(|r| r.save())
    }

    /// See `ZoneRegistry::load`. The lock is held while reading.
    pub fn load(&self) -> ZoneResult<bool> {
        self.with_lock(|r| r.load())
    }
}
