//! The zone registry: every named zone of a server, plus its zone file.
//!
//! ## Copy-on-read
//!
//! The registry owns its zones. Every read (`get`, `list`, the spatial
//! queries) hands out clones, and every change goes through a registry
//! method, so nothing can modify a stored zone behind the dirty flag's back.
//! Zone clones are O(1) (see `Zone`).
//!
//! ## Dirty flag
//!
//! Every mutation that changes a zone marks the registry dirty; lookups of
//! absent names change nothing and leave it alone. `save` writes only when
//! dirty and clears the flag; `load` clears it after replacing the contents.
//!
//! ## Locking
//!
//! `ZoneRegistry` does no locking of its own. When it is shared, every
//! operation, including `save` and `load`, must run under one lock held for
//! the whole call. `SharedZoneRegistry` provides exactly that.
//!
//! ## Spatial queries
//!
//! Queries scan every zone. Zone counts are small (tens to low hundreds),
//! so there is no spatial index. Results are sorted by zone name.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use rustc_hash::FxHashMap;
use tempfile::NamedTempFile;

use crate::core::{Position, Positioned, RegistryConfig};
use crate::error::{ZoneError, ZoneResult};
use crate::format;
use crate::regions::Region;
use crate::zones::Zone;

/// Store of named zones backed by a zone file.
///
/// ## Example
///
/// ```
/// use voxel_zones::{Region, Zone, ZoneRegistry};
///
/// let mut registry = ZoneRegistry::new("zones.txt");
/// registry.register(Zone::new("spawn", "w1").with_region(Region::cuboid((0, 0, 0), (9, 9, 9))));
///
/// assert_eq!(registry.zone_names_at("w1", 5, 5, 5), vec!["spawn".to_string()]);
/// assert!(registry.zones_at("w1", 10, 5, 5).is_empty());
/// assert!(registry.is_dirty());
/// ```
#[derive(Debug)]
pub struct ZoneRegistry {
    /// Keyed by zone name; each zone's own name matches its key.
    zones: FxHashMap<String, Zone>,
    file_path: PathBuf,
    dirty: bool,
}

impl ZoneRegistry {
    /// Create an empty registry backed by the zone file at `file_path`.
    ///
    /// Nothing is read until `load` is called.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            zones: FxHashMap::default(),
            file_path: file_path.into(),
            dirty: false,
        }
    }

    /// Create an empty registry from configuration.
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.file_path())
    }

    /// Path of the backing zone file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Whether there are changes not yet saved.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of registered zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zones are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Whether a zone called `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    // === Mutation ===

    /// Register `zone` under its name, replacing any zone of the same name.
    ///
    /// Returns the replaced zone, if any.
    pub fn register(&mut self, zone: Zone) -> Option<Zone> {
        debug!("registering zone {}", zone);
        self.dirty = true;
        self.zones.insert(zone.name().to_string(), zone)
    }

    /// Remove the zone called `name`.
    ///
    /// Returns the removed zone, or `None` if there was none.
    pub fn deregister(&mut self, name: &str) -> Option<Zone> {
        let removed = self.zones.remove(name)?;
        debug!("deregistered zone {}", removed);
        self.dirty = true;
        Some(removed)
    }

    /// Move the zone called `old_name` to `new_name`.
    ///
    /// A zone already called `new_name` is replaced. Returns a copy of the
    /// renamed zone, or `None` if `old_name` isn't registered.
    pub fn rename(&mut self, old_name: &str, new_name: impl Into<String>) -> Option<Zone> {
        let renamed = self.zones.remove(old_name)?.renamed(new_name);
        debug!("renamed zone {} to {}", old_name, renamed.name());
        self.zones.insert(renamed.name().to_string(), renamed.clone());
        self.dirty = true;
        Some(renamed)
    }

    /// Add `region` on top of the zone called `name`, if there is one.
    ///
    /// Returns a copy of the updated zone, or `None` (and changes nothing)
    /// if the zone doesn't exist. Callers must check the result.
    pub fn add_region_if_present(&mut self, name: &str, region: Region) -> Option<Zone> {
        let zone = self.zones.get_mut(name)?;
        zone.add_region(region);
        self.dirty = true;
        Some(zone.clone())
    }

    /// Remove every region of the zone called `name`, if there is one.
    ///
    /// Returns a copy of the emptied zone, or `None` if it doesn't exist.
    pub fn clear_regions_if_present(&mut self, name: &str) -> Option<Zone> {
        let zone = self.zones.get_mut(name)?;
        zone.clear();
        self.dirty = true;
        Some(zone.clone())
    }

    // === Lookup ===

    /// A copy of the zone called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Zone> {
        self.zones.get(name).cloned()
    }

    /// Copies of all zones, sorted by name.
    #[must_use]
    pub fn list(&self) -> Vec<Zone> {
        self.matching(|_| true)
    }

    /// All zone names, sorted.
    #[must_use]
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.zones.keys().cloned().collect();
        names.sort();
        names
    }

    // === Spatial queries ===

    /// Zones containing block `(x, y, z)` of `world_id`.
    #[must_use]
    pub fn zones_at(&self, world_id: &str, x: i32, y: i32, z: i32) -> Vec<Zone> {
        self.matching(|zone| zone.contains(world_id, x, y, z))
    }

    /// Names of the zones containing block `(x, y, z)` of `world_id`.
    #[must_use]
    pub fn zone_names_at(&self, world_id: &str, x: i32, y: i32, z: i32) -> Vec<String> {
        self.matching_names(|zone| zone.contains(world_id, x, y, z))
    }

    /// Zones containing block column `(x, z)` of `world_id`.
    #[must_use]
    pub fn zones_at_xz(&self, world_id: &str, x: i32, z: i32) -> Vec<Zone> {
        self.matching(|zone| zone.contains_xz(world_id, x, z))
    }

    /// Names of the zones containing block column `(x, z)` of `world_id`.
    #[must_use]
    pub fn zone_names_at_xz(&self, world_id: &str, x: i32, z: i32) -> Vec<String> {
        self.matching_names(|zone| zone.contains_xz(world_id, x, z))
    }

    /// Zones containing continuous point `(x, y, z)` of `world_id`.
    #[must_use]
    pub fn zones_at_point(&self, world_id: &str, x: f64, y: f64, z: f64) -> Vec<Zone> {
        self.matching(|zone| zone.contains_point(world_id, x, y, z))
    }

    /// Names of the zones containing continuous point `(x, y, z)` of
    /// `world_id`.
    #[must_use]
    pub fn zone_names_at_point(&self, world_id: &str, x: f64, y: f64, z: f64) -> Vec<String> {
        self.matching_names(|zone| zone.contains_point(world_id, x, y, z))
    }

    /// Zones containing `position`.
    #[must_use]
    pub fn zones_containing(&self, position: &Position) -> Vec<Zone> {
        self.matching(|zone| zone.contains_position(position))
    }

    /// Names of the zones containing `position`.
    #[must_use]
    pub fn zone_names_containing(&self, position: &Position) -> Vec<String> {
        self.matching_names(|zone| zone.contains_position(position))
    }

    /// Zones the given entity is currently in.
    #[must_use]
    pub fn zones_containing_entity<P>(&self, entity: &P) -> Vec<Zone>
    where
        P: Positioned + ?Sized,
    {
        self.zones_containing(&entity.position())
    }

    /// Names of the zones the given entity is currently in.
    #[must_use]
    pub fn zone_names_containing_entity<P>(&self, entity: &P) -> Vec<String>
    where
        P: Positioned + ?Sized,
    {
        self.zone_names_containing(&entity.position())
    }

    fn matching<F>(&self, predicate: F) -> Vec<Zone>
    where
        F: Fn(&Zone) -> bool,
    {
        let mut found: Vec<Zone> = self.zones.values().filter(|z| predicate(z)).cloned().collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        found
    }

    fn matching_names<F>(&self, predicate: F) -> Vec<String>
    where
        F: Fn(&Zone) -> bool,
    {
        let mut found: Vec<String> = self
            .zones
            .values()
            .filter(|z| predicate(z))
            .map(|z| z.name().to_string())
            .collect();
        found.sort();
        found
    }

    // === Persistence ===

    /// Write every zone to the zone file, if anything changed since the last
    /// save or load.
    ///
    /// The parent directory is created if needed and the file is replaced
    /// atomically. Returns whether the file was written.
    ///
    /// # Errors
    ///
    /// Fails without touching the disk if a zone's name or world id wouldn't
    /// read back unchanged (see `format::header_problem`). Fails if the
    /// directory can't be created or the file can't be written. The registry
    /// stays dirty in every case so the save can be retried.
    pub fn save(&mut self) -> ZoneResult<bool> {
        if !self.dirty {
            trace!("zones unchanged; not writing {:?}", self.file_path);
            return Ok(false);
        }

        let mut zones: Vec<&Zone> = self.zones.values().collect();
        zones.sort_by(|a, b| a.name().cmp(b.name()));
        if let Some((zone, reason)) = zones
            .iter()
            .find_map(|zone| format::header_problem(zone).map(|reason| (zone, reason)))
        {
            return Err(ZoneError::UnwritableZone {
                name: zone.name().to_string(),
                reason,
            });
        }

        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir).map_err(|source| ZoneError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let contents = format::to_file_string(zones);
        self.write_atomically(&dir, contents.as_bytes())?;

        self.dirty = false;
        info!("saved {} zones to {:?}", self.zones.len(), self.file_path);
        Ok(true)
    }

    fn write_atomically(&self, dir: &Path, contents: &[u8]) -> ZoneResult<()> {
        let write_error = |source: std::io::Error| ZoneError::Write {
            path: self.file_path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(contents).map_err(write_error)?;
        file.as_file().sync_all().map_err(write_error)?;
        file.persist(&self.file_path)
            .map_err(|err| write_error(err.error))?;
        Ok(())
    }

    /// Replace every zone with the contents of the zone file.
    ///
    /// A missing file (or a directory at that path) means there is nothing to
    /// load: the registry is left as it was and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read or is malformed. The registry is left
    /// untouched in either case.
    pub fn load(&mut self) -> ZoneResult<bool> {
        if !self.file_path.is_file() {
            debug!("no zones file at {:?}; nothing to load", self.file_path);
            return Ok(false);
        }

        let text = fs::read_to_string(&self.file_path).map_err(|source| ZoneError::Read {
            path: self.file_path.clone(),
            source,
        })?;

        let parsed = format::parse_file(&text).map_err(|source| ZoneError::Parse {
            path: self.file_path.clone(),
            source,
        })?;

        self.zones = parsed
            .into_iter()
            .map(|zone| (zone.name().to_string(), zone))
            .collect();
        self.dirty = false;

        info!("loaded {} zones from {:?}", self.zones.len(), self.file_path);
        Ok(true)
    }
}
