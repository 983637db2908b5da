//! Registry integration tests: queries, dirty tracking and zone file persistence.

use std::fs;

use tempfile::TempDir;
use voxel_zones::{
    ParseError, Position, Positioned, Region, RegistryConfig, SharedZoneRegistry, Zone, ZoneError,
    ZoneRegistry,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn spawn_zone() -> Zone {
    Zone::new("spawn", "w1")
        .with_region(Region::cuboid((0, 0, 0), (9, 9, 9)))
        .with_region(Region::cuboid((2, 2, 2), (4, 4, 4)).negated())
}

struct Player {
    world: &'static str,
    x: f64,
    y: f64,
    z: f64,
}

impl Positioned for Player {
    fn position(&self) -> Position {
        Position::new(self.world, self.x, self.y, self.z)
    }
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_spawn_with_hole() {
    let mut registry = ZoneRegistry::new("unused.txt");
    registry.register(spawn_zone());

    assert_eq!(registry.zone_names_at("w1", 0, 0, 0), vec!["spawn"]);
    assert!(registry.zone_names_at("w1", 3, 3, 3).is_empty());
    assert_eq!(registry.zone_names_at("w1", 5, 5, 5), vec!["spawn"]);
    assert!(registry.zone_names_at("w2", 0, 0, 0).is_empty());
}

#[test]
fn test_overlapping_zones_all_reported() {
    let mut registry = ZoneRegistry::new("unused.txt");
    registry.register(Zone::new("town", "w1").with_region(Region::column((-100, -100), (100, 100))));
    registry.register(spawn_zone());
    registry.register(Zone::new("market", "w1").with_region(Region::cuboid((5, 0, 5), (20, 10, 20))));

    assert_eq!(registry.zone_names_at("w1", 6, 6, 6), vec!["market", "spawn", "town"]);
    assert_eq!(registry.zone_names_at("w1", 3, 3, 3), vec!["town"]);
    assert_eq!(registry.zone_names_at("w1", 6, 500, 6), vec!["town"]);

    let zones = registry.zones_at("w1", 6, 6, 6);
    assert_eq!(zones.len(), 3);
    assert_eq!(zones[1], spawn_zone());
}

#[test]
fn test_column_queries_ignore_height() {
    let mut registry = ZoneRegistry::new("unused.txt");
    registry.register(Zone::new("farm", "w1").with_region(Region::chunk_at(-1, -1)));

    assert_eq!(registry.zone_names_at_xz("w1", -16, -1), vec!["farm"]);
    assert_eq!(registry.zone_names_at("w1", -1, i32::MIN, -16), vec!["farm"]);
    assert_eq!(registry.zone_names_at("w1", -1, i32::MAX, -16), vec!["farm"]);
    assert!(registry.zone_names_at_xz("w1", 0, -1).is_empty());
}

#[test]
fn test_entity_queries() {
    let mut registry = ZoneRegistry::new("unused.txt");
    registry.register(spawn_zone());

    let inside = Player { world: "w1", x: 9.99, y: 0.0, z: 0.5 };
    let in_hole = Player { world: "w1", x: 3.5, y: 3.5, z: 3.5 };
    let outside = Player { world: "w1", x: 10.0, y: 0.0, z: 0.0 };

    assert_eq!(registry.zone_names_containing_entity(&inside), vec!["spawn"]);
    assert!(registry.zone_names_containing_entity(&in_hole).is_empty());
    assert!(registry.zone_names_containing_entity(&outside).is_empty());

    let as_trait_object: &dyn Positioned = &inside;
    assert_eq!(registry.zones_containing_entity(as_trait_object).len(), 1);
}

#[test]
fn test_query_results_are_copies() {
    let mut registry = ZoneRegistry::new("unused.txt");
    registry.register(spawn_zone());

    let mut copy = registry.zones_at("w1", 0, 0, 0).remove(0);
    copy.clear();

    assert_eq!(registry.get("spawn").unwrap().len(), 2);
    assert_eq!(registry.zone_names_at("w1", 0, 0, 0), vec!["spawn"]);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");

    let mut registry = ZoneRegistry::new(&path);
    registry.register(spawn_zone());
    registry.register(Zone::new("farm", "w1").with_region(Region::chunk_at(-1, -1)));
    registry.register(Zone::new("empty", "nether"));
    registry.register(
        Zone::new("tower", "w1").with_region(Region::cuboid((0, i32::MIN, 0), (0, i32::MAX, 0))),
    );

    assert!(registry.save().unwrap());
    assert!(!registry.is_dirty());

    let mut restored = ZoneRegistry::new(&path);
    assert!(restored.load().unwrap());

    assert_eq!(restored.list(), registry.list());
    assert!(!restored.is_dirty());
}

#[test]
fn test_saved_file_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");

    let mut registry = ZoneRegistry::new(&path);
    registry.register(spawn_zone());
    registry.register(Zone::new("farm", "w1").with_region(Region::chunk_at(-1, -1)));
    registry.save().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "farm: w1\n    -16, -16 -> -1, -1\n\nspawn: w1\n    0, 0, 0 -> 9, 9, 9\n    NOT 2, 2, 2 -> 4, 4, 4\n\n"
    );
}

#[test]
fn test_second_save_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");

    let mut registry = ZoneRegistry::new(&path);
    registry.register(spawn_zone());

    assert!(registry.save().unwrap());
    fs::remove_file(&path).unwrap();

    assert!(!registry.save().unwrap());
    assert!(!path.exists());
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plugins").join("zones").join("zones.txt");

    let mut registry = ZoneRegistry::new(&path);
    registry.register(spawn_zone());

    assert!(registry.save().unwrap());
    assert!(path.is_file());
}

#[test]
fn test_save_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");
    fs::write(&path, "stale: w9\n    0, 0 -> 1, 1\n\n").unwrap();

    let mut registry = ZoneRegistry::new(&path);
    registry.register(Zone::new("fresh", "w1"));
    registry.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh: w1\n\n");
}

#[test]
fn test_failed_save_stays_dirty() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let mut registry = ZoneRegistry::new(blocker.join("zones.txt"));
    registry.register(spawn_zone());

    let err = registry.save().unwrap_err();
    assert!(matches!(err, ZoneError::CreateDir { .. }));
    assert!(registry.is_dirty());
}

#[test]
fn test_failed_write_stays_dirty() {
    let dir = TempDir::new().unwrap();

    let mut registry = ZoneRegistry::new(dir.path());
    registry.register(spawn_zone());

    let err = registry.save().unwrap_err();
    assert!(matches!(err, ZoneError::Write { .. }));
    assert!(registry.is_dirty());
    assert!(dir.path().is_dir());
}

/// Test a zone whose header would read back differently blocks the save.
#[test]
fn test_unwritable_names_are_rejected() {
    let cases = [
        Zone::new("spawn:north", "w1"),
        Zone::new("bad\nname", "w1"),
        Zone::new("bad\rname", "w1"),
        Zone::new("    indented", "w1"),
        Zone::new("spawn ", "w1"),
        Zone::new("spawn", "w1\nw2"),
        Zone::new("spawn", " w1"),
    ];

    for zone in cases {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zones.txt");
        let name = zone.name().to_string();

        let mut registry = ZoneRegistry::new(&path);
        registry.register(spawn_zone().renamed("good"));
        registry.register(zone.with_region(Region::cuboid((0, 0, 0), (9, 9, 9))));

        match registry.save() {
            Err(ZoneError::UnwritableZone { name: rejected, .. }) => assert_eq!(rejected, name),
            other => panic!("{name:?} should be rejected, got {other:?}"),
        }
        assert!(!path.exists(), "{name:?} must not reach the disk");
        assert!(registry.is_dirty());

        registry.deregister(&name);
        assert!(registry.save().unwrap());
        let mut restored = ZoneRegistry::new(&path);
        restored.load().unwrap();
        assert_eq!(restored.list_names(), vec!["good"]);
    }
}

#[test]
fn test_colon_in_world_id_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");

    let mut registry = ZoneRegistry::new(&path);
    registry.register(Zone::new("spawn", "minecraft:overworld").with_region(Region::chunk_at(0, 0)));
    registry.save().unwrap();

    let mut restored = ZoneRegistry::new(&path);
    restored.load().unwrap();
    assert_eq!(restored.zone_names_at("minecraft:overworld", 5, 5, 5), vec!["spawn"]);
}

#[test]
fn test_load_directory_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut registry = ZoneRegistry::new(dir.path());
    registry.register(spawn_zone());

    assert!(!registry.load().unwrap());
    assert_eq!(registry.len(), 1);
    assert!(registry.is_dirty());
}

#[test]
fn test_load_missing_file_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut registry = ZoneRegistry::new(dir.path().join("absent.txt"));
    registry.register(spawn_zone());

    assert!(!registry.load().unwrap());
    assert!(registry.contains("spawn"));
    assert!(registry.is_dirty());
}

#[test]
fn test_load_replaces_rather_than_merges() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");
    fs::write(&path, "farm: w1\n    0, 0 -> 15, 15\n\n").unwrap();

    let mut registry = ZoneRegistry::new(&path);
    registry.register(spawn_zone());

    assert!(registry.load().unwrap());
    assert_eq!(registry.list_names(), vec!["farm"]);
    assert!(!registry.is_dirty());
}

#[test]
fn test_malformed_file_leaves_registry_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");
    fs::write(&path, "farm: w1\n    0, 0 -> 15, banana\n").unwrap();

    let mut registry = ZoneRegistry::new(&path);
    registry.register(spawn_zone());

    let err = registry.load().unwrap_err();
    match err {
        ZoneError::Parse { source, .. } => {
            assert!(matches!(source, ParseError::InvalidCoordinate { line_number: 2, .. }));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }

    assert_eq!(registry.list_names(), vec!["spawn"]);
    assert!(registry.is_dirty());
}

#[test]
fn test_hand_edited_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zones.txt");
    fs::write(
        &path,
        "    0, 0 -> 1, 1\n\
         \n\
         arena : overworld \n\
         \x20   -5, 0, -5 -> 5, 10\n\
         \x20   NOT 0, 0 -> 0, 64, 0\n\
         \n\
         \n",
    )
    .unwrap();

    let mut registry = ZoneRegistry::new(&path);
    registry.load().unwrap();

    let arena = registry.get("arena").unwrap();
    assert_eq!(arena.world_id(), "overworld");
    assert_eq!(arena.len(), 2);
    assert!(arena.contains("overworld", 5, i32::MAX, 5));
    assert!(!arena.contains("overworld", 0, 10, 0));
    assert!(arena.contains("overworld", 0, 65, 0));
    assert!(!arena.contains("overworld", 1, -1, 1));
}

// =============================================================================
// Shared Handle Tests
// =============================================================================

#[test]
fn test_shared_registry_persists() {
    let dir = TempDir::new().unwrap();
    let config = RegistryConfig::new(dir.path().join("zones.txt"));

    let zones = SharedZoneRegistry::from_config(&config);
    zones.register(spawn_zone());
    assert!(zones.save().unwrap());
    assert!(!zones.save().unwrap());

    let reloaded = SharedZoneRegistry::from_config(&config);
    assert!(reloaded.load().unwrap());
    assert_eq!(reloaded.get("spawn"), Some(spawn_zone()));
}
