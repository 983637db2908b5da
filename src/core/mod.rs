//! Core value types: block and chunk coordinates, host positions, configuration.
//!
//! These are the pieces of the host world the zone system needs to know
//! about. Everything else (entities, worlds, players) stays on the host side.

pub mod coords;
pub mod chunk;
pub mod position;
pub mod config;

pub use coords::{BlockPos, ColumnPos};
pub use chunk::{ChunkCoord, CHUNK_SIZE};
pub use position::{Position, Positioned};
pub use config::{RegistryConfig, DEFAULT_ZONES_FILE};
