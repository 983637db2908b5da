//! Continuous positions supplied by the host server.
//!
//! The zone system doesn't own any notion of entities or worlds. Hosts hand
//! it a `Position` (world id plus real-valued coordinates), either directly or
//! through the `Positioned` trait on their own entity types.

use serde::{Deserialize, Serialize};

use super::chunk::ChunkCoord;
use super::coords::BlockPos;

/// A point in a specific world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Identifier of the world the point lies in.
    pub world_id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(world_id: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world_id: world_id.into(),
            x,
            y,
            z,
        }
    }

    /// The block this position lies inside.
    ///
    /// Coordinates outside the `i32` range saturate and NaN maps to 0, so a
    /// non-finite position lands on a real block. Region and zone tests on
    /// the `Position` itself treat NaN as outside everything.
    #[must_use]
    pub fn block(&self) -> BlockPos {
        BlockPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }

    /// The chunk this position lies inside.
    #[must_use]
    pub fn chunk(&self) -> ChunkCoord {
        ChunkCoord::containing_point(self.x, self.z)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}, {}", self.world_id, self.x, self.y, self.z)
    }
}

/// Anything that can report where it is, typically a host entity.
pub trait Positioned {
    /// Current position of this object.
    fn position(&self) -> Position;
}

impl Positioned for Position {
    fn position(&self) -> Position {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_floors() {
        let pos = Position::new("overworld", -0.25, 64.9, 3.0);
        assert_eq!(pos.block(), BlockPos::new(-1, 64, 3));
    }

    #[test]
    fn test_chunk_of_negative_position() {
        let pos = Position::new("overworld", -1.0, 70.0, -1.0);
        let chunk = pos.chunk();
        assert_eq!(chunk, ChunkCoord::new(-1, -1));
        assert_eq!(chunk.min_block().x, -16);
        assert_eq!(chunk.min_block().z, -16);
    }

    #[test]
    fn test_non_finite_block_saturates() {
        let pos = Position::new("overworld", f64::NAN, 1e12, f64::NEG_INFINITY);
        assert_eq!(pos.block(), BlockPos::new(0, i32::MAX, i32::MIN));
    }

    #[test]
    fn test_position_is_positioned() {
        let pos = Position::new("nether", 1.5, 2.5, 3.5);
        assert_eq!(pos.position(), pos);
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new("end", 1.0, 2.0, 3.0);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
