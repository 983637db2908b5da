//! Chunk grid coordinates.
//!
//! The horizontal plane is divided into 16x16 block chunks. Chunk `(cx, cz)`
//! covers blocks `cx*16 ..= cx*16 + 15` on X and likewise on Z.
//!
//! Mapping a block to its chunk uses **floor** division, so negative
//! coordinates round towards negative infinity:
//!
//! ```
//! use voxel_zones::core::ChunkCoord;
//!
//! assert_eq!(ChunkCoord::containing_block(-1, -1), ChunkCoord::new(-1, -1));
//! assert_eq!(ChunkCoord::containing_block(-1, -1).min_block().x, -16);
//! assert_eq!(ChunkCoord::containing_block(15, 16), ChunkCoord::new(0, 1));
//! ```

use serde::{Deserialize, Serialize};

use super::coords::ColumnPos;

/// Width of a chunk along X and Z, in blocks.
pub const CHUNK_SIZE: i32 = 16;

/// Chunk index on the horizontal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a chunk coordinate from chunk indices.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk containing block column `(x, z)`.
    #[must_use]
    pub const fn containing_block(x: i32, z: i32) -> Self {
        Self::new(x.div_euclid(CHUNK_SIZE), z.div_euclid(CHUNK_SIZE))
    }

    /// The chunk containing a continuous horizontal position.
    ///
    /// Coordinates are floored and then saturate to the `i32` block range;
    /// NaN maps to block 0. Hosts should not pass non-finite positions.
    #[must_use]
    pub fn containing_point(x: f64, z: f64) -> Self {
        Self::containing_block(x.floor() as i32, z.floor() as i32)
    }

    /// Lowest-coordinate block corner of this chunk.
    ///
    /// Only chunks in `i32::MIN / 16 ..= i32::MAX / 16` lie inside the block
    /// range. Corners of chunks beyond it clamp to `i32::MIN`/`i32::MAX`.
    #[must_use]
    pub const fn min_block(self) -> ColumnPos {
        ColumnPos::new(
            self.x.saturating_mul(CHUNK_SIZE),
            self.z.saturating_mul(CHUNK_SIZE),
        )
    }

    /// Highest-coordinate block corner of this chunk. Clamps like `min_block`.
    #[must_use]
    pub const fn max_block(self) -> ColumnPos {
        let min = self.min_block();
        ColumnPos::new(
            min.x.saturating_add(CHUNK_SIZE - 1),
            min.z.saturating_add(CHUNK_SIZE - 1),
        )
    }
}

impl std::fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk({}, {})", self.x, self.z)
    }
}
