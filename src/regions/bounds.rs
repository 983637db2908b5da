//! Axis-aligned bounding boxes over block coordinates.

use serde::{Deserialize, Serialize};

use crate::core::BlockPos;

/// Inclusive block bounds of a region.
///
/// Unbounded axes are reported as `i32::MIN ..= i32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl Bounds {
    /// Build bounds from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// `(min_x, min_y, min_z, max_x, max_y, max_z)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (i32, i32, i32, i32, i32, i32) {
        (self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z)
    }

    /// Whether the vertical axis is fully open.
    #[must_use]
    pub const fn is_vertically_unbounded(&self) -> bool {
        self.min.y == i32::MIN && self.max.y == i32::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let bounds = Bounds::from_corners(BlockPos::new(5, -1, 9), BlockPos::new(-5, 3, 2));
        assert_eq!(bounds.min, BlockPos::new(-5, -1, 2));
        assert_eq!(bounds.max, BlockPos::new(5, 3, 9));
        assert_eq!(bounds.as_tuple(), (-5, -1, 2, 5, 3, 9));
    }

    #[test]
    fn test_vertically_unbounded() {
        let open = Bounds::from_corners(BlockPos::new(0, i32::MIN, 0), BlockPos::new(1, i32::MAX, 1));
        assert!(open.is_vertically_unbounded());

        let half_open = Bounds::from_corners(BlockPos::new(0, i32::MIN, 0), BlockPos::new(1, 10, 1));
        assert!(!half_open.is_vertically_unbounded());
    }
}
