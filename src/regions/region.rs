//! Geometric layers that make up a zone.
//!
//! A `Region` is one of two shapes, plus a negation flag:
//! - **Box**: bounded on all three axes.
//! - **Column**: bounded on X and Z, open on Y (from bedrock to sky limit and
//!   beyond).
//!
//! ## Containment
//!
//! Integer tests treat coordinates as blocks and use closed intervals
//! (`min <= v <= max`). Real-valued tests treat coordinates as continuous
//! positions and use the half-open cells those blocks occupy
//! (`min <= v < max + 1`), so a player standing at `x = 9.7` is inside a
//! region whose `max_x` is 9.
//!
//! ```
//! use voxel_zones::regions::Region;
//!
//! let region = Region::cuboid((0, 0, 0), (9, 9, 9));
//! assert!(region.contains(9, 9, 9));
//! assert!(!region.contains(10, 9, 9));
//! assert!(region.contains_point(9.99, 0.0, 0.0));
//! assert!(!region.contains_point(10.0, 0.0, 0.0));
//! ```
//!
//! ## Negation
//!
//! A negating region removes area from its zone at the points it covers.
//! Negation only matters to the zone's layering; a negating region's own
//! `contains` still reports the points it covers.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::core::{BlockPos, ChunkCoord, ColumnPos};

/// The geometry of a region, always normalized so `min <= max` per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box bounded on all axes.
    Box { min: BlockPos, max: BlockPos },
    /// Axis-aligned column bounded on X/Z only.
    Column { min: ColumnPos, max: ColumnPos },
}

impl Shape {
    fn normalized(self) -> Self {
        match self {
            Self::Box { min, max } => {
                let bounds = Bounds::from_corners(min, max);
                Self::Box {
                    min: bounds.min,
                    max: bounds.max,
                }
            }
            Self::Column { min, max } => Self::Column {
                min: ColumnPos::new(min.x.min(max.x), min.z.min(max.z)),
                max: ColumnPos::new(min.x.max(max.x), min.z.max(max.z)),
            },
        }
    }

    fn contains_xz(&self, x: i32, z: i32) -> bool {
        let (min, max) = self.footprint();
        in_closed(x, min.x, max.x) && in_closed(z, min.z, max.z)
    }

    fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        match self {
            Self::Box { min, max } => in_closed(y, min.y, max.y) && self.contains_xz(x, z),
            Self::Column { .. } => self.contains_xz(x, z),
        }
    }

    fn contains_point_xz(&self, x: f64, z: f64) -> bool {
        let (min, max) = self.footprint();
        in_cells(x, min.x, max.x) && in_cells(z, min.z, max.z)
    }

    fn contains_point(&self, x: f64, y: f64, z: f64) -> bool {
        match self {
            Self::Box { min, max } => in_cells(y, min.y, max.y) && self.contains_point_xz(x, z),
            Self::Column { .. } => self.contains_point_xz(x, z),
        }
    }

    fn footprint(&self) -> (ColumnPos, ColumnPos) {
        match *self {
            Self::Box { min, max } => (min.column(), max.column()),
            Self::Column { min, max } => (min, max),
        }
    }

    fn bounds(&self) -> Bounds {
        match *self {
            Self::Box { min, max } => Bounds { min, max },
            Self::Column { min, max } => Bounds {
                min: min.at_height(i32::MIN),
                max: max.at_height(i32::MAX),
            },
        }
    }
}

#[inline]
fn in_closed(v: i32, min: i32, max: i32) -> bool {
    min <= v && v <= max
}

// Computed in f64 so `max == i32::MAX` doesn't overflow.
#[inline]
fn in_cells(v: f64, min: i32, max: i32) -> bool {
    f64::from(min) <= v && v < f64::from(max) + 1.0
}

/// One layer of a zone: a shape plus a negation flag.
///
/// Regions are immutable values. Constructors accept corners in any order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRegion")]
pub struct Region {
    shape: Shape,
    negating: bool,
}

/// Deserialization goes through here so stored shapes are re-normalized.
#[derive(Deserialize)]
struct RawRegion {
    shape: Shape,
    negating: bool,
}

impl From<RawRegion> for Region {
    fn from(raw: RawRegion) -> Self {
        Self::new(raw.shape, raw.negating)
    }
}

impl Region {
    /// Create a region from a shape, normalizing its corners.
    #[must_use]
    pub fn new(shape: Shape, negating: bool) -> Self {
        Self {
            shape: shape.normalized(),
            negating,
        }
    }

    /// A non-negating box spanning two opposite corners.
    pub fn cuboid(from: impl Into<BlockPos>, to: impl Into<BlockPos>) -> Self {
        Self::new(
            Shape::Box {
                min: from.into(),
                max: to.into(),
            },
            false,
        )
    }

    /// A non-negating, vertically unbounded column spanning two opposite
    /// horizontal corners.
    pub fn column(from: impl Into<ColumnPos>, to: impl Into<ColumnPos>) -> Self {
        Self::new(
            Shape::Column {
                min: from.into(),
                max: to.into(),
            },
            false,
        )
    }

    /// A column covering exactly one chunk.
    #[must_use]
    pub fn chunk(chunk: ChunkCoord) -> Self {
        Self::column(chunk.min_block(), chunk.max_block())
    }

    /// A column covering the chunk that contains block column `(x, z)`.
    ///
    /// ```
    /// use voxel_zones::regions::Region;
    ///
    /// let region = Region::chunk_at(-1, -1);
    /// assert_eq!(region.bounds().min.x, -16);
    /// assert_eq!(region.bounds().max.x, -1);
    /// ```
    #[must_use]
    pub fn chunk_at(x: i32, z: i32) -> Self {
        Self::chunk(ChunkCoord::containing_block(x, z))
    }

    /// The normalized shape of this region.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether this region is a vertically unbounded column.
    #[must_use]
    pub const fn is_column(&self) -> bool {
        matches!(self.shape, Shape::Column { .. })
    }

    /// Whether this region removes area from its zone.
    #[must_use]
    pub const fn is_negating(&self) -> bool {
        self.negating
    }

    /// A negating copy of this region. The receiver is left unchanged.
    #[must_use]
    pub const fn negated(&self) -> Self {
        Self {
            shape: self.shape,
            negating: true,
        }
    }

    /// Inclusive bounds. Columns report `i32::MIN ..= i32::MAX` on Y.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.shape.bounds()
    }

    /// Whether block `(x, y, z)` is covered.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.shape.contains(x, y, z)
    }

    /// Whether block position `pos` is covered.
    #[must_use]
    pub fn contains_block(&self, pos: BlockPos) -> bool {
        self.contains(pos.x, pos.y, pos.z)
    }

    /// Whether any block of column `(x, z)` is covered, ignoring height.
    #[must_use]
    pub fn contains_xz(&self, x: i32, z: i32) -> bool {
        self.shape.contains_xz(x, z)
    }

    /// Whether continuous point `(x, y, z)` is covered.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64, z: f64) -> bool {
        self.shape.contains_point(x, y, z)
    }

    /// Whether continuous horizontal point `(x, z)` is covered, ignoring height.
    #[must_use]
    pub fn contains_point_xz(&self, x: f64, z: f64) -> bool {
        self.shape.contains_point_xz(x, z)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::region_line(self))
    }
}
