//! The zone file format.
//!
//! A zone file is UTF-8 text holding every zone of a registry:
//!
//! ```text
//! spawn: overworld
//!     0, 0, 0 -> 9, 9, 9
//!     NOT 2, 2, 2 -> 4, 4, 4
//!
//! farmland: overworld
//!     -16, -16 -> -1, -1
//!
//! ```
//!
//! ## Headers
//!
//! A line that isn't indented starts a zone: `name: world id`, split on the
//! first colon, both halves trimmed.
//!
//! ## Region lines
//!
//! A line indented by four spaces adds a region to the zone above it, bottom
//! layer first. An optional `NOT ` marks a negating region. The two corners
//! are comma-space separated integer lists joined by `->`:
//!
//! | from | to | region |
//! |------|----|--------|
//! | `x, z` | `x, z` | column |
//! | `x, y, z` | `x, y, z` | box |
//! | `x, z` | `x, y, z` | box, bottom open (`y = i32::MIN`) |
//! | `x, y, z` | `x, z` | box, top open (`y = i32::MAX`) |
//!
//! The mixed forms are only ever read; the writer always emits boxes with
//! three coordinates per corner. Blank lines are ignored, as are region lines
//! that appear before the first header.

pub mod reader;
pub mod writer;

pub use reader::{parse_file, parse_region};
pub use writer::{header_problem, region_line, to_file_string, zone_block};

pub(crate) const INDENT: &str = "    ";
pub(crate) const NEGATION_PREFIX: &str = "NOT ";
pub(crate) const RANGE_SEPARATOR: &str = "->";
pub(crate) const COORD_SEPARATOR: &str = ", ";
