//! Zone file writer.

use super::{COORD_SEPARATOR, INDENT, NEGATION_PREFIX, RANGE_SEPARATOR};
use crate::regions::{Region, Shape};
use crate::zones::Zone;

/// Render one region in file syntax, without indentation.
///
/// Columns use two coordinates per corner and boxes always use three. The
/// mixed 2/3 form is never written.
#[must_use]
pub fn region_line(region: &Region) -> String {
    let prefix = if region.is_negating() { NEGATION_PREFIX } else { "" };

    match *region.shape() {
        Shape::Column { min, max } => format!(
            "{prefix}{}{COORD_SEPARATOR}{} {RANGE_SEPARATOR} {}{COORD_SEPARATOR}{}",
            min.x, min.z, max.x, max.z
        ),
        Shape::Box { min, max } => format!(
            "{prefix}{}{COORD_SEPARATOR}{}{COORD_SEPARATOR}{} {RANGE_SEPARATOR} {}{COORD_SEPARATOR}{}{COORD_SEPARATOR}{}",
            min.x, min.y, min.z, max.x, max.y, max.z
        ),
    }
}

/// Check that a zone's header line reads back as the same name and world.
///
/// The name is cut at the first `:`, both halves are trimmed, and a line
/// break would end the header early. Returns the reason the header wouldn't
/// survive, if any.
///
/// ```
/// use voxel_zones::format::header_problem;
/// use voxel_zones::Zone;
///
/// assert_eq!(header_problem(&Zone::new("spawn", "minecraft:overworld")), None);
/// assert!(header_problem(&Zone::new("spawn:north", "w1")).is_some());
/// ```
#[must_use]
pub fn header_problem(zone: &Zone) -> Option<&'static str> {
    let name = zone.name();
    let world_id = zone.world_id();

    if name.contains(':') {
        Some("zone names can't contain ':'")
    } else if name.contains(['\n', '\r']) {
        Some("zone names can't contain line breaks")
    } else if name.trim() != name {
        Some("zone names can't start or end with whitespace")
    } else if world_id.contains(['\n', '\r']) {
        Some("world ids can't contain line breaks")
    } else if world_id.trim() != world_id {
        Some("world ids can't start or end with whitespace")
    } else {
        None
    }
}

/// Render one zone block: header, indented regions bottom to top, then a
/// blank line.
#[must_use]
pub fn zone_block(zone: &Zone) -> String {
    let mut out = format!("{}: {}\n", zone.name(), zone.world_id());

    for region in zone.regions() {
        out.push_str(INDENT);
        out.push_str(&region_line(region));
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Render a whole zone file. Zones are written sorted by name.
pub fn to_file_string<'a, I>(zones: I) -> String
where
    I: IntoIterator<Item = &'a Zone>,
{
    let mut sorted: Vec<&Zone> = zones.into_iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));

    sorted.into_iter().map(zone_block).collect()
}
