//! Zone file reader.

use smallvec::SmallVec;

use super::{COORD_SEPARATOR, INDENT, NEGATION_PREFIX, RANGE_SEPARATOR};
use crate::core::{BlockPos, ColumnPos};
use crate::error::ParseError;
use crate::regions::{Region, Shape};
use crate::zones::Zone;

/// Coordinate group as split from one side of `->`.
type Group<'a> = SmallVec<[&'a str; 3]>;

/// The line being parsed, for error reporting.
#[derive(Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    fn malformed_header(self) -> ParseError {
        ParseError::MalformedHeader {
            line_number: self.number,
            line: self.text.to_string(),
        }
    }

    fn malformed_region(self) -> ParseError {
        ParseError::MalformedRegion {
            line_number: self.number,
            line: self.text.to_string(),
        }
    }

    fn coord(self, value: &str) -> Result<i32, ParseError> {
        value.parse().map_err(|source| ParseError::InvalidCoordinate {
            line_number: self.number,
            line: self.text.to_string(),
            value: value.to_string(),
            source,
        })
    }
}

/// Parse a whole zone file.
///
/// Zones are returned in file order. If a name appears twice, both are
/// returned; the registry keeps the later one.
///
/// # Errors
///
/// Returns the first malformed header, region line or coordinate.
pub fn parse_file(text: &str) -> Result<Vec<Zone>, ParseError> {
    let mut zones = Vec::new();
    let mut current: Option<Zone> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = Line {
            number: index + 1,
            text: raw,
        };

        if raw.trim().is_empty() {
            continue;
        }

        if let Some(body) = raw.strip_prefix(INDENT) {
            // Regions before the first header have no zone to go in.
            if let Some(zone) = current.as_mut() {
                zone.add_region(parse_region_body(line, body.trim())?);
            }
            continue;
        }

        if let Some(finished) = current.replace(parse_header(line)?) {
            zones.push(finished);
        }
    }

    zones.extend(current);
    Ok(zones)
}

/// Parse a single region line, without its indentation.
///
/// ```
/// use voxel_zones::format::parse_region;
///
/// let region = parse_region("NOT 0, 0 -> 10, 10, 10").unwrap();
/// assert!(region.is_negating());
/// assert_eq!(region.bounds().min.y, i32::MIN);
/// assert_eq!(region.bounds().max.y, 10);
/// ```
///
/// # Errors
///
/// Fails if the line isn't two coordinate groups of 2 or 3 integers joined by
/// `->`.
pub fn parse_region(text: &str) -> Result<Region, ParseError> {
    parse_region_body(Line { number: 1, text }, text.trim())
}

fn parse_header(line: Line<'_>) -> Result<Zone, ParseError> {
    let (name, world_id) = line.text.split_once(':').ok_or_else(|| line.malformed_header())?;
    Ok(Zone::new(name.trim(), world_id.trim()))
}

fn parse_region_body(line: Line<'_>, body: &str) -> Result<Region, ParseError> {
    let (negating, body) = match body.strip_prefix(NEGATION_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let (from, to) = body
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| line.malformed_region())?;
    let from: Group<'_> = from.trim().split(COORD_SEPARATOR).collect();
    let to: Group<'_> = to.trim().split(COORD_SEPARATOR).collect();

    // A two-number group next to a three-number one is (x, z) with its y
    // left open on that side.
    let shape = match (from.as_slice(), to.as_slice()) {
        ([fx, fz], [tx, tz]) => Shape::Column {
            min: ColumnPos::new(line.coord(fx)?, line.coord(fz)?),
            max: ColumnPos::new(line.coord(tx)?, line.coord(tz)?),
        },
        ([fx, fy, fz], [tx, ty, tz]) => Shape::Box {
            min: BlockPos::new(line.coord(fx)?, line.coord(fy)?, line.coord(fz)?),
            max: BlockPos::new(line.coord(tx)?, line.coord(ty)?, line.coord(tz)?),
        },
        ([fx, fz], [tx, ty, tz]) => Shape::Box {
            min: BlockPos::new(line.coord(fx)?, i32::MIN, line.coord(fz)?),
            max: BlockPos::new(line.coord(tx)?, line.coord(ty)?, line.coord(tz)?),
        },
        ([fx, fy, fz], [tx, tz]) => Shape::Box {
            min: BlockPos::new(line.coord(fx)?, line.coord(fy)?, line.coord(fz)?),
            max: BlockPos::new(line.coord(tx)?, i32::MAX, line.coord(tz)?),
        },
        _ => return Err(line.malformed_region()),
    };

    Ok(Region::new(shape, negating))
}
