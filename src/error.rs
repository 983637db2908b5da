//! Error types for zone file handling.
//!
//! Only persistence can fail. Lookups of absent zones are not errors and
//! return `None` instead.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// A malformed line in a zone file.
///
/// Line numbers are 1-based. `line` holds the offending line as it appeared
/// in the file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line_number}: zone header {line:?} is not a zone name and world id separated by a colon")]
    MalformedHeader { line_number: usize, line: String },

    #[error("line {line_number}: region {line:?} is not formatted as `x, z -> x, z` or `x, y, z -> x, y, z`")]
    MalformedRegion { line_number: usize, line: String },

    #[error("line {line_number}: coordinate {value:?} in {line:?} is not an integer")]
    InvalidCoordinate {
        line_number: usize,
        line: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// 1-based number of the offending line.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedHeader { line_number, .. }
            | Self::MalformedRegion { line_number, .. }
            | Self::InvalidCoordinate { line_number, .. } => *line_number,
        }
    }

    /// Content of the offending line.
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            Self::MalformedHeader { line, .. }
            | Self::MalformedRegion { line, .. }
            | Self::InvalidCoordinate { line, .. } => line,
        }
    }
}

/// Failure of a registry `save` or `load`.
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("could not create directory {path:?} for the zones file")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write the zones file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read the zones file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed zones file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A zone whose header wouldn't read back as the same name and world.
    /// Nothing is written when any zone is unwritable.
    #[error("zone {name:?} can't be saved: {reason}")]
    UnwritableZone { name: String, reason: &'static str },
}

/// Result alias for registry persistence.
pub type ZoneResult<T> = Result<T, ZoneError>;
