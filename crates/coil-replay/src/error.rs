//! Error types for replay decoding and encoding.

use std::fmt;
use std::io;

/// Which variable-length list of a replay an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayList {
    /// Direction-change input events.
    Events,
    /// Food placements.
    FoodSpawns,
}

impl fmt::Display for ReplayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Events => write!(f, "events"),
            Self::FoodSpawns => write!(f, "food spawns"),
        }
    }
}

/// Reasons a byte buffer is not a usable replay, or a record cannot be
/// encoded.
///
/// Decoding never panics: every structural problem comes back as one of
/// these values and the validator turns it into a rejection.
#[derive(Debug)]
pub enum ReplayError {
    /// A read or write on the underlying stream failed.
    Io(io::Error),
    /// The buffer is shorter than the 32-byte minimum.
    TooShort {
        /// Actual buffer length.
        len: usize,
    },
    /// The buffer does not start with `b"SNRP"`.
    InvalidMagic,
    /// The format version byte is not supported by this build.
    UnsupportedVersion {
        /// The version found in the buffer.
        found: u8,
    },
    /// The header declares a board with a zero dimension.
    EmptyBoard {
        /// Declared width.
        width: u8,
        /// Declared height.
        height: u8,
    },
    /// An entry's frame is lower than the one before it.
    OutOfOrder {
        /// The list containing the entry.
        list: ReplayList,
        /// Position of the offending entry.
        index: usize,
        /// The offending entry's frame.
        frame: u32,
        /// The preceding entry's frame.
        previous: u32,
    },
    /// A list is too long for its `u16` count field.
    TooManyEntries {
        /// The list that overflowed.
        list: ReplayList,
        /// Number of entries in the record.
        count: usize,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TooShort { len } => {
                write!(f, "replay too short: {len} bytes (minimum 32)")
            }
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"SNRP\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::EmptyBoard { width, height } => {
                write!(f, "board {width}x{height} has a zero dimension")
            }
            Self::OutOfOrder {
                list,
                index,
                frame,
                previous,
            } => write!(
                f,
                "{list} out of frame order at index {index}: frame {frame} after {previous}"
            ),
            Self::TooManyEntries { list, count } => {
                write!(f, "{count} {list} exceed the u16 count field")
            }
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
