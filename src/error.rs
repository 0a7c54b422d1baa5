//! Error type for map and tileset setup.
//!
//! Only construction-time operations can fail; the per-frame paint path
//! degrades silently instead of erroring (a rendering glitch must never take
//! down the frame loop).

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from loading or validating map data and tileset bindings.
#[derive(Debug)]
pub enum MapError {
    /// File I/O failure, with the offending path.
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// JSON decode failure, with the offending path.
    Json {
        /// Path being decoded.
        path: PathBuf,
        /// Underlying decode error.
        source: serde_json::Error,
    },
    /// Structurally invalid map file (wrong extension, zero dimensions, ...).
    InvalidMap(String),
    /// Flat tile array length does not match `width * height * 5`.
    DataLength {
        /// Required length.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
    /// More than nine tileset slots supplied.
    TooManySlots(usize),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            MapError::Json { path, source } => {
                write!(f, "JSON error in {}: {}", path.display(), source)
            }
            MapError::InvalidMap(msg) => write!(f, "Invalid map: {}", msg),
            MapError::DataLength { expected, actual } => write!(
                f,
                "Tile data length {} does not match width * height * 5 = {}",
                actual, expected
            ),
            MapError::TooManySlots(n) => {
                write!(f, "Tileset has {} slots, at most 9 are supported", n)
            }
        }
    }
}

impl error::Error for MapError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MapError::Io { source, .. } => Some(source),
            MapError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
