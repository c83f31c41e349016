//! Error types for tile parsing, serialization and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile operations that touch the outside world
///
/// Geometry itself is total; only parsing, file access and export can fail.
#[derive(Debug)]
pub enum TileError {
    /// Text could not be read as a tile grid
    Parse {
        /// 1-based line of the offending character
        line: usize,
        /// 1-based column of the offending character
        column: usize,
        /// Explanation of the failure
        reason: String,
    },

    /// A shape record is internally inconsistent
    InvalidShape {
        /// Description of what's wrong with the shape
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// File involved, if any
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Failed to save a rendered tile image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                line,
                column,
                reason,
            } => {
                write!(f, "Parse error at line {line}, column {column}: {reason}")
            }
            Self::InvalidShape { reason } => {
                write!(f, "Invalid shape: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { path, source } => {
                write!(f, "Serialization error for '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<serde_json::Error> for TileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid shape error
pub fn invalid_shape(reason: &impl ToString) -> TileError {
    TileError::InvalidShape {
        reason: reason.to_string(),
    }
}
