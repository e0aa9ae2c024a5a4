//! Error types and context management for reassembly operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::tile::TileId;

/// Coarse classification of a failure
///
/// Every failure of the batch computation is fatal; the kind tells the caller
/// whether the input text, the puzzle data or the arrangement itself is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text could not be read as a tile list
    MalformedInput,
    /// Tiles were read but do not form a consistent jigsaw
    IntegrityViolation,
    /// Assembly found zero or several candidates for a cell
    UnsolvableArrangement,
    /// A parameter or numeric result was out of range
    Computation,
    /// Reading inputs or writing outputs failed
    Io,
}

/// Main error type for all reassembly operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Input text is not a well-formed tile list
    MalformedInput {
        /// One-based input line, when the failure can be pinned to a line
        line: Option<usize>,
        /// Description of what is wrong with the input
        reason: String,
    },

    /// Tile data breaks an invariant of a uniquely solvable jigsaw
    ///
    /// Covers edges shared by three or more tiles, tile counts that are not a
    /// perfect square and corner counts other than four.
    IntegrityViolation {
        /// Description of the violated invariant
        reason: String,
    },

    /// No unplaced tile fits a grid cell
    UnsolvableArrangement {
        /// Grid cell (row, column) being filled
        cell: [usize; 2],
        /// Description of the constraint that could not be met
        reason: String,
    },

    /// Several unplaced tiles fit a grid cell
    AmbiguousArrangement {
        /// Grid cell (row, column) being filled
        cell: [usize; 2],
        /// Ids of every tile that fits
        candidates: Vec<TileId>,
    },

    /// Caller-supplied parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the stitched image to disk
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

    /// Failure while processing a specific puzzle file
    InFile {
        /// Puzzle file being processed
        path: PathBuf,
        /// The error raised while processing it
        source: Box<PuzzleError>,
    },
}

impl PuzzleError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::IntegrityViolation { .. } => ErrorKind::IntegrityViolation,
            Self::UnsolvableArrangement { .. } | Self::AmbiguousArrangement { .. } => {
                ErrorKind::UnsolvableArrangement
            }
            Self::InvalidParameter { .. } | Self::Computation { .. } => ErrorKind::Computation,
            Self::ImageExport { .. } | Self::FileSystem { .. } => ErrorKind::Io,
            Self::InFile { source, .. } => source.kind(),
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput {
                line: Some(line),
                reason,
            } => write!(f, "Malformed input at line {line}: {reason}"),
            Self::MalformedInput { line: None, reason } => {
                write!(f, "Malformed input: {reason}")
            }
            Self::IntegrityViolation { reason } => {
                write!(f, "Integrity violation: {reason}")
            }
            Self::UnsolvableArrangement {
                cell: [row, col],
                reason,
            } => {
                write!(f, "Unsolvable arrangement at cell ({row}, {col}): {reason}")
            }
            Self::AmbiguousArrangement {
                cell: [row, col],
                candidates,
            } => {
                let ids = candidates
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Ambiguous arrangement at cell ({row}, {col}): tiles {ids} all fit")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
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
            Self::InFile { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InFile { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for reassembly results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Attaches the puzzle file being processed to an error
pub trait WithPath<T> {
    /// Wrap any error in an [`PuzzleError::InFile`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Already carries a path; keep the innermost one
            error @ PuzzleError::InFile { .. } => error,
            error => PuzzleError::InFile {
                path: path.to_path_buf(),
                source: Box::new(error),
            },
        })
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed input error
pub fn malformed_input(line: Option<usize>, reason: &impl ToString) -> PuzzleError {
    PuzzleError::MalformedInput {
        line,
        reason: reason.to_string(),
    }
}

/// Create an integrity violation error
pub fn integrity_violation(reason: &impl ToString) -> PuzzleError {
    PuzzleError::IntegrityViolation {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
