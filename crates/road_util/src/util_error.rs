// ---------------------------------------------------------------------------
// UtilError: contract violations raised by the data utilities
// ---------------------------------------------------------------------------

use std::fmt;

/// Coarse classification of a [`UtilError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor was handed an unusable argument.
    InvalidArgument,
    /// An index or coordinate fell outside the container.
    OutOfRange,
    /// An operation was attempted in a state that does not allow it.
    InvalidState,
}

/// Errors returned by the array and cache types.
///
/// All of these are caller mistakes rather than transient failures, so there
/// is nothing to retry; they exist so the mistake surfaces at the call site
/// instead of as a silently defaulted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// Array dimensions must be in `1..=i32::MAX` with a product that fits `usize`.
    InvalidArgument { width: usize, height: usize },
    /// Flat index past the end of the backing storage.
    OutOfRange { index: usize, len: usize },
    /// 2D coordinate outside `[0, width) x [0, height)`.
    CoordinateOutOfRange {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// Cache slot read while it holds no valid data.
    InvalidState,
}

impl UtilError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UtilError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            UtilError::OutOfRange { .. } | UtilError::CoordinateOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            UtilError::InvalidState => ErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::InvalidArgument { width, height } => write!(
                f,
                "Invalid argument: unsupported dimensions {width}x{height}"
            ),
            UtilError::OutOfRange { index, len } => {
                write!(f, "Index out of range: {index} (length {len})")
            }
            UtilError::CoordinateOutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Coordinate out of range: ({x}, {y}) (dimensions {width}x{height})"
            ),
            UtilError::InvalidState => write!(f, "Invalid state: cache holds no valid data"),
        }
    }
}

impl std::error::Error for UtilError {}
