use crate::coord::Coord2;

/// Errors returned by the checked map API.
///
/// The unchecked accessors treat the same conditions as programmer errors and
/// assert instead. A missing route is never an error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("position {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        coord: Coord2,
        width: u32,
        height: u32,
    },

    #[error("unsupported grid size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("expected {expected} cells, got {got}")]
    CellCountMismatch { expected: usize, got: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
