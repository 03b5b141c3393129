use thiserror::Error;

/// Errors raised when constructing or addressing a [Grid](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be between 1 and {max}, got {0}", max = crate::grid::MAX_GRID_SIZE)]
    InvalidSize(usize),
    #[error("cell ({row}, {col}) lies outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}
