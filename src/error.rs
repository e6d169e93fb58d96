use thiserror::Error;

/// Errors reported by [`Board`](crate::Board) and the stepper.
///
/// Both variants are recoverable: callers reject the operation and the board
/// they were invoked on is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("expected a {expected_height}x{expected_width} grid, got {height}x{width}")]
    InvalidDimensions {
        expected_height: usize,
        expected_width: usize,
        height: usize,
        width: usize,
    },
}
