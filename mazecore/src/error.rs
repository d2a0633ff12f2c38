use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Invalid grid dimensions {0:?}, both sides must be positive")]
    InvalidDimension(Dims),
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Dims),
    #[error("No path from {entry:?} to {exit:?}")]
    NoPath { entry: Dims, exit: Dims },
}
