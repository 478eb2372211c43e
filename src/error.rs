use crate::Index;
use thiserror::Error;

/// Everything that can go wrong when working with a [`Universe`](crate::Universe) and its vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error("Index {index} is out of bounds for a universe of size {size}")]
    IndexOutOfBounds { index: Index, size: usize },
    #[error("Expected exactly {expected} universe elements, got {got}")]
    InvalidArgument { expected: usize, got: usize },
    #[error("Vectors belong to different universes")]
    MismatchedUniverse,
    #[error("Cursor is at the terminal position")]
    TerminalCursor,
}
