use thiserror::Error;

/// Errors produced by board mutation and game bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("index {index} is out of bounds (must be 0-8)")]
    IndexOutOfBounds { index: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid board '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },
}

/// Convenience alias for results carrying the crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
