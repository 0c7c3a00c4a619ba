use thiserror::Error;

/// Errors raised by grid construction, cell lookup and pattern loading
#[derive(Debug, Error)]
pub enum LifeError {
    /// Direct cell lookup outside the board (lookups never wrap)
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    MalformedDimensions { rows: usize, cols: usize },

    #[error("expected {expected} cell values, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("pattern input is missing the {0} count")]
    MissingDimension(&'static str),

    #[error("invalid token {token:?} in pattern input")]
    InvalidToken { token: String },

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    #[error("failed to read pattern: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
