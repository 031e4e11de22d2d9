//! Error types for casting operations.

use thiserror::Error;

/// Alias for `Result<T, CastError>`.
pub type CastResult<T> = Result<T, CastError>;

/// Errors that can occur while casting or encoding a figure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CastError {
    /// The figure already holds six lines; no further casts are accepted.
    #[error("figure already has six lines")]
    FigureFull,

    /// An operation needed a complete figure but fewer lines were cast.
    #[error("figure has {0} of six lines")]
    Incomplete(usize),

    /// No line is changing, so the relating figure does not exist.
    #[error("no changing lines; the relating figure does not exist")]
    NoChangingLines,

    /// A coin index outside 0..3 was addressed.
    #[error("no coin at index {0}")]
    CoinIndex(usize),

    /// A key string was not six `1`/`0` characters.
    #[error("invalid key \"{0}\": expected six '1'/'0' characters")]
    InvalidKey(String),
}
