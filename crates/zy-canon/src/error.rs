//! Error types for reference-table operations.

use thiserror::Error;
use zy_cast::{CastError, HexKey};

/// Alias for `Result<T, CanonError>`.
pub type CanonResult<T> = Result<T, CanonError>;

/// Errors that can occur loading or consulting the reference table.
#[derive(Debug, Error)]
pub enum CanonError {
    /// No record matches the key. With a full 64-entry table and a
    /// correctly encoded key this is unreachable; it signals broken
    /// reference data rather than a user mistake.
    #[error("no hexagram for key {0}; the reference data is incomplete")]
    UnknownKey(HexKey),

    /// The reference data file could not be read.
    #[error("reference data: {0}")]
    Io(#[from] std::io::Error),

    /// The reference data was not valid JSON in the expected shape.
    #[error("reference data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A figure could not be encoded or derived.
    #[error(transparent)]
    Cast(#[from] CastError),
}
