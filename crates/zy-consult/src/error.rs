//! Error types for the consultation workflow.

use thiserror::Error;
use zy_canon::CanonError;
use zy_cast::CastError;

use crate::consultation::Phase;

/// Alias for `Result<T, ConsultError>`.
pub type ConsultResult<T> = Result<T, ConsultError>;

/// Errors that can occur while driving a consultation.
#[derive(Debug, Error)]
pub enum ConsultError {
    /// The submitted question was empty or whitespace.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// The operation is not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    OutOfPhase {
        /// The attempted operation.
        action: &'static str,
        /// The phase the consultation was in.
        phase: Phase,
    },

    /// The interpretation request for this figure was already issued.
    #[error("the interpretation request for this figure was already issued")]
    RequestAlreadyIssued,

    /// Resolution against the reference table failed.
    #[error(transparent)]
    Canon(#[from] CanonError),

    /// A casting step failed.
    #[error(transparent)]
    Cast(#[from] CastError),
}
