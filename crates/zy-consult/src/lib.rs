//! The consultation workflow: question intake through interpretation.
//!
//! A [`Consultation`] walks one user through the full sequence: submit a
//! question, classify it remotely (degrading silently to a local fallback),
//! confirm a topic, cast six lines, resolve the reading against the canon,
//! and request a natural-language interpretation from the oracle backend.
//! The state machine itself performs no I/O; a driver passes its
//! generation-tagged requests to the [`service`] contracts and delivers the
//! results back, so stale responses from a restarted consultation are
//! ignored.

pub mod classify;
pub mod consultation;
pub mod error;
pub mod http;
pub mod request;
pub mod service;
pub mod topic;

pub use classify::{Classification, QuestionType, TopicAlternative};
pub use consultation::{CastOutcome, ClassificationRequest, Consultation, Delivery, Phase};
pub use error::{ConsultError, ConsultResult};
pub use http::OracleClient;
pub use request::{ChangingLine, DEFAULT_MODEL, InterpretationRequest};
pub use service::{OracleInterpreter, QuestionClassifier, ServiceError, ServiceResult};
pub use topic::Topic;
