//! The consultation state machine.

use std::sync::Arc;

use zy_canon::{Canon, Reading};
use zy_cast::{Figure, Line, Toss};

use crate::classify::Classification;
use crate::error::{ConsultError, ConsultResult};
use crate::request::{DEFAULT_MODEL, InterpretationRequest};
use crate::service::ServiceError;
use crate::topic::Topic;

/// Where a consultation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user's question.
    AwaitingQuestion,
    /// The classification request is outstanding.
    Classifying,
    /// The detected topic is shown; the user may override it.
    ConfirmingTopic,
    /// Up to six casting steps.
    Casting,
    /// The reading is resolved; the interpretation is outstanding.
    AwaitingInterpretation,
    /// Interpretation text received. Terminal until restart.
    InterpretationReady,
    /// Interpretation failed; the reading remains. Terminal until restart.
    InterpretationFailed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingQuestion => write!(f, "awaiting the question"),
            Self::Classifying => write!(f, "classifying the question"),
            Self::ConfirmingTopic => write!(f, "confirming the topic"),
            Self::Casting => write!(f, "casting"),
            Self::AwaitingInterpretation => write!(f, "awaiting the interpretation"),
            Self::InterpretationReady => write!(f, "complete"),
            Self::InterpretationFailed => write!(f, "complete (interpretation failed)"),
        }
    }
}

/// A generation-tagged classification request for the driver to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    /// The generation that issued the request; pass it back on delivery.
    pub generation: u64,
    /// The question to classify.
    pub question: String,
}

/// What one casting step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOutcome {
    /// The line was recorded at this position (1..6); more casts remain.
    Cast {
        /// Position of the recorded line, bottom up.
        position: u8,
    },
    /// The sixth line completed the figure and the reading is resolved.
    Resolved,
}

/// Whether a delivered remote result was applied or ignored as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Delivery {
    /// The result was applied to the current consultation.
    Applied,
    /// The result belonged to an earlier generation and was discarded.
    Stale,
}

/// One user's consultation from question to interpretation.
///
/// The machine holds all mutable state and performs no I/O itself: remote
/// work is handed out as generation-tagged requests and results are
/// delivered back through the `apply_*` methods. Restarting bumps the
/// generation so results from an abandoned run are discarded on arrival.
pub struct Consultation {
    canon: Arc<Canon>,
    model: String,
    phase: Phase,
    generation: u64,
    question: String,
    classification: Option<Classification>,
    topic: Option<Topic>,
    figure: Figure,
    reading: Option<Reading>,
    interpretation: Option<String>,
    interpretation_error: Option<String>,
    request_issued: Option<u64>,
}

impl Consultation {
    /// Start a fresh consultation against the given reference table.
    pub fn new(canon: Arc<Canon>) -> Self {
        Self {
            canon,
            model: DEFAULT_MODEL.to_string(),
            phase: Phase::AwaitingQuestion,
            generation: 0,
            question: String::new(),
            classification: None,
            topic: None,
            figure: Figure::new(),
            reading: None,
            interpretation: None,
            interpretation_error: None,
            request_issued: None,
        }
    }

    /// Use a different text-generation model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current generation; bumped on every restart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The question as submitted.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The classification, once delivered.
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    /// The confirmed topic.
    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    /// The figure as cast so far.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// The resolved reading, once the sixth line lands.
    pub fn reading(&self) -> Option<&Reading> {
        self.reading.as_ref()
    }

    /// The interpretation text, once received.
    pub fn interpretation(&self) -> Option<&str> {
        self.interpretation.as_deref()
    }

    /// The interpretation failure message, if the request failed.
    pub fn interpretation_error(&self) -> Option<&str> {
        self.interpretation_error.as_deref()
    }

    /// Submit the question and hand out the classification request.
    ///
    /// At most one classification is in flight: this is only accepted
    /// while awaiting the question.
    pub fn submit_question(&mut self, text: &str) -> ConsultResult<ClassificationRequest> {
        self.expect_phase(Phase::AwaitingQuestion, "submit a question")?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ConsultError::EmptyQuestion);
        }
        self.question = text.to_string();
        self.phase = Phase::Classifying;
        Ok(ClassificationRequest {
            generation: self.generation,
            question: self.question.clone(),
        })
    }

    /// Deliver the classifier's answer, or its failure.
    ///
    /// A failure degrades silently to [`Classification::fallback`]; the
    /// consultation proceeds either way. Results for another generation
    /// are discarded.
    pub fn apply_classification(
        &mut self,
        generation: u64,
        outcome: Result<Classification, ServiceError>,
    ) -> Delivery {
        if generation != self.generation || self.phase != Phase::Classifying {
            return Delivery::Stale;
        }
        let classification = outcome.unwrap_or_else(|_| Classification::fallback());
        self.topic = Some(classification.detected_topic());
        self.classification = Some(classification);
        self.phase = Phase::ConfirmingTopic;
        Delivery::Applied
    }

    /// Override the detected topic.
    ///
    /// Any topic is accepted, including labels outside the fixed set.
    pub fn choose_topic(&mut self, topic: Topic) -> ConsultResult<()> {
        self.expect_phase(Phase::ConfirmingTopic, "choose a topic")?;
        self.topic = Some(topic);
        Ok(())
    }

    /// Confirm the topic and open the casting phase.
    pub fn begin_casting(&mut self) -> ConsultResult<()> {
        self.expect_phase(Phase::ConfirmingTopic, "begin casting")?;
        self.phase = Phase::Casting;
        Ok(())
    }

    /// Record one toss as the next line.
    ///
    /// The sixth line resolves the reading synchronously; a reference-table
    /// miss surfaces as a [`ConsultError::Canon`] fault.
    pub fn cast(&mut self, toss: Toss) -> ConsultResult<CastOutcome> {
        self.expect_phase(Phase::Casting, "cast a line")?;
        let position = self.figure.cast(Line::from_toss(toss))?;
        if !self.figure.is_complete() {
            return Ok(CastOutcome::Cast { position });
        }
        let reading = Reading::resolve(&self.figure, &self.canon)?;
        self.reading = Some(reading);
        self.phase = Phase::AwaitingInterpretation;
        Ok(CastOutcome::Resolved)
    }

    /// Hand out the interpretation request for the resolved reading.
    ///
    /// Issued exactly once per generation: asking again while the request
    /// is outstanding is an error, and a restart invalidates the guard
    /// along with everything else.
    pub fn interpretation_request(&mut self) -> ConsultResult<InterpretationRequest> {
        self.expect_phase(Phase::AwaitingInterpretation, "request an interpretation")?;
        if self.request_issued == Some(self.generation) {
            return Err(ConsultError::RequestAlreadyIssued);
        }
        let Some(reading) = self.reading.as_ref() else {
            return Err(ConsultError::OutOfPhase {
                action: "request an interpretation",
                phase: self.phase,
            });
        };
        let request = InterpretationRequest::assemble(
            reading,
            Some(&self.question),
            self.classification.as_ref().map(|c| c.question_type),
            self.topic.as_ref(),
            &self.model,
            self.generation,
        );
        self.request_issued = Some(self.generation);
        Ok(request)
    }

    /// Deliver the interpretation text, or the failure message.
    ///
    /// Failure text is kept verbatim; the resolved reading stays available
    /// in either terminal phase. Results for another generation are
    /// discarded.
    pub fn apply_interpretation(
        &mut self,
        generation: u64,
        outcome: Result<String, ServiceError>,
    ) -> Delivery {
        if generation != self.generation || self.phase != Phase::AwaitingInterpretation {
            return Delivery::Stale;
        }
        match outcome {
            Ok(text) => {
                self.interpretation = Some(text);
                self.phase = Phase::InterpretationReady;
            }
            Err(err) => {
                self.interpretation_error = Some(err.to_string());
                self.phase = Phase::InterpretationFailed;
            }
        }
        Delivery::Applied
    }

    /// Discard everything and return to question intake.
    ///
    /// Allowed from any phase. The generation is bumped so in-flight
    /// results deliver as stale.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.phase = Phase::AwaitingQuestion;
        self.question.clear();
        self.classification = None;
        self.topic = None;
        self.figure = Figure::new();
        self.reading = None;
        self.interpretation = None;
        self.interpretation_error = None;
        self.request_issued = None;
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> ConsultResult<()> {
        if self.phase != expected {
            return Err(ConsultError::OutOfPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }
}
