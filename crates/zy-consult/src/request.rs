//! The outbound interpretation payload.

use serde::{Deserialize, Serialize};
use zy_canon::{Hexagram, Reading};

use crate::classify::QuestionType;
use crate::topic::Topic;

/// Identifier of the text-generation model the backend should use.
pub const DEFAULT_MODEL: &str = "gemma3:4b";

/// One changing line's commentary, drawn from the primary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangingLine {
    /// Line position, 1..6 bottom up.
    pub line: u8,
    /// The line's oracle text.
    pub text: String,
    /// Supplementary commentary.
    pub comments: String,
}

/// The payload sent to the interpretation service for a resolved reading.
///
/// Changing-line texts come from the primary record only; the relating
/// hexagram contributes title, judgment, and image, never line commentary.
/// When no relating figure exists every relating field is null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    /// The workflow generation that issued this request. Not on the wire;
    /// used to discard results delivered after a restart.
    #[serde(skip)]
    pub generation: u64,
    /// Primary hexagram number.
    pub primary: u8,
    /// Relating hexagram number, when one exists.
    pub relating: Option<u8>,
    /// Text-generation model identifier.
    pub model: String,
    /// The question as submitted.
    pub question: Option<String>,
    /// The classified question type.
    pub question_type: Option<QuestionType>,
    /// The confirmed topic label.
    pub topic: Option<String>,
    /// Primary hexagram title, `"1. The Creative"` form.
    pub primary_title: String,
    /// Primary judgment text.
    pub primary_judgment: String,
    /// Primary image text.
    pub primary_image: String,
    /// Commentary for each changing line, bottom up.
    pub changing_lines: Vec<ChangingLine>,
    /// Relating hexagram title, when one exists.
    pub relating_title: Option<String>,
    /// Relating judgment text, when one exists.
    pub relating_judgment: Option<String>,
    /// Relating image text, when one exists.
    pub relating_image: Option<String>,
}

impl InterpretationRequest {
    /// Assemble the payload from a resolved reading and its question
    /// context.
    pub fn assemble(
        reading: &Reading,
        question: Option<&str>,
        question_type: Option<QuestionType>,
        topic: Option<&Topic>,
        model: &str,
        generation: u64,
    ) -> Self {
        let changing_lines = reading
            .changing_positions
            .iter()
            .map(|&position| {
                let commentary = reading.primary.line_text(position);
                ChangingLine {
                    line: position,
                    text: commentary.map(|c| c.text.clone()).unwrap_or_default(),
                    comments: commentary.map(|c| c.comments.clone()).unwrap_or_default(),
                }
            })
            .collect();
        let relating = reading.relating.as_ref();
        Self {
            generation,
            primary: reading.primary.number,
            relating: relating.map(|h| h.number),
            model: model.to_string(),
            question: question.map(str::to_string),
            question_type,
            topic: topic.map(Topic::to_string),
            primary_title: reading.primary.title(),
            primary_judgment: reading.primary.judgment.clone(),
            primary_image: reading.primary.image.clone(),
            changing_lines,
            relating_title: relating.map(Hexagram::title),
            relating_judgment: relating.map(|h| h.judgment.clone()),
            relating_image: relating.map(|h| h.image.clone()),
        }
    }
}
