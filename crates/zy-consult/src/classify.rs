//! Question classification results.

use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Confidence above which a closed question draws an advisory notice.
///
/// The notice is advisory only; it never blocks the consultation.
pub const CLOSED_NOTICE_THRESHOLD: f64 = 0.6;

/// Topic confidence below which the detected topic is marked uncertain.
pub const TOPIC_UNCERTAIN_THRESHOLD: f64 = 0.35;

/// Whether a question is open-ended or a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    /// An open-ended "how" or "what" question.
    Open,
    /// A yes/no question.
    Closed,
    /// Any other value the classifier may report.
    Unknown,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl Serialize for QuestionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "open" => Self::Open,
            "closed" => Self::Closed,
            _ => Self::Unknown,
        })
    }
}

/// A runner-up topic with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicAlternative {
    /// The alternative topic label.
    pub topic: String,
    /// Classifier confidence for this label, 0.0..=1.0.
    pub confidence: f64,
}

/// The classifier's judgment of a submitted question.
///
/// Immutable once received. When the remote call fails, [`fallback`]
/// substitutes locally and the consultation proceeds without surfacing
/// the failure.
///
/// [`fallback`]: Classification::fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Open or closed.
    pub question_type: QuestionType,
    /// Confidence in the question type, 0.0..=1.0.
    pub confidence: f64,
    /// The detected topic label.
    pub topic: String,
    /// Confidence in the detected topic, 0.0..=1.0.
    pub topic_confidence: f64,
    /// Ranked runner-up topics.
    #[serde(default)]
    pub topic_alternatives: Vec<TopicAlternative>,
}

impl Classification {
    /// The local substitute used when the classifier is unreachable.
    pub fn fallback() -> Self {
        Self {
            question_type: QuestionType::Open,
            confidence: 0.0,
            topic: "Unknown".to_string(),
            topic_confidence: 0.0,
            topic_alternatives: Vec::new(),
        }
    }

    /// The detected topic parsed into the fixed set where possible.
    pub fn detected_topic(&self) -> Topic {
        Topic::parse(&self.topic)
    }

    /// True when the question reads as yes/no confidently enough to warn.
    pub fn closed_question_notice(&self) -> bool {
        self.question_type == QuestionType::Closed && self.confidence > CLOSED_NOTICE_THRESHOLD
    }

    /// True when the detected topic is too uncertain to trust.
    pub fn topic_uncertain(&self) -> bool {
        self.topic_confidence < TOPIC_UNCERTAIN_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_shape() {
        let fallback = Classification::fallback();
        assert_eq!(fallback.question_type, QuestionType::Open);
        assert_eq!(fallback.confidence, 0.0);
        assert_eq!(fallback.topic, "Unknown");
        assert_eq!(fallback.topic_confidence, 0.0);
        assert!(fallback.topic_alternatives.is_empty());
        assert!(fallback.detected_topic().is_unknown());
    }

    #[test]
    fn closed_notice_requires_confidence_above_threshold() {
        let mut c = Classification::fallback();
        c.question_type = QuestionType::Closed;
        c.confidence = 0.6;
        assert!(!c.closed_question_notice());
        c.confidence = 0.61;
        assert!(c.closed_question_notice());
        c.question_type = QuestionType::Open;
        c.confidence = 0.99;
        assert!(!c.closed_question_notice());
    }

    #[test]
    fn topic_uncertainty_threshold() {
        let mut c = Classification::fallback();
        c.topic_confidence = 0.34;
        assert!(c.topic_uncertain());
        c.topic_confidence = 0.35;
        assert!(!c.topic_uncertain());
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let json = r#"{
            "question_type": "closed",
            "confidence": 0.75,
            "topic": "Career",
            "topic_confidence": 0.62,
            "topic_alternatives": [
                { "topic": "Career", "confidence": 0.62 },
                { "topic": "Transition", "confidence": 0.21 }
            ]
        }"#;
        let c: Classification = serde_json::from_str(json).unwrap();
        assert_eq!(c.question_type, QuestionType::Closed);
        assert_eq!(c.detected_topic(), Topic::Career);
        assert_eq!(c.topic_alternatives.len(), 2);
        assert_eq!(c.topic_alternatives[1].topic, "Transition");
    }

    #[test]
    fn unrecognized_question_type_tolerated() {
        let json = r#"{
            "question_type": "rhetorical",
            "confidence": 0.4,
            "topic": "Love",
            "topic_confidence": 0.5,
            "topic_alternatives": []
        }"#;
        let c: Classification = serde_json::from_str(json).unwrap();
        assert_eq!(c.question_type, QuestionType::Unknown);
    }
}
