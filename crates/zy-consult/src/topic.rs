//! Consultation topics.

use serde::{Deserialize, Serialize};

/// The subject area a question is asked about.
///
/// Eight fixed labels are offered for selection. The classifier may report
/// a label outside the set; such values stay displayable and selectable,
/// since the fixed set is an affordance, not a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Work, roles, and professional decisions.
    Career,
    /// Study and learning.
    Academics,
    /// Romantic relationships.
    Love,
    /// Family matters.
    Family,
    /// Finances and resources.
    Money,
    /// Wellbeing and habits.
    Health,
    /// Disputes and friction.
    Conflict,
    /// Endings, beginnings, and change.
    Transition,
    /// Sentinel when no topic was detected.
    Unknown,
    /// A label outside the fixed set.
    Other(String),
}

impl Topic {
    /// The eight fixed labels, in display order.
    pub const FIXED: [Self; 8] = [
        Self::Career,
        Self::Academics,
        Self::Love,
        Self::Family,
        Self::Money,
        Self::Health,
        Self::Conflict,
        Self::Transition,
    ];

    /// Parse a label, case-insensitively, into the fixed set where possible.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "career" => Self::Career,
            "academics" => Self::Academics,
            "love" => Self::Love,
            "family" => Self::Family,
            "money" => Self::Money,
            "health" => Self::Health,
            "conflict" => Self::Conflict,
            "transition" => Self::Transition,
            "unknown" | "" => Self::Unknown,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// True for the sentinel value.
    pub fn is_unknown(&self) -> bool {
        *self == Self::Unknown
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Career => write!(f, "Career"),
            Self::Academics => write!(f, "Academics"),
            Self::Love => write!(f, "Love"),
            Self::Family => write!(f, "Family"),
            Self::Money => write!(f, "Money"),
            Self::Health => write!(f, "Health"),
            Self::Conflict => write!(f, "Conflict"),
            Self::Transition => write!(f, "Transition"),
            Self::Unknown => write!(f, "Unknown"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

impl Serialize for Topic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
