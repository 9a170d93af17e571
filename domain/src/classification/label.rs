//! Question label value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category assigned to a question by the classifier (Value Object)
///
/// The five canonical categories are matched case-insensitively after
/// trimming. Anything else is kept verbatim (normalized) in
/// [`QuestionLabel::Unrecognized`] so routing can fall through to the
/// heuristic detectors instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionLabel {
    Math,
    Coding,
    FuturePrediction,
    Planning,
    CommonSense,
    Unrecognized(String),
}

impl QuestionLabel {
    /// All canonical labels, in the order they are offered to the classifier
    pub const CANONICAL: [QuestionLabel; 5] = [
        QuestionLabel::Math,
        QuestionLabel::Coding,
        QuestionLabel::FuturePrediction,
        QuestionLabel::Planning,
        QuestionLabel::CommonSense,
    ];

    /// Wire-level name of this label
    pub fn as_str(&self) -> &str {
        match self {
            QuestionLabel::Math => "math",
            QuestionLabel::Coding => "coding",
            QuestionLabel::FuturePrediction => "futurePrediction",
            QuestionLabel::Planning => "planning",
            QuestionLabel::CommonSense => "commonSense",
            QuestionLabel::Unrecognized(raw) => raw,
        }
    }

    /// Parse raw classifier output.
    ///
    /// Trims and lower-cases the text, then compares it against the
    /// lower-cased canonical names. A reply such as `"Math"` or
    /// `" futureprediction\n"` is recognized; `"futurePlanning"` or
    /// `"math."` is not.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        Self::CANONICAL
            .into_iter()
            .find(|label| label.as_str().to_lowercase() == normalized)
            .unwrap_or(QuestionLabel::Unrecognized(normalized))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, QuestionLabel::Unrecognized(_))
    }
}

impl Default for QuestionLabel {
    fn default() -> Self {
        QuestionLabel::Unrecognized(String::new())
    }
}

impl std::fmt::Display for QuestionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionLabel::Unrecognized(raw) if raw.is_empty() => write!(f, "unknown"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl std::str::FromStr for QuestionLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(QuestionLabel::parse(s))
    }
}

impl Serialize for QuestionLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(QuestionLabel::parse(&s))
    }
}
