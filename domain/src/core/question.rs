//! Question and answer records

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a string, number or bool and keep it as text; `null` means absent
fn scalar_as_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string, number or bool, got {other}"
        ))),
    }
}

/// A benchmark question (Value Object)
///
/// Mirrors one entry of a questions file. Only `input` is read by the
/// routing policy; `domain` and `output` (the gold answer) are used by
/// evaluation and inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    input: String,
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    domain: Option<String>,
    #[serde(
        default,
        deserialize_with = "scalar_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    output: Option<String>,
}

impl Question {
    /// Create a question with no domain and no gold answer
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            domain: None,
            output: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_gold(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// The question text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Domain label from the dataset, if any
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Gold answer, if any
    pub fn gold(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}

/// One entry of an answers file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub output: String,
}

impl AnswerRecord {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
