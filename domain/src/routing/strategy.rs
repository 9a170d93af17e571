//! Answering strategies
//!
//! Each [`Strategy`] is one model call: a fixed system instruction, a prompt
//! built from the question and an output budget.

use crate::prompt::PromptTemplate;
use crate::session::ChatRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-call prompting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Generic "answer only"; the universal fallback
    DirectAnswer,
    /// Up to four reasoning steps then a `Final answer:` line; returns raw text
    ChainOfThought,
    /// Three worked examples, reply with a letter or short phrase
    FewShotMultipleChoice,
    /// Concise question answering for common-sense and unlabelled questions
    DomainDirectAnswer,
    Coding,
    FuturePrediction,
    Planning,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::DirectAnswer => "direct_answer",
            Strategy::ChainOfThought => "chain_of_thought",
            Strategy::FewShotMultipleChoice => "few_shot_multiple_choice",
            Strategy::DomainDirectAnswer => "domain_direct_answer",
            Strategy::Coding => "coding",
            Strategy::FuturePrediction => "future_prediction",
            Strategy::Planning => "planning",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Strategy::DirectAnswer => PromptTemplate::direct_system(),
            Strategy::ChainOfThought => PromptTemplate::chain_of_thought_system(),
            Strategy::FewShotMultipleChoice => PromptTemplate::multiple_choice_system(),
            Strategy::DomainDirectAnswer => PromptTemplate::domain_direct_system(),
            Strategy::Coding => PromptTemplate::coding_system(),
            Strategy::FuturePrediction => PromptTemplate::future_prediction_system(),
            Strategy::Planning => PromptTemplate::planning_system(),
        }
    }

    /// Build the user prompt; direct strategies send the question verbatim
    pub fn user_prompt(&self, question: &str) -> String {
        match self {
            Strategy::ChainOfThought => PromptTemplate::chain_of_thought_prompt(question),
            Strategy::FewShotMultipleChoice => PromptTemplate::multiple_choice_prompt(question),
            _ => question.to_string(),
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            Strategy::ChainOfThought => 512,
            Strategy::Coding => 256,
            _ => 128,
        }
    }

    /// Build the chat request for `question` at `temperature`
    pub fn request(&self, question: &str, temperature: f32) -> ChatRequest {
        ChatRequest::new(self.system_prompt(), self.user_prompt(question))
            .with_temperature(temperature)
            .with_max_tokens(self.max_tokens())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
