//! Classify Question use case
//!
//! One low-temperature, short-output call that labels a question.

use super::run_strategy::RunStrategyUseCase;
use crate::ports::llm_gateway::ChatGateway;
use router_domain::{ChatRequest, PromptTemplate, QuestionLabel};
use tracing::debug;

/// Output budget for the one-word label
pub const CLASSIFIER_MAX_TOKENS: u32 = 17;

/// Use case for labelling a question
pub struct ClassifyQuestionUseCase<G: ChatGateway + 'static> {
    runner: RunStrategyUseCase<G>,
}

impl<G: ChatGateway + 'static> ClassifyQuestionUseCase<G> {
    pub fn new(runner: RunStrategyUseCase<G>) -> Self {
        Self { runner }
    }

    /// Label `question`.
    ///
    /// Never fails and never retries: a failed exchange or an unexpected
    /// reply yields [`QuestionLabel::Unrecognized`].
    pub async fn execute(&self, question: &str) -> QuestionLabel {
        let request = ChatRequest::new(
            PromptTemplate::classifier_system(),
            PromptTemplate::classifier_prompt(question),
        )
        .with_temperature(0.0)
        .with_max_tokens(CLASSIFIER_MAX_TOKENS);

        let response = self.runner.send("classify", "classifier", request).await;
        let label = QuestionLabel::parse(response.text_or_empty());
        debug!("Classifier replied {:?} -> {}", response.text, label);
        label
    }
}
