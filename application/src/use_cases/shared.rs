//! Shared helpers for the batch use cases.

use super::solve_question::SolveQuestionUseCase;
use crate::ports::llm_gateway::ChatGateway;
use tracing::error;

/// Solve one question in its own task so a panic cannot abort the batch.
///
/// Returns `None` when the task panicked or was cancelled.
pub(crate) async fn solve_guarded<G: ChatGateway + 'static>(
    solver: &SolveQuestionUseCase<G>,
    index: usize,
    question: &str,
) -> Option<String> {
    let solver = solver.clone();
    let question = question.to_string();

    match tokio::spawn(async move { solver.execute(&question).await }).await {
        Ok(answer) => Some(answer),
        Err(e) => {
            error!("Question {} crashed: {}", index + 1, e);
            None
        }
    }
}
