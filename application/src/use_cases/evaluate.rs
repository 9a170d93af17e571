//! Evaluate use case
//!
//! Scores the router against a dev set with gold outputs.

use super::shared::solve_guarded;
use super::solve_question::SolveQuestionUseCase;
use crate::config::BatchParams;
use crate::ports::llm_gateway::ChatGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use router_domain::{EvaluationReport, Question};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluateError {
    #[error("No questions to evaluate")]
    NoQuestions,
}

/// Use case for dev-set evaluation
pub struct EvaluateUseCase<G: ChatGateway + 'static> {
    solver: SolveQuestionUseCase<G>,
    params: BatchParams,
}

impl<G: ChatGateway + 'static> EvaluateUseCase<G> {
    pub fn new(solver: SolveQuestionUseCase<G>) -> Self {
        Self {
            solver,
            params: BatchParams::default(),
        }
    }

    pub fn with_params(mut self, params: BatchParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, questions: &[Question]) -> Result<EvaluationReport, EvaluateError> {
        self.execute_with_progress(questions, &NoProgress).await
    }

    /// Solve the first `evaluation_limit` questions and compare against gold
    pub async fn execute_with_progress(
        &self,
        questions: &[Question],
        progress: &dyn ProgressNotifier,
    ) -> Result<EvaluationReport, EvaluateError> {
        let limit = self
            .params
            .evaluation_limit
            .unwrap_or(questions.len())
            .min(questions.len());
        let subset = &questions[..limit];
        if subset.is_empty() {
            return Err(EvaluateError::NoQuestions);
        }

        info!("Evaluating {} of {} questions", limit, questions.len());
        progress.on_batch_start(limit, 0);

        let mut report = EvaluationReport::new(self.params.mistake_limit);
        for (index, question) in subset.iter().enumerate() {
            let predicted = solve_guarded(&self.solver, index, question.input()).await;
            let success = predicted.is_some();
            let predicted = predicted.unwrap_or_default();

            report.record(index + 1, question, &predicted);
            progress.on_question_complete(index, &predicted, success);
        }

        progress.on_batch_complete(limit);
        info!(
            "Accuracy {}/{} ({:.2}%), {} skipped without gold",
            report.correct,
            report.total,
            report.accuracy() * 100.0,
            report.skipped
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGateway;
    use std::sync::Arc;

    fn evaluator(gateway: ScriptedGateway) -> EvaluateUseCase<ScriptedGateway> {
        EvaluateUseCase::new(SolveQuestionUseCase::new(Arc::new(gateway)))
    }

    #[tokio::test]
    async fn test_scores_exact_match_per_domain() {
        let gateway = ScriptedGateway::texts(&[
            "math",
            "Final answer: 4",
            "commonSense",
            " Paris ",
            "commonSense",
            "Rome",
        ]);
        let questions = vec![
            Question::new("What is 2+2?").with_domain("math").with_gold("4"),
            Question::new("Capital of France?").with_domain("geo").with_gold(" Paris"),
            Question::new("Capital of Spain?").with_domain("geo").with_gold("Madrid"),
        ];

        let report = evaluator(gateway).execute(&questions).await.unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.correct, 2);
        assert_eq!(report.domain("math").unwrap().correct, 1);
        assert_eq!(report.domain("geo").unwrap().total, 2);
        assert_eq!(report.mistakes.len(), 1);
        assert_eq!(report.mistakes[0].index, 3);
        assert_eq!(report.mistakes[0].predicted, "Rome");
    }

    #[tokio::test]
    async fn test_limit_truncates_question_set() {
        let gateway = ScriptedGateway::texts(&["commonSense", "yes"]);
        let questions = vec![
            Question::new("first").with_gold("yes"),
            Question::new("second").with_gold("no"),
        ];

        let report = evaluator(gateway)
            .with_params(BatchParams::default().with_evaluation_limit(Some(1)))
            .execute(&questions)
            .await
            .unwrap();

        assert_eq!(report.total, 1);
        assert_eq!(report.accuracy(), 1.0);
    }

    #[tokio::test]
    async fn test_questions_without_gold_are_skipped() {
        let gateway = ScriptedGateway::texts(&["commonSense", "maybe"]);
        let questions = vec![Question::new("no gold here")];

        let report = evaluator(gateway).execute(&questions).await.unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.skipped, 1);
    }

    #[tokio::test]
    async fn test_empty_set_is_an_error() {
        let result = evaluator(ScriptedGateway::failing()).execute(&[]).await;
        assert_eq!(result.unwrap_err(), EvaluateError::NoQuestions);
    }
}
