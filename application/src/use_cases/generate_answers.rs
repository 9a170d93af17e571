//! Generate Answers use case
//!
//! Answers a question set one record at a time, resuming from whatever the
//! answer store already holds and saving after every question.

use super::shared::solve_guarded;
use super::solve_question::SolveQuestionUseCase;
use crate::config::BatchParams;
use crate::ports::answer_store::{AnswerStore, StoreError};
use crate::ports::llm_gateway::ChatGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use router_domain::{AnswerRecord, Question};
use thiserror::Error;
use tracing::{info, warn};

/// Problems found when checking a finished answers list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Answer count {answers} does not match question count {questions}")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("Answer {index} is {chars} characters; must be under {max}")]
    TooLong {
        index: usize,
        chars: usize,
        max: usize,
    },
}

/// Errors that can occur during batch answer generation
#[derive(Error, Debug)]
pub enum GenerateAnswersError {
    #[error("Answer store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Check that `answers` line up with `questions` and respect the length limit
pub fn validate_answers(
    questions: &[Question],
    answers: &[AnswerRecord],
    max_answer_chars: usize,
) -> Result<(), ValidationError> {
    if questions.len() != answers.len() {
        return Err(ValidationError::LengthMismatch {
            questions: questions.len(),
            answers: answers.len(),
        });
    }

    for (index, answer) in answers.iter().enumerate() {
        let chars = answer.output.chars().count();
        if chars >= max_answer_chars {
            return Err(ValidationError::TooLong {
                index,
                chars,
                max: max_answer_chars,
            });
        }
    }
    Ok(())
}

/// Summary of a batch run
#[derive(Debug, Clone)]
pub struct GenerateAnswersOutput {
    /// The full answers list, as saved
    pub answers: Vec<AnswerRecord>,
    /// Answers loaded from a previous run
    pub resumed: usize,
    /// Answers produced by this run
    pub newly_answered: usize,
    /// Questions whose solve task crashed and were recorded as ""
    pub failures: usize,
}

/// Use case for answering a whole question set with resume
pub struct GenerateAnswersUseCase<G: ChatGateway + 'static> {
    solver: SolveQuestionUseCase<G>,
    params: BatchParams,
}

impl<G: ChatGateway + 'static> GenerateAnswersUseCase<G> {
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

    pub async fn execute(
        &self,
        questions: &[Question],
        store: &dyn AnswerStore,
    ) -> Result<GenerateAnswersOutput, GenerateAnswersError> {
        self.execute_with_progress(questions, store, &NoProgress)
            .await
    }

    pub async fn execute_with_progress(
        &self,
        questions: &[Question],
        store: &dyn AnswerStore,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateAnswersOutput, GenerateAnswersError> {
        let mut answers = store.load()?;
        let resumed = answers.len();

        if resumed > questions.len() {
            warn!(
                "Store holds {} answers for {} questions",
                resumed,
                questions.len()
            );
        } else if resumed > 0 {
            info!("Resuming after {} saved answers", resumed);
        }

        progress.on_batch_start(questions.len(), resumed.min(questions.len()));

        let mut failures = 0;
        for (index, question) in questions.iter().enumerate().skip(resumed) {
            let (answer, success) = match solve_guarded(&self.solver, index, question.input()).await
            {
                Some(answer) => (answer, true),
                None => {
                    failures += 1;
                    (String::new(), false)
                }
            };

            progress.on_question_complete(index, &answer, success);
            answers.push(AnswerRecord::new(answer));
            store.save(&answers)?;
        }

        let newly_answered = answers.len() - resumed;
        progress.on_batch_complete(newly_answered);
        info!(
            "Answered {} new questions ({} resumed, {} crashed)",
            newly_answered, resumed, failures
        );

        validate_answers(questions, &answers, self.params.max_answer_chars)?;

        Ok(GenerateAnswersOutput {
            answers,
            resumed,
            newly_answered,
            failures,
        })
    }
}
