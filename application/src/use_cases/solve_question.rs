//! Solve Question use case
//!
//! The router: classify, pick a route, run it, and fall back to a direct
//! answer wherever integer extraction comes up empty.

use super::classify_question::ClassifyQuestionUseCase;
use super::run_strategy::RunStrategyUseCase;
use super::self_consistency::SelfConsistencyUseCase;
use crate::ports::exchange_logger::ExchangeLogger;
use crate::ports::llm_gateway::ChatGateway;
use router_domain::{
    MathPath, QuestionLabel, RoutePlan, SolveOutcome, SolverPolicy, extract_integer,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for answering one question
///
/// Holds no state between calls beyond the immutable gateway and policy.
pub struct SolveQuestionUseCase<G: ChatGateway + 'static> {
    runner: RunStrategyUseCase<G>,
    policy: SolverPolicy,
}

impl<G: ChatGateway + 'static> Clone for SolveQuestionUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            runner: self.runner.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl<G: ChatGateway + 'static> SolveQuestionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        let policy = SolverPolicy::default();
        Self {
            runner: RunStrategyUseCase::new(gateway).with_timeout(policy.request_timeout),
            policy,
        }
    }

    pub fn with_policy(mut self, policy: SolverPolicy) -> Self {
        self.runner = self.runner.with_timeout(policy.request_timeout);
        self.policy = policy;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.runner = self.runner.with_logger(logger);
        self
    }

    pub fn policy(&self) -> &SolverPolicy {
        &self.policy
    }

    /// Answer `question`; always a trimmed string, possibly empty
    pub async fn execute(&self, question: &str) -> String {
        self.execute_with_outcome(question).await.answer
    }

    /// Answer `question` and report the label and route taken
    pub async fn execute_with_outcome(&self, question: &str) -> SolveOutcome {
        let label = ClassifyQuestionUseCase::new(self.runner.clone())
            .execute(question)
            .await;
        self.execute_with_label(question, label).await
    }

    /// Route with a known label, skipping classification
    pub async fn execute_with_label(&self, question: &str, label: QuestionLabel) -> SolveOutcome {
        let route = RoutePlan::for_question(&label, question, &self.policy);
        info!("Label {} -> route {}", label, route);

        match route {
            RoutePlan::Single {
                strategy,
                temperature,
            } => {
                let answer = self.runner.answer(strategy, question, temperature).await;
                SolveOutcome::new(answer, label, route)
            }
            RoutePlan::Math { path } => self.solve_math(question, label, route, path).await,
        }
    }

    async fn solve_math(
        &self,
        question: &str,
        label: QuestionLabel,
        route: RoutePlan,
        path: MathPath,
    ) -> SolveOutcome {
        let (candidate, tally) = match path {
            MathPath::SingleChainOfThought { temperature } => {
                let text = self.runner.chain_of_thought(question, temperature).await;
                (extract_integer(&text), None)
            }
            MathPath::SelfConsistency {
                attempts,
                temperature,
            } => {
                let result = SelfConsistencyUseCase::new(self.runner.clone())
                    .with_parallel(self.policy.parallel_attempts)
                    .execute(question, attempts, temperature)
                    .await;
                (result.winner, Some(result.tally))
            }
        };

        let outcome = match candidate {
            Some(answer) => SolveOutcome::new(answer, label, route),
            None => {
                warn!("No integer extracted, falling back to direct answer");
                let answer = self
                    .runner
                    .direct_answer(question, self.policy.fallback_temperature)
                    .await;
                SolveOutcome::new(answer, label, route).with_fallback(true)
            }
        };

        match tally {
            Some(tally) => outcome.with_tally(tally),
            None => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGateway;
    use router_domain::{ModelResponse, Strategy};

    fn solver(gateway: &Arc<ScriptedGateway>) -> SolveQuestionUseCase<ScriptedGateway> {
        SolveQuestionUseCase::new(Arc::clone(gateway))
    }

    fn word_problem() -> String {
        let text = "A farmer has a number of apples and sells some of them at the market \
                    every morning. After several days he counts what is left and writes it \
                    down. Given the amounts he sold each day and the number he started with, \
                    how many apples remain at the end of the week in his storage barn today?";
        assert!(text.chars().count() >= 100);
        text.to_string()
    }

    #[tokio::test]
    async fn test_short_math_fast_path() {
        let gateway = Arc::new(ScriptedGateway::texts(&[
            "math",
            "1. Add two and two.\nFinal answer: 4",
        ]));

        let outcome = solver(&gateway).execute_with_outcome("What is 2+2?").await;

        assert_eq!(outcome.answer, "4");
        assert_eq!(outcome.label, QuestionLabel::Math);
        assert!(!outcome.fallback_used);
        let requests = gateway.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].temperature, 0.5);
        assert_eq!(requests[1].max_tokens, 512);
    }

    #[tokio::test]
    async fn test_long_math_uses_majority_vote() {
        let gateway = Arc::new(ScriptedGateway::texts(&[
            "math",
            "Final answer: 12",
            "Final answer: 12",
            "Final answer: 7",
        ]));

        let outcome = solver(&gateway).execute_with_outcome(&word_problem()).await;

        assert_eq!(outcome.answer, "12");
        let tally = outcome.tally.expect("tally for self-consistency");
        assert_eq!(tally.count("12"), 2);
        assert_eq!(tally.count("7"), 1);
        let requests = gateway.requests();
        assert_eq!(requests.len(), 4);
        assert!(requests[1..].iter().all(|r| r.temperature == 0.3));
    }

    #[tokio::test]
    async fn test_unrecognized_mcq_uses_few_shot() {
        let gateway = Arc::new(ScriptedGateway::texts(&["trivia", " B \n"]));

        let outcome = solver(&gateway)
            .execute_with_outcome("Which is a primary color? A. red B. blue C. green D. yellow")
            .await;

        assert_eq!(outcome.answer, "B");
        assert_eq!(
            outcome.route,
            RoutePlan::Single {
                strategy: Strategy::FewShotMultipleChoice,
                temperature: 0.0
            }
        );
        assert!(gateway.requests()[1].prompt.contains("photosynthesis"));
    }

    #[tokio::test]
    async fn test_fast_path_falls_back_to_direct_answer() {
        let gateway = Arc::new(ScriptedGateway::texts(&["math", "I cannot say", " 9 "]));

        let outcome = solver(&gateway).execute_with_outcome("What is 3*3?").await;

        assert_eq!(outcome.answer, "9");
        assert!(outcome.fallback_used);
        let fallback = &gateway.requests()[2];
        assert_eq!(fallback.temperature, 0.0);
        assert_eq!(fallback.max_tokens, 128);
    }

    #[tokio::test]
    async fn test_failing_gateway_still_answers() {
        let gateway = Arc::new(ScriptedGateway::failing());

        let answer = solver(&gateway).execute_with_label(&word_problem(), QuestionLabel::Math).await;

        assert_eq!(answer.answer, "");
        assert!(answer.fallback_used);
        // three samples plus the direct fallback
        assert_eq!(gateway.requests().len(), 4);
    }

    #[tokio::test]
    async fn test_failing_gateway_unclassified() {
        let gateway = Arc::new(ScriptedGateway::failing());
        assert_eq!(solver(&gateway).execute("Who wrote Hamlet?").await, "");
    }

    #[tokio::test]
    async fn test_same_responses_same_answer() {
        let script = ["coding", "  def f(): pass  "];
        let first = Arc::new(ScriptedGateway::texts(&script));
        let second = Arc::new(ScriptedGateway::texts(&script));
        let question = "Write a function that does nothing.";

        let a = solver(&first).execute(question).await;
        let b = solver(&second).execute(question).await;

        assert_eq!(a, "def f(): pass");
        assert_eq!(a, b);
        assert_eq!(first.requests(), second.requests());
    }

    #[tokio::test]
    async fn test_policy_overrides_attempts() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            ModelResponse::success("math"),
            ModelResponse::success("Final answer: 5"),
        ]));
        let policy = SolverPolicy::default().with_self_consistency(1, 0.9);

        let answer = solver(&gateway)
            .with_policy(policy)
            .execute(&word_problem())
            .await;

        assert_eq!(answer, "5");
        assert_eq!(gateway.remaining(), 0);
        assert_eq!(gateway.requests()[1].temperature, 0.9);
    }
}
