//! Self-Consistency use case
//!
//! Samples chain-of-thought several times and keeps the most frequent
//! extracted integer.
//!
//! Attempts run sequentially by default. With parallel attempts enabled they
//! are spawned on a [`JoinSet`] and re-ordered by attempt index before
//! tallying, so the tie-break sees the same order either way.

use super::run_strategy::RunStrategyUseCase;
use crate::ports::llm_gateway::ChatGateway;
use router_domain::{FrequencyTally, extract_integer};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Result of a self-consistency vote
#[derive(Debug, Clone, PartialEq)]
pub struct SelfConsistencyResult {
    /// Majority candidate; `None` when no attempt produced an integer
    pub winner: Option<String>,
    /// Per-candidate counts in first-seen order
    pub tally: FrequencyTally,
    /// Number of chain-of-thought calls issued
    pub attempts: usize,
}

/// Use case for the majority-vote aggregator
pub struct SelfConsistencyUseCase<G: ChatGateway + 'static> {
    runner: RunStrategyUseCase<G>,
    parallel: bool,
}

impl<G: ChatGateway + 'static> SelfConsistencyUseCase<G> {
    pub fn new(runner: RunStrategyUseCase<G>) -> Self {
        Self {
            runner,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Majority candidate over `attempts` chain-of-thought samples
    pub async fn vote(&self, question: &str, attempts: usize, temperature: f32) -> Option<String> {
        self.execute(question, attempts, temperature).await.winner
    }

    /// Run the vote and keep the full tally
    pub async fn execute(
        &self,
        question: &str,
        attempts: usize,
        temperature: f32,
    ) -> SelfConsistencyResult {
        info!(
            "Self-consistency: {} attempts @ {}{}",
            attempts,
            temperature,
            if self.parallel { " (parallel)" } else { "" }
        );

        let candidates = if self.parallel {
            self.sample_parallel(question, attempts, temperature).await
        } else {
            self.sample_sequential(question, attempts, temperature).await
        };

        let mut tally = FrequencyTally::new();
        for candidate in candidates {
            tally.record_opt(candidate);
        }

        let winner = tally.winner().map(str::to_string);
        match &winner {
            Some(answer) => debug!("Vote {} -> {}", tally.summary(), answer),
            None => warn!("No attempt produced an integer answer"),
        }

        SelfConsistencyResult {
            winner,
            tally,
            attempts,
        }
    }

    async fn sample_sequential(
        &self,
        question: &str,
        attempts: usize,
        temperature: f32,
    ) -> Vec<Option<String>> {
        let mut candidates = Vec::with_capacity(attempts);
        for attempt in 0..attempts {
            let text = self.runner.chain_of_thought(question, temperature).await;
            let candidate = extract_integer(&text);
            debug!("Attempt {} extracted {:?}", attempt + 1, candidate);
            candidates.push(candidate);
        }
        candidates
    }

    async fn sample_parallel(
        &self,
        question: &str,
        attempts: usize,
        temperature: f32,
    ) -> Vec<Option<String>> {
        let mut join_set = JoinSet::new();

        for attempt in 0..attempts {
            let runner = self.runner.clone();
            let question = question.to_string();

            join_set.spawn(async move {
                let text = runner.chain_of_thought(&question, temperature).await;
                (attempt, extract_integer(&text))
            });
        }

        let mut slots: Vec<Option<String>> = vec![None; attempts];
        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((attempt, candidate)) => {
                    debug!("Attempt {} extracted {:?}", attempt + 1, candidate);
                    slots[attempt] = candidate;
                }
                Err(e) => warn!("Self-consistency attempt panicked: {}", e),
            }
        }
        slots
    }
}
