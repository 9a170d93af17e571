//! Run Strategy use case
//!
//! Executes a single prompting strategy: one model exchange, trimmed text out.

use crate::ports::exchange_logger::{ExchangeEvent, ExchangeLogger, NoExchangeLogger};
use crate::ports::llm_gateway::ChatGateway;
use router_domain::{ChatRequest, ModelResponse, Strategy};
use router_domain::session::exchange::DEFAULT_TIMEOUT;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Use case for running one strategy against the gateway
pub struct RunStrategyUseCase<G: ChatGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ExchangeLogger>,
    timeout: Duration,
}

impl<G: ChatGateway + 'static> Clone for RunStrategyUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            logger: Arc::clone(&self.logger),
            timeout: self.timeout,
        }
    }
}

impl<G: ChatGateway + 'static> RunStrategyUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoExchangeLogger),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ExchangeLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send one request with the configured timeout and record the exchange
    pub async fn send(
        &self,
        event_type: &'static str,
        label: &str,
        request: ChatRequest,
    ) -> ModelResponse {
        let request = request.with_timeout(self.timeout);
        let response = self.gateway.chat(&request).await;

        if !response.ok {
            warn!(
                "{} call failed (status {}): {}",
                label,
                response.status,
                response.error.as_deref().unwrap_or("unknown error")
            );
        }

        self.logger
            .log(ExchangeEvent::exchange(event_type, label, &request, &response));
        response
    }

    /// Run `strategy` and return its trimmed answer.
    ///
    /// A failed or empty exchange yields the empty string.
    pub async fn answer(&self, strategy: Strategy, question: &str, temperature: f32) -> String {
        let request = strategy.request(question, temperature);
        let answer = self
            .send("strategy", strategy.as_str(), request)
            .await
            .trimmed_text();
        debug!("{} answered {:?}", strategy, answer);
        answer
    }

    /// Run chain-of-thought and return the raw reasoning text.
    ///
    /// The caller extracts the answer; a failed exchange yields "".
    pub async fn chain_of_thought(&self, question: &str, temperature: f32) -> String {
        let request = Strategy::ChainOfThought.request(question, temperature);
        self.send("strategy", Strategy::ChainOfThought.as_str(), request)
            .await
            .text
            .unwrap_or_default()
    }

    /// Direct answer at the given temperature; the fallback of every
    /// extraction site
    pub async fn direct_answer(&self, question: &str, temperature: f32) -> String {
        self.answer(Strategy::DirectAnswer, question, temperature)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGateway;

    #[tokio::test]
    async fn test_answer_is_trimmed() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ModelResponse::success("  Paris\n")]));
        let runner = RunStrategyUseCase::new(Arc::clone(&gateway));

        let answer = runner
            .answer(Strategy::DomainDirectAnswer, "Capital of France?", 0.0)
            .await;

        assert_eq!(answer, "Paris");
        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "Capital of France?");
        assert_eq!(requests[0].max_tokens, 128);
    }

    #[tokio::test]
    async fn test_failed_exchange_yields_empty_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ModelResponse::failure(
            500, "oops",
        )]));
        let runner = RunStrategyUseCase::new(gateway);

        assert_eq!(runner.answer(Strategy::Coding, "x", 0.0).await, "");
    }

    #[tokio::test]
    async fn test_timeout_applied_to_requests() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ModelResponse::success("4")]));
        let runner =
            RunStrategyUseCase::new(Arc::clone(&gateway)).with_timeout(Duration::from_secs(7));

        runner.direct_answer("2+2", 0.0).await;

        assert_eq!(gateway.requests()[0].timeout, Duration::from_secs(7));
    }

    #[tokio::test]
    async fn test_chain_of_thought_returns_raw_text() {
        let gateway = Arc::new(ScriptedGateway::new(vec![ModelResponse::success(
            "1. add\nFinal answer: 4\n",
        )]));
        let runner = RunStrategyUseCase::new(Arc::clone(&gateway));

        let text = runner.chain_of_thought("2+2", 0.5).await;

        assert_eq!(text, "1. add\nFinal answer: 4\n");
        let request = &gateway.requests()[0];
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.temperature, 0.5);
    }
}
