//! Scripted gateway shared by use case tests.

use crate::ports::llm_gateway::ChatGateway;
use async_trait::async_trait;
use router_domain::{ChatRequest, ModelResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays queued responses in order and records every request.
///
/// Once the queue is empty every call fails like an unreachable endpoint.
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<ModelResponse>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<ModelResponse>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue successful responses with the given texts
    pub(crate) fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| ModelResponse::success(*t)).collect())
    }

    /// A gateway whose every call fails
    pub(crate) fn failing() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    async fn chat(&self, request: &ChatRequest) -> ModelResponse {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ModelResponse::transport_failure("connection refused"))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
