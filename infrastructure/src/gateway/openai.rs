//! OpenAI-compatible chat completions adapter.
//!
//! Implements [`ChatGateway`] over `POST {base_url}/chat/completions`. Every
//! outcome, including transport errors, comes back as a [`ModelResponse`];
//! nothing is retried.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use router_application::ports::llm_gateway::{ChatGateway, GatewayError};
use router_domain::{ChatRequest, ModelResponse};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Explicit endpoint configuration for [`OpenAiChatGateway`]
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    /// Base URL up to and including the API version, e.g. `http://localhost:8000/v1`
    pub base_url: String,
    /// Bearer credential; may be empty for local endpoints
    pub api_key: String,
    /// Model name sent with every request
    pub model: String,
    /// Upper bound for the HTTP client; per-request timeouts come from [`ChatRequest`]
    pub timeout: Duration,
}

impl EndpointConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// ==================== API Types ====================

#[derive(Serialize)]
struct ChatApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ==================== Adapter ====================

/// Chat gateway speaking the OpenAI chat completions wire format
#[derive(Debug, Clone)]
pub struct OpenAiChatGateway {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl OpenAiChatGateway {
    pub fn new(config: EndpointConfig) -> Result<Self, GatewayError> {
        if config.base_url.trim().is_empty() {
            return Err(GatewayError::Configuration("base_url is empty".to_string()));
        }
        if config.model.trim().is_empty() {
            return Err(GatewayError::Configuration("model is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| GatewayError::Configuration("Invalid API key format".to_string()))?;
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Render a non-200 body: JSON when it parses, raw text otherwise
    fn error_text(body: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value.to_string(),
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait]
impl ChatGateway for OpenAiChatGateway {
    async fn chat(&self, request: &ChatRequest) -> ModelResponse {
        let payload = ChatApiRequest {
            model: &self.config.model,
            messages: [
                ApiMessage {
                    role: "system",
                    content: &request.system,
                },
                ApiMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = match self
            .client
            .post(self.config.chat_url())
            .timeout(request.timeout)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", self.config.chat_url(), e);
                return ModelResponse::transport_failure(e.to_string());
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return ModelResponse::transport_failure(e.to_string()),
        };

        if status != 200 {
            debug!("HTTP {} body: {}", status, body);
            return ModelResponse::failure(i32::from(status), Self::error_text(&body));
        }

        match serde_json::from_str::<ChatApiResponse>(&body) {
            Ok(parsed) => {
                let content = parsed
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message)
                    .and_then(|m| m.content);
                ModelResponse {
                    ok: true,
                    text: content,
                    status: 200,
                    error: None,
                }
            }
            Err(e) => ModelResponse::failure(200, format!("Invalid JSON: {e}")),
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> OpenAiChatGateway {
        OpenAiChatGateway::new(EndpointConfig::new(server.uri(), "sk-test", "test-model"))
            .unwrap()
    }

    fn request() -> ChatRequest {
        ChatRequest::new("Answer only.", "What is 2+2?")
            .with_temperature(0.5)
            .with_max_tokens(64)
            .with_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_success_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "test-model",
                "max_tokens": 64,
                "messages": [
                    {"role": "system", "content": "Answer only."},
                    {"role": "user", "content": "What is 2+2?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "4"}}]
            })))
            .mount(&server)
            .await;

        let response = gateway(&server).chat(&request()).await;

        assert!(response.ok);
        assert_eq!(response.status, 200);
        assert_eq!(response.text.as_deref(), Some("4"));
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_null_content_is_ok_without_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": null}}]
            })))
            .mount(&server)
            .await;

        let response = gateway(&server).chat(&request()).await;

        assert!(response.ok);
        assert_eq!(response.text, None);
        assert_eq!(response.text_or_empty(), "");
    }

    #[tokio::test]
    async fn test_json_error_body_is_rendered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"error": {"message": "slow down"}})),
            )
            .mount(&server)
            .await;

        let response = gateway(&server).chat(&request()).await;

        assert!(!response.ok);
        assert_eq!(response.status, 429);
        assert!(response.text.is_none());
        assert!(response.error.unwrap().contains("slow down"));
    }

    #[tokio::test]
    async fn test_plain_error_body_kept_raw() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let response = gateway(&server).chat(&request()).await;

        assert_eq!(response.status, 502);
        assert_eq!(response.error.as_deref(), Some("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let response = gateway(&server)
            .chat(&request().with_timeout(Duration::from_millis(100)))
            .await;

        assert!(!response.ok);
        assert_eq!(response.status, -1);
        assert!(response.error.is_some());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        let config = EndpointConfig::new("http://127.0.0.1:9", "", "m")
            .with_timeout(Duration::from_secs(2));
        let response = OpenAiChatGateway::new(config)
            .unwrap()
            .chat(&request())
            .await;

        assert!(!response.ok);
        assert_eq!(response.status, -1);
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = OpenAiChatGateway::new(EndpointConfig::new("http://localhost:8000/v1", "", " "));
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let config = EndpointConfig::new("http://localhost:8000/v1/", "", "m");
        assert_eq!(config.chat_url(), "http://localhost:8000/v1/chat/completions");
    }
}
