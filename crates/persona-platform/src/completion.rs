//! HTTP completion provider.
//!
//! Speaks the hosted toolkit protocol: one POST of
//! `{"messages":[{"role","content"}, ...]}`, answered by
//! `{"completion":"..."}`. Any non-2xx status or malformed body is a
//! failure; the transport default timeout applies, nothing more.

use async_trait::async_trait;
use serde::Deserialize;

use persona_core::ports::CompletionPort;
use persona_types::config::CompletionConfig;
use persona_types::prompt::CompletionRequest;
use persona_types::{ChatError, Result};

pub struct HttpCompletionProvider {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl HttpCompletionProvider {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl CompletionPort for HttpCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        log::debug!(
            "completion request: {} prompt messages to {}",
            request.messages.len(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::Completion(format!(
                "HTTP {}: {}",
                status.as_u16(),
                snippet(&body)
            )));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Completion(e.to_string()))?;

        Ok(data.completion)
    }
}

#[derive(Deserialize)]
struct ApiResponse {
    completion: String,
}

/// First 200 characters of an error body, enough for a log line.
fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_types::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_response_body_parses() {
        let data: ApiResponse = serde_json::from_str(r#"{"completion":"hello"}"#).unwrap();
        assert_eq!(data.completion, "hello");
    }

    #[test]
    fn test_response_without_completion_is_rejected() {
        let result = serde_json::from_str::<ApiResponse>(r#"{"reply":"hello"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_snippet_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), 200);
    }

    #[test]
    fn test_provider_uses_configured_endpoint() {
        let provider = HttpCompletionProvider::new(CompletionConfig::default());
        assert_eq!(provider.endpoint(), DEFAULT_ENDPOINT);
    }
}
