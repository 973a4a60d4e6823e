use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::provider::{LlmProvider, strip_code_fence};
use crate::utils::error::ExgenError;

/// OpenRouter provider using the OpenAI-compatible chat completions API.
///
/// Authenticates with a Bearer token. The base URL is configurable so tests
/// and proxies can point at a different endpoint.
pub struct OpenRouterProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

/// Request body for the OpenRouter API (OpenAI-compatible).
#[derive(Debug, Serialize)]
struct OpenRouterRequest<'a> {
    model: &'a str,
    messages: Vec<OpenRouterMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct OpenRouterMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the OpenRouter API. A body-level `error` can appear even on
/// HTTP 200, so both are parsed from the same payload.
#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl OpenRouterProvider {
    /// Creates a new OpenRouter provider.
    ///
    /// Uses a 120-second request timeout; on expiry the call fails and is not
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self, ExgenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ExgenError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            api_key,
            model,
            base_url,
            client,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenRouterProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ExgenError> {
        let request_body = OpenRouterRequest {
            model: &self.model,
            messages: vec![OpenRouterMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        let body: OpenRouterResponse =
            serde_json::from_str(&body_text).map_err(|e| ExgenError::Provider {
                provider: "openrouter".to_string(),
                message: format!("HTTP {}: failed to parse response: {}", status, e),
            })?;

        if let Some(detail) = body.error {
            return Err(ExgenError::Provider {
                provider: "openrouter".to_string(),
                message: detail.message.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        if !status.is_success() {
            return Err(ExgenError::Provider {
                provider: "openrouter".to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ExgenError::Provider {
                provider: "openrouter".to_string(),
                message: "no choices returned".to_string(),
            })?;

        Ok(strip_code_fence(&content).to_string())
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = OpenRouterRequest {
            model: "openai/gpt-3.5-turbo",
            messages: vec![OpenRouterMessage {
                role: "user",
                content: "Hello",
            }],
        };

        let json = serde_json::to_string(&request).expect("serialization should succeed");
        assert!(json.contains("\"model\":\"openai/gpt-3.5-turbo\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"Hello\""));
    }

    #[test]
    fn test_response_with_body_level_error() {
        let json = r#"{"error": {"message": "insufficient credits"}}"#;
        let body: OpenRouterResponse = serde_json::from_str(json).expect("should parse");
        assert!(body.choices.is_empty());
        assert_eq!(
            body.error.and_then(|e| e.message).as_deref(),
            Some("insufficient credits")
        );
    }

    #[test]
    fn test_response_parse_choices() {
        let json = r#"{"choices": [{"message": {"content": "generated text"}}]}"#;
        let body: OpenRouterResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(body.choices.len(), 1);
    }
}
