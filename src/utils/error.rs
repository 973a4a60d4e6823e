use std::sync::LazyLock;
use thiserror::Error;

/// Compiled regex patterns for redacting sensitive data.
/// Using LazyLock for thread-safe one-time initialization.
///
/// The expect() calls are acceptable because the patterns are known-valid
/// literals validated by tests, not runtime input.
static REDACTION_PATTERNS: LazyLock<[(regex::Regex, &'static str); 3]> = LazyLock::new(|| {
    [
        (
            regex::Regex::new(r"(api[_-]?key[=:\s]+)[^\s&]+")
                .expect("api_key redaction pattern is invalid"),
            "${1}[REDACTED]",
        ),
        (
            regex::Regex::new(r"(?i)(bearer\s+)[^\s]+")
                .expect("bearer redaction pattern is invalid"),
            "${1}[REDACTED]",
        ),
        (
            regex::Regex::new(r"([?&]key=)[^\s&]+").expect("key query redaction pattern is invalid"),
            "${1}[REDACTED]",
        ),
    ]
});

#[derive(Debug, Error)]
pub enum ExgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("AI provider error: {provider} - {}", redact_sensitive_data(message))]
    Provider { provider: String, message: String },

    #[error("Parse error: {message}")]
    ParseError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    ValidationError { message: String, suggestion: String },

    #[error("Network error: {message}")]
    NetworkError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Redact sensitive information from error messages.
fn redact_sensitive_data(message: &str) -> String {
    let mut result = message.to_string();
    for (pattern, replacement) in REDACTION_PATTERNS.iter() {
        result = pattern.replace_all(&result, *replacement).to_string();
    }
    result
}

impl ExgenError {
    pub fn invalid_provider(provider: &str) -> Self {
        ExgenError::ValidationError {
            message: format!("Invalid provider: '{}'", provider),
            suggestion: "Valid providers are: openrouter, gemini".to_string(),
        }
    }

    pub fn missing_api_key() -> Self {
        ExgenError::ValidationError {
            message: "API key not configured".to_string(),
            suggestion: "Set the AI_API_KEY environment variable".to_string(),
        }
    }

    pub fn read_failed(path: &std::path::Path, err: std::io::Error) -> Self {
        ExgenError::FileSystem(std::io::Error::new(
            err.kind(),
            format!("failed to read file {}: {}", path.display(), err),
        ))
    }
}

impl From<serde_json::Error> for ExgenError {
    fn from(err: serde_json::Error) -> Self {
        ExgenError::ParseError {
            message: "Failed to parse JSON response".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest::Error> for ExgenError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out after 120s. Check your network connection.".to_string()
        } else if err.is_connect() {
            "Failed to connect to server. Check your network connection.".to_string()
        } else if err.is_status() {
            format!(
                "HTTP error: {}",
                err.status()
                    .map_or("unknown".to_string(), |s| s.to_string())
            )
        } else {
            "Network request failed".to_string()
        };

        ExgenError::NetworkError {
            message,
            source: Some(Box::new(err)),
        }
    }
}
