use std::sync::LazyLock;

use async_trait::async_trait;

use crate::utils::error::ExgenError;

pub const DEFAULT_OPENROUTER_MODEL: &str = "openai/gpt-3.5-turbo";
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Matches a code fence that wraps the entire (trimmed) response.
/// Fences appearing mid-text are deliberately left alone.
static FENCE_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^```[a-zA-Z]*\n([\s\S]*?)\n```$").expect("fence pattern is invalid")
});

/// The closed set of supported AI providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenRouter,
    Gemini,
}

impl ProviderKind {
    /// Parse a provider name. Unknown names are a fatal configuration error.
    pub fn parse(name: &str) -> Result<Self, ExgenError> {
        match name.to_lowercase().as_str() {
            "openrouter" => Ok(ProviderKind::OpenRouter),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(ExgenError::invalid_provider(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenRouter => "openrouter",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Hard-coded default model, used when neither flag nor env var is set.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenRouter => DEFAULT_OPENROUTER_MODEL,
            ProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
        }
    }

    /// Hard-coded default base URL, used when neither flag nor env var is set.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenRouter => DEFAULT_OPENROUTER_BASE_URL,
            ProviderKind::Gemini => DEFAULT_GEMINI_BASE_URL,
        }
    }
}

/// Resolved provider configuration: which backend to call and with what
/// credentials. The API key is required and never logged in cleartext.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub kind: ProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt and return the cleaned response text.
    async fn generate(&self, prompt: &str) -> Result<String, ExgenError>;

    fn name(&self) -> &'static str;
}

/// Instantiate the provider selected by the settings.
pub fn build_provider(settings: &ProviderSettings) -> Result<Box<dyn LlmProvider>, ExgenError> {
    if settings.api_key.is_empty() {
        return Err(ExgenError::missing_api_key());
    }

    match settings.kind {
        ProviderKind::OpenRouter => Ok(Box::new(
            crate::llm::providers::openrouter::OpenRouterProvider::new(
                settings.api_key.clone(),
                settings.model.clone(),
                settings.base_url.clone(),
            )?,
        )),
        ProviderKind::Gemini => Ok(Box::new(crate::llm::providers::gemini::GeminiProvider::new(
            settings.api_key.clone(),
            settings.model.clone(),
            settings.base_url.clone(),
        )?)),
    }
}

/// One-shot helper: build the configured provider and send the prompt.
pub async fn call_provider(settings: &ProviderSettings, prompt: &str) -> Result<String, ExgenError> {
    let provider = build_provider(settings)?;
    tracing::debug!(
        "Calling {} (model: {}, prompt: {} chars)",
        provider.name(),
        settings.model,
        prompt.len()
    );
    provider.generate(prompt).await
}

/// Strip a code fence that wraps the entire trimmed response.
///
/// `"```yaml\nFOO\n```"` becomes `"FOO"`; text without a whole-string fence
/// is returned unchanged.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(captures) = FENCE_PATTERN.captures(trimmed) {
        if let Some(body) = captures.get(1) {
            return body.as_str();
        }
    }
    text
}
