//! Configuration resolution.
//!
//! Flag-bound values are collapsed into one immutable [`GenConfig`] at
//! startup and passed by reference into each component; nothing downstream
//! reads flags or the environment again.
//!
//! Provider settings resolve with the precedence: CLI flag > `AI_*`
//! environment variable > hard-coded default. clap's `env` attribute supplies
//! the first two layers; the defaults live on [`ProviderKind`].

use crate::cli::args::GenArgs;
use crate::llm::provider::{ProviderKind, ProviderSettings};
use crate::loader::{split_extensions, split_paths};
use crate::utils::error::ExgenError;

/// Final resolved configuration for one `gen` invocation.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Directories to walk for example files
    pub examples_dirs: Vec<String>,
    /// Explicit example file paths
    pub example_files: Vec<String>,
    /// Extension allow-list for example directories
    pub example_extensions: Vec<String>,
    /// Environment ruleset directory (missing directory soft-skips)
    pub ruleset_env_dir: String,
    /// Use case ruleset directory (missing directory soft-skips)
    pub ruleset_usecase_dir: String,
    /// Explicit environment ruleset files (read failure is fatal)
    pub ruleset_env_files: Vec<String>,
    /// Explicit use case ruleset files (read failure is fatal)
    pub ruleset_usecase_files: Vec<String>,
    /// Technology label for the prompt preamble and default instruction
    pub usecase: String,
    /// User-supplied instruction; empty means "synthesize the default"
    pub instruction: String,
    /// Output destination: empty (stdout), a file path, or a directory
    pub destination: String,
    /// Whether to actually call the provider
    pub send: bool,
    /// Verbosity level (0-2)
    pub verbose: u8,
    /// Resolved provider selection and credentials
    pub provider: ProviderSettings,
}

/// Resolve parsed CLI arguments into a [`GenConfig`].
///
/// Fails fast on an unknown provider kind or, when sending is enabled, a
/// missing API key.
pub fn resolve(args: &GenArgs) -> Result<GenConfig, ExgenError> {
    let kind = match args.ai_provider.as_deref() {
        Some(name) => ProviderKind::parse(name)?,
        None => ProviderKind::OpenRouter,
    };

    let model = args
        .ai_model
        .clone()
        .unwrap_or_else(|| kind.default_model().to_string());
    let base_url = args
        .ai_base_url
        .clone()
        .unwrap_or_else(|| kind.default_base_url().to_string());

    let send = !args.no_send;
    let api_key = args.ai_api_key.clone().unwrap_or_default();
    if send && api_key.is_empty() {
        return Err(ExgenError::missing_api_key());
    }

    Ok(GenConfig {
        examples_dirs: split_paths(&args.examples_dirs),
        example_files: split_paths(&args.example_files),
        example_extensions: split_extensions(&args.example_file_ext),
        ruleset_env_dir: args.ruleset_env_dir.clone(),
        ruleset_usecase_dir: args.ruleset_usecase_dir.clone(),
        ruleset_env_files: split_paths(&args.ruleset_env_files),
        ruleset_usecase_files: split_paths(&args.ruleset_usecase_files),
        usecase: args.usecase.clone(),
        instruction: args.instruction.clone(),
        destination: args.destination.clone(),
        send,
        verbose: args.verbose,
        provider: ProviderSettings {
            kind,
            api_key,
            model,
            base_url,
        },
    })
}
