//! # exgen
//!
//! exgen assembles a prompt from local example files and optional ruleset
//! documents, sends it to a configurable AI provider (OpenRouter or Gemini),
//! and routes the generated text to stdout, a single file, or a directory
//! tree of named files.
//!
//! The `gen` flow is a single sequential pipeline:
//!
//! 1. **Resolve** - collapse flags and `AI_*` env vars into one immutable config
//! 2. **Load** - read examples and rulesets from disk, deduplicate examples
//! 3. **Build** - concatenate rules, numbered examples, and the instruction
//!    into one prompt
//! 4. **Call** - one provider HTTP call with a 120-second deadline, no retry
//! 5. **Route** - print, write a combined file, or split into a directory tree
//!
//! Configuration precedence for provider settings: CLI flags override `AI_*`
//! environment variables, which override hard-coded defaults.

pub mod cli;
pub mod generator;
pub mod llm;
pub mod loader;
pub mod output;
pub mod utils;

use std::path::Path;

use anyhow::{Context, Result};

use cli::config::GenConfig;

/// Initialize logging based on verbosity level.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

/// Run one `gen` invocation with the resolved configuration.
pub async fn run(config: GenConfig) -> Result<()> {
    tracing::info!("exgen v{} starting", env!("CARGO_PKG_VERSION"));
    log_config_summary(&config);

    // Load examples from directories and explicit files
    let mut examples = Vec::new();
    for dir in &config.examples_dirs {
        let loaded = loader::load_directory(Path::new(dir), &config.example_extensions)
            .with_context(|| format!("Failed to load examples from dir {}", dir))?;
        examples.extend(loaded);
    }
    if !config.example_files.is_empty() {
        examples.extend(loader::load_files(&config.example_files)?);
    }

    if examples.is_empty() {
        tracing::info!("No examples provided. Proceeding without examples.");
    } else {
        let before = examples.len();
        examples = loader::deduplicate(examples);
        tracing::debug!(
            "Loaded {} examples ({} after deduplication)",
            before,
            examples.len()
        );
    }

    // Rulesets: missing directories soft-skip, explicit files are fatal
    let mut env_rules = loader::load_rulesets_if_exists(&config.ruleset_env_dir)?;
    let mut usecase_rules = loader::load_rulesets_if_exists(&config.ruleset_usecase_dir)?;
    if !config.ruleset_env_files.is_empty() {
        env_rules.extend(loader::load_files(&config.ruleset_env_files)?);
    }
    if !config.ruleset_usecase_files.is_empty() {
        usecase_rules.extend(loader::load_files(&config.ruleset_usecase_files)?);
    }

    let instruction = if config.instruction.is_empty() {
        generator::default_instruction(&config.usecase)
    } else {
        config.instruction.clone()
    };

    let prompt = generator::build_prompt(
        &examples,
        &env_rules,
        &usecase_rules,
        &config.usecase,
        &instruction,
    );

    if config.verbose > 0 {
        println!("{}", prompt);
    }

    if !config.send {
        tracing::info!("Provider call disabled, stopping after prompt assembly");
        return Ok(());
    }

    if config.instruction.is_empty() {
        tracing::warn!("No instruction provided. Skipping AI call. Use --instruction to prompt the AI.");
        return Ok(());
    }

    let spinner = utils::progress::create_spinner(format!(
        "Calling {} AI...",
        config.provider.kind.as_str()
    ));
    let result = llm::provider::call_provider(&config.provider, &prompt).await;
    spinner.finish_and_clear();

    match result {
        Ok(generated) => {
            output::writer::write_output(&config.destination, &generated)
                .context("Failed to write generated output")?;
        }
        Err(e) => {
            // The call is toggleable in this mode: report and finish without
            // writing output instead of aborting.
            tracing::error!(
                "Error calling {} API: {}",
                config.provider.kind.as_str(),
                e
            );
        }
    }

    Ok(())
}

/// Log a summary of the effective configuration, masking the API key.
fn log_config_summary(config: &GenConfig) {
    tracing::info!("AI provider: {}", config.provider.kind.as_str());
    tracing::info!("AI model: {}", config.provider.model);
    tracing::info!("AI base URL: {}", config.provider.base_url);
    tracing::info!("AI API key: ***");
    tracing::debug!(
        "examples_dirs={:?}, example_files={:?}, extensions={:?}",
        config.examples_dirs,
        config.example_files,
        config.example_extensions
    );
    tracing::debug!(
        "ruleset_env_dir={:?}, ruleset_usecase_dir={:?}, ruleset_env_files={:?}, ruleset_usecase_files={:?}",
        config.ruleset_env_dir,
        config.ruleset_usecase_dir,
        config.ruleset_env_files,
        config.ruleset_usecase_files
    );
    tracing::debug!(
        "usecase={:?}, destination={:?}, send={}, verbose={}",
        config.usecase,
        config.destination,
        config.send,
        config.verbose
    );
}
