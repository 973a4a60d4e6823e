use clap::{Parser, Subcommand};

/// CLI argument parsing with environment variable support.
///
/// Provider settings fall back to `AI_*` environment variables and are
/// overridden by CLI flags. Example: `AI_PROVIDER=gemini` is overridden by
/// `--ai-provider openrouter`.
#[derive(Parser, Debug)]
#[command(name = "exgen")]
#[command(about = "Generate configuration files from code examples and rulesets with AI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a configuration using AI based on examples and rulesets
    Gen(GenArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenArgs {
    /// Comma-separated list of directories containing example code files
    #[arg(long, default_value = "")]
    pub examples_dirs: String,

    /// Comma-separated list of example file paths
    #[arg(long, default_value = "")]
    pub example_files: String,

    /// Comma-separated list of allowed example file extensions
    #[arg(long, default_value = ".yaml,.tf")]
    pub example_file_ext: String,

    /// Directory containing environment rulesets (optional)
    #[arg(long, default_value = "")]
    pub ruleset_env_dir: String,

    /// Directory containing use case rulesets (optional)
    #[arg(long, default_value = "")]
    pub ruleset_usecase_dir: String,

    /// Comma-separated list of environment ruleset files
    #[arg(long, default_value = "")]
    pub ruleset_env_files: String,

    /// Comma-separated list of use case ruleset files
    #[arg(long, default_value = "")]
    pub ruleset_usecase_files: String,

    /// Use case context for generation, used as the prompt's technology label
    #[arg(long, default_value = "")]
    pub usecase: String,

    /// Specific instruction to guide the AI
    #[arg(long, default_value = "")]
    pub instruction: String,

    /// Destination for generated files: stdout (default), a file (combined
    /// content), or a directory (separate files)
    #[arg(long, default_value = "")]
    pub destination: String,

    /// Build the prompt but skip the provider call
    #[arg(long)]
    pub no_send: bool,

    /// Increase verbosity (-v, -vv); -v also echoes the built prompt
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// AI provider: openrouter or gemini
    #[arg(long, env = "AI_PROVIDER")]
    pub ai_provider: Option<String>,

    /// Model name for the AI provider (e.g., openai/gpt-4 for OpenRouter)
    #[arg(long, env = "AI_MODEL")]
    pub ai_model: Option<String>,

    /// Base URL for the provider API
    #[arg(long, env = "AI_BASE_URL")]
    pub ai_base_url: Option<String>,

    /// API key for the provider
    #[arg(long, env = "AI_API_KEY", hide_env_values = true)]
    pub ai_api_key: Option<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
