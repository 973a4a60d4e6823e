use anyhow::Result;
use exgen::cli::args::{self, Command};
use exgen::utils::error::ExgenError;
use exgen::{cli, init_logging, run};

#[tokio::main]
async fn main() {
    if let Err(e) = run_main().await {
        display_error(&e);
        std::process::exit(1);
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `ExgenError` for rich formatting (including secret
/// redaction), falls back to anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error) {
    if let Some(exgen_error) = error.downcast_ref::<ExgenError>() {
        eprintln!("\n\u{26a0} {}", exgen_error);
    } else {
        eprintln!("\n\u{26a0} Error: {}", error);

        let causes: Vec<_> = error.chain().skip(1).collect();
        if !causes.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in causes.iter().enumerate() {
                let prefix = if i == causes.len() - 1 {
                    "\u{2514}\u{2500}"
                } else {
                    "\u{251c}\u{2500}"
                };
                eprintln!("{} {}", prefix, cause);
            }
        }
    }
    eprintln!();
}

async fn run_main() -> Result<()> {
    let parsed = args::parse();

    match parsed.command {
        Command::Gen(gen_args) => {
            let config = cli::config::resolve(&gen_args)?;
            init_logging(config.verbose);
            run(config).await
        }
    }
}
