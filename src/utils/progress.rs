use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Creates a spinner for the provider call with the default style.
///
/// # TTY Detection
///
/// When stdout is not a TTY (e.g., piped output, CI environments), a hidden
/// bar is returned that produces no output. This prevents garbled terminal
/// output in non-interactive environments.
#[must_use]
pub fn create_spinner(message: String) -> ProgressBar {
    if !Term::stdout().is_term() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to parse spinner template: {e}");
            ProgressStyle::default_spinner()
        });
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
