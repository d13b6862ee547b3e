//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with the given message
///
/// Returns `None` in batch mode.
pub fn create_spinner(message: &str, batch: bool) -> Option<ProgressBar> {
    if batch {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Update the spinner message, if there is a spinner
pub fn update_spinner(spinner: &Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.set_message(message.to_string());
    }
}

/// Clear the spinner from the terminal
pub fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
}

/// Finish the spinner leaving a final message
pub fn finish_spinner_with_message(spinner: Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.finish_with_message(message.to_string());
    }
}

/// Print to stderr without garbling an active spinner
pub fn print_above(spinner: &Option<ProgressBar>, message: &str) {
    match spinner {
        Some(s) => s.suspend(|| eprintln!("{}", message)),
        None => eprintln!("{}", message),
    }
}
