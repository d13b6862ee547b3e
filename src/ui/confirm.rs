//! User confirmation prompts for changes to live data

use dialoguer::Confirm;

use crate::error::Result;

/// How a command answers its confirmation prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMode {
    /// Ask on the terminal
    Interactive,
    /// Answer yes without asking (`--yes`)
    AssumeYes,
    /// Answer no without asking (`--batch` without `--yes`)
    AssumeNo,
}

impl ConfirmMode {
    pub fn new(yes: bool, batch: bool) -> Self {
        match (yes, batch) {
            (true, _) => ConfirmMode::AssumeYes,
            (false, true) => ConfirmMode::AssumeNo,
            (false, false) => ConfirmMode::Interactive,
        }
    }
}

/// Ask a yes/no question; the default answer is no
pub fn confirm_action(prompt: &str, mode: ConfirmMode) -> Result<bool> {
    match mode {
        ConfirmMode::AssumeYes => Ok(true),
        ConfirmMode::AssumeNo => {
            eprintln!("{} [skipped in batch mode]", prompt);
            Ok(false)
        }
        ConfirmMode::Interactive => Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?),
    }
}
