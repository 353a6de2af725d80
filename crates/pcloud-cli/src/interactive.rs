//! Terminal prompts
//!
//! Uses dialoguer for the yes/no questions asked by the confirmation gate.

use dialoguer::Input;
use pcloud_core::{Error, Prompter};

/// Asks on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_answer(&self, prompt: &str, default: bool) -> pcloud_core::Result<String> {
        let hint = if default { "Y/n" } else { "y/N" };

        Input::<String>::new()
            .with_prompt(format!("{prompt} [{hint}]"))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| {
                tracing::debug!(error = %e, "prompt interrupted");
                Error::Interrupted
            })
    }
}
