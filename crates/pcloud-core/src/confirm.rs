//! Operator confirmation before remote mutations

use crate::{Error, Result};

/// How a [`ConfirmationGate`] obtains answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmPolicy {
    /// Answer every prompt with its default instead of asking
    pub assume_default: bool,
}

impl ConfirmPolicy {
    pub fn interactive() -> Self {
        Self {
            assume_default: false,
        }
    }

    pub fn non_interactive() -> Self {
        Self {
            assume_default: true,
        }
    }
}

/// Source of raw answers to yes/no prompts.
pub trait Prompter {
    /// Show `prompt` and return the operator's raw answer.
    ///
    /// Must return [`Error::Interrupted`] when input ends or the prompt is
    /// cancelled, never an empty answer.
    fn read_answer(&self, prompt: &str, default: bool) -> Result<String>;
}

/// Yes/no gate in front of every remote mutation.
pub struct ConfirmationGate<'a> {
    policy: ConfirmPolicy,
    prompter: &'a dyn Prompter,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(policy: ConfirmPolicy, prompter: &'a dyn Prompter) -> Self {
        Self { policy, prompter }
    }

    /// Ask `prompt`, returning whether the operator agreed.
    pub fn approve(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.policy.assume_default {
            tracing::debug!(prompt, default, "confirmation assumed");
            return Ok(default);
        }

        let answer = self.prompter.read_answer(prompt, default)?;
        Ok(interpret(&answer, default))
    }

    /// Like [`approve`](Self::approve) but a refusal is [`Error::Declined`].
    pub fn require(&self, prompt: &str, default: bool) -> Result<()> {
        if self.approve(prompt, default)? {
            Ok(())
        } else {
            Err(Error::Declined)
        }
    }
}

fn interpret(answer: &str, default: bool) -> bool {
    let answer = answer.trim();
    if answer.is_empty() {
        return default;
    }
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
