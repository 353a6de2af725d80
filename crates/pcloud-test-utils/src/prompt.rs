//! [`ScriptedPrompter`]: canned answers for [`ConfirmationGate`](pcloud_core::ConfirmationGate) tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use pcloud_core::{Error, Prompter, Result};

/// Answers prompts from a fixed script.
///
/// Once the script runs out every further prompt is interrupted, like a
/// closed terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// A prompter whose input is already closed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_answer(&self, prompt: &str, _default: bool) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(Error::Interrupted)
    }
}
