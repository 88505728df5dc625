//! Scripted yes/no prompt

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use viewmodel_toolkit_core::traits::ConfirmationDialog;
use viewmodel_toolkit_core::types::AlertDetails;

/// Answers prompts from a queue, falling back to a fixed answer once it runs dry
#[derive(Default)]
pub struct ScriptedConfirmation {
    answers: RefCell<VecDeque<bool>>,
    fallback: bool,
    prompts: RefCell<Vec<AlertDetails>>,
}

impl ScriptedConfirmation {
    /// Declines every prompt unless answers are queued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives `fallback` to every prompt without a queued answer
    #[must_use]
    pub fn answering(fallback: bool) -> Self {
        Self {
            fallback,
            ..Self::default()
        }
    }

    pub fn push_answer(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.borrow().len()
    }

    pub fn last_prompt(&self) -> Option<AlertDetails> {
        self.prompts.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl ConfirmationDialog for ScriptedConfirmation {
    async fn confirm(&self, details: &AlertDetails) -> bool {
        self.prompts.borrow_mut().push(details.clone());
        let answer = self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.fallback);
        log::debug!("Confirmation \"{}\" answered {answer}", details.title);
        answer
    }
}
