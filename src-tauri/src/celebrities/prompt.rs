// Blocking user prompts
// The controller asks the hosting surface to notify or confirm; desktop shows
// native dialogs, the CLI reads from the terminal.

use std::cell::RefCell;
use std::collections::VecDeque;

pub trait Prompt {
    /// Show a blocking notification
    fn alert(&self, message: &str);

    /// Ask a yes/no question; true means the user confirmed
    fn confirm(&self, message: &str) -> bool;
}

/// Scripted prompt: records every message and answers confirms from a queue.
/// An exhausted queue answers "no".
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    alerts: RefCell<Vec<String>>,
    questions: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}
