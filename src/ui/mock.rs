use crate::error::Result;
use crate::ui::{ConfirmationPrompt, Logger};
use std::sync::Mutex;

/// Logger that keeps every message for later assertions
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Prompt that always gives the same answer and remembers the questions
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: bool,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        ScriptedPrompt {
            answer,
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn ask(&self, message: &str, _default: bool) -> Result<bool> {
        if let Ok(mut questions) = self.questions.lock() {
            questions.push(message.to_string());
        }
        Ok(self.answer)
    }
}
