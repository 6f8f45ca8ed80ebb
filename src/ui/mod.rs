//! User interface module - logging sink, confirmation prompt and message text.
//!
//! Separates concerns:
//! - `formatter` - Pure message construction
//! - `mock` - Recording and scripted doubles for tests
//! - This module - The [Logger] and [ConfirmationPrompt] contracts and their
//!   terminal implementations

use console::style;
use dialoguer::Confirm;

use crate::error::Result;

pub mod formatter;
pub mod mock;

pub use formatter::{
    completion_message, confirmation_message, disclaimer_prefix, display_error,
    DEFAULT_CHANGELOG_PREFIX,
};
pub use mock::{RecordingLogger, ScriptedPrompt};

/// Sink for messages addressed to the operator
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Asks the operator a yes/no question
pub trait ConfirmationPrompt: Send + Sync {
    /// Block until the operator answers.
    ///
    /// # Returns
    /// * `Ok(true)` - The operator accepted
    /// * `Ok(false)` - The operator declined or cancelled the prompt
    /// * `Err` - The terminal could not be read
    fn ask(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prints messages to stdout with a yellow arrow
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{} {}", style("→").yellow(), message);
    }
}

/// Interactive confirmation on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl ConfirmationPrompt for TerminalPrompt {
    fn ask(&self, message: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact_opt()?;

        // Esc / q cancels the prompt, which counts as a "no"
        Ok(answer.unwrap_or(false))
    }
}

/// Accepts every question without asking, for `--yes`
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl ConfirmationPrompt for AutoConfirm {
    fn ask(&self, message: &str, _default: bool) -> Result<bool> {
        log::info!("Auto-confirmed: {}", message);
        Ok(true)
    }
}
