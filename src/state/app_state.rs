//! Application state definitions

use super::forms::Wizard;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// One of the form stages
    #[default]
    Stage,
    /// Post-submission summary
    Summary,
}

/// Options in the quit confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitDialogOption {
    Quit,
    #[default]
    Stay,
}

impl QuitDialogOption {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Quit => Self::Stay,
            Self::Stay => Self::Quit,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Stay => "Keep editing",
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub wizard: Wizard,
    /// Infrastructure errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
    /// Set while the quit confirmation is open
    pub pending_quit: Option<QuitDialogOption>,
}

impl AppState {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard,
            ..Default::default()
        }
    }

    pub fn current_view(&self) -> View {
        if self.wizard.is_submitted() {
            View::Summary
        } else {
            View::Stage
        }
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
