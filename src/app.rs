//! Application state and key handling

use crate::platform::is_nav_modifier;
use crate::state::{
    summary_text, AppState, FieldKind, Form, QuitDialogOption, Transition, View, Wizard,
};
use crate::validation::Clock;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Source of today's date for the date rules
    clock: Box<dyn Clock>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(wizard: Wizard, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::new(wizard),
            clock,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle quit dialog (modal)
        if self.state.pending_quit.is_some() {
            self.handle_quit_dialog_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view() {
            View::Stage => self.handle_stage_key(key),
            View::Summary => self.handle_summary_key(key),
        }

        Ok(())
    }

    /// Handle bracketed paste into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors()
            || self.state.pending_quit.is_some()
            || self.state.current_view() != View::Stage
        {
            return;
        }
        self.state.wizard.paste(text);
    }

    /// Handle keys while a form stage is shown
    fn handle_stage_key(&mut self, key: KeyEvent) {
        let on_navigation = self.state.wizard.is_navigation_active();

        // Keyboard shortcuts (work from anywhere)
        match key.code {
            KeyCode::Char('n') if is_nav_modifier(key.modifiers) => return self.advance(),
            KeyCode::Char('p') if is_nav_modifier(key.modifiers) => return self.go_back(),
            KeyCode::Enter if on_navigation => return self.press_selected_button(),
            KeyCode::Esc => {
                self.state.pending_quit = Some(QuitDialogOption::default());
                return;
            }
            _ => {}
        }

        let wizard = &mut self.state.wizard;
        let focused_kind = wizard.focused().map(|f| f.kind());

        match key.code {
            KeyCode::Tab | KeyCode::Down => wizard.next_field(),
            KeyCode::BackTab | KeyCode::Up => wizard.prev_field(),
            // Navigation row
            KeyCode::Left | KeyCode::Right if on_navigation => wizard.toggle_button(),
            // Choice and checkbox fields
            KeyCode::Left => wizard.toggle_back(),
            KeyCode::Right => wizard.toggle(),
            KeyCode::Char(' ')
                if matches!(focused_kind, Some(FieldKind::Choice | FieldKind::Checkbox)) =>
            {
                wizard.toggle()
            }
            // Text fields
            KeyCode::Char(c) => wizard.input_char(c),
            KeyCode::Backspace => wizard.backspace(),
            KeyCode::Enter => {
                // Enter in a multiline field adds a newline, elsewhere moves on
                if focused_kind == Some(FieldKind::Multiline) {
                    wizard.newline();
                } else {
                    wizard.next_field();
                }
            }
            _ => {}
        }
    }

    /// Handle keys on the post-submission summary
    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => self.copy_summary(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_quit_dialog_key(&mut self, key: KeyEvent) {
        let Some(option) = self.state.pending_quit.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => option.toggle(),
            KeyCode::Enter => {
                if *option == QuitDialogOption::Quit {
                    self.quit = true;
                }
                self.state.pending_quit = None;
            }
            KeyCode::Char('y') => {
                self.quit = true;
                self.state.pending_quit = None;
            }
            KeyCode::Char('n') | KeyCode::Esc => self.state.pending_quit = None,
            _ => {}
        }
    }

    /// Next/Submit
    fn advance(&mut self) {
        let transition = self.state.wizard.next(self.clock.as_ref());
        self.report_transition(transition);
    }

    /// Previous
    fn go_back(&mut self) {
        self.state.wizard.previous();
    }

    fn press_selected_button(&mut self) {
        let transition = self.state.wizard.press_selected(self.clock.as_ref());
        self.report_transition(transition);
    }

    fn report_transition(&mut self, transition: Transition) {
        self.status_message = match transition {
            Transition::Rejected(1) => Some("Please fix the highlighted field".to_string()),
            Transition::Rejected(n) => Some(format!("Please fix the {n} highlighted fields")),
            Transition::Submitted => Some("Application submitted!".to_string()),
            Transition::Advanced(_) | Transition::Back(_) | Transition::Ignored => None,
        };
    }

    fn copy_summary(&mut self) {
        let text = summary_text(self.state.wizard.data());
        match copy_to_clipboard(&text) {
            Ok(()) => self.status_message = Some("Summary copied to clipboard".to_string()),
            Err(err) => self.push_error(format!("Failed to copy summary: {err}")),
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
