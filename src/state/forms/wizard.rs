//! Wizard controller: stage index, form data, errors and focus

use super::field::{Accommodation, Field, FieldKind};
use super::form_data::FormData;
use super::stage::{StageConfig, STAGES, TOTAL_STAGES};
use crate::validation::{validate_stage, Clock, FormErrors};

/// Trait for common focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavButton {
    Previous,
    /// "Next", or "Submit" on the last stage
    #[default]
    Next,
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the given stage index
    Advanced(usize),
    /// Went back to the given stage index
    Back(usize),
    Submitted,
    /// Stayed put; this many fields failed validation
    Rejected(usize),
    /// Application was already submitted
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    data: FormData,
    errors: FormErrors,
    current_stage: usize,
    submitted: bool,
    /// Index into the stage's fields; `fields.len()` is the navigation row
    active_field_index: usize,
    selected_button: NavButton,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(FormData::default())
    }
}

impl Wizard {
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            errors: FormErrors::new(),
            current_stage: 0,
            submitted: false,
            active_field_index: 0,
            selected_button: NavButton::Next,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    pub fn stage_config(&self) -> &'static StageConfig {
        &STAGES[self.current_stage]
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_first_stage(&self) -> bool {
        self.current_stage == 0
    }

    pub fn is_last_stage(&self) -> bool {
        self.current_stage == TOTAL_STAGES - 1
    }

    pub fn progress_label(&self) -> String {
        format!("Stage {} of {}", self.current_stage + 1, TOTAL_STAGES)
    }

    /// Currently focused field, `None` when the navigation row has focus
    pub fn focused(&self) -> Option<Field> {
        self.stage_config()
            .fields
            .get(self.active_field_index)
            .copied()
    }

    pub fn is_navigation_active(&self) -> bool {
        self.active_field_index == self.stage_config().fields.len()
    }

    /// Buttons shown for the current stage, left to right
    pub fn buttons(&self) -> &'static [NavButton] {
        if self.is_first_stage() {
            &[NavButton::Next]
        } else {
            &[NavButton::Previous, NavButton::Next]
        }
    }

    pub fn selected_button(&self) -> NavButton {
        self.selected_button
    }

    pub fn toggle_button(&mut self) {
        if self.is_first_stage() {
            self.selected_button = NavButton::Next;
            return;
        }
        self.selected_button = match self.selected_button {
            NavButton::Previous => NavButton::Next,
            NavButton::Next => NavButton::Previous,
        };
    }

    /// Validate the current stage and advance if it passes
    pub fn next(&mut self, clock: &dyn Clock) -> Transition {
        if self.submitted {
            return Transition::Ignored;
        }

        self.errors = validate_stage(self.current_stage, &self.data, clock);

        if let Some(first) = self.errors.first() {
            let count = self.errors.len();
            tracing::debug!(
                stage = self.current_stage,
                errors = count,
                "Stage rejected"
            );
            self.focus_field(first);
            return Transition::Rejected(count);
        }

        if self.is_last_stage() {
            self.submitted = true;
            tracing::info!("Application submitted");
            return Transition::Submitted;
        }

        self.current_stage += 1;
        self.reset_focus();
        tracing::info!(stage = self.current_stage, "Advanced to next stage");
        Transition::Advanced(self.current_stage)
    }

    /// Go back one stage without validating. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.submitted || self.is_first_stage() {
            return false;
        }
        self.current_stage -= 1;
        self.reset_focus();
        tracing::info!(stage = self.current_stage, "Returned to previous stage");
        true
    }

    /// Run whichever navigation button is selected
    pub fn press_selected(&mut self, clock: &dyn Clock) -> Transition {
        let button = self.selected_button;
        match button {
            NavButton::Previous if self.previous() => Transition::Back(self.current_stage),
            NavButton::Previous => Transition::Ignored,
            NavButton::Next => self.next(clock),
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused().filter(Field::accepts_text) {
            self.edit_text(field, |s| s.push(c));
        }
    }

    /// Newline in the focused multiline field
    pub fn newline(&mut self) {
        if let Some(field) = self.focused().filter(Field::is_multiline) {
            self.edit_text(field, |s| s.push('\n'));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused().filter(Field::accepts_text) {
            self.edit_text(field, |s| {
                s.pop();
            });
        }
    }

    /// Flip the focused checkbox or step the focused choice forward
    pub fn toggle(&mut self) {
        match self.focused().map(|f| f.kind()) {
            Some(FieldKind::Checkbox) => {
                let value = !self.data.health_declaration;
                self.set_health_declaration(value);
            }
            Some(FieldKind::Choice) => {
                let value = self
                    .data
                    .accommodation_preference
                    .map_or(Accommodation::default(), |a| a.next());
                self.set_accommodation(Some(value));
            }
            _ => {}
        }
    }

    /// Step the focused choice backward
    pub fn toggle_back(&mut self) {
        if self.focused().map(|f| f.kind()) == Some(FieldKind::Choice) {
            let value = self
                .data
                .accommodation_preference
                .map_or(Accommodation::default(), |a| a.prev());
            self.set_accommodation(Some(value));
        } else {
            self.toggle();
        }
    }

    /// Append pasted text to the focused text field.
    /// Line breaks are flattened to spaces outside multiline fields.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.focused().filter(Field::accepts_text) else {
            return;
        };
        let pasted = if field.is_multiline() {
            text.replace("\r\n", "\n")
        } else {
            text.replace("\r\n", " ").replace(['\n', '\r'], " ")
        };
        let mut value = self.data.text(field).unwrap_or_default().to_string();
        value.push_str(&pasted);
        self.set_text(field, value);
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.edit_text(field, |s| *s = value);
    }

    pub fn set_accommodation(&mut self, value: Option<Accommodation>) {
        if self.submitted {
            return;
        }
        self.data.accommodation_preference = value;
        self.errors.remove(Field::AccommodationPreference);
    }

    pub fn set_health_declaration(&mut self, value: bool) {
        if self.submitted {
            return;
        }
        self.data.health_declaration = value;
        self.errors.remove(Field::HealthDeclaration);
    }

    fn edit_text(&mut self, field: Field, edit: impl FnOnce(&mut String)) {
        if self.submitted {
            return;
        }
        if let Some(value) = self.data.text_mut(field) {
            edit(value);
            self.errors.remove(field);
        }
    }

    fn focus_field(&mut self, field: Field) {
        if let Some(index) = self.stage_config().fields.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }

    fn reset_focus(&mut self) {
        self.active_field_index = 0;
        self.selected_button = NavButton::Next;
    }
}

impl Form for Wizard {
    fn field_count(&self) -> usize {
        // stage fields + navigation row
        self.stage_config().fields.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
