//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_quit_dialog};
use ratatui::Frame;

/// Main draw function. Every frame is rendered from scratch.
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view() {
        View::Stage => forms::draw_stage(frame, main_area, &app.state.wizard),
        View::Summary => summary::draw(frame, main_area, app.state.wizard.data()),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays last so they sit on top
    if let Some(option) = app.state.pending_quit {
        render_quit_dialog(frame, option);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, Form, FormData, Wizard};
    use crate::validation::{FieldError, MockClock};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn rejected_stage_one(data: FormData) -> Wizard {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let mut wizard = Wizard::new(data);
        wizard.next(&clock);
        wizard
    }

    /// Render a full 80x24 screen and return its lines
    fn screen_lines(wizard: Wizard) -> Vec<String> {
        let app = App::new(wizard, Box::new(MockClock::new()));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn line_after(lines: &[String], title: &str) -> Option<String> {
        let index = lines.iter().position(|l| l.contains(title))?;
        lines.get(index + 1).cloned()
    }

    #[test]
    fn test_rejected_focus_keeps_input_line() {
        let wizard = rejected_stage_one(FormData::default());
        assert_eq!(wizard.focused(), Some(Field::FullName));

        let lines = screen_lines(wizard);
        let input = line_after(&lines, "Full Name *").unwrap();
        assert!(input.contains('▌'), "no input line: {lines:#?}");
        assert!(lines.iter().any(|l| l.contains("Full Name is required.")));
        assert!(lines.iter().any(|l| l.contains(" v ")), "no scroll indicator");
    }

    #[test]
    fn test_scrolls_to_focused_phone_after_rejection() {
        let data = FormData {
            phone: "abc".to_string(),
            ..FormData::default()
        };
        let mut wizard = rejected_stage_one(data);
        assert_eq!(
            wizard.errors().get(Field::Phone),
            Some(&FieldError::InvalidFormat("Invalid phone number format."))
        );
        for _ in 0..4 {
            wizard.next_field();
        }
        assert_eq!(wizard.focused(), Some(Field::Phone));

        let lines = screen_lines(wizard);
        let input = line_after(&lines, "Phone *").unwrap();
        assert!(input.contains("abc"), "phone value hidden: {lines:#?}");
        assert!(lines
            .iter()
            .any(|l| l.contains("Invalid phone number format.")));
    }

    #[test]
    fn test_navigation_focus_shows_next_button() {
        let mut wizard = rejected_stage_one(FormData::default());
        wizard.prev_field();
        assert!(wizard.is_navigation_active());

        let lines = screen_lines(wizard);
        assert!(
            lines.iter().any(|l| l.contains("Next")),
            "Next button clipped: {lines:#?}"
        );
        assert!(lines.iter().any(|l| l.contains("Phone *")));
    }
}
