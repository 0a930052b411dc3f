//! Post-submission summary screen

use crate::state::{summary_lines, FormData};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const THANK_YOU: &str = "Thank you for your application to visit Mars. \
We will review your information and be in touch soon.";

/// Draw the success message followed by every submitted value
pub fn draw(frame: &mut Frame, area: Rect, data: &FormData) {
    let block = Block::default()
        .title(" Application Submitted! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Message
            Constraint::Length(2), // Summary heading
            Constraint::Min(0),    // Summary list
        ])
        .margin(1)
        .split(inner);

    let message = Paragraph::new(THANK_YOU)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Your Submitted Information:",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[1]);

    let lines: Vec<Line> = summary_lines(data)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label}: "),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_summary_renders_every_field() {
        let mut data = FormData::default();
        data.full_name = "Ada Lovelace".to_string();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), &data))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }

        assert!(screen.contains("Application Submitted!"));
        assert!(screen.contains("Your Submitted Information:"));
        assert!(screen.contains("Full Name: Ada Lovelace"));
        assert!(screen.contains("Accommodation Preference: Space Hotel"));
        assert!(screen.contains("Health Declaration: No"));
        assert!(screen.contains("Medical Conditions: N/A"));
    }
}
