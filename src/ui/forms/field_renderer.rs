//! Field rendering utilities for forms

use crate::state::{Accommodation, Field, FieldKind, FormData};
use crate::validation::FieldError;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a field box, not counting its error line
pub fn field_height(field: Field) -> u16 {
    if field.is_multiline() {
        5
    } else {
        3
    }
}

/// Rows taken by a field including its inline error, if any
pub fn field_height_with_error(field: Field, has_error: bool) -> u16 {
    field_height(field) + u16::from(has_error)
}

/// Draw one field with its required marker and inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    data: &FormData,
    error: Option<&FieldError>,
    is_active: bool,
) {
    let (box_area, error_area) = if error.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match field.kind() {
        FieldKind::Choice => Paragraph::new(choice_line(data.accommodation_preference, is_active)),
        FieldKind::Checkbox => Paragraph::new(checkbox_line(
            field.label(),
            data.health_declaration,
            is_active,
        )),
        _ => text_content(field, data.text(field).unwrap_or_default(), is_active),
    };

    let block = Block::default()
        .title(format!(" {} ", field_title(field)))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);

    if let (Some(err), Some(err_area)) = (error, error_area) {
        let line = Line::from(Span::styled(
            format!(" {}", err.message()),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), err_area);
    }
}

/// Box title: label plus a `*` when the field is required
pub fn field_title(field: Field) -> String {
    let label = match field.kind() {
        // The checkbox shows its sentence inside the box
        FieldKind::Checkbox => "Health Declaration",
        _ => field.label(),
    };
    if field.is_required() {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

fn text_content<'a>(field: Field, value: &'a str, is_active: bool) -> Paragraph<'a> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let placeholder = match (field.kind(), is_active) {
            (_, true) => "",
            (FieldKind::Date, false) => "YYYY-MM-DD",
            (_, false) => "(empty)",
        };
        return Paragraph::new(Line::from(vec![
            Span::styled(placeholder, placeholder_style),
            cursor,
        ]));
    }

    if field.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(value, style), cursor]))
    }
}

fn choice_line(selected: Option<Accommodation>, is_active: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for option in Accommodation::ALL {
        let is_selected = selected == Some(option);
        let marker = if is_selected { "(•) " } else { "( ) " };
        let style = match (is_selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!("{marker}{}", option.label()), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn checkbox_line(label: &'static str, checked: bool, is_active: bool) -> Line<'static> {
    let marker = if checked { "[x] " } else { "[ ] " };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![Span::styled(marker, style), Span::styled(label, style)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(Field::FullName), 3);
        assert_eq!(field_height(Field::SpecialRequests), 5);
        assert_eq!(field_height_with_error(Field::Email, true), 4);
        assert_eq!(field_height_with_error(Field::Email, false), 3);
    }

    #[test]
    fn test_required_marker_in_title() {
        assert_eq!(field_title(Field::FullName), "Full Name *");
        assert_eq!(
            field_title(Field::MedicalConditions),
            "Any Medical Conditions (Optional)"
        );
        assert_eq!(field_title(Field::HealthDeclaration), "Health Declaration *");
    }

    #[test]
    fn test_choice_line_marks_selection() {
        let line = choice_line(Some(Accommodation::MartianBase), false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("( ) Space Hotel"));
        assert!(text.contains("(•) Martian Base"));
    }

    #[test]
    fn test_checkbox_line() {
        let line = checkbox_line("I agree", true, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[x] I agree");
    }
}
