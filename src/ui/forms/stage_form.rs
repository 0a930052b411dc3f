//! Wizard stage rendering

use super::field_renderer::{draw_field, field_height_with_error};
use crate::state::{Field, NavButton, Wizard};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One vertical slot in the stage layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Subtitle(&'static str),
    Field(Field),
    Navigation,
}

/// Field sections get a heading above their first field
fn subtitle_before(field: Field) -> Option<&'static str> {
    match field {
        Field::Email => Some("Contact Information"),
        _ => None,
    }
}

fn stage_rows(wizard: &Wizard) -> Vec<Row> {
    let mut rows = Vec::new();
    for field in wizard.stage_config().fields {
        if let Some(title) = subtitle_before(*field) {
            rows.push(Row::Subtitle(title));
        }
        rows.push(Row::Field(*field));
    }
    rows.push(Row::Navigation);
    rows
}

fn row_height(row: Row, wizard: &Wizard) -> u16 {
    match row {
        Row::Subtitle(_) => 1,
        Row::Field(field) => {
            let has_error = wizard.errors().get(field).is_some();
            field_height_with_error(field, has_error)
        }
        Row::Navigation => BUTTON_HEIGHT,
    }
}

/// Index of the row holding focus
fn focus_row(rows: &[Row], wizard: &Wizard) -> usize {
    let target = match wizard.focused() {
        Some(field) => Row::Field(field),
        None => Row::Navigation,
    };
    rows.iter().position(|r| *r == target).unwrap_or(0)
}

/// First visible row and how many rows fit when the stage is taller than
/// `available`. The window always contains the focused row.
fn visible_window(heights: &[u16], focus: usize, available: u16) -> (usize, usize) {
    let total: u16 = heights.iter().sum();
    if total <= available || heights.is_empty() {
        return (0, heights.len());
    }

    // Room for the ^ / v indicators
    let usable = available.saturating_sub(2);
    let focus = focus.min(heights.len() - 1);

    let mut first = focus;
    let mut height = heights[focus];
    while first > 0 && height + heights[first - 1] <= usable {
        first -= 1;
        height += heights[first];
    }

    let mut count = focus - first + 1;
    while first + count < heights.len() && height + heights[first + count] <= usable {
        height += heights[first + count];
        count += 1;
    }

    (first, count)
}

/// Draw the current stage: title, fields with errors, navigation buttons
pub fn draw_stage(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let block = Block::default()
        .title(format!(" {} ", wizard.stage_config().title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = stage_rows(wizard);
    let heights: Vec<u16> = rows.iter().map(|r| row_height(*r, wizard)).collect();
    let (first, count) = visible_window(&heights, focus_row(&rows, wizard), inner.height);
    let can_scroll_up = first > 0;
    let can_scroll_down = first + count < rows.len();

    let mut constraints = Vec::new();
    if can_scroll_up {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend(heights[first..first + count].iter().map(|h| Constraint::Length(*h)));
    if can_scroll_down {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);
    let mut chunk_iter = chunks.iter();

    if can_scroll_up {
        if let Some(chunk) = chunk_iter.next() {
            frame.render_widget(scroll_indicator("^"), *chunk);
        }
    }

    for (row, chunk) in rows[first..first + count].iter().zip(chunk_iter.by_ref()) {
        match *row {
            Row::Subtitle(title) => {
                let heading = Paragraph::new(Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                frame.render_widget(heading, *chunk);
            }
            Row::Field(field) => draw_field(
                frame,
                *chunk,
                field,
                wizard.data(),
                wizard.errors().get(field),
                wizard.focused() == Some(field),
            ),
            Row::Navigation => draw_navigation(frame, *chunk, wizard),
        }
    }

    if can_scroll_down {
        if let Some(chunk) = chunk_iter.next() {
            frame.render_widget(scroll_indicator("v"), *chunk);
        }
    }
}

fn scroll_indicator(symbol: &str) -> Paragraph<'_> {
    Paragraph::new(symbol)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

/// Button label, which depends on the stage for Next
pub fn button_label(button: NavButton, is_last_stage: bool) -> &'static str {
    match button {
        NavButton::Previous => "Previous",
        NavButton::Next if is_last_stage => "Submit",
        NavButton::Next => "Next",
    }
}

fn draw_navigation(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let buttons = wizard.buttons();
    let mut constraints: Vec<Constraint> = buttons.iter().map(|_| Constraint::Length(14)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let on_navigation = wizard.is_navigation_active();
    for (button, chunk) in buttons.iter().zip(chunks.iter()) {
        let is_primary = *button == NavButton::Next;
        render_button(
            frame,
            *chunk,
            button_label(*button, wizard.is_last_stage()),
            on_navigation && wizard.selected_button() == *button,
            is_primary,
        );
    }
}
