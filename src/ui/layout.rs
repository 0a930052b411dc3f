//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{NEXT_SHORTCUT, PREV_SHORTCUT};
use crate::state::{View, STAGES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const APP_TITLE: &str = " Mars Visit Application ";

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the app title and progress indicator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let progress = match app.state.current_view() {
        View::Stage => format!(
            "{} {}",
            wizard.progress_label(),
            stage_trail(wizard.current_stage(), STAGES.len())
        ),
        View::Summary => "Submitted".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(progress, Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One dot per stage, filled up to and including the current one
fn stage_trail(current: usize, total: usize) -> String {
    (0..total)
        .map(|i| if i <= current { '●' } else { '○' })
        .collect()
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(app.state.current_view());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Status message
    if let Some(msg) = &app.status_message {
        let color = if app.state.wizard.errors().is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Stage => format!(
            "Tab:next field  Space:toggle  {NEXT_SHORTCUT}:next  {PREV_SHORTCUT}:prev  Esc:quit"
        ),
        View::Summary => "y:copy summary  q:quit".to_string(),
    }
}
