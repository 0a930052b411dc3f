//! Quit confirmation dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::QuitDialogOption;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const OPTIONS: [QuitDialogOption; 2] = [QuitDialogOption::Stay, QuitDialogOption::Quit];

/// Render the "discard application?" confirmation
pub fn render_quit_dialog(frame: &mut Frame, selected: QuitDialogOption) {
    let options = OPTIONS
        .iter()
        .map(|option| {
            let is_selected = *option == selected;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = match (is_selected, option) {
                (true, QuitDialogOption::Quit) => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                }
                (true, QuitDialogOption::Stay) => Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                (false, _) => Style::default().fg(Color::DarkGray),
            };
            Line::from(Span::styled(format!("{prefix}{}", option.label()), style))
        })
        .collect();

    let key_style = Style::default().fg(Color::Cyan);
    let muted = Style::default().fg(Color::DarkGray);
    let hint = vec![
        Span::styled("←→", key_style),
        Span::styled(" select  ", muted),
        Span::styled("Enter", key_style),
        Span::styled(" confirm  ", muted),
        Span::styled("Esc", key_style),
        Span::styled(" cancel", muted),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Quit?",
            accent: Color::Yellow,
            message: "Your application has not been submitted. Entered data will be lost.",
            options,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
