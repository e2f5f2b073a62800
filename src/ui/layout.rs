//! Layout components (title bar, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT, TOGGLE_MASK_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into title bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title bar
pub fn draw_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.state.title),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(Color::Blue));

    frame.render_widget(title, area);
}

/// Draw the status bar: last status message, or key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let spans = match &app.status_message {
        Some(msg) => vec![Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Green),
        )],
        None => {
            let mask_label = if app.state.mask_password {
                "reveal"
            } else {
                "hide"
            };
            vec![Span::styled(
                format!(
                    " Tab:next  Enter:activate  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset  {TOGGLE_MASK_SHORTCUT}:{mask_label}  Esc:quit"
                ),
                Style::default().fg(Color::Gray),
            )]
        }
    };

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
