//! Login form rendering

use super::field_renderer::{draw_error_line, draw_field};
use crate::app::App;
use crate::state::Focus;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Preferred width of the form box
const FORM_WIDTH: u16 = 64;
/// Input field height in rows
const FIELD_HEIGHT: u16 = 3;
/// Width of each action button
const BUTTON_WIDTH: u16 = 14;

/// Draw the login form centered in `area`
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let view = form.view();
    let focus = app.state.focus;

    // fields + error lines + submission error + buttons + borders
    let height = 2 * (FIELD_HEIGHT + 1) + 2 + BUTTON_HEIGHT + 2;
    let form_area = centered(area, FORM_WIDTH, height);

    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Password error
            Constraint::Length(2),             // Submission error
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    draw_field(frame, chunks[0], &form.email, focus == Focus::Email, false);
    draw_error_line(frame, chunks[1], view.email_error.as_deref());

    draw_field(
        frame,
        chunks[2],
        &form.password,
        focus == Focus::Password,
        app.state.mask_password,
    );
    draw_error_line(frame, chunks[3], view.password_error.as_deref());

    if let Some(message) = view.error_message.as_deref() {
        let paragraph = Paragraph::new(message)
            .style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[4]);
    }

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH), // Login
            Constraint::Length(1),            // Gap
            Constraint::Length(BUTTON_WIDTH), // Reset
            Constraint::Min(0),
        ])
        .split(chunks[5]);

    render_button(
        frame,
        button_chunks[0],
        "Login",
        focus == Focus::LoginButton,
        view.submit_enabled,
        Color::Green,
    );
    render_button(
        frame,
        button_chunks[2],
        "Reset",
        focus == Focus::ResetButton,
        true,
        Color::Gray,
    );
}

/// Rect of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
