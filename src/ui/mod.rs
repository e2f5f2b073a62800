//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function. Reads the app state only; every frame is a pure
/// projection of it.
pub fn draw(frame: &mut Frame, app: &App) {
    let (title_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_title_bar(frame, title_area, app);
    forms::draw_login(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
