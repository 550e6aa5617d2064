//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let card = layout::draw_card(frame);

    match &app.state.current_view {
        View::Login => forms::draw_login(frame, card, app),
        View::Register => forms::draw_register(frame, card, app),
        View::PasswordReset => forms::draw_reset(frame, card, app),
    }

    layout::draw_status_bar(frame, app);

    // Error dialog sits above everything else
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
