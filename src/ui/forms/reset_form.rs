//! Password reset rendering (request form and acknowledgment)

use super::field_renderer::{draw_field, draw_form_error, draw_help_text};
use super::draw_heading;
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw the password reset screen
pub fn draw_reset(frame: &mut Frame, area: Rect, app: &App) {
    let body = draw_heading(
        frame,
        area,
        app.state.session.kind().title(),
        "We'll send you instructions to reset your password",
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Form or acknowledgment
            Constraint::Length(1), // Back link
        ])
        .split(body);

    if app.state.session.is_submitted() {
        draw_acknowledgment(frame, chunks[0], app);
    } else {
        draw_request_form(frame, chunks[0], app);
    }

    draw_help_text(frame, chunks[1], "Back to sign in: Esc");
}

fn draw_request_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Form-level error
            Constraint::Length(BUTTON_HEIGHT), // Send
            Constraint::Min(0),
        ])
        .split(area);

    let session = &app.state.session;
    draw_field(
        frame,
        chunks[0],
        session,
        FieldName::Email,
        app.state.is_focused(Focus::Field(FieldName::Email)),
    );
    draw_form_error(frame, chunks[1], session.errors().submission());
    render_button(
        frame,
        chunks[2],
        "Send Reset Instructions",
        app.state.is_focused(Focus::Submit),
    );
}

fn draw_acknowledgment(frame: &mut Frame, area: Rect, app: &App) {
    let email = app.state.session.value(FieldName::Email);
    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("✉", Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(Span::styled(
            "Check your email",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("We've sent password reset instructions to ", dim),
            Span::styled(email, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Didn't receive the email? Check your spam folder or try again.",
            dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true }),
        area,
    );
}
