//! Sign-in form rendering

use super::field_renderer::{draw_field, draw_form_error, draw_help_text};
use super::{draw_heading, SUBMIT_SHORTCUT};
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the sign-in screen
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let body = draw_heading(
        frame,
        area,
        app.state.session.kind().title(),
        "Access your cemetery management dashboard",
    );

    if app.state.session.is_submitted() {
        draw_signed_in(frame, body, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Form-level error
            Constraint::Length(BUTTON_HEIGHT), // Sign In
            Constraint::Length(1),             // Spacing
            Constraint::Length(2),             // Links
            Constraint::Min(0),
        ])
        .split(body);

    let session = &app.state.session;
    draw_field(
        frame,
        chunks[0],
        session,
        FieldName::Email,
        app.state.is_focused(Focus::Field(FieldName::Email)),
    );
    draw_field(
        frame,
        chunks[1],
        session,
        FieldName::Password,
        app.state.is_focused(Focus::Field(FieldName::Password)),
    );
    draw_form_error(frame, chunks[2], session.errors().submission());
    render_button(
        frame,
        chunks[3],
        "Sign In",
        app.state.is_focused(Focus::Submit),
    );
    draw_help_text(
        frame,
        chunks[5],
        &format!(
            "Forgot password? Ctrl+F\n\
             Don't have an account? Sign up with Ctrl+R  ·  Enter/{SUBMIT_SHORTCUT} sign in"
        ),
    );
}

fn draw_signed_in(frame: &mut Frame, area: Rect, app: &App) {
    let email = app.state.session.value(FieldName::Email);
    let lines = vec![
        Line::from(Span::styled(
            "Signed in",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Welcome back, "),
            Span::styled(email, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to sign out",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}
