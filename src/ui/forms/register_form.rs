//! Account registration form rendering

use super::field_renderer::{draw_field, draw_form_error, draw_help_text, draw_section};
use super::{draw_heading, SUBMIT_SHORTCUT};
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_button, render_notice, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Form rows, top to bottom. Fields sharing a row sit side by side.
const ROWS: &[Row] = &[
    Row::Section("Personal Information"),
    Row::Fields(&[FieldName::FullName]),
    Row::Fields(&[FieldName::Email, FieldName::Phone]),
    Row::Section("Mailing Address"),
    Row::Fields(&[FieldName::Address]),
    Row::Fields(&[FieldName::City, FieldName::State, FieldName::ZipCode]),
    Row::Section("Cemetery Information"),
    Row::Fields(&[FieldName::Relationship, FieldName::PlotNumber]),
    Row::Fields(&[FieldName::DeceasedName]),
    Row::Section("Account Security"),
    Row::Fields(&[FieldName::Password, FieldName::ConfirmPassword]),
];

enum Row {
    Section(&'static str),
    Fields(&'static [FieldName]),
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Section(_) => 1,
            Row::Fields(_) => 3,
        }
    }
}

/// Draw the registration screen
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let body = draw_heading(
        frame,
        area,
        app.state.session.kind().title(),
        "Sign up to manage your cemetery arrangements and services",
    );

    let mut constraints: Vec<Constraint> =
        ROWS.iter().map(|r| Constraint::Length(r.height())).collect();
    constraints.extend([
        Constraint::Length(1),             // Terms checkbox
        Constraint::Length(1),             // Terms error
        Constraint::Length(1),             // Submission error
        Constraint::Length(BUTTON_HEIGHT), // Create Account
        Constraint::Length(1),             // Help
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    for (row, area) in ROWS.iter().zip(chunks.iter()) {
        match row {
            Row::Section(title) => draw_section(frame, *area, title),
            Row::Fields(fields) => draw_field_row(frame, *area, app, fields),
        }
    }

    let rest = &chunks[ROWS.len()..];
    draw_terms(frame, rest[0], app);
    draw_form_error(frame, rest[1], app.state.session.errors().terms());
    draw_form_error(frame, rest[2], app.state.session.errors().submission());
    render_button(
        frame,
        rest[3],
        "Create Account",
        app.state.is_focused(Focus::Submit),
    );
    draw_help_text(
        frame,
        rest[4],
        &format!(
            "Tab next · ◂▸ relationship · Space terms · Enter/{SUBMIT_SHORTCUT} create · \
             Already have an account? Esc"
        ),
    );

    if let Some(message) = app.success_banner() {
        render_notice(frame, "Success", message, Color::Green);
    }
}

fn draw_field_row(frame: &mut Frame, area: Rect, app: &App, fields: &[FieldName]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, fields.len() as u32);
            fields.len()
        ])
        .split(area);

    for (field, column) in fields.iter().zip(columns.iter()) {
        draw_field(
            frame,
            *column,
            &app.state.session,
            *field,
            app.state.is_focused(Focus::Field(*field)),
        );
    }
}

fn draw_terms(frame: &mut Frame, area: Rect, app: &App) {
    let checked = app.state.session.flags().terms_accepted;
    let focused = app.state.is_focused(Focus::Terms);
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(if checked { "[x] " } else { "[ ] " }, style),
        Span::styled("I agree to the Terms and Conditions", style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
