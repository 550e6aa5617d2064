//! Field rendering utilities for forms

use crate::state::{FieldName, FormSession};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MASK_CHAR: char = '•';

/// Draw one field of a session: label, value (masked if secret), and the
/// field's error, if any, along the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    session: &FormSession,
    field: FieldName,
    is_active: bool,
) {
    let error = session.errors().field(field);
    let value = session.value(field);

    let border_color = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display = if field.is_secret() && !session.flags().reveals(field) {
        MASK_CHAR.to_string().repeat(value.chars().count())
    } else if field == FieldName::Relationship && value.is_empty() {
        "◂ select ▸".to_string()
    } else {
        value.to_string()
    };

    let cursor = if is_active && field != FieldName::Relationship {
        "▌"
    } else {
        ""
    };

    let mut spans = vec![
        Span::styled(display, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ];
    if field.is_secret() && is_active {
        let hint = if session.flags().reveals(field) {
            "  [F2 hide]"
        } else {
            "  [F2 show]"
        };
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    }

    let required = session.kind().rules().validated_fields().any(|f| f == field);
    let label = if required {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };

    let mut block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a section heading
pub fn draw_section(frame: &mut Frame, area: Rect, title: &str) {
    let heading = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, area);
}

/// Draw a single red line for a form-level error
pub fn draw_form_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
