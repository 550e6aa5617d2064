//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `login_form`: Sign-in screen
//! - `register_form`: Account registration screen
//! - `reset_form`: Password reset request and acknowledgment

mod field_renderer;
mod login_form;
mod register_form;
mod reset_form;

pub use login_form::draw_login;
pub use register_form::draw_register;
pub use reset_form::draw_reset;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Submit shortcut shown in help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Draw a screen heading: bold title with a dimmed subtitle under it.
/// Returns the area left below the heading.
fn draw_heading(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Spacing
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .centered();
    let subtitle = Paragraph::new(Line::from(Span::styled(
        subtitle,
        Style::default().fg(Color::DarkGray),
    )))
    .centered();

    frame.render_widget(title, chunks[0]);
    frame.render_widget(subtitle, chunks[1]);
    chunks[3]
}
