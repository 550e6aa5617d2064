//! Layout components (centered card, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Widest the form card grows on large terminals
const CARD_MAX_WIDTH: u16 = 96;

/// Split the screen into the form card and the status bar line.
/// Returns the card's inner area, already bordered.
pub fn draw_card(frame: &mut Frame) -> Rect {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(rows[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Memorial Gardens ")
        .padding(Padding::horizontal(2));
    let inner = block.inner(card);
    frame.render_widget(block, card);
    inner
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Green once every rule passes
    let ready = if app.state.session.is_submittable() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Gray))
    };
    let mut spans = vec![
        ready,
        Span::styled(
            format!("{} ", view_hints(&app.state.current_view)),
            Style::default().fg(Color::Gray),
        ),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(view: &View) -> &'static str {
    match view {
        View::Login => "Tab:next  Enter:sign in  F2:show  ^R:register  ^F:forgot",
        View::Register => {
            "Tab:next  ←/→:relationship  Space:terms  F2:show  Enter:create  Esc:sign in"
        }
        View::PasswordReset => "Enter:send  Esc:back",
    }
}
