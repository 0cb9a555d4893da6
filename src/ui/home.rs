//! Signed-in home screen

use super::layout::centered_rect;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let box_area = centered_rect(56, 9, area);

    let block = Block::default()
        .title(" Lumen ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = match &app.state.session {
        Some(session) => vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Signed in as "),
                Span::styled(session.email.clone(), Style::default().fg(Color::Green)),
            ]),
            Line::from(Span::styled(
                format!(
                    "Session valid until {}",
                    session.expires_at.format("%Y-%m-%d %H:%M UTC")
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Your lists sync in the background.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No active session",
                Style::default().fg(Color::Red),
            )),
        ],
    };

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(content, box_area);
}
