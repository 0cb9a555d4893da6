//! Sign-in screen

use super::layout::centered_rect;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field
fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw the sign-in screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.sign_in;
    let box_area = centered_rect(48, 14, area);

    let block = Block::default()
        .title(" Sign in to Lumen ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, box_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Error line
            Constraint::Length(3), // Submit control
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(box_area);

    draw_field(
        frame,
        chunks[0],
        &form.email.label,
        &form.email.display_value(),
        form.active_field_index == 0,
    );

    draw_field(
        frame,
        chunks[1],
        &form.password.label,
        &form.password.display_value(),
        form.active_field_index == 1,
    );

    // Error line; empty until an attempt fails, one message at a time
    if let Some(error) = &form.error {
        let alert = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(alert, chunks[2]);
    }

    // Submit control, inert while a request is outstanding
    let (label, style) = if form.submitting {
        ("Signing in…", Style::default().fg(Color::DarkGray))
    } else if form.can_submit() {
        ("Sign in", Style::default().fg(Color::Green))
    } else {
        ("Sign in", Style::default().fg(Color::DarkGray))
    };
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, chunks[3]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": sign in"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
