//! Field rendering utilities for the registration form

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw an input field: bordered box with the current value (or a dim
/// placeholder) plus an error line underneath when the field is invalid.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    draw_input_box(
        frame,
        chunks[0],
        label,
        value,
        placeholder,
        is_active,
        is_multiline,
    );
    draw_error_line(frame, chunks[1], error);
}

fn draw_input_box(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() {
        // Placeholder, with the cursor in front of it when focused
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {label} * "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a radio row: every option inline, the chosen one marked.
pub fn draw_radio_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![];
    for option in options {
        let chosen = *option == selected;
        let marker = if chosen { "(•) " } else { "( ) " };
        let style = if chosen {
            Style::default().fg(Color::Cyan)
        } else if is_active {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker}{option}  "), style));
    }

    let block = Block::default()
        .title(format!(" {label} * "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);
    draw_error_line(frame, chunks[1], error);
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}
