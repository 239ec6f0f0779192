//! Live preview panel: a read-only mirror of the registration state

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Substitute a placeholder for an empty value
pub fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Display label for a course identifier.
///
/// Any unknown non-empty identifier falls through to the last course; the
/// lookup is deliberately inexact, matching the shipped behavior.
pub fn course_label(id: &str) -> &'static str {
    match id {
        "react" => "React Fundamentals",
        "fullstack" => "Full-Stack Bootcamp",
        _ => "UI / UX Design",
    }
}

/// Capitalize the first letter for display ("beginner" -> "Beginner")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Draw the preview panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_valid = app.state.is_valid();

    let block = Block::default()
        .title(" Live Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Entered values update as you type.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        preview_row("Name", form.name.as_str(), "Not filled yet"),
        preview_row("Email", form.email.as_str(), "Not filled yet"),
    ];

    if form.course.is_empty() {
        lines.push(preview_row("Course", "", "Not selected"));
    } else {
        lines.push(preview_row("Course", course_label(&form.course), ""));
    }

    let level_display = capitalize_first(&form.level);
    lines.push(preview_row("Level", level_display.as_str(), "Not selected"));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Message",
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    )));
    if form.message.is_empty() {
        lines.push(Line::from(Span::styled(
            "Start typing to see your message here…",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for text_line in form.message.lines() {
            lines.push(Line::from(Span::raw(text_line.to_string())));
        }
    }

    lines.push(Line::raw(""));
    lines.push(status_line(is_valid, app.config.use_ascii_symbols()));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn preview_row<'a>(label: &'a str, value: &'a str, placeholder: &'a str) -> Line<'a> {
    let shown = display_or(value, placeholder);
    let value_style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(
            format!("{label:<8}"),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        Span::styled(shown, value_style),
    ])
}

fn status_line(is_valid: bool, ascii: bool) -> Line<'static> {
    let (dot, style, text) = if is_valid {
        (
            if ascii { "*" } else { "●" },
            Style::default().fg(Color::Green),
            "Form is currently valid.",
        )
    } else {
        (
            if ascii { "!" } else { "●" },
            Style::default().fg(Color::Yellow),
            "Form has some validation issues.",
        )
    };
    Line::from(vec![
        Span::styled(format!("{dot} "), style),
        Span::styled(text, style),
    ])
}
