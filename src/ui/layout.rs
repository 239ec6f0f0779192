//! Layout and chrome (header, footer, status bar)

use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions for the single registration view
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub preview: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

/// Create the main layout: header on top, form and preview side by side,
/// footer and status bar at the bottom.
pub fn create_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(2), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Preview
        ])
        .split(chunks[1]);

    ScreenAreas {
        header: chunks[0],
        form: main_chunks[0],
        preview: main_chunks[1],
        footer: chunks[2],
        status_bar: chunks[3],
    }
}

/// Draw the header with brand and section chips
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let brand = Line::from(vec![
        Span::styled(
            " E ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "Enroll",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Controlled Form • Validation",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let chips = Line::from(vec![
        Span::styled("[ Form ]", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("[ Preview ]", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("[ About ]", Style::default().fg(Color::Gray)),
    ]);

    frame.render_widget(Paragraph::new(brand), area);

    let chips_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(chips).alignment(Alignment::Right),
        chips_area,
    );
}

/// Draw the footer with the copyright line for the current year
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let year = Local::now().year();
    let lines = vec![
        Line::from(Span::styled(
            "Built for the terminal • Student Registration",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("© {year} Enroll • Demo project"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let hints = " Tab/↓:next  S-Tab/↑:prev  Space/←→:choose  Enter:press  ^S:validate  Esc:quit";
    let status = Paragraph::new(Line::from(Span::raw(hints)))
        .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(status, area);
}
