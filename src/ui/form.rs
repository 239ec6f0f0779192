//! Registration form panel

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, draw_radio_row};
use super::preview::course_label;
use crate::app::App;
use crate::state::{FieldId, LEVEL_OPTIONS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per single-line field: bordered box plus error line
const FIELD_HEIGHT: u16 = 4;

/// Draw the registration form with inline errors and the buttons row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = app.state.errors();

    let form_focused = !form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Student Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),     // Name
            Constraint::Length(FIELD_HEIGHT),     // Email
            Constraint::Length(FIELD_HEIGHT),     // Course
            Constraint::Length(FIELD_HEIGHT),     // Level
            Constraint::Min(FIELD_HEIGHT + 1),    // Message
            Constraint::Length(BUTTON_HEIGHT),    // Buttons
            Constraint::Length(1),                // Submit message
        ])
        .split(inner);

    draw_field(
        frame,
        chunks[0],
        FieldId::Name.label(),
        form.value(FieldId::Name),
        FieldId::Name.placeholder(),
        form.active_field() == Some(FieldId::Name),
        false,
        errors.get(&FieldId::Name).copied(),
    );

    draw_field(
        frame,
        chunks[1],
        FieldId::Email.label(),
        form.value(FieldId::Email),
        FieldId::Email.placeholder(),
        form.active_field() == Some(FieldId::Email),
        false,
        errors.get(&FieldId::Email).copied(),
    );

    // The select shows the option's display label, not its identifier
    let course_display = if form.course.is_empty() {
        String::new()
    } else {
        course_label(&form.course).to_string()
    };
    draw_field(
        frame,
        chunks[2],
        FieldId::Course.label(),
        &course_display,
        FieldId::Course.placeholder(),
        form.active_field() == Some(FieldId::Course),
        false,
        errors.get(&FieldId::Course).copied(),
    );

    draw_radio_row(
        frame,
        chunks[3],
        FieldId::Level.label(),
        LEVEL_OPTIONS,
        &form.level,
        form.active_field() == Some(FieldId::Level),
        errors.get(&FieldId::Level).copied(),
    );

    draw_field(
        frame,
        chunks[4],
        FieldId::Message.label(),
        form.value(FieldId::Message),
        FieldId::Message.placeholder(),
        form.active_field() == Some(FieldId::Message),
        true,
        errors.get(&FieldId::Message).copied(),
    );

    draw_buttons_row(frame, chunks[5], app);
    draw_submit_message(frame, chunks[6], app);
}

fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let on_buttons = form.is_buttons_row_active();

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(17), // Validate Form
            Constraint::Length(9),  // Clear
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        button_chunks[0],
        "Validate Form",
        on_buttons && form.selected_button == 0,
        Some(Color::Green),
    );
    render_button(
        frame,
        button_chunks[1],
        "Clear",
        on_buttons && form.selected_button == 1,
        Some(Color::Gray),
    );
}

fn draw_submit_message(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.submit_message.is_empty() {
        return;
    }

    // Styled by current validity, which can differ from the validity at
    // submit time if the user has edited since.
    let style = if app.state.is_valid() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.state.submit_message),
        style,
    )));
    frame.render_widget(line, area);
}
