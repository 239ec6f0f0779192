//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let areas = layout::create_layout(area);

    layout::draw_header(frame, areas.header);
    form::draw(frame, areas.form, app);
    preview::draw(frame, areas.preview, app);
    layout::draw_footer(frame, areas.footer);
    layout::draw_status_bar(frame, areas.status_bar);
}
