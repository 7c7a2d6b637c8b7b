use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
};
use throbber_widgets_tui::Throbber;

use crate::app::App;
use crate::ui::screens::{
    document_panel::render_document_panel,
    input::{render_footer, render_input},
    messages::render_messages,
};

pub fn render_page(app: &mut App, area: Rect, buf: &mut Buffer) {
    let status: Option<Line<'static>> = app.active_page()
        .conversation
        .status_line()
        .map(|label| Throbber::default().label(label).to_line(&app.throbber));

    let page = app.active_page_mut();
    let (chat_area, document_area) = if page.conversation.is_viewer_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),     // Messages
            Constraint::Length(3),  // Input
            Constraint::Length(1),  // Footer
        ])
        .split(chat_area);

    render_messages(page, status, rows[0], buf);
    render_input(page, rows[1], buf);
    render_footer(page, rows[2], buf);

    if let Some(document_area) = document_area {
        render_document_panel(&mut page.conversation, document_area, buf);
    }
}
