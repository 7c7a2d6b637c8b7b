pub mod components;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, Widget},
};

use crate::app::App;
use crate::ui::components::UiComponent;
use crate::ui::screens::{header::render_header, page::render_page};

const HELP_TEXT: &str =
    "F1/F2 pages • Enter send • Ctrl+O attach • Ctrl+P document • Tab excerpts • PgUp/PgDn scroll • Ctrl+C quit";

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Page tabs
                Constraint::Min(1),     // Page
                Constraint::Length(3),  // Help
            ])
            .split(area);

        render_header(self, layout[0], buf);
        render_page(self, layout[1], buf);
        UiComponent::help(HELP_TEXT).render(layout[2], buf);

        if let Some(alert) = &self.alert {
            let popup = centered_rect(50, 25, area);
            Clear.render(popup, buf);
            UiComponent::alert(alert).render(popup, buf);
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
