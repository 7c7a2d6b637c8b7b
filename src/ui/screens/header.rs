use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Tabs, Widget},
};

use crate::app::App;
use crate::conversation::ConversationKind;

const PAGES: [ConversationKind; 2] = [ConversationKind::Analysis, ConversationKind::Comparison];

pub fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let titles = PAGES.iter()
        .enumerate()
        .map(|(i, kind)| format!("F{} {}", i + 1, kind.title()));

    let selected = PAGES.iter().position(|kind| *kind == app.active).unwrap_or(0);

    Tabs::new(titles)
        .select(selected)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(app.active.subtitle())
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .render(area, buf);
}
