use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::PageView;
use crate::conversation::ConversationState;
use crate::input_bar::{InputBar, InputMode};

pub fn render_input(page: &PageView, area: Rect, buf: &mut Buffer) {
    let busy = page.conversation.is_busy();
    let input = page.input.get_input();

    let title = match page.input.mode() {
        InputMode::Message => "Type your message (Ctrl+O to attach files)",
        InputMode::Attach => "Attach files (Enter to upload, Esc to cancel)",
    };

    let (text, color) = if input.is_empty() {
        (page.input.placeholder().to_string(), Color::DarkGray)
    } else {
        (format!("> {}", input), Color::Yellow)
    };

    Paragraph::new(text)
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if busy { Color::DarkGray } else { Color::Yellow }))
        )
        .fg(if busy { Color::DarkGray } else { color })
        .render(area, buf);
}

pub fn render_footer(page: &PageView, area: Rect, buf: &mut Buffer) {
    let uploading = page.conversation.state() == ConversationState::Uploading;

    Paragraph::new(InputBar::footer(uploading))
        .fg(Color::DarkGray)
        .italic()
        .alignment(Alignment::Center)
        .render(area, buf);
}
