use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::PageView;
use crate::conversation::{Conversation, Message, Role};
use crate::render::{render_answer, render_comparison};
use crate::response::AssistantContent;
use crate::ui::screens::sections::{answer_lines, comparison_lines};
use crate::ui::style::role_style;

pub fn render_messages(page: &mut PageView, status: Option<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let kind = page.conversation.kind();
    let block = Block::bordered()
        .title(format!("{} (PgUp/PgDn to scroll)", kind.title()))
        .border_type(BorderType::Rounded);

    if page.conversation.messages().is_empty() && status.is_none() {
        Paragraph::new(empty_state(&page.conversation))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
        return;
    }

    let mut lines = conversation_lines(&page.conversation);
    if let Some(status) = status {
        lines.push(status);
    }

    let inner = block.inner(area);
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });

    // Counted on the inner width with the same word wrapping used to draw.
    let content_height = paragraph.line_count(inner.width.max(1));
    let max_scroll = content_height.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16;
    page.clamp_scroll(max_scroll);

    paragraph
        .block(block)
        .scroll((page.scroll_offset, 0))
        .render(area, buf);
}

fn empty_state(conversation: &Conversation) -> Text<'static> {
    let kind = conversation.kind();
    let mut lines = vec![
        Line::from(""),
        Line::styled(kind.title(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::styled(kind.subtitle(), Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::styled("Try one of these:", Style::default().fg(Color::White)),
    ];

    for (i, prompt) in kind.example_prompts().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("F{}  ", i + 5), Style::default().fg(Color::Yellow)),
            Span::styled(*prompt, Style::default().fg(Color::White)),
        ]));
    }
    Text::from(lines)
}

/// All messages as styled lines, oldest first.
pub fn conversation_lines(conversation: &Conversation) -> Vec<Line<'static>> {
    let focused = conversation.focused_excerpt().map(|target| target.message_index);
    let interactive = conversation.kind().has_viewer();

    let mut lines = Vec::new();
    for (index, message) in conversation.messages().iter().enumerate() {
        lines.extend(message_lines(message, interactive, focused == Some(index)));
        lines.push(Line::from(""));
    }
    lines
}

fn message_lines(message: &Message, interactive: bool, focused: bool) -> Vec<Line<'static>> {
    let prefix = match message.role {
        Role::User => "You: ",
        Role::Assistant => "Assistant: ",
        Role::System => "System: ",
    };
    let style = role_style(message.role, message.is_error);
    let prefix_span = Span::styled(prefix, style.add_modifier(Modifier::BOLD));

    match &message.content {
        AssistantContent::PlainText(text) => {
            let body_style = if message.is_error || message.role == Role::System {
                style
            } else {
                Style::default().fg(Color::White)
            };
            let mut content = text.lines();
            let first = content.next().unwrap_or_default().to_string();
            let mut lines = vec![Line::from(vec![prefix_span, Span::styled(first, body_style)])];
            lines.extend(content.map(|line| Line::from(vec![
                Span::raw("    "),
                Span::styled(line.to_string(), body_style),
            ])));
            lines
        }
        AssistantContent::Answer(answer) => {
            let mut lines = vec![Line::from(prefix_span)];
            lines.extend(answer_lines(&render_answer(answer, interactive), focused));
            lines
        }
        AssistantContent::Comparison(comparison) => {
            let mut lines = vec![Line::from(prefix_span)];
            lines.extend(comparison_lines(&render_comparison(comparison)));
            lines
        }
    }
}
