use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::conversation::Conversation;
use crate::ui::components::UiComponent;
use crate::ui::style::highlighted;
use crate::viewer::{DocumentViewer, ViewerState};

pub fn render_document_panel(conversation: &mut Conversation, area: Rect, buf: &mut Buffer) {
    let highlight = conversation.active_highlight().map(str::to_string);
    let Some(viewer) = conversation.viewer_mut() else {
        return;
    };

    let title = viewer.source()
        .map(|source| format!(" {} (Esc to close) ", source))
        .unwrap_or_else(|| " Document ".to_string());
    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    block.render(area, buf);

    viewer.resize(inner.width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Controls
            Constraint::Min(1),     // Page
        ])
        .split(inner);

    controls_line(viewer).render(rows[0], buf);

    match viewer.state() {
        ViewerState::Loading => UiComponent::empty_message("Loading PDF...").render(rows[1], buf),
        ViewerState::Error(message) => error_view(message, viewer).render(rows[1], buf),
        ViewerState::Ready { .. } => {
            let lines: Vec<Line> = viewer.text_runs(highlight.as_deref())
                .into_iter()
                .map(|run| {
                    let style = if run.highlighted { highlighted() } else { Style::default().fg(Color::White) };
                    Line::styled(run.text, style)
                })
                .collect();

            let page_area = page_rect(rows[1], viewer.page_width());
            Paragraph::new(Text::from(lines))
                .wrap(Wrap { trim: false })
                .render(page_area, buf);
        }
    }
}

/// Centers a column of `page_width` in `area`, shrinking to fit.
fn page_rect(area: Rect, page_width: u16) -> Rect {
    let width = page_width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn controls_line(viewer: &DocumentViewer) -> Paragraph<'static> {
    let enabled = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let (current, count) = match viewer.state() {
        ViewerState::Ready { current_page, page_count } => (*current_page, *page_count),
        _ => (0, 0),
    };
    let status = if count > 0 {
        format!("Page {} of {}", current, count)
    } else {
        "Loading...".to_string()
    };

    Paragraph::new(Line::from(vec![
        Span::styled("← Previous", if current > 1 { enabled } else { disabled }),
        Span::raw("   "),
        Span::styled(status, Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Next →", if current < count { enabled } else { disabled }),
    ]))
    .alignment(Alignment::Center)
}

fn error_view(message: &str, viewer: &DocumentViewer) -> Paragraph<'static> {
    let path = viewer.source().map(|s| s.to_string()).unwrap_or_default();

    Paragraph::new(Text::from(vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(format!("File path: {}", path), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}
