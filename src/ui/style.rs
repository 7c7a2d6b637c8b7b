use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::conversation::Role;
use crate::render::{Badge, Tone};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Alert => Color::Red,
        Tone::Caution => Color::Yellow,
        Tone::Calm => Color::Green,
        Tone::Neutral => Color::Gray,
    }
}

pub fn badge_span(badge: &Badge) -> Span<'static> {
    Span::styled(
        format!(" {} ", badge.label),
        Style::default().fg(Color::Black).bg(tone_color(badge.tone)).add_modifier(Modifier::BOLD),
    )
}

pub fn role_style(role: Role, is_error: bool) -> Style {
    if is_error {
        return Style::default().fg(Color::Red);
    }
    match role {
        Role::User => Style::default().fg(Color::Cyan),
        Role::Assistant => Style::default().fg(Color::Green),
        Role::System => Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
    }
}

pub fn heading() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
}

pub fn highlighted() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow)
}
