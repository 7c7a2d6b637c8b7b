//! Styled terminal lines for rendered answer and comparison sections.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::render::{ClauseCard, ComparisonSection, ComparisonTableRow, ExcerptBlock, Section};
use crate::ui::style::{badge_span, heading, label};

const INDENT: &str = "    ";

fn text_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::from(vec![
            Span::raw(INDENT),
            Span::styled(line.to_string(), style),
        ]))
        .collect()
}

fn title_line(title: &str) -> Line<'static> {
    Line::from(vec![Span::raw(INDENT), Span::styled(title.to_string(), heading())])
}

fn labeled(name: &str, value: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![Span::raw(INDENT), Span::styled(name.to_string(), label())])];
    lines.extend(text_lines(value, Style::default().fg(Color::White)));
    lines
}

fn bullets(items: &[String], marker: &str, color: Color) -> Vec<Line<'static>> {
    items.iter()
        .map(|item| Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("{} ", marker), Style::default().fg(color)),
            Span::styled(item.clone(), Style::default().fg(Color::White)),
        ]))
        .collect()
}

/// `focused` marks the excerpt currently selected with Tab.
pub fn answer_lines(sections: &[Section], focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in sections {
        match section {
            Section::DocumentName(name) => lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(format!("📄 {}", name), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            ])),
            Section::Answer(text) => lines.extend(text_lines(text, Style::default().fg(Color::White))),
            Section::Summary(text) => {
                lines.push(title_line("Summary"));
                lines.extend(text_lines(text, Style::default().fg(Color::White)));
            }
            Section::Excerpt(block) => lines.extend(excerpt_lines(block, focused)),
            Section::KeyPoints(items) => {
                lines.push(title_line("Key Points"));
                lines.extend(bullets(items, "•", Color::Cyan));
            }
            Section::KeyObligations(items) => {
                lines.push(title_line("Key Obligations"));
                lines.extend(bullets(items, "✓", Color::Green));
            }
            Section::RisksOrFlags(items) => {
                lines.push(title_line("Risks & Flags"));
                lines.extend(bullets(items, "⚠", Color::Yellow));
            }
            Section::Clauses(cards) => {
                lines.push(title_line("Clause Analysis"));
                for card in cards {
                    lines.extend(clause_lines(card));
                }
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

fn excerpt_lines(block: &ExcerptBlock, focused: bool) -> Vec<Line<'static>> {
    let mut title = vec![Span::raw(INDENT), Span::styled("Relevant Excerpt", heading())];
    if let Some(page) = block.page {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            format!(" Page {} ", page),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }

    let mut lines = vec![Line::from(title)];
    if let Some(text) = &block.text {
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if block.interactive {
            Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC)
        };
        lines.push(Line::from(vec![Span::raw(INDENT), Span::styled("Original Text:", label())]));
        lines.extend(text_lines(&format!("\"{}\"", text), style));
    }
    if let Some(translation) = &block.translation {
        lines.extend(labeled("Translation:", translation));
    }
    if block.interactive {
        let hint = if focused {
            "[SELECTED - Press Enter to highlight in PDF]"
        } else {
            "Tab to select, Enter to highlight in PDF"
        };
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}

fn clause_lines(card: &ClauseCard) -> Vec<Line<'static>> {
    let mut header = vec![Span::raw(INDENT)];
    if let Some(number) = &card.number {
        header.push(Span::styled(format!("Clause {}", number), label()));
    }
    if let Some(badge) = &card.badge {
        header.push(Span::raw(" "));
        header.push(badge_span(badge));
    }

    let mut lines = vec![Line::from(header)];
    if let Some(text) = &card.text {
        lines.extend(labeled("Text:", text));
    }
    if let Some(analysis) = &card.analysis {
        lines.extend(labeled("Analysis:", analysis));
    }
    lines
}

pub fn comparison_lines(sections: &[ComparisonSection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in sections {
        match section {
            ComparisonSection::Summary { text, confidence } => {
                let mut title = vec![Span::raw(INDENT), Span::styled(section.title(), heading())];
                if let Some(badge) = confidence {
                    title.push(Span::raw(" "));
                    title.push(badge_span(badge));
                }
                lines.push(Line::from(title));
                lines.extend(text_lines(text, Style::default().fg(Color::White)));
            }
            ComparisonSection::Table(rows) => {
                lines.push(title_line(section.title()));
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled("Clause │ Document 1 │ Document 2 │ Analysis", label()),
                ]));
                for row in rows {
                    lines.extend(table_row_lines(row));
                }
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

fn table_row_lines(row: &ComparisonTableRow) -> Vec<Line<'static>> {
    let clause = match (&row.clause_id, &row.clause_name) {
        (Some(id), Some(name)) => format!("{} {}", id, name),
        (Some(id), None) => id.clone(),
        (None, Some(name)) => name.clone(),
        (None, None) => String::new(),
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(INDENT),
        Span::styled(format!("─ {}", clause), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ])];

    let cells = [("Document 1:", &row.document_1), ("Document 2:", &row.document_2)];
    for (name, value) in cells {
        if let Some(value) = value {
            lines.extend(labeled(name, value));
        }
    }

    if row.badge.is_some() || row.notes.is_some() {
        let mut analysis = vec![Span::raw(INDENT), Span::styled("Analysis: ", label())];
        if let Some(badge) = row.badge {
            let color = if badge.starts_with('≈') { Color::Green } else { Color::Yellow };
            analysis.push(Span::styled(
                format!(" {} ", badge),
                Style::default().fg(Color::Black).bg(color),
            ));
            analysis.push(Span::raw(" "));
        }
        if let Some(notes) = &row.notes {
            analysis.push(Span::styled(notes.clone(), Style::default().fg(Color::White)));
        }
        lines.push(Line::from(analysis));
    }

    lines
}
