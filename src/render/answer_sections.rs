use crate::response::{Clause, NormalizedAnswer, RiskLevel};

use super::{Badge, Tone};

/// One labeled block of a single-document answer, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    DocumentName(String),
    Answer(String),
    Summary(String),
    Excerpt(ExcerptBlock),
    KeyPoints(Vec<String>),
    KeyObligations(Vec<String>),
    RisksOrFlags(Vec<String>),
    Clauses(Vec<ClauseCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExcerptBlock {
    pub text: Option<String>,
    pub page: Option<i64>,
    pub translation: Option<String>,
    /// Activating the excerpt asks the paired viewer to highlight `text`.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClauseCard {
    pub number: Option<String>,
    pub badge: Option<Badge>,
    pub text: Option<String>,
    pub analysis: Option<String>,
}

impl Section {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Section::DocumentName(_) | Section::Answer(_) => None,
            Section::Summary(_) => Some("Summary"),
            Section::Excerpt(_) => Some("Relevant Excerpt"),
            Section::KeyPoints(_) => Some("Key Points"),
            Section::KeyObligations(_) => Some("Key Obligations"),
            Section::RisksOrFlags(_) => Some("Risks & Flags"),
            Section::Clauses(_) => Some("Clause Analysis"),
        }
    }

    /// The literal text a click on this section should highlight, if any.
    pub fn highlight_target(&self) -> Option<&str> {
        match self {
            Section::Excerpt(ExcerptBlock { text: Some(text), interactive: true, .. }) => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Sections for `answer` in fixed order; absent or empty fields produce nothing.
pub fn render_answer(answer: &NormalizedAnswer, interactive: bool) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(name) = &answer.document_name {
        sections.push(Section::DocumentName(name.clone()));
    }
    if let Some(text) = &answer.answer {
        sections.push(Section::Answer(text.clone()));
    }
    if let Some(summary) = &answer.summary {
        sections.push(Section::Summary(summary.clone()));
    }
    if answer.excerpt.is_some() || answer.excerpt_translation_en.is_some() {
        sections.push(Section::Excerpt(ExcerptBlock {
            text: answer.excerpt.clone(),
            page: answer.excerpt_page_no,
            translation: answer.excerpt_translation_en.clone(),
            interactive: interactive && answer.excerpt.is_some(),
        }));
    }
    if !answer.key_points.is_empty() {
        sections.push(Section::KeyPoints(answer.key_points.clone()));
    }
    if !answer.key_obligations.is_empty() {
        sections.push(Section::KeyObligations(answer.key_obligations.clone()));
    }
    if !answer.risks_or_flags.is_empty() {
        sections.push(Section::RisksOrFlags(answer.risks_or_flags.clone()));
    }
    if !answer.clauses.is_empty() {
        sections.push(Section::Clauses(answer.clauses.iter().map(clause_card).collect()));
    }

    sections
}

fn clause_card(clause: &Clause) -> ClauseCard {
    ClauseCard {
        number: clause.clause_number.clone(),
        badge: clause.risk_label.as_ref().map(|label| {
            Badge::new(label.clone(), risk_tone(clause.risk_level))
        }),
        text: clause.clause_text.clone(),
        analysis: clause.analysis.clone(),
    }
}

fn risk_tone(level: RiskLevel) -> Tone {
    match level {
        RiskLevel::High => Tone::Alert,
        RiskLevel::Medium => Tone::Caution,
        RiskLevel::Low => Tone::Calm,
        RiskLevel::Unspecified => Tone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::response::{normalize, AssistantContent};

    fn answer_from(value: serde_json::Value) -> NormalizedAnswer {
        match normalize(value) {
            AssistantContent::Answer(answer) => answer,
            other => panic!("expected answer, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_record_renders_no_sections() {
        assert!(render_answer(&NormalizedAnswer::default(), true).is_empty());
        assert!(render_answer(&answer_from(json!({"key_points": [], "summary": ""})), true).is_empty());
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let answer = answer_from(json!({
            "clauses": [{"clause_number": "4.2", "risk_level": "low"}],
            "risks_or_flags": ["Auto-renewal"],
            "key_obligations": ["Pay monthly"],
            "key_points": ["Term is 2 years"],
            "excerpt": "Payment is due within 30 days",
            "summary": "A services agreement.",
            "answer": "Net 30",
            "document_name": "msa.pdf"
        }));

        let titles: Vec<_> = render_answer(&answer, false)
            .iter()
            .map(|s| match s {
                Section::DocumentName(_) => "document",
                Section::Answer(_) => "answer",
                other => other.title().unwrap_or_default(),
            })
            .collect();

        assert_eq!(titles, vec![
            "document", "answer", "Summary", "Relevant Excerpt",
            "Key Points", "Key Obligations", "Risks & Flags", "Clause Analysis",
        ]);
    }

    #[test]
    fn test_only_interactive_excerpt_is_a_highlight_target() {
        let answer = answer_from(json!({"excerpt": "Payment is due within 30 days", "excerpt_page_no": 4}));

        let sections = render_answer(&answer, true);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].highlight_target(), Some("Payment is due within 30 days"));
        match &sections[0] {
            Section::Excerpt(block) => assert_eq!(block.page, Some(4)),
            other => panic!("expected excerpt, got {:?}", other),
        }

        let passive = render_answer(&answer, false);
        assert_eq!(passive[0].highlight_target(), None);
    }

    #[test]
    fn test_translation_only_excerpt_is_not_clickable() {
        let answer = answer_from(json!({"excerpt_translation_en": "Payment within thirty days"}));
        let sections = render_answer(&answer, true);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].highlight_target(), None);
    }

    #[test]
    fn test_clause_badge_tone_uses_substring() {
        let answer = answer_from(json!({"clauses": [
            {"clause_number": 1, "risk_level": "Very HIGH"},
            {"clause_number": 2, "risk_level": "unclear"},
            {"clause_number": 3}
        ]}));

        let cards = match &render_answer(&answer, false)[0] {
            Section::Clauses(cards) => cards.clone(),
            other => panic!("expected clauses, got {:?}", other),
        };

        assert_eq!(cards[0].badge, Some(Badge::new("Very HIGH", Tone::Alert)));
        assert_eq!(cards[1].badge, Some(Badge::new("unclear", Tone::Neutral)));
        assert_eq!(cards[2].badge, None);
    }
}
