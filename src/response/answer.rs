use serde_json::{Map, Value};

use super::fields::{objects, positive_integer, text, text_list};

/// Single-document answer. Every field is optional; absent ones are not rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedAnswer {
    pub answer: Option<String>,
    pub summary: Option<String>,
    pub key_points: Vec<String>,
    pub key_obligations: Vec<String>,
    pub risks_or_flags: Vec<String>,
    pub clauses: Vec<Clause>,
    pub excerpt: Option<String>,
    pub excerpt_translation_en: Option<String>,
    pub excerpt_page_no: Option<i64>,
    pub document_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clause {
    pub clause_number: Option<String>,
    pub clause_text: Option<String>,
    pub analysis: Option<String>,
    /// Label exactly as the backend wrote it, shown on the badge.
    pub risk_label: Option<String>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    #[default]
    Unspecified,
}

impl RiskLevel {
    /// Substring match, case-insensitive: "Medium-High" counts as high.
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("high") {
            RiskLevel::High
        } else if label.contains("medium") {
            RiskLevel::Medium
        } else if label.contains("low") {
            RiskLevel::Low
        } else {
            RiskLevel::Unspecified
        }
    }
}

impl NormalizedAnswer {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            answer: text(map, "answer"),
            summary: text(map, "summary"),
            key_points: text_list(map, "key_points"),
            key_obligations: text_list(map, "key_obligations"),
            risks_or_flags: text_list(map, "risks_or_flags"),
            clauses: objects(map, "clauses").into_iter().map(Clause::from_map).collect(),
            excerpt: text(map, "excerpt"),
            excerpt_translation_en: text(map, "excerpt_translation_en"),
            excerpt_page_no: positive_integer(map, "excerpt_page_no"),
            document_name: text(map, "document_name"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == NormalizedAnswer::default()
    }
}

impl Clause {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let risk_label = text(map, "risk_level");
        let risk_level = risk_label.as_deref()
            .map(RiskLevel::classify)
            .unwrap_or_default();

        Self {
            clause_number: text(map, "clause_number"),
            clause_text: text(map, "clause_text"),
            analysis: text(map, "analysis"),
            risk_label,
            risk_level,
        }
    }
}
