use serde_json::{Map, Value};

use super::fields::{objects, text};

/// Cross-document comparison: a clause table plus an overall verdict.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonAnswer {
    pub comparison_table: Vec<ComparisonRow>,
    pub overall_comparison_summary: Option<String>,
    /// Raw label, e.g. "High"; see [`Confidence::parse`] for the badge tone.
    pub confidence: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonRow {
    pub clause_id: Option<String>,
    pub clause_name: Option<String>,
    pub document_1: Option<String>,
    pub document_2: Option<String>,
    pub comparison_type: Option<ComparisonType>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonType {
    Similarity,
    Difference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl ComparisonType {
    /// Anything other than "similarity" reads as a difference.
    pub fn parse(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("similarity") {
            ComparisonType::Similarity
        } else {
            ComparisonType::Difference
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            ComparisonType::Similarity => "≈ Similar",
            ComparisonType::Difference => "≠ Different",
        }
    }
}

impl Confidence {
    /// Exact match only, unlike clause risk levels.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "high" => Some(Confidence::High),
            "medium" => Some(Confidence::Medium),
            "low" => Some(Confidence::Low),
            _ => None,
        }
    }
}

impl ComparisonAnswer {
    /// Whether a record carries comparison fields rather than a single-document answer.
    pub fn matches(map: &Map<String, Value>) -> bool {
        map.contains_key("comparison_table") || map.contains_key("overall_comparison_summary")
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            comparison_table: objects(map, "comparison_table")
                .into_iter()
                .map(ComparisonRow::from_map)
                .collect(),
            overall_comparison_summary: text(map, "overall_comparison_summary"),
            confidence: text(map, "confidence"),
        }
    }
}

impl ComparisonRow {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            clause_id: text(map, "clause_id"),
            clause_name: text(map, "clause_name"),
            document_1: text(map, "document_1"),
            document_2: text(map, "document_2"),
            comparison_type: text(map, "comparison_type").map(|t| ComparisonType::parse(&t)),
            notes: text(map, "notes"),
        }
    }
}
