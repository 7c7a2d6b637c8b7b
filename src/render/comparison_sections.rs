use crate::response::{ComparisonAnswer, ComparisonRow, Confidence};

use super::{Badge, Tone};

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonSection {
    Summary { text: String, confidence: Option<Badge> },
    Table(Vec<ComparisonTableRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTableRow {
    pub clause_id: Option<String>,
    pub clause_name: Option<String>,
    pub document_1: Option<String>,
    pub document_2: Option<String>,
    pub badge: Option<&'static str>,
    pub notes: Option<String>,
}

impl ComparisonSection {
    pub fn title(&self) -> &'static str {
        match self {
            ComparisonSection::Summary { .. } => "Comparison Summary",
            ComparisonSection::Table(_) => "Clause-by-Clause Comparison",
        }
    }
}

pub fn render_comparison(comparison: &ComparisonAnswer) -> Vec<ComparisonSection> {
    let mut sections = Vec::new();

    if let Some(summary) = &comparison.overall_comparison_summary {
        sections.push(ComparisonSection::Summary {
            text: summary.clone(),
            confidence: comparison.confidence.as_deref().map(confidence_badge),
        });
    }

    if !comparison.comparison_table.is_empty() {
        sections.push(ComparisonSection::Table(
            comparison.comparison_table.iter().map(table_row).collect(),
        ));
    }

    sections
}

fn confidence_badge(label: &str) -> Badge {
    let tone = match Confidence::parse(label) {
        Some(Confidence::High) => Tone::Calm,
        Some(Confidence::Medium) => Tone::Caution,
        Some(Confidence::Low) => Tone::Alert,
        None => Tone::Neutral,
    };
    Badge::new(format!("{} Confidence", label), tone)
}

fn table_row(row: &ComparisonRow) -> ComparisonTableRow {
    ComparisonTableRow {
        clause_id: row.clause_id.clone(),
        clause_name: row.clause_name.clone(),
        document_1: row.document_1.clone(),
        document_2: row.document_2.clone(),
        badge: row.comparison_type.map(|t| t.badge()),
        notes: row.notes.clone(),
    }
}
