//! Pure mapping from normalized records to labeled sections. Styling lives in `ui`.

mod answer_sections;
mod comparison_sections;

pub use answer_sections::{render_answer, ClauseCard, ExcerptBlock, Section};
pub use comparison_sections::{render_comparison, ComparisonSection, ComparisonTableRow};

/// Visual weight of a badge, mapped to colors by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// High risk, low confidence.
    Alert,
    Caution,
    /// Low risk, high confidence.
    Calm,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self { label: label.into(), tone }
    }
}
