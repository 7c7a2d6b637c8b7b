//! Turns whatever the backend returned for one query into something renderable.

mod fields;
mod normalize;
mod answer;
mod comparison;

pub use answer::{Clause, NormalizedAnswer, RiskLevel};
pub use comparison::{ComparisonAnswer, ComparisonRow, ComparisonType, Confidence};
pub use normalize::normalize;

/// The content of a message: exactly one of plain text or a structured record.
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantContent {
    PlainText(String),
    Answer(NormalizedAnswer),
    Comparison(ComparisonAnswer),
}

impl AssistantContent {
    pub fn text(text: impl Into<String>) -> Self {
        AssistantContent::PlainText(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AssistantContent::PlainText(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        !matches!(self, AssistantContent::PlainText(_))
    }
}
