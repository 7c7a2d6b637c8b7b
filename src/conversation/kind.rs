/// Which page a conversation backs. Both talk to the same backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    Analysis,
    Comparison,
}

impl ConversationKind {
    pub fn title(&self) -> &'static str {
        match self {
            ConversationKind::Analysis => "Contract Assistant",
            ConversationKind::Comparison => "Contract Comparison",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ConversationKind::Analysis => "Upload contracts to analyze, compare, and get insights",
            ConversationKind::Comparison => "Upload multiple contracts to compare terms, clauses, and conditions",
        }
    }

    pub fn status_line(&self) -> &'static str {
        match self {
            ConversationKind::Analysis => "Analyzing your request...",
            ConversationKind::Comparison => "Comparing contracts...",
        }
    }

    pub fn example_prompts(&self) -> [&'static str; 3] {
        match self {
            ConversationKind::Analysis => [
                "Summarize the key terms and conditions",
                "What are the payment terms?",
                "Compare liability clauses",
            ],
            ConversationKind::Comparison => [
                "Compare the payment terms across all contracts",
                "Show differences in liability clauses",
                "Which contract has the most favorable terms?",
            ],
        }
    }

    pub fn has_viewer(&self) -> bool {
        matches!(self, ConversationKind::Analysis)
    }
}
