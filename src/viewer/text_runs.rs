use crate::viewer::DocumentViewer;

/// One line of the current page's text layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub highlighted: bool,
}

/// Case-insensitive containment of the trimmed query. An empty query matches nothing.
pub fn matches_highlight(text: &str, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    !query.is_empty() && text.to_lowercase().contains(&query)
}

impl DocumentViewer {
    /// Text runs of the current page, marked against `highlight`. Evaluated fresh on every call.
    pub fn text_runs(&self, highlight: Option<&str>) -> Vec<TextRun> {
        let Some(page) = self.current_page_text() else {
            return Vec::new();
        };

        page.lines()
            .map(|line| TextRun {
                text: line.to_string(),
                highlighted: highlight.is_some_and(|query| matches_highlight(line, query)),
            })
            .collect()
    }
}
