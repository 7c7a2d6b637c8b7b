//! Paginated document viewer: a small state machine over one loaded source.

mod trait_document_view_strategy;
mod strategies;
mod source;
mod page_extractor;
mod new;
mod load;
mod navigate;
mod resize;
mod text_runs;

pub use page_extractor::PageExtractor;
pub use source::DocumentSource;
pub use text_runs::{matches_highlight, TextRun};
pub use trait_document_view_strategy::DocumentViewStrategy;

/// Narrowest page the viewer will lay out, in terminal columns.
pub const MIN_PAGE_WIDTH: u16 = 40;
/// Columns reserved around the page inside its container.
pub const PAGE_GUTTER: u16 = 4;
pub const DEFAULT_PAGE_WIDTH: u16 = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerState {
    Loading,
    Ready { page_count: usize, current_page: usize },
    Error(String),
}

#[derive(Debug)]
pub struct DocumentViewer {
    extractor: PageExtractor,
    source: Option<DocumentSource>,
    /// Bumped on every load so a late result for an old source can be dropped.
    generation: u64,
    state: ViewerState,
    pages: Vec<String>,
    page_width: u16,
}

impl DocumentViewer {
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn source(&self) -> Option<&DocumentSource> {
        self.source.as_ref()
    }

    pub fn page_width(&self) -> u16 {
        self.page_width
    }

    pub fn current_page(&self) -> Option<usize> {
        match self.state {
            ViewerState::Ready { current_page, .. } => Some(current_page),
            _ => None,
        }
    }

    pub fn page_count(&self) -> Option<usize> {
        match self.state {
            ViewerState::Ready { page_count, .. } => Some(page_count),
            _ => None,
        }
    }
}
