use crate::viewer::{DocumentViewer, PageExtractor, ViewerState, DEFAULT_PAGE_WIDTH};

impl DocumentViewer {
    /// A viewer with nothing requested yet sits in `Loading` until its first source arrives.
    pub fn new() -> Self {
        Self {
            extractor: PageExtractor::new(),
            source: None,
            generation: 0,
            state: ViewerState::Loading,
            pages: Vec::new(),
            page_width: DEFAULT_PAGE_WIDTH,
        }
    }

    pub fn extractor(&self) -> PageExtractor {
        self.extractor.clone()
    }
}

impl Default for DocumentViewer {
    fn default() -> Self {
        Self::new()
    }
}
