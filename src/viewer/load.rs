use crate::{
    error::{AssistantError, Result},
    log_info, log_warn,
    viewer::{DocumentSource, DocumentViewer, ViewerState},
};

impl DocumentViewer {
    /// Enters `Loading` for `source` and returns the load generation to report back with.
    pub fn begin_load(&mut self, source: DocumentSource) -> u64 {
        log_info!("Loading document: {}", source);
        self.generation += 1;
        self.source = Some(source);
        self.pages.clear();
        self.state = ViewerState::Loading;
        self.generation
    }

    /// Applies an extraction result. Results for a superseded load are ignored.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<String>>) -> bool {
        if generation != self.generation {
            return false;
        }

        match result {
            Ok(pages) if pages.is_empty() => {
                self.fail(AssistantError::DocumentError("Document contains no pages".to_string()));
            }
            Ok(pages) => {
                log_info!("Document loaded: {} pages", pages.len());
                self.state = ViewerState::Ready { page_count: pages.len(), current_page: 1 };
                self.pages = pages;
            }
            Err(e) => self.fail(e),
        }
        true
    }

    /// Synchronous load on the calling thread.
    pub fn load_blocking(&mut self, source: DocumentSource) {
        let extractor = self.extractor();
        let result = extractor.extract(&source);
        let generation = self.begin_load(source);
        self.finish_load(generation, result);
    }

    /// The source the viewer is currently showing or loading, if the viewer is still on it.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn fail(&mut self, error: AssistantError) {
        log_warn!("PDF load error: {}", error);
        self.pages.clear();
        self.state = ViewerState::Error(error.to_string());
    }
}
