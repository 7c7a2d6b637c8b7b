use crate::{
    log_debug,
    viewer::{DocumentViewer, MIN_PAGE_WIDTH, PAGE_GUTTER},
};

impl DocumentViewer {
    /// Recomputes the page width from the container's width. Returns whether it changed.
    pub fn resize(&mut self, container_width: u16) -> bool {
        let width = container_width.saturating_sub(PAGE_GUTTER).max(MIN_PAGE_WIDTH);
        if width == self.page_width {
            return false;
        }

        log_debug!("Viewer page width {} -> {}", self.page_width, width);
        self.page_width = width;
        true
    }
}
