use crate::viewer::{DocumentViewer, ViewerState};

impl DocumentViewer {
    /// Advances one page; a no-op on the last page or outside `Ready`.
    pub fn next_page(&mut self) -> bool {
        match &mut self.state {
            ViewerState::Ready { page_count, current_page } if *current_page < *page_count => {
                *current_page += 1;
                true
            }
            _ => false,
        }
    }

    /// Goes back one page; a no-op on page 1 or outside `Ready`.
    pub fn prev_page(&mut self) -> bool {
        match &mut self.state {
            ViewerState::Ready { current_page, .. } if *current_page > 1 => {
                *current_page -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn current_page_text(&self) -> Option<&str> {
        let page = self.current_page()?;
        self.pages.get(page - 1).map(String::as_str)
    }
}
