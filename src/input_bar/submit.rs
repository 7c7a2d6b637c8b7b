use std::path::PathBuf;

use super::{InputBar, InputMode, InputSubmission};

impl InputBar {
    /// Takes the current text. Blank text submits nothing and is left in place.
    pub fn submit(&mut self) -> Option<InputSubmission> {
        if self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        match self.mode {
            InputMode::Message => Some(InputSubmission::Query(text.trim().to_string())),
            InputMode::Attach => {
                self.mode = InputMode::Message;
                let paths = text.split_whitespace().map(PathBuf::from).collect();
                Some(InputSubmission::Upload(paths))
            }
        }
    }
}
