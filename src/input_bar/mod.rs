//! Single-line composer shared by both pages: free text, or a list of files to attach.

mod new;
mod handle_input;
mod backspace;
mod submit;

use std::path::PathBuf;

/// Footer line while idle.
pub const DISCLAIMER: &str = "AI can make mistakes. Verify important contract details.";
pub const UPLOADING_FOOTER: &str = "Uploading files...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Message,
    /// Collecting space-separated paths to upload.
    Attach,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSubmission {
    Query(String),
    Upload(Vec<PathBuf>),
}

#[derive(Debug, Default)]
pub struct InputBar {
    input: String,
    mode: InputMode,
}

impl InputBar {
    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn placeholder(&self) -> &'static str {
        match self.mode {
            InputMode::Message => "Ask about contracts, terms, clauses...",
            InputMode::Attach => "Paths to .pdf, .doc or .docx files, separated by spaces",
        }
    }

    pub fn footer(uploading: bool) -> &'static str {
        if uploading { UPLOADING_FOOTER } else { DISCLAIMER }
    }

    pub fn begin_attach(&mut self) {
        self.mode = InputMode::Attach;
        self.input.clear();
    }

    /// Leaves attach mode, or clears the text in message mode.
    pub fn cancel(&mut self) {
        self.mode = InputMode::Message;
        self.input.clear();
    }

    /// Replaces the text with `text`, ready for editing.
    pub fn prefill(&mut self, text: impl Into<String>) {
        self.mode = InputMode::Message;
        self.input = text.into();
    }
}
