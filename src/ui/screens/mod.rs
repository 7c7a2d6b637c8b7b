pub mod header;
pub mod page;
pub mod messages;
pub mod sections;
pub mod document_panel;
pub mod input;
