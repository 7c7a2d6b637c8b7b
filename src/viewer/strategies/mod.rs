mod pdf;
mod text;

pub use pdf::PdfViewStrategy;
pub use text::TextViewStrategy;
