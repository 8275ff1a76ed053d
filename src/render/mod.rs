//! Rendering module for converting documents to output formats.

mod assets;
mod comments;
mod json;
mod markdown;
mod options;
mod result;
mod style;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::ExportOptions;
pub use result::{ExportResult, ExportStats};
pub use text::to_text;
