//! # docdown
//!
//! Structured document to Markdown conversion for Rust.
//!
//! This library takes an in-memory document model (tabs, blocks, styled
//! runs) together with its comment threads and produces a Markdown string
//! plus the binary assets the text references. Comments become numbered
//! footnote markers; images become file references with deterministic,
//! collision-free names.
//!
//! ## Quick Start
//!
//! ```
//! use docdown::{convert, Block, Document};
//!
//! fn main() -> docdown::Result<()> {
//!     let doc = Document::from_blocks(vec![
//!         Block::heading(1, "Notes"),
//!         Block::paragraph("Hello from the export engine."),
//!     ]);
//!
//!     let result = convert(&doc, &[])?;
//!     assert!(result.markdown.starts_with("# Notes"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: Markdown, plain text, JSON
//! - **Structure preservation**: Headings, paragraphs, tables, lists, tabs
//! - **Asset extraction**: Embedded images with deterministic names
//! - **Comment anchoring**: Threads rendered as `[n]` footnote markers
//! - **Graceful degradation**: Ragged tables, missing image payloads, and
//!   bad anchors degrade to warnings instead of failing the conversion

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result, Warning};
pub use model::{
    Block, Cell, CommentReply, CommentThread, Document, ExportedAsset, Heading, ImageRef, ListItem,
    ListKind, Metadata, Paragraph, Run, RunStyle, SourceKind, Tab, Table, TableRow,
};
pub use render::{ExportOptions, ExportResult, ExportStats, JsonFormat};

/// Convert a document and its comment threads to Markdown.
///
/// Uses default options. The same inputs always produce the same output.
///
/// # Example
///
/// ```
/// use docdown::{convert, Block, Document};
///
/// let doc = Document::from_blocks(vec![Block::paragraph("Hello")]);
/// let result = convert(&doc, &[]).unwrap();
/// assert_eq!(result.markdown, "Hello\n");
/// ```
pub fn convert(doc: &Document, comments: &[CommentThread]) -> Result<ExportResult> {
    render::to_markdown(doc, comments, &ExportOptions::default())
}

/// Convert a document to Markdown with custom options.
///
/// # Example
///
/// ```
/// use docdown::{convert_with_options, Block, Document, ExportOptions};
///
/// let doc = Document::from_blocks(vec![Block::paragraph("a*b")]);
/// let options = ExportOptions::new().with_escaping(false);
/// let result = convert_with_options(&doc, &[], &options).unwrap();
/// assert_eq!(result.markdown, "a*b\n");
/// ```
pub fn convert_with_options(
    doc: &Document,
    comments: &[CommentThread],
    options: &ExportOptions,
) -> Result<ExportResult> {
    render::to_markdown(doc, comments, options)
}

/// Builder for configuring document exports.
///
/// # Example
///
/// ```
/// use docdown::{Block, Document, Exporter};
///
/// let doc = Document::from_blocks(vec![Block::paragraph("Body")]);
/// let result = Exporter::new()
///     .with_frontmatter()
///     .with_asset_prefix("media/")
///     .export(&doc, &[])?;
/// assert!(result.markdown.starts_with("---"));
/// # Ok::<(), docdown::Error>(())
/// ```
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create a new exporter with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::default(),
        }
    }

    /// Set the asset path prefix.
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options = self.options.with_asset_prefix(prefix);
        self
    }

    /// Set the heading level used for tab titles.
    pub fn with_tab_heading_level(mut self, level: u8) -> Self {
        self.options = self.options.with_tab_heading_level(level);
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.options = self.options.with_max_heading(level);
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.options = self.options.with_list_marker(marker);
        self
    }

    /// Disable escaping of special Markdown characters.
    pub fn without_escaping(mut self) -> Self {
        self.options = self.options.with_escaping(false);
        self
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.options = self.options.with_frontmatter(true);
        self
    }

    /// Export a document and its comment threads to Markdown.
    pub fn export(&self, doc: &Document, comments: &[CommentThread]) -> Result<ExportResult> {
        render::to_markdown(doc, comments, &self.options)
    }

    /// Access the configured options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
