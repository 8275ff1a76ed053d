//! Structural block types.

use super::{ImageRef, Run, Table};
use serde::{Deserialize, Serialize};

/// A structural node in a tab's content sequence.
///
/// The set of variants is closed so the renderer can match exhaustively.
/// `Unsupported` represents a source node the fetch layer could not map;
/// encountering one during conversion is a fatal error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of styled runs
    Paragraph(Paragraph),

    /// A heading (level 1-6, clamped at render time)
    Heading(Heading),

    /// A single list item
    ListItem(ListItem),

    /// A table
    Table(Table),

    /// An embedded image reference
    Image(ImageRef),

    /// A source node with no known structural flavor
    Unsupported {
        /// The unmapped source variant tag
        kind: String,
    },
}

impl Block {
    /// Create a paragraph block from plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph::with_text(text))
    }

    /// Create a heading block from plain text.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading(Heading::new(level, text))
    }

    /// Create a bulleted list item block.
    pub fn bulleted(depth: u8, text: impl Into<String>) -> Self {
        Block::ListItem(ListItem::bulleted(depth, text))
    }

    /// Create a numbered list item block.
    pub fn numbered(depth: u8, ordinal: u32, text: impl Into<String>) -> Self {
        Block::ListItem(ListItem::numbered(depth, Some(ordinal), text))
    }

    /// Create an image block.
    pub fn image(image: ImageRef) -> Self {
        Block::Image(image)
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Check if this block is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image(_))
    }

    /// Get the plain text content of this block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Heading(h) => h.plain_text(),
            Block::ListItem(item) => item.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::Image(img) => img.alt_text.clone().unwrap_or_default(),
            Block::Unsupported { .. } => String::new(),
        }
    }
}

/// A paragraph of styled runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in document order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::plain(text)],
        }
    }

    /// Append a plain run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::plain(text));
    }

    /// Append a styled run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get the concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }
}

/// A heading with styled runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level; values outside 1-6 are clamped at render time
    pub level: u8,

    /// Text runs in document order
    pub runs: Vec<Run>,
}

impl Heading {
    /// Create a heading from plain text.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            runs: vec![Run::plain(text)],
        }
    }

    /// Create a heading from styled runs.
    pub fn with_runs(level: u8, runs: Vec<Run>) -> Self {
        Self { level, runs }
    }

    /// Get the concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A single list item.
///
/// Items carry their own nesting depth instead of being grouped into a
/// list container; the renderer tracks open levels with a depth stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    /// Bulleted or numbered
    pub kind: ListKind,

    /// Item number for numbered lists
    pub ordinal: Option<u32>,

    /// Nesting depth (0 = top level)
    pub depth: u8,

    /// Text runs in document order
    pub runs: Vec<Run>,
}

impl ListItem {
    /// Create a bulleted list item.
    pub fn bulleted(depth: u8, text: impl Into<String>) -> Self {
        Self {
            kind: ListKind::Bulleted,
            ordinal: None,
            depth,
            runs: vec![Run::plain(text)],
        }
    }

    /// Create a numbered list item.
    pub fn numbered(depth: u8, ordinal: Option<u32>, text: impl Into<String>) -> Self {
        Self {
            kind: ListKind::Numbered,
            ordinal,
            depth,
            runs: vec![Run::plain(text)],
        }
    }

    /// Get the concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// List item kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted (unordered) list
    #[default]
    Bulleted,
    /// Numbered (ordered) list
    Numbered,
}
