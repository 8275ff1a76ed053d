//! Export result with collected assets, warnings, and statistics.

use crate::error::Warning;
use crate::model::ExportedAsset;
use serde::{Deserialize, Serialize};

/// Result of exporting a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    /// The rendered Markdown content
    pub markdown: String,

    /// Binary assets referenced from the Markdown, in extraction order
    pub assets: Vec<ExportedAsset>,

    /// Non-fatal problems encountered during export
    pub warnings: Vec<Warning>,

    /// Export statistics
    pub stats: ExportStats,
}

impl ExportResult {
    /// Create a new export result.
    pub fn new(
        markdown: String,
        assets: Vec<ExportedAsset>,
        warnings: Vec<Warning>,
        stats: ExportStats,
    ) -> Self {
        Self {
            markdown,
            assets,
            warnings,
            stats,
        }
    }

    /// Check whether any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Names of all extracted assets, in extraction order.
    pub fn asset_names(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.name.as_str()).collect()
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.markdown.len()
    }
}

/// Statistics collected during export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportStats {
    /// Number of tabs processed
    pub tab_count: u32,

    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of headings rendered
    pub heading_count: u32,

    /// Number of list items rendered
    pub list_item_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of image references encountered
    pub image_count: u32,

    /// Number of comment threads rendered with an anchor marker
    pub comment_count: u32,

    /// Number of comment threads rendered as unanchored
    pub orphaned_comment_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment tab count.
    pub fn add_tab(&mut self) {
        self.tab_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExportStats) {
        self.tab_count += other.tab_count;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.image_count += other.image_count;
        self.comment_count += other.comment_count;
        self.orphaned_comment_count += other.orphaned_comment_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
