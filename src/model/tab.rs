//! Tab-level types.

use super::{Block, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// An independently-rendered top-level section of a document.
///
/// Document tabs, spreadsheet sheets, and presentation slides all map to
/// this one shape: an ordered block sequence with an id and a title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Tab identifier
    pub id: String,

    /// Display title; the tab id stands in when this is empty
    pub title: String,

    /// Content blocks in document order
    pub blocks: Vec<Block>,
}

impl Tab {
    /// Create a new empty tab.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Create a tab with content blocks.
    pub fn with_blocks(
        id: impl Into<String>,
        title: impl Into<String>,
        blocks: Vec<Block>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            blocks,
        }
    }

    /// Add a block to the tab.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a paragraph to the tab.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the tab.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Get plain text content of the tab.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the tab has no content blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks in the tab.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
