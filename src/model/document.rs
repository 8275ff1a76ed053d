//! Document-level types.

use super::{Block, Tab};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured document, the root input to conversion.
///
/// Built once by the fetch layer and treated as immutable by the
/// converter. A source without explicit tabs is represented by exactly
/// one implicit tab (see [`Document::from_blocks`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, source kind, timestamps)
    pub metadata: Metadata,

    /// Tabs in document order; never empty for a convertible document
    pub tabs: Vec<Tab>,
}

impl Document {
    /// Create a new empty document.
    ///
    /// A document with no tabs is not convertible; add tabs or use
    /// [`Document::from_blocks`].
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            tabs: Vec::new(),
        }
    }

    /// Create a document with the given tabs.
    pub fn with_tabs(tabs: Vec<Tab>) -> Self {
        Self {
            metadata: Metadata::default(),
            tabs,
        }
    }

    /// Create a single-tab document from a block sequence.
    ///
    /// The implicit tab keeps an empty title, so single-tab rendering
    /// never emits a tab heading for it.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self::with_tabs(vec![Tab::with_blocks("main", "", blocks)])
    }

    /// Add a tab to the document.
    pub fn add_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
    }

    /// Get the number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Check if the document has any tabs.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.tabs
            .iter()
            .map(|tab| tab.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Source identifier (API file id)
    pub id: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Document owner or last editor
    pub author: Option<String>,

    /// What kind of source produced this document
    pub kind: SourceKind,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref author) = self.author {
            lines.push(format!("author: \"{}\"", escape_yaml(author)));
        }
        if let Some(ref id) = self.id {
            lines.push(format!("id: \"{}\"", escape_yaml(id)));
        }
        lines.push(format!("kind: {}", self.kind));
        if let Some(ref created) = self.created {
            lines.push(format!("created: {}", created.to_rfc3339()));
        }
        if let Some(ref modified) = self.modified {
            lines.push(format!("modified: {}", modified.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// The kind of source a document was fetched from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Word-processing document
    #[default]
    Document,
    /// Spreadsheet (tabs are sheets)
    Spreadsheet,
    /// Presentation (tabs are slides)
    Presentation,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Document => write!(f, "document"),
            SourceKind::Spreadsheet => write!(f, "spreadsheet"),
            SourceKind::Presentation => write!(f, "presentation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.tab_count(), 0);
    }

    #[test]
    fn test_from_blocks_single_implicit_tab() {
        let doc = Document::from_blocks(vec![Block::paragraph("Hello")]);
        assert_eq!(doc.tab_count(), 1);
        assert!(doc.tabs[0].title.is_empty());
        assert_eq!(doc.plain_text(), "Hello");
    }

    #[test]
    fn test_metadata_frontmatter() {
        let mut metadata = Metadata::with_title("Quarterly Report");
        metadata.author = Some("Jane Doe".to_string());
        metadata.kind = SourceKind::Spreadsheet;

        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Quarterly Report\""));
        assert!(yaml.contains("author: \"Jane Doe\""));
        assert!(yaml.contains("kind: spreadsheet"));
        assert!(yaml.ends_with("---\n"));
    }

    #[test]
    fn test_frontmatter_escapes_quotes() {
        let metadata = Metadata::with_title("He said \"hi\"");
        let yaml = metadata.to_yaml_frontmatter();
        assert!(yaml.contains("title: \"He said \\\"hi\\\"\""));
    }
}
