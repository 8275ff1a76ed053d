//! Export options and configuration.

/// Options for Markdown export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Path prefix for asset references in image links (e.g., "assets/")
    pub asset_path_prefix: String,

    /// Heading level used for tab titles in multi-tab documents (1-6)
    pub tab_heading_level: u8,

    /// Maximum heading level; deeper headings are clamped (1-6)
    pub max_heading_level: u8,

    /// Character to use for unordered list markers
    pub list_marker: char,

    /// Escape special Markdown characters in document text
    pub escape_special_chars: bool,

    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset path prefix.
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_path_prefix = prefix.into();
        self
    }

    /// Set the heading level used for tab titles.
    pub fn with_tab_heading_level(mut self, level: u8) -> Self {
        self.tab_heading_level = level.clamp(1, 6);
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable escaping of special characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            asset_path_prefix: "assets/".to_string(),
            tab_heading_level: 1,
            max_heading_level: 6,
            list_marker: '-',
            escape_special_chars: true,
            include_frontmatter: false,
        }
    }
}
