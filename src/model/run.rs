//! Text run and inline style types.

use serde::{Deserialize, Serialize};

/// A maximal span of text sharing one style and anchor combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Inline styling
    pub style: RunStyle,

    /// Anchor linking this span to a comment thread
    pub anchor_id: Option<String>,
}

impl Run {
    /// Create a run with default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
            anchor_id: None,
        }
    }

    /// Create a run with an explicit style.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
            anchor_id: None,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            RunStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            RunStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Create an inline code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self::styled(
            text,
            RunStyle {
                code: true,
                ..Default::default()
            },
        )
    }

    /// Create a hyperlink run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::styled(
            text,
            RunStyle {
                link: Some(url.into()),
                ..Default::default()
            },
        )
    }

    /// Attach a comment anchor and return self.
    pub fn with_anchor(mut self, anchor_id: impl Into<String>) -> Self {
        self.anchor_id = Some(anchor_id.into());
        self
    }

    /// Check if this run has no text content.
    ///
    /// Empty runs are legal; a run may exist purely to carry an anchor.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Inline styling flags for a run.
///
/// `font_scale` carries through from source formats that express relative
/// text size, but Markdown has no equivalent, so the renderer ignores it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Inline code span
    pub code: bool,

    /// Hyperlink target URL
    pub link: Option<String>,

    /// Relative font size from the source format (unmappable)
    pub font_scale: Option<f32>,
}

impl RunStyle {
    /// Check if any renderable styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.strikethrough || self.code || self.link.is_some()
    }
}
