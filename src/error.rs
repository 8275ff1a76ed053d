//! Error and warning types for the docdown library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for docdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a conversion.
///
/// Only structural failures surface here. Everything finer-grained
/// (missing asset bytes, bad comment anchors, ragged tables) degrades
/// into [`Warning`]s collected in the export result.
#[derive(Error, Debug)]
pub enum Error {
    /// The document root is unusable: no tabs at all, or a block variant
    /// the renderer cannot map to any known structural flavor.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Error during rendering (JSON serialization).
    #[error("rendering error: {0}")]
    Render(String),
}

/// Non-fatal anomalies collected during a conversion.
///
/// Warnings never abort an export; they ride along in the result so
/// callers can surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Warning {
    /// Binary payload for an asset could not be obtained. The Markdown
    /// still references the derived name (broken link acceptable).
    #[error("asset {name} unavailable (source {source_id})")]
    AssetUnavailable {
        /// Stable source identifier of the image reference.
        source_id: String,
        /// The rendered name the Markdown refers to.
        name: String,
    },

    /// A comment thread whose anchor never appeared during the walk.
    /// The thread is rendered under the Unanchored subheading instead
    /// of being dropped.
    #[error("comment thread {thread_id} has no anchored position")]
    OrphanedComment {
        /// Identifier of the unplaced thread.
        thread_id: String,
    },

    /// A run carried an anchor that resolves to no comment thread.
    /// A best-effort `[?]` marker is rendered in its place.
    #[error("anchor {anchor_id} does not resolve to a comment thread")]
    DanglingAnchor {
        /// The unresolvable anchor identifier.
        anchor_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedDocument("document has no tabs".to_string());
        assert_eq!(err.to_string(), "malformed document: document has no tabs");

        let err = Error::Render("bad value".to_string());
        assert_eq!(err.to_string(), "rendering error: bad value");
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::AssetUnavailable {
            source_id: "img-7".to_string(),
            name: "chart.png".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "asset chart.png unavailable (source img-7)"
        );

        let warning = Warning::OrphanedComment {
            thread_id: "c-12".to_string(),
        };
        assert!(warning.to_string().contains("c-12"));
    }
}
