//! Plain text rendering for structured documents.

use crate::model::{Document, Tab};

/// Convert a document to plain text, discarding all styling.
///
/// Multi-tab documents get one section per tab, headed by the tab title
/// (or the tab id when untitled).
pub fn to_text(doc: &Document) -> String {
    let output = if doc.tabs.len() <= 1 {
        doc.plain_text()
    } else {
        doc.tabs
            .iter()
            .map(tab_section)
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    output.trim().to_string()
}

fn tab_section(tab: &Tab) -> String {
    let title = if tab.title.trim().is_empty() {
        tab.id.as_str()
    } else {
        tab.title.as_str()
    };

    let body = tab.plain_text();
    if body.is_empty() {
        title.to_string()
    } else {
        format!("{}\n\n{}", title, body)
    }
}
