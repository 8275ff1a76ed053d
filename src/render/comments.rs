//! Comment anchor resolution and the appended comments section.

use std::collections::{HashMap, HashSet};

use crate::error::Warning;
use crate::model::{CommentReply, CommentThread};
use crate::render::ExportStats;

/// Index of comment threads by anchor, plus marker assignment state.
///
/// Markers number in first-seen document order: the walker asks for a
/// marker each time it renders an anchored run, and the first sighting
/// of an anchor claims the next number. Re-sightings reuse it. Thread
/// input order therefore has no influence on numbering.
#[derive(Default)]
pub(crate) struct CommentIndex {
    by_anchor: HashMap<String, usize>,
    assigned: HashMap<String, u32>,
    used: Vec<(u32, usize)>,
    next_marker: u32,
}

impl CommentIndex {
    /// Index the given threads by anchor id.
    ///
    /// When two threads claim the same anchor, the first in input order
    /// wins; the loser is left unmatched and ends up in the Unanchored
    /// section.
    pub fn new(threads: &[CommentThread]) -> Self {
        let mut by_anchor = HashMap::new();
        for (index, thread) in threads.iter().enumerate() {
            if let Some(ref anchor) = thread.anchor_id {
                by_anchor.entry(anchor.clone()).or_insert(index);
            }
        }
        Self {
            by_anchor,
            assigned: HashMap::new(),
            used: Vec::new(),
            next_marker: 1,
        }
    }

    /// Marker number for an anchored run, assigning the next number on
    /// first sight. Returns `None` when no thread claims the anchor.
    pub fn marker_for(&mut self, anchor_id: &str) -> Option<u32> {
        if let Some(&marker) = self.assigned.get(anchor_id) {
            return Some(marker);
        }
        let thread_index = *self.by_anchor.get(anchor_id)?;
        let marker = self.next_marker;
        self.next_marker += 1;
        self.assigned.insert(anchor_id.to_string(), marker);
        self.used.push((marker, thread_index));
        Some(marker)
    }

    /// Markers assigned during the walk, in numeric order.
    pub fn used_markers(&self) -> &[(u32, usize)] {
        &self.used
    }

    /// Thread indices never reached by any rendered anchor, in input
    /// order. Covers threads with no anchor and threads whose anchor
    /// never appeared (or lost it to an earlier claimant).
    pub fn unmatched(&self, threads: &[CommentThread]) -> Vec<usize> {
        let matched: HashSet<usize> = self.used.iter().map(|&(_, index)| index).collect();
        (0..threads.len())
            .filter(|index| !matched.contains(index))
            .collect()
    }
}

/// Append the `## Comments` section after the rendered body.
///
/// Omitted entirely when no marker was used and no thread is left over.
pub(crate) fn render_comment_section(
    output: &mut String,
    index: &CommentIndex,
    threads: &[CommentThread],
    warnings: &mut Vec<Warning>,
    stats: &mut ExportStats,
) {
    let unmatched = index.unmatched(threads);
    stats.comment_count = index.used_markers().len() as u32;
    stats.orphaned_comment_count = unmatched.len() as u32;

    if index.used_markers().is_empty() && unmatched.is_empty() {
        return;
    }

    output.push_str("## Comments\n\n");

    for &(marker, thread_index) in index.used_markers() {
        output.push_str(&format!("### [{}]\n\n", marker));
        for reply in &threads[thread_index].replies {
            output.push_str(&format_reply(reply));
            output.push('\n');
        }
        output.push('\n');
    }

    if !unmatched.is_empty() {
        output.push_str("### Unanchored\n\n");
        for thread_index in unmatched {
            let thread = &threads[thread_index];
            log::warn!("comment thread {} rendered as unanchored", thread.id);
            warnings.push(Warning::OrphanedComment {
                thread_id: thread.id.clone(),
            });
            for reply in &thread.replies {
                output.push_str(&format_reply(reply));
                output.push('\n');
            }
            output.push('\n');
        }
    }
}

/// One reply line: `[timestamp] author: body`, with newlines in the body
/// collapsed so a reply never spans lines.
fn format_reply(reply: &CommentReply) -> String {
    let body = reply.body.replace('\n', " ");
    format!(
        "[{}] {}: {}",
        reply.timestamp.to_rfc3339(),
        reply.author,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn thread(id: &str, anchor: Option<&str>, body: &str) -> CommentThread {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let mut t = match anchor {
            Some(a) => CommentThread::anchored(id, a),
            None => CommentThread::new(id),
        };
        t.add_reply(CommentReply::new("alice", ts, body));
        t
    }

    #[test]
    fn test_first_seen_numbering() {
        let threads = vec![
            thread("c1", Some("anchor-one"), "first thread"),
            thread("c2", Some("anchor-two"), "second thread"),
        ];
        let mut index = CommentIndex::new(&threads);

        // The walk sees anchor-two before anchor-one.
        assert_eq!(index.marker_for("anchor-two"), Some(1));
        assert_eq!(index.marker_for("anchor-one"), Some(2));
        // Re-sighting reuses the assigned number.
        assert_eq!(index.marker_for("anchor-two"), Some(1));

        assert_eq!(index.used_markers(), &[(1, 1), (2, 0)]);
    }

    #[test]
    fn test_unknown_anchor() {
        let threads = vec![thread("c1", Some("a1"), "body")];
        let mut index = CommentIndex::new(&threads);
        assert_eq!(index.marker_for("ghost"), None);
    }

    #[test]
    fn test_duplicate_anchor_first_claim_wins() {
        let threads = vec![
            thread("c1", Some("shared"), "claimed"),
            thread("c2", Some("shared"), "orphaned"),
        ];
        let mut index = CommentIndex::new(&threads);

        assert_eq!(index.marker_for("shared"), Some(1));
        assert_eq!(index.unmatched(&threads), vec![1]);
    }

    #[test]
    fn test_section_rendering() {
        let threads = vec![
            thread("c1", Some("a1"), "anchored\nacross lines"),
            thread("c2", None, "floating"),
        ];
        let mut index = CommentIndex::new(&threads);
        index.marker_for("a1");

        let mut output = String::new();
        let mut warnings = Vec::new();
        let mut stats = ExportStats::new();
        render_comment_section(&mut output, &index, &threads, &mut warnings, &mut stats);

        assert!(output.starts_with("## Comments\n\n### [1]\n\n"));
        assert!(output.contains("[2024-01-15T10:30:00+00:00] alice: anchored across lines"));
        assert!(output.contains("### Unanchored\n\n"));
        assert!(output.contains("alice: floating"));
        assert_eq!(stats.comment_count, 1);
        assert_eq!(stats.orphaned_comment_count, 1);
        assert_eq!(
            warnings,
            vec![Warning::OrphanedComment {
                thread_id: "c2".to_string(),
            }]
        );
    }

    #[test]
    fn test_section_omitted_when_empty() {
        let mut output = String::new();
        let mut warnings = Vec::new();
        let mut stats = ExportStats::new();
        render_comment_section(
            &mut output,
            &CommentIndex::default(),
            &[],
            &mut warnings,
            &mut stats,
        );

        assert!(output.is_empty());
        assert!(warnings.is_empty());
    }
}
