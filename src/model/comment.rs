//! Comment thread types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment thread attached to the document.
///
/// Threads reference their position through an anchor id carried by a
/// [`Run`](super::Run); the association is id plus lookup, never a live
/// object reference, so documents stay trivially serializable. A thread
/// without an anchor attaches to the document end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    /// Thread identifier
    pub id: String,

    /// Anchor id of the annotated run, if any
    pub anchor_id: Option<String>,

    /// Replies in thread order; the first reply is the opening comment
    pub replies: Vec<CommentReply>,
}

impl CommentThread {
    /// Create an unanchored thread.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            anchor_id: None,
            replies: Vec::new(),
        }
    }

    /// Create a thread anchored to a run.
    pub fn anchored(id: impl Into<String>, anchor_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            anchor_id: Some(anchor_id.into()),
            replies: Vec::new(),
        }
    }

    /// Append a reply and return self.
    pub fn with_reply(mut self, reply: CommentReply) -> Self {
        self.replies.push(reply);
        self
    }

    /// Append a reply.
    pub fn add_reply(&mut self, reply: CommentReply) {
        self.replies.push(reply);
    }

    /// Check if the thread carries an anchor.
    pub fn is_anchored(&self) -> bool {
        self.anchor_id.is_some()
    }
}

/// A single reply within a comment thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentReply {
    /// Display name of the author
    pub author: String,

    /// Creation time
    pub timestamp: DateTime<Utc>,

    /// Reply text
    pub body: String,
}

impl CommentReply {
    /// Create a new reply.
    pub fn new(
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            timestamp,
            body: body.into(),
        }
    }
}
