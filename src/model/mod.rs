//! Document model types for structured content representation.
//!
//! This module defines the value objects the fetch layer builds and the
//! renderer consumes: a tree of tabs, blocks, and styled runs, plus the
//! comment threads and media references attached to it. The model is
//! source-agnostic; documents, spreadsheets, and presentations all
//! normalize to the same shape.

mod asset;
mod block;
mod comment;
mod document;
mod run;
mod tab;
mod table;

pub use asset::{detect_mime_type, extension_for_mime, ExportedAsset, ImageRef};
pub use block::{Block, Heading, ListItem, ListKind, Paragraph};
pub use comment::{CommentReply, CommentThread};
pub use document::{Document, Metadata, SourceKind};
pub use run::{Run, RunStyle};
pub use tab::Tab;
pub use table::{Cell, Table, TableRow};
