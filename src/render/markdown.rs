//! Markdown rendering for structured documents.

use crate::error::{Error, Result, Warning};
use crate::model::{
    Block, Cell, CommentThread, Document, Heading, ImageRef, ListItem, ListKind, Paragraph, Run,
    Tab, Table,
};

use super::assets::AssetCollector;
use super::comments::{render_comment_section, CommentIndex};
use super::style::{escape_markdown, styled_run};
use super::{ExportOptions, ExportResult, ExportStats};

/// Convert a document and its comment threads to Markdown.
pub fn to_markdown(
    doc: &Document,
    comments: &[CommentThread],
    options: &ExportOptions,
) -> Result<ExportResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc, comments)
}

/// Markdown renderer.
///
/// One asset collector, one comment index, and one stats block span the
/// entire document: assets and comment markers are document-scoped, not
/// tab-scoped.
pub struct MarkdownRenderer {
    options: ExportOptions,
    stats: ExportStats,
    warnings: Vec<Warning>,
    assets: AssetCollector,
    markers: CommentIndex,
    // Open list levels as (depth as given, depth as rendered) pairs.
    list_stack: Vec<(u8, u8)>,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            stats: ExportStats::new(),
            warnings: Vec::new(),
            assets: AssetCollector::new(),
            markers: CommentIndex::default(),
            list_stack: Vec::new(),
        }
    }

    /// Render a document to Markdown, collecting assets and warnings.
    pub fn render(mut self, doc: &Document, comments: &[CommentThread]) -> Result<ExportResult> {
        if doc.tabs.is_empty() {
            return Err(Error::MalformedDocument("document has no tabs".to_string()));
        }

        self.markers = CommentIndex::new(comments);

        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
            output.push('\n');
        }

        let multi_tab = doc.tabs.len() > 1;
        for tab in &doc.tabs {
            self.stats.add_tab();
            if multi_tab {
                self.render_tab_heading(&mut output, tab);
            }
            for block in &tab.blocks {
                self.render_block(&mut output, block)?;
            }
            self.close_list(&mut output);
        }

        render_comment_section(
            &mut output,
            &self.markers,
            comments,
            &mut self.warnings,
            &mut self.stats,
        );

        let mut markdown = output.trim().to_string();
        if !markdown.is_empty() {
            markdown.push('\n');
        }
        self.stats.count_text(&markdown);

        Ok(ExportResult::new(
            markdown,
            self.assets.into_assets(),
            self.warnings,
            self.stats,
        ))
    }

    fn render_tab_heading(&mut self, output: &mut String, tab: &Tab) {
        // Untitled tabs fall back to their id so the section is still findable.
        let title = if tab.title.trim().is_empty() {
            tab.id.as_str()
        } else {
            tab.title.as_str()
        };

        let level = self.options.tab_heading_level.clamp(1, 6);
        output.push_str(&"#".repeat(level as usize));
        output.push(' ');
        if self.options.escape_special_chars {
            output.push_str(&escape_markdown(title));
        } else {
            output.push_str(title);
        }
        output.push_str("\n\n");
    }

    fn render_block(&mut self, output: &mut String, block: &Block) -> Result<()> {
        if !matches!(block, Block::ListItem(_)) {
            self.close_list(output);
        }

        match block {
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Heading(h) => self.render_heading(output, h),
            Block::ListItem(item) => self.render_list_item(output, item),
            Block::Table(t) => {
                self.stats.add_table();
                self.render_table(output, t)?;
            }
            Block::Image(image) => {
                let tag = self.image_markdown(image);
                output.push_str(&tag);
                output.push_str("\n\n");
            }
            Block::Unsupported { kind } => {
                return Err(Error::MalformedDocument(format!(
                    "unrecognized block variant: {}",
                    kind
                )));
            }
        }

        Ok(())
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        // Blank paragraphs are dropped unless a run carries a comment
        // anchor, which must still claim its marker number.
        if para.is_empty() && para.runs.iter().all(|r| r.anchor_id.is_none()) {
            return;
        }

        self.stats.add_paragraph();
        self.render_runs(output, &para.runs);
        output.push_str("\n\n");
    }

    fn render_heading(&mut self, output: &mut String, heading: &Heading) {
        self.stats.add_heading();

        let level = heading.level.clamp(1, 6).min(self.options.max_heading_level);
        output.push_str(&"#".repeat(level as usize));
        output.push(' ');
        self.render_runs(output, &heading.runs);
        output.push_str("\n\n");
    }

    fn render_list_item(&mut self, output: &mut String, item: &ListItem) {
        self.stats.add_list_item();

        let depth = self.effective_depth(item.depth);
        let indent = "  ".repeat(depth as usize);
        let marker = match item.kind {
            ListKind::Bulleted => self.options.list_marker.to_string(),
            ListKind::Numbered => format!("{}.", item.ordinal.unwrap_or(1)),
        };

        output.push_str(&indent);
        output.push_str(&marker);
        output.push(' ');
        self.render_runs(output, &item.runs);
        output.push('\n');
    }

    /// Map an item's declared depth onto the open list levels.
    ///
    /// A jump deeper than one level renders one past the current level;
    /// a shallower item pops back to the matching level, or to one past
    /// whatever level remains when there is no exact match.
    fn effective_depth(&mut self, depth: u8) -> u8 {
        while let Some(&(raw, _)) = self.list_stack.last() {
            if raw > depth {
                self.list_stack.pop();
            } else {
                break;
            }
        }

        match self.list_stack.last() {
            Some(&(raw, rendered)) if raw == depth => rendered,
            Some(&(_, rendered)) => {
                let next = rendered + 1;
                self.list_stack.push((depth, next));
                next
            }
            None => {
                self.list_stack.push((depth, 0));
                0
            }
        }
    }

    fn close_list(&mut self, output: &mut String) {
        if !self.list_stack.is_empty() {
            self.list_stack.clear();
            output.push('\n');
        }
    }

    fn render_runs(&mut self, output: &mut String, runs: &[Run]) {
        for run in runs {
            if !run.text.is_empty() {
                output.push_str(&styled_run(
                    &run.text,
                    &run.style,
                    self.options.escape_special_chars,
                ));
            }
            if let Some(ref anchor) = run.anchor_id {
                match self.markers.marker_for(anchor) {
                    Some(marker) => output.push_str(&format!("[{}]", marker)),
                    None => {
                        log::warn!("anchor {} has no matching comment thread", anchor);
                        self.warnings.push(Warning::DanglingAnchor {
                            anchor_id: anchor.clone(),
                        });
                        output.push_str("[?]");
                    }
                }
            }
        }
    }

    fn image_markdown(&mut self, image: &ImageRef) -> String {
        self.stats.add_image();
        let name = self.assets.collect(image, &mut self.warnings);
        let alt = image.alt_text.as_deref().unwrap_or("");
        format!("![{}]({}{})", alt, self.options.asset_path_prefix, name)
    }

    fn render_table(&mut self, output: &mut String, table: &Table) -> Result<()> {
        // Ragged input: pad every row to the widest one.
        let col_count = table.column_count();
        if col_count == 0 {
            return Ok(());
        }

        for (i, row) in table.rows.iter().enumerate() {
            output.push('|');
            for col in 0..col_count {
                let content = match row.cells.get(col) {
                    Some(cell) => self.render_cell(cell)?,
                    None => String::new(),
                };
                output.push_str(&format!(" {} |", content));
            }
            output.push('\n');

            // Separator after the header row
            if i == 0 {
                output.push('|');
                for _ in 0..col_count {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
        Ok(())
    }

    /// Flatten a cell to a single line of inline Markdown.
    ///
    /// Nested blocks are joined with `<br>`; nested tables cannot be
    /// expressed in pipe syntax and collapse to a placeholder.
    fn render_cell(&mut self, cell: &Cell) -> Result<String> {
        let mut parts = Vec::new();

        for block in &cell.blocks {
            let part = match block {
                Block::Paragraph(p) => {
                    let mut text = String::new();
                    self.render_runs(&mut text, &p.runs);
                    text
                }
                Block::Heading(h) => {
                    let mut text = String::new();
                    self.render_runs(&mut text, &h.runs);
                    text
                }
                Block::ListItem(item) => {
                    let marker = match item.kind {
                        ListKind::Bulleted => self.options.list_marker.to_string(),
                        ListKind::Numbered => format!("{}.", item.ordinal.unwrap_or(1)),
                    };
                    let mut text = String::new();
                    self.render_runs(&mut text, &item.runs);
                    format!("{} {}", marker, text)
                }
                Block::Table(_) => "[nested table omitted]".to_string(),
                Block::Image(image) => self.image_markdown(image),
                Block::Unsupported { kind } => {
                    return Err(Error::MalformedDocument(format!(
                        "unrecognized block variant in table cell: {}",
                        kind
                    )));
                }
            };

            if !part.trim().is_empty() {
                parts.push(part);
            }
        }

        let flat = parts.join("<br>").replace('\n', " ");
        Ok(flat.trim().to_string())
    }
}
