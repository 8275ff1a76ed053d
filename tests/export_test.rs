//! Integration tests for Markdown export.

use chrono::{TimeZone, Utc};
use docdown::{
    convert, convert_with_options, Block, Cell, CommentReply, CommentThread, Document, Error,
    ExportOptions, Paragraph, Run, RunStyle, Tab, Table, TableRow,
};

#[test]
fn test_no_comment_section_without_comments() {
    let doc = Document::from_blocks(vec![Block::paragraph("Just text.")]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.markdown, "Just text.\n");
    assert!(!result.markdown.contains("## Comments"));
}

#[test]
fn test_bold_italic_renders_triple_asterisks() {
    let mut para = Paragraph::new();
    para.add_run(Run::styled(
        "urgent",
        RunStyle {
            bold: true,
            italic: true,
            ..Default::default()
        },
    ));
    let doc = Document::from_blocks(vec![Block::Paragraph(para)]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.markdown, "***urgent***\n");
}

#[test]
fn test_styled_runs() {
    let mut para = Paragraph::new();
    para.add_run(Run::code("let x = a | b;"));
    para.add_text(" and ");
    para.add_run(Run::link("the docs", "https://example.com/a b"));

    let doc = Document::from_blocks(vec![Block::Paragraph(para)]);
    let result = convert(&doc, &[]).unwrap();
    assert_eq!(
        result.markdown,
        "`let x = a \\| b;` and [the docs](<https://example.com/a b>)\n"
    );
}

#[test]
fn test_hash_escaped_at_line_start_only() {
    let doc = Document::from_blocks(vec![
        Block::paragraph("#tag at start"),
        Block::paragraph("middle # hash"),
    ]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.markdown, "\\#tag at start\n\nmiddle # hash\n");
}

#[test]
fn test_repeated_conversion_is_identical() {
    let mut para = Paragraph::new();
    para.add_run(Run::bold("stable").with_anchor("a1"));
    let doc = Document::from_blocks(vec![
        Block::Paragraph(para),
        Block::bulleted(0, "item"),
    ]);
    let comments = vec![CommentThread::anchored("c1", "a1").with_reply(CommentReply::new(
        "bob",
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        "noted",
    ))];

    let first = convert(&doc, &comments).unwrap();
    let second = convert(&doc, &comments).unwrap();
    assert_eq!(first.markdown, second.markdown);
    assert_eq!(first.asset_names(), second.asset_names());
}

#[test]
fn test_ragged_table_padded_to_widest_row() {
    let mut table = Table::new();
    table.add_row(TableRow::from_strings(vec!["a", "b", "c"]));
    table.add_row(TableRow::from_strings(vec!["d", "e"]));
    table.add_row(TableRow::from_strings(vec!["f", "g", "h", "i"]));
    let doc = Document::from_blocks(vec![Block::Table(table)]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(
        result.markdown,
        "| a | b | c |  |\n\
         | --- | --- | --- | --- |\n\
         | d | e |  |  |\n\
         | f | g | h | i |\n"
    );
}

#[test]
fn test_multi_block_cell_flattened() {
    let mut nested = Table::new();
    nested.add_row(TableRow::from_strings(vec!["x"]));

    let row = TableRow::new(vec![
        Cell::with_blocks(vec![
            Block::paragraph("line one"),
            Block::paragraph("line two"),
        ]),
        Cell::with_blocks(vec![Block::Table(nested)]),
    ]);
    let mut table = Table::new();
    table.add_row(row);
    let doc = Document::from_blocks(vec![Block::Table(table)]);

    let result = convert(&doc, &[]).unwrap();
    assert!(result
        .markdown
        .contains("| line one<br>line two | [nested table omitted] |"));
}

#[test]
fn test_document_without_tabs_is_malformed() {
    let result = convert(&Document::new(), &[]);
    assert!(matches!(result, Err(Error::MalformedDocument(_))));
}

#[test]
fn test_unsupported_block_is_malformed() {
    let doc = Document::from_blocks(vec![
        Block::paragraph("fine"),
        Block::Unsupported {
            kind: "equation".to_string(),
        },
    ]);

    let result = convert(&doc, &[]);
    assert!(matches!(result, Err(Error::MalformedDocument(_))));
}

#[test]
fn test_unsupported_block_in_cell_is_malformed() {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![Cell::with_blocks(vec![
        Block::Unsupported {
            kind: "chart".to_string(),
        },
    ])]));
    let doc = Document::from_blocks(vec![Block::Table(table)]);

    let result = convert(&doc, &[]);
    assert!(matches!(result, Err(Error::MalformedDocument(_))));
}

#[test]
fn test_nested_list_rendering() {
    let doc = Document::from_blocks(vec![
        Block::bulleted(0, "first"),
        Block::bulleted(1, "nested"),
        Block::numbered(0, 1, "ordered"),
        Block::paragraph("after"),
    ]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(
        result.markdown,
        "- first\n  - nested\n1. ordered\n\nafter\n"
    );
}

#[test]
fn test_list_marker_option() {
    let doc = Document::from_blocks(vec![Block::bulleted(0, "item")]);

    let options = ExportOptions::new().with_list_marker('*');
    let result = convert_with_options(&doc, &[], &options).unwrap();
    assert_eq!(result.markdown, "* item\n");
}

#[test]
fn test_heading_level_clamped() {
    let doc = Document::from_blocks(vec![Block::heading(0, "Zero"), Block::heading(9, "Nine")]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.markdown, "# Zero\n\n###### Nine\n");
}

#[test]
fn test_max_heading_level_option() {
    let doc = Document::from_blocks(vec![Block::heading(4, "Deep")]);

    let options = ExportOptions::new().with_max_heading(2);
    let result = convert_with_options(&doc, &[], &options).unwrap();
    assert_eq!(result.markdown, "## Deep\n");
}

#[test]
fn test_untitled_tab_falls_back_to_id() {
    let doc = Document::with_tabs(vec![
        Tab::with_blocks("sheet1", "", vec![Block::paragraph("a")]),
        Tab::with_blocks("sheet2", "Summary", vec![Block::paragraph("b")]),
    ]);

    let result = convert(&doc, &[]).unwrap();
    assert!(result.markdown.contains("# sheet1\n\n"));
    assert!(result.markdown.contains("# Summary\n\n"));
}

#[test]
fn test_single_tab_has_no_tab_heading() {
    let doc = Document::with_tabs(vec![Tab::with_blocks(
        "only",
        "Only Tab",
        vec![Block::paragraph("content")],
    )]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.markdown, "content\n");
}

#[test]
fn test_tab_heading_level_option() {
    let doc = Document::with_tabs(vec![
        Tab::with_blocks("t1", "One", vec![Block::paragraph("a")]),
        Tab::with_blocks("t2", "Two", vec![Block::paragraph("b")]),
    ]);

    let options = ExportOptions::new().with_tab_heading_level(2);
    let result = convert_with_options(&doc, &[], &options).unwrap();
    assert!(result.markdown.starts_with("## One\n\n"));
    assert!(result.markdown.contains("## Two\n\n"));
}

#[test]
fn test_empty_tab_yields_empty_string() {
    let doc = Document::with_tabs(vec![Tab::new("t1", "Empty")]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.markdown, "");
}

#[test]
fn test_two_tab_document_end_to_end() {
    let mut para = Paragraph::new();
    para.add_run(Run::bold("Read this").with_anchor("anchor-1"));
    para.add_text(" carefully.");
    let tab1 = Tab::with_blocks(
        "t1",
        "Intro",
        vec![Block::heading(1, "Welcome"), Block::Paragraph(para)],
    );

    let mut table = Table::new();
    table.add_row(TableRow::from_strings(vec!["Name", "Value"]));
    table.add_row(TableRow::from_strings(vec!["alpha", "1"]));
    let tab2 = Tab::with_blocks("t2", "Data", vec![Block::Table(table)]);

    let doc = Document::with_tabs(vec![tab1, tab2]);
    let comments = vec![
        CommentThread::anchored("c1", "anchor-1").with_reply(CommentReply::new(
            "alice",
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            "Looks good",
        )),
    ];

    let result = convert(&doc, &comments).unwrap();
    assert_eq!(
        result.markdown,
        "# Intro\n\
         \n\
         # Welcome\n\
         \n\
         **Read this**[1] carefully.\n\
         \n\
         # Data\n\
         \n\
         | Name | Value |\n\
         | --- | --- |\n\
         | alpha | 1 |\n\
         \n\
         ## Comments\n\
         \n\
         ### [1]\n\
         \n\
         [2024-01-15T10:30:00+00:00] alice: Looks good\n"
    );

    assert!(result.warnings.is_empty());
    assert!(result.assets.is_empty());
    assert_eq!(result.stats.tab_count, 2);
    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.paragraph_count, 1);
    assert_eq!(result.stats.table_count, 1);
    assert_eq!(result.stats.comment_count, 1);
}

#[test]
fn test_stats_collected() {
    let doc = Document::from_blocks(vec![
        Block::heading(1, "Title"),
        Block::paragraph("one two three"),
        Block::bulleted(0, "item"),
    ]);

    let result = convert(&doc, &[]).unwrap();
    assert_eq!(result.stats.tab_count, 1);
    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.paragraph_count, 1);
    assert_eq!(result.stats.list_item_count, 1);
    assert!(result.stats.word_count >= 5);
}
