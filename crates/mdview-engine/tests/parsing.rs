use mdview_engine::{Block, Style, format_inline, parse_document};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn table(headers: &[&str], rows: &[&[&str]]) -> Block {
    Block::Table {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn simple_paragraph() {
    assert_eq!(
        parse_document("This is a simple paragraph."),
        vec![Block::paragraph("This is a simple paragraph.")]
    );
}

#[rstest]
#[case("# x", 1)]
#[case("## x", 2)]
#[case("### x", 3)]
#[case("#### x", 4)]
#[case("##### x", 5)]
#[case("###### x", 6)]
fn heading_levels(#[case] line: &str, #[case] level: u8) {
    assert_eq!(parse_document(line), vec![Block::heading("x", level)]);
}

#[rstest]
#[case("####### x")]
#[case("#NotAHeading")]
#[case("This is a paragraph.#NotAHeading")]
#[case("- Feature 1")]
#[case("![alt](unclosed")]
#[case("| lonely pipe |")]
fn unrecognised_lines_fall_back_to_paragraph(#[case] line: &str) {
    assert_eq!(parse_document(line), vec![Block::paragraph(line)]);
}

#[test]
fn paragraphs_are_trimmed_and_markers_kept() {
    assert_eq!(
        parse_document("   some **bold** text   "),
        vec![Block::paragraph("some **bold** text")]
    );
}

#[test]
fn blank_lines_are_never_collapsed() {
    let blocks = parse_document("Paragraph 1.\n\n\n\nParagraph 2.");
    assert_eq!(
        blocks,
        vec![
            Block::paragraph("Paragraph 1."),
            Block::EmptyLine,
            Block::EmptyLine,
            Block::EmptyLine,
            Block::paragraph("Paragraph 2."),
        ]
    );
}

#[test]
fn whitespace_only_lines_are_blank() {
    assert_eq!(
        parse_document("a\n   \n\t\nb"),
        vec![
            Block::paragraph("a"),
            Block::EmptyLine,
            Block::EmptyLine,
            Block::paragraph("b"),
        ]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_document("# Title\r\n\r\nBody\r\n"),
        vec![
            Block::heading("Title", 1),
            Block::EmptyLine,
            Block::paragraph("Body"),
        ]
    );
}

#[test]
fn leading_and_trailing_spaces_are_trimmed() {
    let md = " #  Title with spaces \n\n   Paragraph with spaces.   \n\n![  Alt  ](  http://url.com/img.png  )";
    assert_eq!(
        parse_document(md),
        vec![
            Block::heading("Title with spaces", 1),
            Block::EmptyLine,
            Block::paragraph("Paragraph with spaces."),
            Block::EmptyLine,
            Block::image("http://url.com/img.png", "Alt"),
        ]
    );
}

#[test]
fn table_with_alignment_divider() {
    let md = "| Header 1 | Header 2 | Header 3 |\n\
              |----------|:--------:|---------:|\n\
              | Row 1 Col 1 | Row 1 Col 2 | Row 1 Col 3 |\n\
              | Row 2 Col 1 | Row 2 Col 2 | Row 2 Col 3 |";
    assert_eq!(
        parse_document(md),
        vec![table(
            &["Header 1", "Header 2", "Header 3"],
            &[
                &["Row 1 Col 1", "Row 1 Col 2", "Row 1 Col 3"],
                &["Row 2 Col 1", "Row 2 Col 2", "Row 2 Col 3"],
            ],
        )]
    );
}

#[test]
fn table_without_rows() {
    assert_eq!(
        parse_document("| Col1 | Col2 |\n|------|------|"),
        vec![table(&["Col1", "Col2"], &[])]
    );
}

#[test]
fn short_rows_are_padded() {
    let blocks = parse_document("| A | B | C |\n|---|---|---|\n| 1 |\n| 1 | 2 |");
    let Block::Table { headers, rows } = &blocks[0] else {
        panic!("expected table, got {blocks:?}");
    };
    assert!(rows.iter().all(|r| r.len() == headers.len()));
    assert_eq!(rows[0], vec!["1", "", ""]);
    assert_eq!(rows[1], vec!["1", "2", ""]);
}

#[test]
fn heading_and_table_cells_keep_raw_markup() {
    let md = "# *Italic Heading*\n\
              | Name | Status |\n\
              |------|--------|\n\
              | **Alice** | *Active* |\n\
              | ~~Bob~~ | **_Inactive_** |";
    assert_eq!(
        parse_document(md),
        vec![
            Block::heading("*Italic Heading*", 1),
            table(
                &["Name", "Status"],
                &[&["**Alice**", "*Active*"], &["~~Bob~~", "**_Inactive_**"]],
            ),
        ]
    );
}

#[test]
fn mixed_elements_without_blank_lines() {
    let md = "# Title\nSome text.\n![image](url)\n| A | B |\n|---|---|\n| 1 | 2 |";
    insta::assert_debug_snapshot!(parse_document(md), @r#"
    [
        Heading {
            text: "Title",
            level: 1,
        },
        Paragraph {
            text: "Some text.",
        },
        Image {
            url: "url",
            alt_text: "image",
        },
        Table {
            headers: [
                "A",
                "B",
            ],
            rows: [
                [
                    "1",
                    "2",
                ],
            ],
        },
    ]
    "#);
}

#[test]
fn complex_document() {
    let md = "# Welcome\n\
              \n\
              This is a paragraph.\n\
              \n\
              ## Features\n\
              \n\
              - Feature 1\n\
              - Feature 2\n\
              \n\
              ![Sample Image](http://example.com/sample.jpg)\n\
              \n\
              | Name  | Age | City    |\n\
              |-------|-----|---------|\n\
              | Alice | 30  | New York|\n\
              | Bob   | 24  | London  |";
    let blocks = parse_document(md);

    let kinds: Vec<&str> = blocks.iter().map(Block::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "empty_line",
            "paragraph",
            "empty_line",
            "heading",
            "empty_line",
            "paragraph",
            "paragraph",
            "empty_line",
            "image",
            "empty_line",
            "table",
        ]
    );
    assert_eq!(
        blocks[11],
        table(
            &["Name", "Age", "City"],
            &[&["Alice", "30", "New York"], &["Bob", "24", "London"]],
        )
    );
}

#[test]
fn table_then_paragraph_then_eof() {
    insta::assert_debug_snapshot!(parse_document("| A |\n|---|\n| 1 |\nafter"), @r#"
    [
        Table {
            headers: [
                "A",
            ],
            rows: [
                [
                    "1",
                ],
            ],
        },
        Paragraph {
            text: "after",
        },
    ]
    "#);
}

#[test]
fn parse_then_format_paragraphs() {
    let blocks = parse_document("This is ~~struck~~ and **bold** and *italic*.");
    let Block::Paragraph { text } = &blocks[0] else {
        panic!("expected paragraph");
    };

    let formatted = format_inline(text);
    assert_eq!(formatted.text, "This is struck and bold and italic.");
    let styled: Vec<(&str, Style)> = formatted
        .ranges
        .iter()
        .map(|r| (formatted.slice(*r), r.style))
        .collect();
    assert_eq!(
        styled,
        vec![
            ("struck", Style::Strikethrough),
            ("bold", Style::Bold),
            ("italic", Style::Italic),
        ]
    );
}

#[test]
fn arbitrary_input_never_panics() {
    let nasty = [
        "|",
        "||||",
        "|\n|-|",
        "| a |\n|",
        "![](",
        "#\n##\n### ",
        "~~**~~**",
        "* * * *",
        "***",
        "\u{0}\u{1F600}|é|",
    ];
    for input in nasty {
        let blocks = parse_document(input);
        for b in &blocks {
            if let Block::Table { headers, rows } = b {
                assert!(rows.iter().all(|r| r.len() == headers.len()));
            }
            if let Block::Paragraph { text } | Block::Heading { text, .. } = b {
                let _ = format_inline(text);
            }
        }
    }
}
