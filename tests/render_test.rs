//! End-to-end tests: JSON payload in, plain text out.

use serde_json::{json, Value};
use unadf::{render_value, Error};

fn doc(content: Value) -> Value {
    json!({"type": "doc", "version": 1, "content": content})
}

fn paragraph(text: &str) -> Value {
    json!({"type": "paragraph", "content": [{"type": "text", "text": text}]})
}

#[test]
fn trivial_paragraph_round_trip() {
    let value = doc(json!([paragraph("hello")]));
    assert_eq!(render_value(&value).unwrap(), "hello");
}

#[test]
fn hard_break_splits_into_two_lines() {
    let value = doc(json!([{
        "type": "paragraph",
        "content": [
            {"type": "text", "text": "a"},
            {"type": "hardBreak"},
            {"type": "text", "text": "b"}
        ]
    }]));
    assert_eq!(render_value(&value).unwrap(), "a\nb");
}

#[test]
fn unknown_node_renders_placeholder_anywhere() {
    let value = doc(json!([
        paragraph("before"),
        {"type": "decisionList", "attrs": {"localId": "x"}},
        paragraph("after")
    ]));
    let text = render_value(&value).unwrap();
    assert_eq!(text, "before\n[未知のノード: decisionList]\nafter");
}

#[test]
fn bullet_list_flat_and_nested() {
    let item = |content: Value| json!({"type": "listItem", "content": content});
    let flat = doc(json!([{
        "type": "bulletList",
        "content": [
            item(json!([paragraph("x")])),
            item(json!([paragraph("y")]))
        ]
    }]));
    assert_eq!(render_value(&flat).unwrap(), "● x\n● y");

    let nested = doc(json!([{
        "type": "bulletList",
        "content": [item(json!([
            paragraph("outer"),
            {"type": "bulletList", "content": [item(json!([paragraph("inner")]))]}
        ]))]
    }]));
    assert_eq!(render_value(&nested).unwrap(), "● outer\n  ● inner");
}

#[test]
fn ordered_list_numbering() {
    let value = doc(json!([{
        "type": "orderedList",
        "content": [
            {"type": "listItem", "content": [paragraph("first")]},
            {"type": "listItem", "content": [paragraph("second")]},
            {"type": "listItem", "content": [paragraph("third")]}
        ]
    }]));
    assert_eq!(render_value(&value).unwrap(), "1. first\n2. second\n3. third");
}

#[test]
fn table_column_alignment_with_header() {
    let header = |text: &str| json!({"type": "tableHeader", "content": [paragraph(text)]});
    let cell = |text: &str| json!({"type": "tableCell", "content": [paragraph(text)]});
    let value = doc(json!([{
        "type": "table",
        "attrs": {"layout": "default"},
        "content": [
            {"type": "tableRow", "content": [header("A"), header("BB")]},
            {"type": "tableRow", "content": [cell("1"), cell("22")]}
        ]
    }]));
    assert_eq!(
        render_value(&value).unwrap(),
        "|---|----|\n| A | BB |\n|---|----|\n| 1 | 22 |"
    );
}

#[test]
fn table_without_rows_renders_nothing() {
    let value = doc(json!([
        paragraph("before"),
        {"type": "table", "content": []},
        paragraph("after")
    ]));
    assert_eq!(render_value(&value).unwrap(), "before\nafter");
}

#[test]
fn code_block_preserves_whitespace_verbatim() {
    let value = doc(json!([{
        "type": "codeBlock",
        "attrs": {"language": "rust"},
        "content": [{"type": "text", "text": "fn main() {\n    let x = 1;\n}"}]
    }]));
    assert_eq!(
        render_value(&value).unwrap(),
        "``` rust\nfn main() {\n    let x = 1;\n}\n```"
    );
}

#[test]
fn blockquote_nested_fifty_levels() {
    let mut node = paragraph("bottom");
    for _ in 0..50 {
        node = json!({"type": "blockquote", "content": [node]});
    }
    let text = render_value(&doc(json!([node]))).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 51);
    for (depth, line) in lines.iter().take(50).enumerate() {
        assert_eq!(*line, format!("{}>", "  ".repeat(depth)));
    }
    assert_eq!(lines[50], format!("{}bottom", "  ".repeat(50)));
}

#[test]
fn expand_panel_always_rendered_open() {
    let value = doc(json!([{
        "type": "expand",
        "attrs": {"title": "Details"},
        "content": [paragraph("inside")]
    }]));
    assert_eq!(
        render_value(&value).unwrap(),
        "--- 展開パネル: Details ---\n  inside\n--- 展開パネル終了 ---"
    );
}

#[test]
fn media_single_and_inline_card() {
    let value = doc(json!([
        {
            "type": "mediaSingle",
            "attrs": {"layout": "wide"},
            "content": [{
                "type": "media",
                "attrs": {"id": "img-1", "type": "file", "collection": "c"}
            }]
        },
        {
            "type": "paragraph",
            "content": [
                {"type": "text", "text": "link: "},
                {"type": "inlineCard", "attrs": {"url": "https://example.com/page"}}
            ]
        }
    ]));
    assert_eq!(
        render_value(&value).unwrap(),
        "[メディア: <img-1> (file) (レイアウト: wide)]\nlink: <https://example.com/page>"
    );
}

#[test]
fn media_group_frames_its_children() {
    let value = doc(json!([{
        "type": "mediaGroup",
        "content": [
            {"type": "media", "attrs": {"id": "a", "type": "file", "collection": "c"}},
            {"type": "mediaInline", "attrs": {
                "id": "b", "type": "link", "collection": "c",
                "url": "https://x.example/b"
            }}
        ]
    }]));
    let expected = [
        "--- メディアグループ ---",
        "  [インラインメディア: ID:a (file)]",
        "  [インラインメディア: https://x.example/b (link)]",
        "--- メディアグループ終了 ---",
    ]
    .join("\n");
    assert_eq!(render_value(&value).unwrap(), expected);
}

#[test]
fn malformed_known_node_fails_whole_render() {
    // heading with attrs but no level
    let value = doc(json!([
        paragraph("fine"),
        {"type": "heading", "attrs": {}, "content": [{"type": "text", "text": "t"}]}
    ]));
    let err = render_value(&value).unwrap_err();
    match err {
        Error::MalformedNode { node_type, path, .. } => {
            assert_eq!(node_type, "heading");
            assert_eq!(path, "doc.content[1]");
        }
        other => panic!("expected MalformedNode, got {other}"),
    }
}

#[test]
fn mixed_document_keeps_reading_order() {
    let value = doc(json!([
        {"type": "heading", "attrs": {"level": 1},
         "content": [{"type": "text", "text": "Release notes"}]},
        paragraph("Summary of changes."),
        {"type": "rule"},
        {"type": "bulletList", "content": [
            {"type": "listItem", "content": [paragraph("fix A")]},
            {"type": "listItem", "content": [paragraph("fix B")]}
        ]}
    ]));
    assert_eq!(
        render_value(&value).unwrap(),
        "# Release notes\nSummary of changes.\n---\n● fix A\n● fix B"
    );
}
