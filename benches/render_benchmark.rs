//! Benchmarks for unadf decode and render performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic ADF documents of varying size and depth.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

/// Creates a synthetic ADF document with the given number of sections.
///
/// Each section is a heading, a paragraph with a hard break, a three-item
/// bullet list and a 2x3 table with a header row.
fn create_test_document(section_count: usize) -> Value {
    let mut content = Vec::new();

    for i in 0..section_count {
        content.push(json!({
            "type": "heading",
            "attrs": {"level": 2},
            "content": [{"type": "text", "text": format!("Section {i}")}]
        }));
        content.push(json!({
            "type": "paragraph",
            "content": [
                {"type": "text", "text": "Benchmark body text for section rendering."},
                {"type": "hardBreak"},
                {"type": "text", "text": "Second line after a hard break."}
            ]
        }));
        content.push(json!({
            "type": "bulletList",
            "content": (0..3).map(|j| json!({
                "type": "listItem",
                "content": [{
                    "type": "paragraph",
                    "content": [{"type": "text", "text": format!("item {j}")}]
                }]
            })).collect::<Vec<_>>()
        }));
        content.push(json!({
            "type": "table",
            "attrs": {"layout": "default"},
            "content": [
                {"type": "tableRow", "content": [
                    {"type": "tableHeader", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Name"}]}
                    ]},
                    {"type": "tableHeader", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Value"}]}
                    ]},
                    {"type": "tableHeader", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "Notes"}]}
                    ]}
                ]},
                {"type": "tableRow", "content": [
                    {"type": "tableCell", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": format!("row-{i}")}]}
                    ]},
                    {"type": "tableCell", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "42"}]}
                    ]},
                    {"type": "tableCell", "content": [
                        {"type": "paragraph", "content": [{"type": "text", "text": "multi\nline"}]}
                    ]}
                ]}
            ]
        }));
    }

    json!({"type": "doc", "version": 1, "content": content})
}

/// Creates a blockquote chain of the given depth.
fn create_deep_document(depth: usize) -> Value {
    let mut node = json!({
        "type": "paragraph",
        "content": [{"type": "text", "text": "bottom"}]
    });
    for _ in 0..depth {
        node = json!({"type": "blockquote", "content": [node]});
    }
    json!({"type": "doc", "version": 1, "content": [node]})
}

/// Benchmark decode alone at various sizes.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for section_count in [1, 10, 100].iter() {
        let value = create_test_document(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unadf::decode_value(black_box(&value)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark render alone on a pre-decoded tree.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for section_count in [1, 10, 100].iter() {
        let doc = unadf::decode_value(&create_test_document(*section_count)).unwrap();

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unadf::to_text(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark full pipeline on deeply nested input.
fn bench_deep_nesting(c: &mut Criterion) {
    let value = create_deep_document(200);

    c.bench_function("deep_nesting_200", |b| {
        b.iter(|| unadf::render_value(black_box(&value)).unwrap());
    });
}

criterion_group!(benches, bench_decode, bench_render, bench_deep_nesting);
criterion_main!(benches);
