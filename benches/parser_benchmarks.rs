#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic_in_result_fn)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ssmlparse::test_utils::*;

fn large_document(paragraphs: usize) -> String {
    let paragraph = r#"<p><s>Fish &amp; chips, <emphasis level="strong">please</emphasis>.</s><break time="250ms"/><s>Prices &lt; 5 pounds.</s></p>"#;
    format!("<speak>{}</speak>", paragraph.repeat(paragraphs))
}

// Benchmark SSML parsing
fn bench_ssml_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("SSML Parser");

    let large = large_document(500);
    let inputs = [
        ("small", include_str!("../tests/input/greeting.ssml").to_string()),
        ("medium", include_str!("../tests/input/story.ssml").to_string()),
        ("large", large),
    ];

    for (size, input) in &inputs {
        group.bench_with_input(BenchmarkId::new("parse", size), input, |b, input| {
            b.iter(|| parse_ssml(black_box(input)).unwrap());
        });
    }

    group.finish();
}

// Benchmark depth-heavy input
fn bench_nesting(c: &mut Criterion) {
    let input = nested_ssml(DEFAULT_MAX_DEPTH - 1, "deep");

    c.bench_function("parse_nested", |b| {
        b.iter(|| parse_ssml(black_box(&input)).unwrap());
    });
}

// Benchmark text projection
fn bench_text_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Text Projection");

    let input = large_document(500);
    let document: Node = parse_ssml(&input).unwrap().into();

    group.bench_function("node_to_text", |b| {
        b.iter(|| node_to_text(black_box(&document)));
    });

    group.bench_function("unescape_xml_chars", |b| {
        b.iter(|| unescape_xml_chars(black_box("a &amp;lt; b &lt; c &gt; d &amp; e")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ssml_parser,
    bench_nesting,
    bench_text_projection
);
criterion_main!(benches);
