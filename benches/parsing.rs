//! Benchmarks for the text and colour parsers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use uxkit::types::{parse_hex_color, Colour};
use uxkit::{decode_html_entities, safe_get};

// -- Colour benchmarks --

fn bench_colour(c: &mut Criterion) {
    let mut group = c.benchmark_group("colour");

    group.bench_function("lenient_valid", |b| {
        b.iter(|| parse_hex_color(black_box("#1A2B3C")))
    });

    group.bench_function("lenient_malformed", |b| {
        b.iter(|| parse_hex_color(black_box("  #zz12  ")))
    });

    group.bench_function("strict_valid", |b| {
        b.iter(|| Colour::from_hex(black_box("#1A2B3C")).unwrap())
    });

    group.finish();
}

// -- Text benchmarks --

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    let plain = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let encoded = "Tom &amp; Jerry &#39;s &lt;show&gt; &hellip; ".repeat(20);

    group.bench_function("decode_plain", |b| {
        b.iter(|| decode_html_entities(black_box(&plain)).len())
    });

    group.bench_function("decode_entities", |b| {
        b.iter(|| decode_html_entities(black_box(&encoded)).len())
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let items: Vec<u32> = (0..1024).collect();

    c.bench_function("safe_get_mixed", |b| {
        b.iter(|| {
            (-8isize..1040)
                .filter_map(|i| safe_get(black_box(&items), i))
                .count()
        })
    });
}

criterion_group!(benches, bench_colour, bench_text, bench_lookup);
criterion_main!(benches);
