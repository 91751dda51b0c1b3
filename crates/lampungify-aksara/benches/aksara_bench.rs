// Criterion benchmarks for lampungify-aksara.
//
// Run:
//   cargo bench -p lampungify-aksara

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use lampungify_aksara::AksaraHandle;

const SAMPLE_TEXT: &str = "sikam haga mengan nyak ulay kongru aurage parapuh animal banyak";

fn sample_paragraph() -> String {
    vec![SAMPLE_TEXT; 20].join(" ")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_syllabify(c: &mut Criterion) {
    let handle = AksaraHandle::new();
    let text = sample_paragraph();
    c.bench_function("syllabify_text", |b| {
        b.iter(|| handle.syllabify_text(black_box(&text)))
    });
}

fn bench_to_aksara(c: &mut Criterion) {
    let handle = AksaraHandle::new();
    let text = sample_paragraph();
    c.bench_function("to_aksara", |b| b.iter(|| handle.to_aksara(black_box(&text))));
}

fn bench_to_latin(c: &mut Criterion) {
    let handle = AksaraHandle::new();
    let encoded = handle.to_aksara(&sample_paragraph());
    c.bench_function("to_latin", |b| b.iter(|| handle.to_latin(black_box(&encoded))));
}

criterion_group!(benches, bench_syllabify, bench_to_aksara, bench_to_latin);
criterion_main!(benches);
