use criterion::{criterion_group, criterion_main, Criterion};
use littlesearch_core::tokenizer::keyword;
use littlesearch_core::{build_index, BuildOptions, MemoryDocuments, NoiseWords};

const TEXT: &str = "The quick brown fox jumps over the lazy dog! Can't stop, won't stop: \
    searching, indexing, ranking... Keywords? Keywords; keywords.";

fn bench_keyword(c: &mut Criterion) {
    let noise = NoiseWords::english();
    c.bench_function("keyword_text", |b| {
        b.iter(|| TEXT.split_whitespace().filter_map(|w| keyword(w, &noise)).count())
    });
}

fn bench_search(c: &mut Criterion) {
    let docs: MemoryDocuments = (0..500).map(|i| (format!("doc{i}"), TEXT.repeat(i % 7 + 1))).collect();
    let names: Vec<String> = (0..500).map(|i| format!("doc{i}")).collect();
    let index = build_index(&names, NoiseWords::english(), &docs, BuildOptions::default()).unwrap();
    c.bench_function("search_two_keywords", |b| b.iter(|| index.search("keywords", "fox")));
}

criterion_group!(benches, bench_keyword, bench_search);
criterion_main!(benches);
