// Matching throughput benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use findit_core::{Capabilities, EngineConfig, MatchEngine};
use rand::prelude::*;

const VOCABULARY: &[&str] = &[
    "black", "white", "blue", "red", "grey", "dark", "navy", "leather", "phone", "iphone",
    "samsung", "laptop", "macbook", "wallet", "purse", "keys", "keychain", "backpack", "bag",
    "bottle", "watch", "glasses", "library", "cafeteria", "gym", "parking", "lost", "found",
    "near", "the", "with", "a", "small", "cracked", "screen", "sticker", "charger", "case",
];

fn random_description(rng: &mut impl Rng, words: usize) -> String {
    (0..words)
        .map(|_| *VOCABULARY.choose(rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_match_pair(c: &mut Criterion) {
    let engine = MatchEngine::with_capabilities(EngineConfig::default(), Capabilities::full())
        .unwrap();
    let mut rng = rand::rng();
    let mut group = c.benchmark_group("match_pair");

    for words in [4, 16, 64].iter() {
        let lost = random_description(&mut rng, *words);
        let found = random_description(&mut rng, *words);

        group.bench_with_input(BenchmarkId::new("words", words), words, |b, _| {
            b.iter(|| engine.match_pair(black_box(&lost), black_box(&found)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_preprocess(c: &mut Criterion) {
    let engine = MatchEngine::with_capabilities(EngineConfig::default(), Capabilities::full())
        .unwrap();
    let text = "Lost a black leather wallet with keys near the library, Samsung phone inside";

    c.bench_function("preprocess", |b| {
        b.iter(|| engine.preprocess(black_box(text)));
    });
}

criterion_group!(benches, benchmark_match_pair, benchmark_preprocess);
criterion_main!(benches);
