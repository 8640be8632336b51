//! Criterion benchmarks for the doccat classifier.
//!
//! Covers the two hot paths:
//! - Text analysis (the scrub pipeline)
//! - Training and classification over the frequency tables

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use doccat::analysis::analyzer::analyzer::Analyzer;
use doccat::analysis::analyzer::scrub::ScrubAnalyzer;
use doccat::classifier::BayesClassifier;
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "classifier",
        "document",
        "probability",
        "token",
        "frequency",
        "training",
        "inference",
        "prior",
        "posterior",
        "naive",
        "bayes",
        "statistics",
        "cheap",
        "pills",
        "watches",
        "winner",
        "prize",
        "offer",
        "meeting",
        "agenda",
        "minutes",
        "review",
        "project",
        "schedule",
        "performance",
        "memory",
        "analysis",
        "tokenization",
        "normalization",
        "ranking",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 13) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

fn bench_scrub(c: &mut Criterion) {
    let analyzer = ScrubAnalyzer::new().unwrap();
    let documents = generate_test_documents(100);
    let total_bytes: usize = documents.iter().map(|d| d.len()).sum();

    let mut group = c.benchmark_group("scrub");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.bench_function("analyze_100_docs", |b| {
        b.iter(|| {
            for doc in &documents {
                let tokens: Vec<_> = analyzer.analyze(black_box(doc)).unwrap().collect();
                black_box(tokens);
            }
        })
    });
    group.finish();
}

fn bench_train(c: &mut Criterion) {
    let documents = generate_test_documents(100);

    let mut group = c.benchmark_group("train");
    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("train_100_docs", |b| {
        b.iter(|| {
            let mut classifier = BayesClassifier::new().unwrap();
            for (i, doc) in documents.iter().enumerate() {
                let class = if i % 2 == 0 { "even" } else { "odd" };
                classifier.train(class, black_box(doc)).unwrap();
            }
            black_box(classifier);
        })
    });
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let documents = generate_test_documents(100);
    let mut classifier = BayesClassifier::new().unwrap();
    for (i, doc) in documents.iter().enumerate() {
        let class = if i % 2 == 0 { "even" } else { "odd" };
        classifier.train(class, doc).unwrap();
    }
    let query = &documents[42];

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Bytes(query.len() as u64));
    group.bench_function("classify_one_doc", |b| {
        b.iter(|| {
            let predictions = classifier.classify(black_box(query)).unwrap();
            black_box(predictions);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_scrub, bench_train, bench_classify);
criterion_main!(benches);
