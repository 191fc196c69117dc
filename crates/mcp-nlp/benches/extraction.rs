//! Extraction benchmarks for mcp-nlp.
//!
//! Measures keyword extraction per matching mode, and the full content,
//! requirements and intent pipelines on short and long inputs.
//!
//! Run with: cargo bench --package mcp-framework-nlp

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mcp_framework_nlp::{
    BuiltinTable, ContentRequestProcessor, IntentClassifier, KeywordExtractor, MatchMode,
    RequirementsProcessor,
};
use std::hint::black_box;

const CONTENT_REQUEST: &str = "Create a professional Instagram post about AI trends with hashtags";
const DEPLOY_REQUEST: &str =
    "Deploy a Python Flask app to AWS with staging and production environments";

fn long_text(repeat: usize) -> String {
    [CONTENT_REQUEST, DEPLOY_REQUEST].join(". ").repeat(repeat)
}

fn bench_keyword_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("keywords");

    for repeat in [1, 10, 100] {
        let text = long_text(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for mode in [MatchMode::WholeWord, MatchMode::Substring] {
            let extractor = KeywordExtractor::with_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), repeat),
                &text,
                |b, text| {
                    b.iter(|| {
                        for table in BuiltinTable::ALL {
                            black_box(extractor.extract(black_box(text), table.map()));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_processors(c: &mut Criterion) {
    let content = ContentRequestProcessor::new();
    let requirements = RequirementsProcessor::new();
    let classifier = IntentClassifier::new();

    c.bench_function("content_processor", |b| {
        b.iter(|| black_box(content.process(black_box(CONTENT_REQUEST))));
    });
    c.bench_function("requirements_processor", |b| {
        b.iter(|| black_box(requirements.process(black_box(DEPLOY_REQUEST))));
    });
    c.bench_function("intent_classifier", |b| {
        b.iter(|| black_box(classifier.classify(black_box(CONTENT_REQUEST))));
    });
}

criterion_group!(benches, bench_keyword_modes, bench_processors);
criterion_main!(benches);
