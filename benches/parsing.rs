//! Benchmarks for chatplot parsing and statistics.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- time_chart`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatplot::ChatLog;
use chatplot::config::AnalysisConfig;
use chatplot::output::{to_csv, to_jsonl};
use chatplot::participants::Participant;
use chatplot::render::{ChartTable, TableCollector, render_charts};
use chatplot::stats::{Granularity, PunctuationPolicy, count_words, pie_chart, time_chart};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 50);
    for i in 0..count {
        let sender = match i % 3 {
            0 => "~ Alice",
            1 => "~ Bob",
            _ => "~ Carol",
        };
        let day = (i / 1440) % 28 + 1;
        let month = (i / (1440 * 28)) % 12 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{:02}/{:02}/23, {:02}:{:02} - {}: Message number {} hola que tal \"bien\"",
            day, month, hour, minute, sender, i
        ));
        if i % 50 == 0 {
            lines.push(format!("{:02}/{:02}/23, {:02}:{:02} - ~ Alice añadió a ~ Bob", day, month, hour, minute));
        }
    }
    lines.join("\n")
}

const SIZES: [usize; 4] = [100, 1_000, 10_000, 50_000];

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in SIZES {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let chat = ChatLog::parse(black_box(txt));
                black_box(chat)
            });
        });
    }
    group.finish();
}

fn bench_text_blobs(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_blobs");

    for size in SIZES {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter_batched(
                || ChatLog::parse(txt),
                |chat| {
                    let len = chat.text_blobs().len();
                    black_box(len)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

// =============================================================================
// Statistics Benchmarks
// =============================================================================

fn bench_word_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_counts");

    for size in SIZES {
        let chat = ChatLog::parse(&generate_export(size));
        let blob = chat.text_blob(&Participant::Total).unwrap().to_string();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &blob, |b, blob| {
            b.iter(|| black_box(count_words(black_box(blob), PunctuationPolicy::LastOnly)));
        });
    }
    group.finish();
}

fn bench_pie_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("pie_chart");

    for size in SIZES {
        let chat = ChatLog::parse(&generate_export(size));
        chat.text_blobs();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &chat, |b, chat| {
            b.iter(|| black_box(pie_chart(chat, PunctuationPolicy::LastOnly).unwrap()));
        });
    }
    group.finish();
}

fn bench_time_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_chart");

    let chat = ChatLog::parse(&generate_export(10_000));
    for granularity in Granularity::all() {
        group.throughput(Throughput::Elements(10_000));
        group.bench_with_input(
            BenchmarkId::from_parameter(granularity),
            granularity,
            |b, &granularity| {
                b.iter(|| black_box(time_chart(&chat, &Participant::Total, granularity)));
            },
        );
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let chat = ChatLog::parse(&generate_export(10_000));
    let buckets = time_chart(&chat, &Participant::Total, Granularity::Progression);
    let table = ChartTable::time(&Participant::Total, Granularity::Progression, &buckets);

    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&table).unwrap())));
    group.bench_function("jsonl", |b| b.iter(|| black_box(to_jsonl(&table).unwrap())));
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = AnalysisConfig::new();

    for size in [1_000_usize, 10_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let chat = ChatLog::parse(black_box(txt));
                let mut collector = TableCollector::default();
                render_charts(&chat, &config, &mut collector).unwrap();
                black_box(collector.tables)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parse,
    bench_text_blobs,
    bench_word_counts,
    bench_pie_chart,
    bench_time_chart,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
