//! Benchmarks for chatchunk loading, partitioning and rendering.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench partitioning -- week`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatchunk::config::{ChunkConfig, FormatOptions, SplitMode};
use chatchunk::core::output::{to_jsonl, to_text};
use chatchunk::core::{Formatter, Repository, partition};
use chatchunk::parsing::RawExport;

use chrono::{Duration, NaiveDate};

// =============================================================================
// Test Data Generators
// =============================================================================

/// A dump with `count` messages over 4 topics, one message every 20 minutes,
/// every third message replying to its predecessor.
fn generate_dump_json(count: usize) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let mut topics: Vec<Vec<String>> = vec![Vec::new(); 4];
    for i in 0..count {
        let author = if i % 2 == 0 { "Alice" } else { "Bob" };
        let ts = (start + Duration::minutes(i as i64 * 20)).format("%Y-%m-%d %H:%M:%S");
        let reply = if i % 3 == 2 { (i - 1).to_string() } else { "null".to_string() };
        topics[i % 4].push(format!(
            r#"[{}, "{}", "Message number {}, with a comma.", "{}", null, null, {}]"#,
            i, ts, i, author, reply
        ));
    }

    let body: Vec<String> = topics
        .iter()
        .enumerate()
        .map(|(id, records)| format!(r#""{}": [{}]"#, id + 1, records.join(",\n")))
        .collect();
    format!(r#"{{"messages": {{{}}}}}"#, body.join(",\n"))
}

fn load(count: usize) -> Repository {
    Repository::load(RawExport::from_str(&generate_dump_json(count)).unwrap()).unwrap()
}

// =============================================================================
// Loading Benchmarks
// =============================================================================

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [1_000_usize, 10_000, 50_000] {
        let json = generate_dump_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                let raw = RawExport::from_str(black_box(json)).unwrap();
                black_box(Repository::load(raw).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_lookup_by_id(c: &mut Criterion) {
    let repo = load(50_000);
    c.bench_function("lookup_by_id", |b| {
        b.iter(|| {
            for id in (0..50_000).step_by(97) {
                black_box(repo.lookup_by_id(black_box(id)));
            }
        });
    });
}

// =============================================================================
// Partitioning Benchmarks
// =============================================================================

fn bench_partition(c: &mut Criterion, name: &str, mode: SplitMode) {
    let mut group = c.benchmark_group(name);
    let config = ChunkConfig::new().with_mode(mode);

    for size in [1_000_usize, 10_000, 50_000] {
        let messages = load(size).gather(&[]);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &messages, |b, messages| {
            b.iter(|| black_box(partition(black_box(messages), &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_partition_count(c: &mut Criterion) {
    bench_partition(c, "partition_count", SplitMode::Count);
}

fn bench_partition_week(c: &mut Criterion) {
    bench_partition(c, "partition_week", SplitMode::Week);
}

// =============================================================================
// Rendering Benchmarks
// =============================================================================

fn bench_format_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_all");
    let options = FormatOptions::default();

    for size in [1_000_usize, 10_000] {
        let repo = load(size);
        let messages = repo.gather(&[]);
        let formatter = Formatter::new(&repo);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &messages, |b, messages| {
            b.iter(|| black_box(formatter.format_all(black_box(messages), &options)));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let options = FormatOptions::default();
    let config = ChunkConfig::new().with_mode(SplitMode::Week);

    for size in [1_000_usize, 10_000] {
        let json = generate_dump_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                // load -> partition -> render + jsonl
                let repo = Repository::load(RawExport::from_str(black_box(json)).unwrap()).unwrap();
                let chunks = partition(&repo.gather(&[]), &config).unwrap();
                let text = to_text(&chunks, &Formatter::new(&repo), &options);
                let jsonl = to_jsonl(&chunks).unwrap();
                black_box((text, jsonl))
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
    bench_load,
    bench_lookup_by_id,
    bench_partition_count,
    bench_partition_week,
    bench_format_all,
    bench_full_pipeline,
);

criterion_main!(benches);
