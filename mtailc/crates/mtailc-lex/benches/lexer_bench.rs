//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package mtailc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mtailc_lex::Lexer;
use mtailc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source, &mut handler);
    lexer.count()
}

const SIMPLE_COUNTER: &str = r#"
counter lines_total
/^/ {
    lines_total++
}
"#;

const COMMON_LOG: &str = r#"
counter http_requests_total by status, method
counter http_response_bytes_total

/^(?P<ip>[\d.]+) \S+ \S+ \[(?P<date>[^\]]+)\] "(?P<method>\S+) (?P<path>\S+) \S+" (?P<status>\d+) (?P<bytes>\d+)/ {
    http_requests_total[$status][$method]++
    http_response_bytes_total += $bytes
}
"#;

const DECORATOR_SOURCE: &str = r#"
def common_log {
    /^(?P<date>\S+)/ {
        next
    }
}

counter requests_total
@common_log {
    requests_total++
}
"#;

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_simple");
    group.throughput(Throughput::Bytes(SIMPLE_COUNTER.len() as u64));
    group.bench_function("simple_counter", |b| {
        b.iter(|| lexer_token_count(black_box(SIMPLE_COUNTER)))
    });
    group.finish();
}

fn bench_lexer_common_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_common_log");
    group.throughput(Throughput::Bytes(COMMON_LOG.len() as u64));
    group.bench_function("common_log_program", |b| {
        b.iter(|| lexer_token_count(black_box(COMMON_LOG)))
    });
    group.finish();
}

fn bench_lexer_decorator(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_decorator");
    group.throughput(Throughput::Bytes(DECORATOR_SOURCE.len() as u64));
    group.bench_function("decorator_program", |b| {
        b.iter(|| lexer_token_count(black_box(DECORATOR_SOURCE)))
    });
    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("counter x")))
    });

    group.bench_function("hyphenated_ident", |b| {
        b.iter(|| lexer_token_count(black_box("counter http-requests-total-v2")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_common_log,
    bench_lexer_decorator,
    bench_lexer_identifiers
);
criterion_main!(benches);
