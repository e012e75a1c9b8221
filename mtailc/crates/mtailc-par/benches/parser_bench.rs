//! Parser benchmarks.
//!
//! Run with: `cargo bench --package mtailc-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mtailc_par::Parser;
use mtailc_sem::MetricKind;
use mtailc_util::Handler;

#[derive(Default)]
struct BenchFactory(u32);

impl mtailc_sem::MetricFactory for BenchFactory {
    type Metric = u32;

    fn new_metric(&mut self, _name: &str, _program_name: &str, _kind: MetricKind, _keys: &[String], _hidden: bool) -> u32 {
        self.0 += 1;
        self.0
    }
}

impl mtailc_sem::MetricStore<u32> for BenchFactory {
    fn add(&mut self, _metric: u32) {}
}

fn parse_source(source: &str) {
    let mut handler = Handler::new();
    let parser = Parser::new(source, &mut handler, "bench", BenchFactory::default());
    black_box(parser.parse());
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

const DECORATOR_PROGRAM: &str = r#"
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

const NESTED_CONDITIONALS: &str = r#"
counter errors_total by severity

/^(?P<ts>\S+) (?P<level>\w+)/ {
    /ERROR/ {
        errors_total["error"]++
    } else {
        /WARN/ {
            errors_total["warn"]++
        }
    }
}
"#;

fn bench_parser_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_simple");
    group.throughput(Throughput::Bytes(SIMPLE_COUNTER.len() as u64));
    group.bench_function("simple_counter", |b| b.iter(|| parse_source(black_box(SIMPLE_COUNTER))));
    group.finish();
}

fn bench_parser_common_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_common_log");
    group.throughput(Throughput::Bytes(COMMON_LOG.len() as u64));
    group.bench_function("common_log_program", |b| b.iter(|| parse_source(black_box(COMMON_LOG))));
    group.finish();
}

fn bench_parser_decorator(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_decorator");
    group.throughput(Throughput::Bytes(DECORATOR_PROGRAM.len() as u64));
    group.bench_function("decorator_program", |b| b.iter(|| parse_source(black_box(DECORATOR_PROGRAM))));
    group.finish();
}

fn bench_parser_nested_conditionals(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_nested_conditionals");
    group.throughput(Throughput::Bytes(NESTED_CONDITIONALS.len() as u64));
    group.bench_function("nested_conditionals", |b| b.iter(|| parse_source(black_box(NESTED_CONDITIONALS))));
    group.finish();
}

criterion_group!(
    benches,
    bench_parser_simple,
    bench_parser_common_log,
    bench_parser_decorator,
    bench_parser_nested_conditionals,
);
criterion_main!(benches);
