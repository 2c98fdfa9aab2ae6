//! Scanner benchmarks for `sqllex`.
//!
//! `raw` measures [`Scanner::scan_raw`] alone: no keyword resolution, no literal
//! decoding. `cooked` measures [`Scanner::next_token`], which is what a
//! parser pays for.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sqllex::Scanner;

/// A mix of keywords, literals, comments and operators.
const STATEMENT: &str = "SELECT /*+ USE_INDEX(o, idx_created) */ o.id, o.total * 1.08 AS gross, \
                         c.name FROM orders o JOIN customers c ON c.id = o.customer_id \
                         WHERE o.created_at >= '2024-01-01' AND o.flags & 0x0F <> 0 \
                         -- trailing comment\n\
                         AND c.email LIKE '%@example.com' ORDER BY o.id DESC LIMIT 100;\n";

fn generate_n_statements(n: usize) -> String {
    STATEMENT.repeat(n)
}

fn bench_raw_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/raw/throughput");

    for num_statements in [1, 10, 100, 1000] {
        let source = generate_n_statements(num_statements);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_statements),
            &source,
            |b, src| {
                let mut scanner = Scanner::new("");
                b.iter(|| {
                    scanner.reset(src);
                    loop {
                        let token = scanner.scan_raw();
                        if token.kind.is_eof() {
                            break;
                        }
                        black_box(token);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_cooked_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/cooked/throughput");

    for num_statements in [1, 10, 100, 1000] {
        let source = generate_n_statements(num_statements);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_statements),
            &source,
            |b, src| {
                let mut scanner = Scanner::new("");
                b.iter(|| {
                    scanner.reset(src);
                    for token in scanner.by_ref() {
                        black_box(token);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_keyword_lookup(c: &mut Criterion) {
    let words = ["SELECT", "select", "customer_id", "AUTO_RANDOM", "x"];
    c.bench_function("keywords/lookup", |b| {
        b.iter(|| {
            for word in words {
                black_box(sqllex::keywords::lookup(black_box(word)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_raw_throughput,
    bench_cooked_throughput,
    bench_keyword_lookup,
);
criterion_main!(benches);
