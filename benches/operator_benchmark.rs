//! Operator Catalog Benchmarks
//!
//! Measures the hot paths of expression printing and in-memory evaluation:
//! - Catalog lookup by selector and by name
//! - SQL rendering of nested expressions
//! - LIKE and REGEXP conformance

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sqlexpr_operators::{
    Expr, GenericPlatform, InMemoryEvaluator, OperatorCatalog, Selector, SqlValue, render_sql,
};
use std::hint::black_box;

fn nested_predicate(depth: usize) -> Expr {
    let leaf = |i: usize| {
        Expr::apply(
            Selector::EQUAL,
            vec![
                Expr::apply(Selector::TO_UPPER_CASE, vec![Expr::qualified("t0", format!("C{i}"))]),
                Expr::parameter(format!("v{i}")),
            ],
        )
    };
    (1..depth).fold(leaf(0), |acc, i| Expr::apply(Selector::AND, vec![acc, leaf(i)]))
}

fn bench_lookup(c: &mut Criterion) {
    let catalog = OperatorCatalog::standard();
    let mut group = c.benchmark_group("lookup");

    group.bench_function("by_selector", |b| {
        b.iter(|| catalog.lookup(black_box(Selector::LOCATE2)))
    });
    group.bench_function("by_name", |b| {
        b.iter(|| catalog.lookup_by_name(black_box("ToUpperCase")))
    });
    group.bench_function("internal_fallback", |b| {
        b.iter(|| catalog.internal_operator(black_box(Selector::COALESCE)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let catalog = OperatorCatalog::standard();
    let platform = GenericPlatform::default().with_delimiters("\"", "\"");
    let mut group = c.benchmark_group("render");

    for depth in [1, 8, 64] {
        let expr = nested_predicate(depth);
        group.bench_with_input(BenchmarkId::new("nested_and", depth), &expr, |b, expr| {
            b.iter(|| render_sql(black_box(expr), catalog, &platform))
        });
    }

    let case = Expr::apply(
        Selector::CASE,
        (0..16)
            .flat_map(|i| [Expr::literal(i), Expr::literal(format!("label {i}"))])
            .chain([Expr::literal("other")])
            .collect(),
    );
    group.bench_function("case_16_branches", |b| {
        b.iter(|| render_sql(black_box(&case), catalog, &platform))
    });

    group.finish();
}

fn bench_conform(c: &mut Criterion) {
    let catalog = OperatorCatalog::standard();
    let platform = GenericPlatform::default();
    let evaluator = InMemoryEvaluator::new(catalog, &platform);
    let mut group = c.benchmark_group("conform");

    let value = SqlValue::from("the quick brown fox jumps over the lazy dog");
    for pattern in ["the%", "%lazy dog", "the%fox%dog", "%o%o%o%"] {
        let pattern = SqlValue::from(pattern);
        group.bench_with_input(BenchmarkId::new("like", &pattern), &pattern, |b, pattern| {
            b.iter(|| evaluator.evaluate(Selector::LIKE, black_box(&value), pattern))
        });
    }

    let regexp = SqlValue::from("[a-z ]+dog");
    group.bench_function("regexp_cached", |b| {
        b.iter(|| evaluator.evaluate(Selector::REGEXP, black_box(&value), &regexp))
    });

    let bounds = SqlValue::pair(1, 1000);
    group.bench_function("between", |b| {
        b.iter(|| evaluator.evaluate(Selector::BETWEEN, black_box(&SqlValue::Integer(500)), &bounds))
    });

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_render, bench_conform);
criterion_main!(benches);
