//! Criterion benchmarks for carcalc_core comparisons
//!
//! Run with: cargo bench -p carcalc_core

use carcalc_core::analysis::{BreakEvenSearch, DefaultComparison, TimelineBuilder};
use carcalc_core::config::CalculationInput;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_input(months: u32) -> CalculationInput {
    CalculationInput::builder(50_000.0, 2_200.0)
        .interest_rate_month(0.015)
        .financing_term_months(48)
        .analysis_period_months(months)
        .build()
}

fn bench_full_comparison(c: &mut Criterion) {
    let input = create_input(120);
    let comparison = DefaultComparison::default();

    c.bench_function("comparison_120mo", |b| {
        b.iter(|| comparison.execute(black_box(&input)))
    });
}

fn bench_timeline(c: &mut Criterion) {
    let input = create_input(120);
    let comparison = DefaultComparison::default();

    c.bench_function("timeline_120mo", |b| {
        b.iter(|| comparison.timeline(black_box(&input)))
    });
}

fn bench_break_even_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("break_even");
    let search = BreakEvenSearch::default();

    for months in [12, 120, 600].iter() {
        let input = create_input(*months);
        group.bench_with_input(BenchmarkId::new("months", months), months, |b, _| {
            b.iter(|| search.calculate(black_box(&input)))
        });
    }

    group.finish();
}

fn bench_timeline_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");
    let builder = TimelineBuilder::default();

    for months in [12, 120, 600].iter() {
        let input = create_input(*months);
        group.bench_with_input(BenchmarkId::new("months", months), months, |b, _| {
            b.iter(|| builder.calculate(black_box(&input)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_comparison,
    bench_timeline,
    bench_break_even_horizons,
    bench_timeline_horizons,
);
criterion_main!(benches);
