// -------------------------------------------------------------------------
// Blast Ops Core -- Mining Cycle Benchmark
// Measures one full pipeline evaluation and a 200-sample design scan on
// the reference operation configuration.
// -------------------------------------------------------------------------

use blast_ops::pipeline::MiningCycleModel;
use blast_ops::scanner::{run_scan, ScanRanges};
use blast_types::config::BlastConfig;
use blast_types::design::BlastDesign;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_evaluate(c: &mut Criterion) {
    let model = MiningCycleModel::new(BlastConfig::default()).unwrap();
    let design = BlastDesign::new(6.0, 7.0, 2.0, 4.0);

    c.bench_function("evaluate_reference_design", |b| {
        b.iter(|| model.evaluate(black_box(&design)).unwrap())
    });
}

fn bench_scan(c: &mut Criterion) {
    let model = MiningCycleModel::new(BlastConfig::default()).unwrap();
    let ranges = ScanRanges::reference();

    c.bench_function("scan_200_designs", |b| {
        b.iter(|| run_scan(black_box(&model), black_box(&ranges), 200))
    });
}

criterion_group!(benches, bench_evaluate, bench_scan);
criterion_main!(benches);
