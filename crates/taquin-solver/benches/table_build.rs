//! Benchmarks for distance-table construction.
//!
//! Measures the full breadth-first build for small boards. The 2x3 build
//! enumerates all 720 arrangements (360 reachable); the 3x3 build covers
//! the classic 8-puzzle's 362,880 arrangements and is the workload the
//! cooperative stepping exists for.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench table_build
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use taquin_core::Dims;
use taquin_solver::OptimalDistances;

fn bench_full_build(c: &mut Criterion) {
    for (columns, rows) in [(2u8, 2u8), (2, 3), (3, 3)] {
        let dims = Dims::new(columns, rows).unwrap();
        c.bench_with_input(
            BenchmarkId::new("full_build", format!("{columns}x{rows}")),
            &dims,
            |b, &dims| {
                b.iter(|| {
                    let mut table = OptimalDistances::new(hint::black_box(dims)).unwrap();
                    table.run_to_completion();
                    table
                });
            },
        );
    }
}

fn bench_single_layer(c: &mut Criterion) {
    let dims = Dims::new(3, 3).unwrap();
    c.bench_function("first_layer_3x3", |b| {
        b.iter(|| {
            let mut table = OptimalDistances::new(hint::black_box(dims)).unwrap();
            table.step();
            table
        });
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_full_build,
        bench_single_layer
);
criterion_main!(benches);
