//! Performance measurement for the 2D adjacency scan at varying lattice sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use contigrid::{Bounds, check_contiguity_and_mask};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::{Array2, Array3};
use std::hint::black_box;

/// Curvilinear lattice built from a shared vertex grid
fn sample_lattice(rows: usize, cols: usize) -> Array3<f64> {
    let vertex = |i: usize, j: usize| 10.0f64.mul_add(j as f64, i as f64);
    Array3::from_shape_fn((rows, cols, 4), |(r, c, corner)| match corner {
        0 => vertex(r, c),
        1 => vertex(r, c + 1),
        2 => vertex(r + 1, c + 1),
        _ => vertex(r + 1, c),
    })
}

/// Measures full-lattice scan cost as the grid grows
fn bench_scan_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_2d");

    for side in &[16usize, 64, 256] {
        let corners = sample_lattice(*side, *side);
        let data = Array2::<f64>::zeros((*side, *side));
        let mask = Array2::from_shape_fn((*side, *side), |(r, _)| r == 0);

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let Ok(bounds) = Bounds::from_cell_corners(corners.view()) else {
                    return;
                };
                let result = check_contiguity_and_mask(
                    &bounds,
                    black_box(&data.view().into_dyn()),
                    Some(black_box(&mask.view().into_dyn())),
                    Some(1e-6),
                );
                black_box(result.is_ok());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan_2d);
criterion_main!(benches);
