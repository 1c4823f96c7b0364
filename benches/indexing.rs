//! Benchmarks for grid indexing and border resolution.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use osheet::grid::{participants, GridIndex};
use osheet::memory::MemoryGrid;
use osheet::types::{Edge, Point, PointerEvent};
use osheet::{Sheet, SheetOptions};

/// `rows` x `cols` grid where every fourth row has a cell spanning two rows
/// and two columns at its start.
fn spanning_grid(rows: usize, cols: usize) -> MemoryGrid {
    let spans: Vec<Vec<(usize, usize)>> = (0..rows)
        .map(|r| {
            if r % 4 == 0 {
                std::iter::once((2, 2)).chain(std::iter::repeat((1, 1)).take(cols - 2)).collect()
            } else if r % 4 == 1 {
                vec![(1, 1); cols - 2]
            } else {
                vec![(1, 1); cols]
            }
        })
        .collect();
    MemoryGrid::from_spans(&spans)
}

/// Full index build across table sizes
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (rows, cols) in [(10, 10), (100, 20), (1000, 20)] {
        let grid = spanning_grid(rows, cols);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::new("spanning", format!("{rows}x{cols}")),
            &grid,
            |b, grid| b.iter(|| GridIndex::build(black_box(grid))),
        );
    }

    group.finish();
}

/// Participants of a border in the middle of a large table
fn bench_participants(c: &mut Criterion) {
    let grid = spanning_grid(1000, 20);
    let index = GridIndex::build(&grid);
    let id = index
        .locate(&grid.find("r500c5").expect("cell r500c5"))
        .expect("indexed");

    c.bench_function("participants_right", |b| {
        b.iter(|| participants(black_box(&index), id, Edge::Right))
    });
}

/// One press plus a drag of twenty moves on a cached index
fn bench_drag(c: &mut Criterion) {
    let grid = spanning_grid(200, 20);
    let key = grid.find("r100c3").expect("cell r100c3");
    let mut sheet = Sheet::new(grid, SheetOptions::default());
    let press = PointerEvent::primary(Point::new(500.0, 0.0), Point::new(64.0, 5.0));

    c.bench_function("drag_column", |b| {
        b.iter(|| {
            sheet.on_press(&key, black_box(&press));
            for step in 0..20 {
                sheet.on_move(Point::new(500.0 + f64::from(step), 0.0));
            }
            sheet.on_release();
        })
    });
}

criterion_group!(benches, bench_build, bench_participants, bench_drag);

criterion_main!(benches);
