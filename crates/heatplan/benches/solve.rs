mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use heatplan::prelude::*;

const SPANS: [u32; 3] = [300, 400, 600];
const BEAM_WIDTHS: [usize; 3] = [10, 50, 200];

fn wishlist() -> Vec<WishItem> {
    vec![
        WishItem::new(FixtureKind::SinkCabinet, 60),
        WishItem::new(FixtureKind::StoveCabinet, 60),
        WishItem::new(FixtureKind::Fridge, 60),
        WishItem::new(FixtureKind::Dishwasher, 60),
        WishItem::new(FixtureKind::DrawerCabinet, 45),
    ]
}

fn room(span: u32) -> Room {
    Room::new(span, 300, 260)
        .with_utility(Utility::at_x(UtilityKind::Water, span as i32 / 4))
        .with_utility(Utility::at_x(UtilityKind::Gas, 3 * span as i32 / 4))
}

fn solve_straight_benches(c: &mut Criterion) {
    let items = wishlist();
    let mut group = c.benchmark_group("solve/straight");

    for &span in &SPANS {
        let solver = BeamSolver::new(room(span), SolverConfig::default());
        group.throughput(common::span_throughput(span));
        group.bench_with_input(BenchmarkId::from_parameter(span), &span, |b, _| {
            b.iter(|| {
                let result = solver.solve(&items);
                black_box(result.volumes.len());
            });
        });
    }

    group.finish();
}

fn solve_beam_width_benches(c: &mut Criterion) {
    let items = wishlist();
    let mut group = c.benchmark_group("solve/beam_width");

    for &beam_width in &BEAM_WIDTHS {
        let config = SolverConfig::new().with_beam_width(beam_width);
        let solver = BeamSolver::new(room(400), config);
        group.throughput(common::elements_throughput(items.len()));
        group.bench_with_input(
            BenchmarkId::from_parameter(beam_width),
            &beam_width,
            |b, _| {
                b.iter(|| {
                    let result = solver.solve(&items);
                    black_box(result.debug.best_score);
                });
            },
        );
    }

    group.finish();
}

fn solve_l_shape_benches(c: &mut Criterion) {
    let items = wishlist();
    let l_room = Room::new(400, 300, 260)
        .with_wall_b_length(300)
        .with_utility(Utility::at_x(UtilityKind::Water, 200))
        .with_utility(Utility::at_x(UtilityKind::Gas, 300));

    let mut group = c.benchmark_group("solve/l_shape");

    for corner in [CornerUnit::Blind, CornerUnit::Diagonal, CornerUnit::Carousel] {
        let solver = DualSpanSolver::try_new(l_room.clone(), corner, SolverConfig::default())
            .expect("arms extend past the corner");
        group.throughput(common::elements_throughput(items.len()));
        group.bench_with_input(BenchmarkId::from_parameter(corner), &corner, |b, _| {
            b.iter(|| {
                let result = solver.solve(&items);
                black_box(result.volumes.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = solve_straight_benches, solve_beam_width_benches, solve_l_shape_benches
}
criterion_main!(benches);
