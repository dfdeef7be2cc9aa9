use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

use bluff_odds::core::{CardSet, Rank};
use bluff_odds::solver::{Catalog, Solver};

fn catalog_odds(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_odds");
    let mut rng = StdRng::seed_from_u64(17);
    for hand_size in [0usize, 1, 3, 6] {
        let hand = CardSet::full_domain().sample(hand_size, &mut rng).unwrap();
        let solver = Solver::new(hand, 10).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(hand_size), &solver, |b, solver| {
            b.iter(|| Catalog::global().odds(solver))
        });
    }
    group.finish();
}

fn straight_by_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_straight");
    for draw in [5usize, 10, 15, 20] {
        let solver = Solver::new(CardSet::empty(), draw).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(draw), &solver, |b, solver| {
            b.iter(|| solver.probability_big_straight())
        });
    }
    group.finish();
}

fn full_house(c: &mut Criterion) {
    let solver = Solver::new("AsKh".parse().unwrap(), 12).unwrap();
    c.bench_function("full_house", |b| {
        b.iter(|| solver.probability_full(Rank::Ace, Rank::King))
    });
}

criterion_group!(benches, catalog_odds, straight_by_draw, full_house);
criterion_main!(benches);
