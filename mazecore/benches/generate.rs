use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazecore::{
    algorithms::{Generator, Random, Solver, Strategy},
    grid::Grid,
};
use rand::SeedableRng as _;

const COLUMNS: i32 = 200;
const ROWS: i32 = 200;

fn carved(strategy: Strategy) -> Grid {
    let mut grid = Grid::new(COLUMNS, ROWS).unwrap();
    Generator::new()
        .with_strategy(strategy)
        .generate(&mut grid, &mut Random::seed_from_u64(black_box(0)), ())
        .unwrap();
    grid
}

pub fn generate_iterative(c: &mut Criterion) {
    c.bench_function("generate_iterative", |b| {
        b.iter(|| carved(black_box(Strategy::Iterative)))
    });
}

pub fn solve_iterative(c: &mut Criterion) {
    let mut grid = carved(Strategy::Iterative);
    let (entry, exit) = (grid.first_cell(), grid.last_cell());

    c.bench_function("solve_iterative", |b| {
        b.iter(|| {
            Solver::new()
                .solve(&mut grid, black_box(entry), black_box(exit), ())
                .unwrap()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generate_iterative, solve_iterative}
criterion_main!(benches);
