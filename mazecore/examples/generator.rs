use std::env;

use mazecore::{
    algorithms::{random_seed, Generator, Random, Solver},
    dims::Dims,
    events::MazeEvent,
    grid::{CellWall, Grid},
};

use rand::SeedableRng as _;

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected 2 or 3 integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected columns, rows and an optional seed"
    );

    let input_seed = args.get(2).copied();
    let seed = input_seed.unwrap_or_else(random_seed);
    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let mut grid = Grid::new(args[0] as i32, args[1] as i32).expect("Invalid size");
    let mut rng = Random::seed_from_u64(seed);

    let mut events = Vec::new();
    Generator::new()
        .generate(&mut grid, &mut rng, &mut events)
        .unwrap();

    let backtracks = events
        .iter()
        .filter(|e| matches!(e, MazeEvent::Move { undo: true, .. }))
        .count();
    println!("{} events, {} backtracks", events.len(), backtracks);

    let (entry, exit) = (grid.first_cell(), grid.last_cell());
    let path = Solver::new().solve(&mut grid, entry, exit, ()).unwrap();

    show_grid(&grid, |pos| path.contains(&pos));
    println!("Path length: {}", path.len());
}

fn show_grid(grid: &Grid, on_path: impl Fn(Dims) -> bool) {
    let Dims(columns, rows) = grid.size();

    for row in 0..rows {
        for column in 0..columns {
            let cell = grid.cell_at(Dims(column, row)).unwrap();
            print!("+{}", if cell.get_wall(CellWall::Top) { "--" } else { "  " });
        }
        println!("+");

        for column in 0..columns {
            let pos = Dims(column, row);
            let cell = grid.cell_at(pos).unwrap();
            let left = if cell.get_wall(CellWall::Left) { '|' } else { ' ' };
            print!("{left}{}", if on_path(pos) { "()" } else { "  " });
        }
        let last = grid.cell_at(Dims(columns - 1, row)).unwrap();
        println!("{}", if last.get_wall(CellWall::Right) { '|' } else { ' ' });
    }

    for column in 0..columns {
        let cell = grid.cell_at(Dims(column, rows - 1)).unwrap();
        print!("+{}", if cell.get_wall(CellWall::Bottom) { "--" } else { "  " });
    }
    println!("+");
}
