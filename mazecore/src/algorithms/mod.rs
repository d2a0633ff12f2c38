pub mod generator;
pub mod solver;

use rand::{thread_rng, Rng as _};

use crate::{
    dims::Dims,
    events::{MazeEvent, Renderer},
    grid::Grid,
};

pub use generator::Generator;
pub use solver::{Path, Solver};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Fresh seed for callers that didn't pick one. Log it if the run should be reproducible.
pub fn random_seed() -> u64 {
    thread_rng().gen()
}

/// How the depth-first walks keep track of where to backtrack to.
///
/// Both strategies visit cells, draw random numbers and emit events in exactly the same
/// order. `Recursive` uses the call stack, so its depth grows with the longest corridor of
/// the maze and large grids can overflow the thread stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    #[default]
    Iterative,
    Recursive,
}

fn visit(grid: &mut Grid, pos: Dims, renderer: &mut impl Renderer) {
    grid.mark_visited(pos);
    renderer.on_event(grid, &MazeEvent::CellVisited { cell: pos });
}

fn step(grid: &Grid, from: Dims, to: Dims, undo: bool, renderer: &mut impl Renderer) {
    renderer.on_event(grid, &MazeEvent::Move { from, to, undo });
}
