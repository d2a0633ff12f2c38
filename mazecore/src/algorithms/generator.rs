//! Randomized depth-first carving, also known as the recursive backtracker.
//!
//! Starting from the entry, the walk keeps stepping into a random unvisited neighbor and
//! knocks down the wall it walks through. When a cell has no unvisited neighbors left the
//! walk goes back one step and tries again from there. Every cell ends up visited exactly
//! once and every carved wall leads to a new cell, so the passages form a spanning tree.

use rand::{seq::SliceRandom as _, Rng};
use smallvec::SmallVec;

use crate::{
    dims::Dims,
    error::MazeError,
    events::{MazeEvent, Renderer},
    grid::{CellWall, Grid},
};

use super::{step, visit, Strategy};

use self::CellWall::*;

/// Preference of outward sides for the entry opening. The first one still walled wins.
const ENTRY_SIDES: [CellWall; 4] = [Top, Left, Right, Bottom];
const EXIT_SIDES: [CellWall; 4] = [Bottom, Right, Left, Top];

#[derive(Debug, Clone, Default)]
pub struct Generator {
    entry: Option<Dims>,
    exit: Option<Dims>,
    strategy: Strategy,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry cell, top left corner if not set.
    pub fn with_entry(mut self, entry: Dims) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Exit cell, bottom right corner if not set.
    pub fn with_exit(mut self, exit: Dims) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn entry(&self, grid: &Grid) -> Dims {
        self.entry.unwrap_or_else(|| grid.first_cell())
    }

    pub fn exit(&self, grid: &Grid) -> Dims {
        self.exit.unwrap_or_else(|| grid.last_cell())
    }

    /// Carves a perfect maze into `grid`, which is expected to be freshly built.
    ///
    /// Opens the entry and exit to the outside first, then carves from the entry. Fails only
    /// when the entry or the exit lies outside the grid, in which case nothing is changed.
    ///
    /// Visited flags are cleared before carving. Walls are not restored, so on a grid that
    /// already has passages the result is connected but may contain loops.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
        mut renderer: impl Renderer,
    ) -> Result<(), MazeError> {
        let (entry, exit) = (self.entry(grid), self.exit(grid));
        grid.cell_at(entry)?;
        grid.cell_at(exit)?;

        if grid.count_open_internal_walls() > 0 {
            log::warn!("Generating over a grid that already has passages");
        }
        grid.reset_visited();

        log::debug!(
            "Generating {:?} maze from {:?} to {:?} ({:?})",
            grid.size(),
            entry,
            exit,
            self.strategy
        );

        open_outer_wall(grid, entry, ENTRY_SIDES, &mut renderer)?;
        open_outer_wall(grid, exit, EXIT_SIDES, &mut renderer)?;

        match self.strategy {
            Strategy::Iterative => carve_iterative(grid, entry, rng, &mut renderer)?,
            Strategy::Recursive => carve_recursive(grid, entry, rng, &mut renderer)?,
        }

        log::debug!("Carved {} passages", grid.count_open_internal_walls());

        Ok(())
    }
}

fn open_outer_wall(
    grid: &mut Grid,
    pos: Dims,
    sides: [CellWall; 4],
    renderer: &mut impl Renderer,
) -> Result<(), MazeError> {
    let cell = grid.cell_at(pos)?;
    let side = sides
        .into_iter()
        .find(|&wall| cell.get_wall(wall) && grid.neighbor(pos, wall).is_none());

    let Some(wall) = side else {
        log::warn!("{:?} is not on the edge of the maze, leaving it closed", pos);
        return Ok(());
    };

    grid.open_boundary(pos, wall)?;
    renderer.on_event(grid, &MazeEvent::WallRemoved { cell: pos, wall });

    Ok(())
}

/// Picks a random direction leading to an unvisited cell.
///
/// Candidates are collected in canonical order, so for a given generator state the result
/// only depends on which neighbors are still unvisited.
fn pick_unvisited<R: Rng + ?Sized>(grid: &Grid, pos: Dims, rng: &mut R) -> Option<CellWall> {
    let candidates = CellWall::get_in_order()
        .into_iter()
        .filter(|&wall| {
            grid.neighbor(pos, wall)
                .is_some_and(|next| !grid.is_visited(next))
        })
        .collect::<SmallVec<[_; 4]>>();

    candidates.choose(rng).copied()
}

fn carve(
    grid: &mut Grid,
    from: Dims,
    wall: CellWall,
    renderer: &mut impl Renderer,
) -> Result<Dims, MazeError> {
    grid.remove_wall(from, wall)?;
    renderer.on_event(grid, &MazeEvent::WallRemoved { cell: from, wall });

    let to = from + wall.to_coord();
    log::trace!("Carving {:?} -> {:?}", from, to);
    step(grid, from, to, false, renderer);

    Ok(to)
}

fn carve_iterative<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Dims,
    rng: &mut R,
    renderer: &mut impl Renderer,
) -> Result<(), MazeError> {
    let mut stack = Vec::with_capacity(grid.cell_count());

    visit(grid, start, renderer);
    stack.push(start);

    while let Some(&current) = stack.last() {
        match pick_unvisited(grid, current, rng) {
            Some(wall) => {
                let next = carve(grid, current, wall, renderer)?;
                visit(grid, next, renderer);
                stack.push(next);
            }
            None => {
                stack.pop();
                if let Some(&parent) = stack.last() {
                    log::trace!("Backtracking {:?} -> {:?}", current, parent);
                    step(grid, parent, current, true, renderer);
                }
            }
        }
    }

    Ok(())
}

fn carve_recursive<R: Rng + ?Sized>(
    grid: &mut Grid,
    current: Dims,
    rng: &mut R,
    renderer: &mut impl Renderer,
) -> Result<(), MazeError> {
    visit(grid, current, renderer);

    // Candidates are recomputed after every descent, which may have visited some of them.
    while let Some(wall) = pick_unvisited(grid, current, rng) {
        let next = carve(grid, current, wall, renderer)?;
        carve_recursive(grid, next, rng, renderer)?;

        log::trace!("Backtracking {:?} -> {:?}", next, current);
        step(grid, current, next, true, renderer);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::algorithms::Random;

    #[test]
    fn single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut events = Vec::new();
        Generator::new()
            .generate(&mut grid, &mut Random::seed_from_u64(0), &mut events)
            .unwrap();

        let cell = grid.cell_at(Dims::ZERO).unwrap();
        assert!(cell.is_open(Top));
        assert!(cell.is_open(Bottom));
        assert!(!cell.is_open(Left) && !cell.is_open(Right));
        assert_eq!(grid.count_open_internal_walls(), 0);
        assert_eq!(
            events,
            vec![
                MazeEvent::WallRemoved { cell: Dims::ZERO, wall: Top },
                MazeEvent::WallRemoved { cell: Dims::ZERO, wall: Bottom },
                MazeEvent::CellVisited { cell: Dims::ZERO },
            ]
        );
    }

    #[test]
    fn two_cells() {
        let mut grid = Grid::new(2, 1).unwrap();
        let mut events = Vec::new();
        Generator::new()
            .generate(&mut grid, &mut Random::seed_from_u64(7), &mut events)
            .unwrap();

        assert!(grid.is_connected(Dims(0, 0), Dims(1, 0)));
        assert!(grid.cell_at(Dims(0, 0)).unwrap().is_open(Top));
        assert!(grid.cell_at(Dims(1, 0)).unwrap().is_open(Bottom));
        assert_eq!(
            events,
            vec![
                MazeEvent::WallRemoved { cell: Dims(0, 0), wall: Top },
                MazeEvent::WallRemoved { cell: Dims(1, 0), wall: Bottom },
                MazeEvent::CellVisited { cell: Dims(0, 0) },
                MazeEvent::WallRemoved { cell: Dims(0, 0), wall: Right },
                MazeEvent::Move { from: Dims(0, 0), to: Dims(1, 0), undo: false },
                MazeEvent::CellVisited { cell: Dims(1, 0) },
                MazeEvent::Move { from: Dims(0, 0), to: Dims(1, 0), undo: true },
            ]
        );
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let mut grid = Grid::new(3, 3).unwrap();
        let fresh = grid.clone();
        let mut rng = Random::seed_from_u64(1);

        let res = Generator::new()
            .with_exit(Dims(3, 0))
            .generate(&mut grid, &mut rng, ());
        assert_eq!(res, Err(MazeError::OutOfBounds(Dims(3, 0))));

        let res = Generator::new()
            .with_entry(Dims(0, -1))
            .generate(&mut grid, &mut rng, ());
        assert_eq!(res, Err(MazeError::OutOfBounds(Dims(0, -1))));

        assert_eq!(grid, fresh);
    }

    #[test]
    fn custom_endpoints_pick_outer_sides() {
        let mut grid = Grid::new(3, 3).unwrap();
        Generator::new()
            .with_entry(Dims(2, 1))
            .with_exit(Dims(0, 1))
            .generate(&mut grid, &mut Random::seed_from_u64(3), ())
            .unwrap();

        assert!(grid.cell_at(Dims(2, 1)).unwrap().is_open(Right));
        assert!(grid.cell_at(Dims(0, 1)).unwrap().is_open(Left));
        assert_eq!(grid.count_open_boundary_walls(), 2);
    }

    #[test]
    fn interior_entry_stays_closed() {
        let mut grid = Grid::new(3, 3).unwrap();
        Generator::new()
            .with_entry(Dims(1, 1))
            .generate(&mut grid, &mut Random::seed_from_u64(3), ())
            .unwrap();

        assert_eq!(grid.count_open_boundary_walls(), 1);
        assert_eq!(grid.count_open_internal_walls(), 8);
    }

    #[test]
    fn stale_visited_flags_are_cleared() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.mark_visited(Dims(2, 1));
        grid.mark_visited(Dims(3, 2));

        let mut events = Vec::new();
        Generator::new()
            .generate(&mut grid, &mut Random::seed_from_u64(5), &mut events)
            .unwrap();

        let visits = events
            .iter()
            .filter(|e| matches!(e, MazeEvent::CellVisited { .. }))
            .count();
        assert_eq!(visits, 12);
        assert_eq!(grid.count_open_internal_walls(), 11);
    }

    #[test]
    fn same_entry_and_exit() {
        let mut grid = Grid::new(3, 3).unwrap();
        Generator::new()
            .with_exit(Dims::ZERO)
            .generate(&mut grid, &mut Random::seed_from_u64(3), ())
            .unwrap();

        let cell = grid.cell_at(Dims::ZERO).unwrap();
        assert!(cell.is_open(Top));
        assert!(cell.is_open(Left));
    }
}
