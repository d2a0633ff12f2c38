use std::ops;

use crate::{
    dims::Dims,
    error::MazeError,
    events::Renderer,
    grid::{CellWall, Grid},
};

use super::{step, visit, Strategy};

/// Cells from the entry to the exit, both included. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    pub fn entry(&self) -> Dims {
        self.0[0]
    }

    pub fn exit(&self) -> Dims {
        self.0[self.0.len() - 1]
    }

    pub fn into_vec(self) -> Vec<Dims> {
        self.0
    }
}

impl ops::Deref for Path {
    type Target = [Dims];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Dims;
    type IntoIter = std::slice::Iter<'a, Dims>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Depth-first search with backtracking.
///
/// Directions are tried in canonical order and a cell is never entered twice, so on a
/// perfect maze the first path found is the only one.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    strategy: Strategy,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Finds a path from `entry` to `exit` through removed walls.
    ///
    /// Clears the visited flags left over from generation (or from an earlier solve) before
    /// searching, so solving the same grid again gives the same path.
    pub fn solve(
        &self,
        grid: &mut Grid,
        entry: Dims,
        exit: Dims,
        mut renderer: impl Renderer,
    ) -> Result<Path, MazeError> {
        grid.cell_at(entry)?;
        grid.cell_at(exit)?;
        grid.reset_visited();

        log::debug!("Solving from {:?} to {:?} ({:?})", entry, exit, self.strategy);

        let path = match self.strategy {
            Strategy::Iterative => search_iterative(grid, entry, exit, &mut renderer),
            Strategy::Recursive => search_recursive(grid, entry, exit, &mut renderer).map(
                |mut path| {
                    path.reverse();
                    path
                },
            ),
        };

        match path {
            Some(path) => {
                log::debug!("Found path of {} cells", path.len());
                Ok(Path(path))
            }
            None => {
                log::debug!("No path from {:?} to {:?}", entry, exit);
                Err(MazeError::NoPath { entry, exit })
            }
        }
    }
}

/// Neighbor behind `wall` if the wall is open and the neighbor is still unexplored.
fn open_unvisited(grid: &Grid, pos: Dims, wall: CellWall) -> Option<Dims> {
    grid.get_cell(pos)
        .filter(|cell| cell.is_open(wall))
        .and_then(|_| grid.neighbor(pos, wall))
        .filter(|&next| !grid.is_visited(next))
}

fn search_iterative(
    grid: &mut Grid,
    entry: Dims,
    exit: Dims,
    renderer: &mut impl Renderer,
) -> Option<Vec<Dims>> {
    const DIRECTIONS: [CellWall; 4] = CellWall::get_in_order();

    visit(grid, entry, renderer);
    if entry == exit {
        return Some(vec![entry]);
    }

    // Each frame holds a cell on the current path and the next direction to try from it.
    let mut stack = vec![(entry, 0)];

    while let Some(&(current, from_dir)) = stack.last() {
        let found = (from_dir..DIRECTIONS.len()).find_map(|i| {
            open_unvisited(grid, current, DIRECTIONS[i]).map(|next| (i, next))
        });

        match found {
            Some((i, next)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.1 = i + 1;
                }

                step(grid, current, next, false, renderer);
                visit(grid, next, renderer);
                stack.push((next, 0));

                if next == exit {
                    return Some(stack.into_iter().map(|(pos, _)| pos).collect());
                }
            }
            None => {
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    log::trace!("Dead end at {:?}", current);
                    step(grid, parent, current, true, renderer);
                }
            }
        }
    }

    None
}

/// Returns the path reversed, exit first.
fn search_recursive(
    grid: &mut Grid,
    current: Dims,
    exit: Dims,
    renderer: &mut impl Renderer,
) -> Option<Vec<Dims>> {
    visit(grid, current, renderer);
    if current == exit {
        return Some(vec![current]);
    }

    for wall in CellWall::get_in_order() {
        let Some(next) = open_unvisited(grid, current, wall) else {
            continue;
        };

        step(grid, current, next, false, renderer);
        if let Some(mut path) = search_recursive(grid, next, exit, renderer) {
            path.push(current);
            return Some(path);
        }

        log::trace!("Dead end at {:?}", next);
        step(grid, current, next, true, renderer);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MazeEvent;
    use crate::grid::CellWall::*;

    /// ```text
    /// (0,0) - (1,0)   (2,0)
    ///           |       |
    /// (0,1)   (1,1) - (2,1)
    /// ```
    fn corridor() -> Grid {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.remove_wall(Dims(0, 0), Right).unwrap();
        grid.remove_wall(Dims(1, 0), Bottom).unwrap();
        grid.remove_wall(Dims(1, 1), Right).unwrap();
        grid.remove_wall(Dims(2, 1), Top).unwrap();
        grid
    }

    #[test]
    fn follows_corridor() {
        let mut grid = corridor();
        for strategy in [Strategy::Iterative, Strategy::Recursive] {
            let path = Solver::new()
                .with_strategy(strategy)
                .solve(&mut grid, Dims(0, 0), Dims(2, 0), ())
                .unwrap();

            assert_eq!(
                path.cells(),
                &[Dims(0, 0), Dims(1, 0), Dims(1, 1), Dims(2, 1), Dims(2, 0)]
            );
            assert_eq!(path.entry(), Dims(0, 0));
            assert_eq!(path.exit(), Dims(2, 0));
        }
    }

    #[test]
    fn unreachable_exit() {
        let mut grid = corridor();
        let res = Solver::new().solve(&mut grid, Dims(0, 0), Dims(0, 1), ());
        assert_eq!(
            res,
            Err(MazeError::NoPath {
                entry: Dims(0, 0),
                exit: Dims(0, 1)
            })
        );
    }

    #[test]
    fn invalid_endpoints() {
        let mut grid = corridor();
        let res = Solver::new().solve(&mut grid, Dims(0, 0), Dims(3, 1), ());
        assert_eq!(res, Err(MazeError::OutOfBounds(Dims(3, 1))));
    }

    #[test]
    fn entry_is_exit() {
        let mut grid = corridor();
        let path = Solver::new()
            .solve(&mut grid, Dims(1, 1), Dims(1, 1), ())
            .unwrap();
        assert_eq!(path.cells(), &[Dims(1, 1)]);
    }

    #[test]
    fn backtracking_events() {
        // (0,0) - (1,0) - (2,0), dead end branch (1,0) | (1,1)
        let mut grid = Grid::new(3, 2).unwrap();
        grid.remove_wall(Dims(0, 0), Right).unwrap();
        grid.remove_wall(Dims(1, 0), Right).unwrap();
        grid.remove_wall(Dims(1, 0), Bottom).unwrap();

        // Bottom comes after Right in canonical order, so put the exit down the branch to
        // force a backtrack out of (2,0) first.
        for strategy in [Strategy::Iterative, Strategy::Recursive] {
            let mut events = Vec::new();
            let path = Solver::new()
                .with_strategy(strategy)
                .solve(&mut grid, Dims(0, 0), Dims(1, 1), &mut events)
                .unwrap();

            assert_eq!(path.cells(), &[Dims(0, 0), Dims(1, 0), Dims(1, 1)]);
            assert_eq!(
                events,
                vec![
                    MazeEvent::CellVisited { cell: Dims(0, 0) },
                    MazeEvent::Move { from: Dims(0, 0), to: Dims(1, 0), undo: false },
                    MazeEvent::CellVisited { cell: Dims(1, 0) },
                    MazeEvent::Move { from: Dims(1, 0), to: Dims(2, 0), undo: false },
                    MazeEvent::CellVisited { cell: Dims(2, 0) },
                    MazeEvent::Move { from: Dims(1, 0), to: Dims(2, 0), undo: true },
                    MazeEvent::Move { from: Dims(1, 0), to: Dims(1, 1), undo: false },
                    MazeEvent::CellVisited { cell: Dims(1, 1) },
                ],
                "{strategy:?}"
            );
        }
    }
}
