use crate::{array::Array2D, dims::Dims, error::MazeError};

use super::cell::{Cell, CellWall};

/// Rectangular grid of cells, stored row by row.
///
/// Walls are kept per cell, so every internal wall exists twice. The grid only exposes
/// operations that change both copies together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a grid of `columns * rows` cells with all walls up and nothing visited.
    pub fn new(columns: i32, rows: i32) -> Result<Grid, MazeError> {
        let size = Dims(columns, rows);
        let cells = Array2D::from_fn(size, Cell::new).ok_or(MazeError::InvalidDimension(size))?;

        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn columns(&self) -> i32 {
        self.size().0
    }

    pub fn rows(&self) -> i32 {
        self.size().1
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Top left cell, the default entry.
    pub fn first_cell(&self) -> Dims {
        Dims::ZERO
    }

    /// Bottom right cell, the default exit.
    pub fn last_cell(&self) -> Dims {
        self.size() - 1
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn cell_at(&self, pos: Dims) -> Result<&Cell, MazeError> {
        self.cells.get(pos).ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Position next to `pos` in the direction of `wall`, if it lies inside the grid.
    ///
    /// Doesn't look at walls or at the visited flag.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        pos.checked_add(wall.to_coord())
            .filter(|&next| self.is_in_bounds(next))
    }

    /// Returns the wall of `from` that separates it from `to`, if the cells are adjacent.
    pub fn which_wall_between(from: Dims, to: Dims) -> Option<CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .find(|wall| from.checked_add(wall.to_coord()) == Some(to))
    }

    /// Whether `from` and `to` are adjacent cells with no wall between them.
    pub fn is_connected(&self, from: Dims, to: Dims) -> bool {
        match (Self::which_wall_between(from, to), self.get_cell(from)) {
            (Some(wall), Some(cell)) => self.is_in_bounds(to) && cell.is_open(wall),
            _ => false,
        }
    }

    /// Removes the wall between `pos` and its neighbor in the direction of `wall`, on both
    /// sides.
    ///
    /// Fails without touching anything if either cell is outside the grid. Walls facing
    /// outside are opened with [`Grid::open_boundary`].
    pub fn remove_wall(&mut self, pos: Dims, wall: CellWall) -> Result<(), MazeError> {
        if !self.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }

        // In bounds, so one step in any direction can't overflow.
        let other = pos + wall.to_coord();
        let (cell, neighbor) = self
            .cells
            .get_pair_mut(pos, other)
            .ok_or(MazeError::OutOfBounds(other))?;

        cell.remove_wall(wall);
        neighbor.remove_wall(wall.reverse_wall());

        Ok(())
    }

    /// Removes a wall on the edge of the grid, one that has no neighbor behind it.
    pub fn open_boundary(&mut self, pos: Dims, wall: CellWall) -> Result<(), MazeError> {
        if !self.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }
        if let Some(neighbor) = self.neighbor(pos, wall) {
            return Err(MazeError::OutOfBounds(neighbor));
        }

        if let Some(cell) = self.cells.get_mut(pos) {
            cell.remove_wall(wall);
        }

        Ok(())
    }

    pub(crate) fn mark_visited(&mut self, pos: Dims) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.set_visited(true);
        }
    }

    pub(crate) fn is_visited(&self, pos: Dims) -> bool {
        self.get_cell(pos).is_some_and(Cell::is_visited)
    }

    pub fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_visited(false));
    }

    /// Number of removed walls between two cells of the grid, each counted once.
    pub fn count_open_internal_walls(&self) -> usize {
        self.cells()
            .map(|cell| {
                [CellWall::Right, CellWall::Bottom]
                    .into_iter()
                    .filter(|&wall| {
                        cell.is_open(wall) && self.neighbor(cell.get_coord(), wall).is_some()
                    })
                    .count()
            })
            .sum()
    }

    /// Number of removed walls facing outside the grid.
    pub fn count_open_boundary_walls(&self) -> usize {
        self.cells()
            .map(|cell| {
                cell.open_walls()
                    .filter(|&wall| self.neighbor(cell.get_coord(), wall).is_none())
                    .count()
            })
            .sum()
    }
}
