use crate::dims::Dims;

use self::CellWall::*;

/// One side of a cell. Doubles as a direction of movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    /// Canonical order used for building carve candidates and for solving.
    ///
    /// Together with the seed it determines which maze is produced, so changing it changes
    /// every seeded maze.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
    visited: bool,
    coord: Dims,
}

impl Cell {
    pub fn new(coord: Dims) -> Cell {
        Cell {
            left: true,
            right: true,
            top: true,
            bottom: true,
            visited: false,
            coord,
        }
    }

    // Walls only go down through `Grid`, which keeps both sides in sync.
    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Right => self.right = false,
            Top => self.top = false,
            Bottom => self.bottom = false,
        }
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Right => self.right,
            Top => self.top,
            Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    /// Open sides in canonical order.
    pub fn open_walls(&self) -> impl Iterator<Item = CellWall> + '_ {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(wall))
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
            assert_eq!(wall.to_coord() + wall.reverse_wall().to_coord(), Dims::ZERO);
        }
    }

    #[test]
    fn new_cell_is_closed() {
        let mut cell = Cell::new(Dims(1, 2));
        assert!(CellWall::get_in_order().iter().all(|&w| cell.get_wall(w)));
        assert!(!cell.is_visited());
        assert_eq!(cell.get_coord(), Dims(1, 2));

        cell.remove_wall(Bottom);
        cell.remove_wall(Left);
        assert_eq!(cell.open_walls().collect::<Vec<_>>(), vec![Left, Bottom]);
    }
}
