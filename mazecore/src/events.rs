use crate::{
    dims::Dims,
    grid::{CellWall, Grid},
};

/// Something that happened to the grid during generation or solving.
///
/// Events are emitted right after the change they describe, in the order the algorithm
/// performs them. For a given seed that order is always the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeEvent {
    /// The wall on side `wall` of `cell` was removed, together with its twin on the
    /// neighbor, if there is one.
    WallRemoved { cell: Dims, wall: CellWall },
    CellVisited { cell: Dims },
    /// Step from `from` to `to`; `undo` is set when the step is taken back.
    Move { from: Dims, to: Dims, undo: bool },
}

/// Observer of the algorithms.
///
/// Gets a read-only view of the grid, so it can draw the current state but can't change
/// what the algorithm does next.
pub trait Renderer {
    fn on_event(&mut self, grid: &Grid, event: &MazeEvent);
}

impl Renderer for () {
    fn on_event(&mut self, _grid: &Grid, _event: &MazeEvent) {}
}

/// Records every event.
impl Renderer for Vec<MazeEvent> {
    fn on_event(&mut self, _grid: &Grid, event: &MazeEvent) {
        self.push(*event);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn on_event(&mut self, grid: &Grid, event: &MazeEvent) {
        (**self).on_event(grid, event);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn on_event(&mut self, grid: &Grid, event: &MazeEvent) {
        (**self).on_event(grid, event);
    }
}

/// Adapts a closure into a [`Renderer`].
pub struct FnRenderer<F>(pub F);

impl<F: FnMut(&Grid, &MazeEvent)> Renderer for FnRenderer<F> {
    fn on_event(&mut self, grid: &Grid, event: &MazeEvent) {
        (self.0)(grid, event);
    }
}
