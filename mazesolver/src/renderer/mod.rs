pub mod terminal;

use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{cursor, queue, terminal::Clear, terminal::ClearType, SynchronizedUpdate as _};
use mazecore::{
    algorithms::Path,
    array::Array2D,
    dims::Dims,
    events::{MazeEvent, Renderer},
    grid::{CellWall, Grid},
    MazeError,
};

pub use self::terminal::Terminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Empty,
    /// On the walk the algorithm is currently following.
    Path,
    /// Walked into and backtracked out of.
    Undone,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Path => '*',
            Mark::Undone => '.',
        }
    }
}

/// Draws the grid as plain text.
///
/// With a delay set, every event redraws the whole grid and waits before handing control
/// back to the algorithm. Without one it only keeps track of the marks, and the final state
/// can be taken with [`TextRenderer::frame`].
pub struct TextRenderer<W: Write> {
    out: W,
    marks: Array2D<Mark>,
    delay: Option<Duration>,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, grid: &Grid, delay: Option<Duration>) -> Result<Self, MazeError> {
        let marks = Array2D::from_fn(grid.size(), |_| Mark::Empty)
            .ok_or(MazeError::InvalidDimension(grid.size()))?;

        Ok(Self {
            out,
            marks,
            delay,
            error: None,
        })
    }

    pub fn clear_marks(&mut self) {
        self.marks.iter_mut().for_each(|mark| *mark = Mark::Empty);
    }

    pub fn mark_path(&mut self, path: &Path) {
        for &pos in path {
            self.set_mark(pos, Mark::Path);
        }
    }

    pub fn mark(&self, pos: Dims) -> Option<Mark> {
        self.marks.get(pos).copied()
    }

    fn set_mark(&mut self, pos: Dims, mark: Mark) {
        if let Some(slot) = self.marks.get_mut(pos) {
            *slot = mark;
        }
    }

    /// First write error hit while animating. Drawing stops after it.
    pub fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders the grid with the current marks.
    ///
    /// ```text
    /// +   +---+
    /// | *   * |
    /// +---+   +
    /// ```
    pub fn frame(&self, grid: &Grid) -> String {
        let Dims(columns, rows) = grid.size();
        let mut frame = String::new();

        let horizontal = |frame: &mut String, row: i32, wall: CellWall| {
            for column in 0..columns {
                let closed = grid
                    .get_cell(Dims(column, row))
                    .is_some_and(|cell| cell.get_wall(wall));
                frame.push('+');
                frame.push_str(if closed { "---" } else { "   " });
            }
            frame.push_str("+\n");
        };

        for row in 0..rows {
            horizontal(&mut frame, row, CellWall::Top);

            for column in 0..columns {
                let pos = Dims(column, row);
                let Some(cell) = grid.get_cell(pos) else {
                    continue;
                };
                let mark = self.mark(pos).unwrap_or_default();

                frame.push(if cell.get_wall(CellWall::Left) { '|' } else { ' ' });
                frame.push(' ');
                frame.push(mark.symbol());
                frame.push(' ');

                if column == columns - 1 {
                    frame.push(if cell.get_wall(CellWall::Right) { '|' } else { ' ' });
                }
            }
            frame.push('\n');
        }
        horizontal(&mut frame, rows - 1, CellWall::Bottom);

        frame
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        let frame = self.frame(grid);

        self.out.sync_update(|out| -> io::Result<()> {
            queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
            out.write_all(frame.as_bytes())?;
            out.flush()
        })?
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn on_event(&mut self, grid: &Grid, event: &MazeEvent) {
        if self.error.is_some() {
            return;
        }

        match *event {
            MazeEvent::CellVisited { cell } => {
                if self.mark(cell) == Some(Mark::Empty) {
                    self.set_mark(cell, Mark::Path);
                }
            }
            MazeEvent::Move {
                from,
                to,
                undo: false,
            } => {
                self.set_mark(from, Mark::Path);
                self.set_mark(to, Mark::Path);
            }
            MazeEvent::Move { to, undo: true, .. } => self.set_mark(to, Mark::Undone),
            MazeEvent::WallRemoved { .. } => {}
        }

        if let Some(delay) = self.delay {
            if let Err(err) = self.draw(grid) {
                log::error!("Failed to draw frame: {}", err);
                self.error = Some(err);
                return;
            }
            thread::sleep(delay);
        }
    }
}
