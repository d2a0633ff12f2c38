//! Core of mazesolver: a grid of walled cells, a randomized depth-first maze generator and a
//! depth-first solver.
//!
//! Neither algorithm draws anything or waits. They report what they do through
//! [`events::Renderer`], which front-ends can use to animate the process.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod events;
pub mod grid;

pub use error::MazeError;
