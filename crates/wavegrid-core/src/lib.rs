//! **wavegrid-core** — grid geometry and storage types for wavegrid.
//!
//! Provides the two types the pathfinding crate operates on: [`Point`],
//! an integer (row, column) coordinate, and [`Grid`], an owned rectangular
//! array of [`Cell`] values.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Cell, Grid};
