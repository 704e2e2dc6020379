//! Breadth-first wavefront pathfinding on 2D grids.
//!
//! This crate finds shortest paths between two cells of a rectangular
//! [`Grid`](wavegrid_core::Grid) where one designated cell value is
//! traversable and every other value is an obstacle. Movement is
//! 4-directional (no diagonals) and every step costs 1.
//!
//! The search runs in two phases:
//!
//! 1. **Wave expansion** ([`WaveMap::expand`]) — a layered BFS from the
//!    start cell that labels every reached cell with its hop distance.
//! 2. **Path reconstruction** ([`WaveMap::path`]) — a walk from the finish
//!    back down the distance gradient to the start.
//!
//! Most callers only need [`find_path`], which runs both phases:
//!
//! ```
//! use wavegrid_core::{Cell, Grid, Point};
//! use wavegrid_paths::find_path;
//!
//! let grid = Grid::from_rows([
//!     [0, 2, 0],
//!     [0, 2, 0],
//!     [0, 0, 0],
//! ])
//! .unwrap();
//! let path = find_path(&grid, Point::new(0, 0), Point::new(0, 2), Cell(0)).unwrap();
//! assert_eq!(path.len(), 7); // 6 hops around the wall in column 1
//! ```
//!
//! Every call allocates its own distance map and frontiers, so concurrent
//! searches over one shared `&Grid` need no coordination.

mod path;
mod render;
mod wave;

pub use path::find_path;
pub use wave::{UNREACHED, WaveMap};
