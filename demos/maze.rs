//! Maze demo: shortest path across a corridor grid.
//!
//! Builds a 5x30 grid of repeating wall segments, finds the shortest
//! path from the top-left corner to a cell deep in the maze, and prints
//! the hops followed by the labeled distance map.

use wavegrid_core::{Cell, Grid, Point};
use wavegrid_paths::{WaveMap, find_path};

fn main() {
    let grid = Grid::from_rows([
        [0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0, 0, 2, 0, 0, 0],
        [0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0, 0, 2, 0, 1, 0],
        [0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0, 0, 2, 0, 5, 0],
        [0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0, 0, 2, 2, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ])
    .expect("literal grid is rectangular");

    let from = Point::new(0, 0);
    let to = Point::new(2, 27);
    let open = Cell(0);

    match find_path(&grid, from, to, open) {
        Some(path) => {
            let hops: Vec<String> = path.iter().map(Point::to_string).collect();
            println!("{} ({} hops)", hops.join(" -> "), path.len() - 1);
        }
        None => println!("no path from {from} to {to}"),
    }

    println!();
    println!("{}", WaveMap::expand(&grid, from, to, open));
}
