//! Path reconstruction and the top-level search entry point.

use wavegrid_core::{Cell, Grid, Point};

use crate::wave::{UNREACHED, WaveMap};

impl WaveMap {
    /// Reconstruct the shortest path from the wave's start to `to`.
    ///
    /// Returns `None` if the wave never reached `to`. Otherwise walks from
    /// `to` down the distance gradient — at each step the first neighbor
    /// (in the fixed up/down/left/right order) whose distance is exactly
    /// one less — and returns the walk reversed, so the result runs
    /// start → finish inclusive. With `to` equal to the start the result
    /// is the single-cell path `[to]`.
    ///
    /// Expansion only labels traversable cells (plus the start itself), so
    /// following labeled distances alone cannot step onto an obstacle.
    pub fn path(&self, to: Point) -> Option<Vec<Point>> {
        let mut d = self.distance(to);
        if d == UNREACHED {
            return None;
        }

        let mut path = Vec::with_capacity(d as usize + 1);
        path.push(to);
        let mut cur = to;
        while d > 0 {
            cur = cur
                .neighbors_4()
                .into_iter()
                .find(|&n| self.distance(n) == d - 1)?;
            d -= 1;
            path.push(cur);
        }

        path.reverse();
        Some(path)
    }
}

/// Find a shortest 4-connected path from `from` to `to` over `grid`,
/// where cells equal to `open` are traversable.
///
/// Returns the full path including both endpoints, or `None` when the
/// input is invalid (empty grid, either endpoint out of bounds) or no
/// route exists. The two cases are deliberately not distinguished; callers
/// that care can check [`Grid::contains`] themselves before searching.
///
/// The start cell is exempt from the traversability check — a search may
/// begin on an obstacle. The finish is not: unless it equals the start,
/// it must hold the `open` value to be reachable.
pub fn find_path(grid: &Grid, from: Point, to: Point, open: Cell) -> Option<Vec<Point>> {
    if grid.is_empty() || !grid.contains(from) || !grid.contains(to) {
        return None;
    }
    WaveMap::expand(grid, from, to, open).path(to)
}
