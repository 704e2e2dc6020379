//! Wave expansion: BFS distance labeling.

use wavegrid_core::{Cell, Grid, Point};

/// Sentinel distance meaning "not reached by the wave".
pub const UNREACHED: i32 = -1;

/// A per-search distance map produced by wave expansion.
///
/// Each cell holds its hop distance from the start, or [`UNREACHED`].
/// A `WaveMap` belongs to a single search invocation: [`expand`]
/// allocates a fresh one every call, so repeated or concurrent searches
/// over the same grid never share mutable state.
///
/// [`expand`]: WaveMap::expand
pub struct WaveMap {
    dist: Vec<i32>,
    rows: i32,
    cols: i32,
}

impl WaveMap {
    /// Run wave expansion from `from` over `grid`, treating cells equal to
    /// `open` as traversable and everything else as an obstacle.
    ///
    /// The start cell is seeded with distance 0 whatever its own value is
    /// (it is always valid to stand on). Expansion proceeds one BFS layer
    /// at a time and stops early the moment `to` is labeled; cells later in
    /// the same layer may then stay unlabeled, which is fine because
    /// reconstruction only follows labeled cells and BFS layering already
    /// guarantees minimal distances.
    ///
    /// If `from` lies outside the grid the returned map is entirely
    /// unreached.
    pub fn expand(grid: &Grid, from: Point, to: Point, open: Cell) -> WaveMap {
        let mut map = WaveMap {
            dist: vec![UNREACHED; (grid.rows() * grid.cols()) as usize],
            rows: grid.rows(),
            cols: grid.cols(),
        };
        let Some(si) = map.idx(from) else {
            return map;
        };
        map.dist[si] = 0;

        let mut frontier = vec![from];
        let mut next: Vec<Point> = Vec::new();
        let mut step = 0;

        'expand: while !frontier.is_empty() {
            step += 1;
            for &p in &frontier {
                for n in p.neighbors_4() {
                    let Some(ni) = map.idx(n) else {
                        continue;
                    };
                    if grid.at(n) != Some(open) {
                        continue;
                    }
                    // Each cell is labeled and enqueued at most once.
                    if map.dist[ni] == UNREACHED {
                        map.dist[ni] = step;
                        next.push(n);
                    }
                    if n == to {
                        break 'expand;
                    }
                }
            }
            frontier.clear();
            std::mem::swap(&mut frontier, &mut next);
        }

        map
    }

    /// The BFS distance at `p`, or [`UNREACHED`] if `p` is outside the map
    /// or was never labeled.
    #[inline]
    pub fn distance(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHED,
        }
    }

    /// Whether the wave reached `p`.
    #[inline]
    pub fn reached(&self, p: Point) -> bool {
        self.distance(p) != UNREACHED
    }

    /// Number of rows in the map.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns in the map.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }
}
