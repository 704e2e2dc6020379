//! An integer-cell rectangular grid.
//!
//! [`Cell`] is a newtype over `i32`; which values count as passable terrain
//! is decided by the caller at search time. [`Grid`] owns its cells in a
//! flat row-major buffer and is immutable for the duration of a search
//! (searches take `&Grid`).

use crate::geom::Point;

/// A single grid cell value.
///
/// The grid attaches no meaning to values. A search is told at call time
/// which one value counts as open terrain; every other value is an
/// obstacle to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Wrap a raw value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// An owned rectangular 2D grid of [`Cell`] values, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with `Cell(0)`.
    ///
    /// Non-positive dimensions yield an empty grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        if rows <= 0 || cols <= 0 {
            return Self {
                cells: Vec::new(),
                rows: 0,
                cols: 0,
            };
        }
        Self {
            cells: vec![Cell::default(); (rows * cols) as usize],
            rows,
            cols,
        }
    }

    /// Build a grid from rows of integer values.
    ///
    /// Returns `None` if there are no rows, the first row is empty, or the
    /// rows have inconsistent lengths.
    pub fn from_rows<R, C>(rows: R) -> Option<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = i32>,
    {
        let mut cells = Vec::new();
        let mut nrows = 0i32;
        let mut ncols: Option<usize> = None;

        for row in rows {
            let before = cells.len();
            cells.extend(row.into_iter().map(Cell::from));
            let len = cells.len() - before;
            match ncols {
                None => ncols = Some(len),
                Some(n) if n != len => return None,
                Some(_) => {}
            }
            nrows += 1;
        }

        let ncols = ncols?;
        if ncols == 0 {
            return None;
        }
        Some(Self {
            cells,
            rows: nrows,
            cols: ncols as i32,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the point lies within `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.row * self.cols + p.col) as usize])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        self.cells[(p.row * self.cols + p.col) as usize] = cell;
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Iterate over all `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &c)| {
            let i = i as i32;
            (Point::new(i / cols, i % cols), c)
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows([[0, 2], [1, 0]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
