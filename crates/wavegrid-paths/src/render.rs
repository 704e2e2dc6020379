//! Distance-map diagnostics.

use std::fmt;
use std::fmt::Write;

use wavegrid_core::Point;

use crate::wave::{UNREACHED, WaveMap};

impl WaveMap {
    /// Render the distance map as text, one line per row, with each cell
    /// right-aligned in a column of `cell_width` characters. Unreached
    /// cells print as `X`.
    ///
    /// Purely a diagnostic aid; the search itself never renders.
    pub fn render(&self, cell_width: usize) -> String {
        let mut out = String::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let d = self.distance(Point::new(row, col));
                if d == UNREACHED {
                    let _ = write!(out, "{:>cell_width$}", 'X');
                } else {
                    let _ = write!(out, "{:>cell_width$}", d);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for WaveMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(3))
    }
}

#[cfg(test)]
mod tests {
    use wavegrid_core::{Cell, Grid};

    use super::*;

    #[test]
    fn render_marks_unreached_cells() {
        let g = Grid::from_rows([[0, 2, 0], [0, 2, 0], [0, 0, 0]]).unwrap();
        let wave = WaveMap::expand(&g, Point::ZERO, Point::new(-1, -1), Cell(0));
        let text = wave.render(3);
        assert_eq!(text, "  0  X  6\n  1  X  5\n  2  3  4\n");
        assert_eq!(wave.to_string(), text);
    }
}
