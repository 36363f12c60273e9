//! The [`Grid`] type — a row-major matrix of [`Cell`]s.
//!
//! Unlike a view type, a `Grid` owns its storage: cloning it yields an
//! independent copy, so a snapshot can be marked without touching the
//! original.

use std::fmt;

use crate::cell::Cell;
use crate::geom::Pos;

/// A `rows × cols` matrix of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from row-major cells. `cells` must hold exactly
    /// `rows * cols` entries.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major index of `p`, or `None` if `p` is off the grid.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
        {
            Some((p.row as usize) * self.cols + (p.col as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`. Returns `None` if `p` is off the grid.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. No-op if `p` is off the grid.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }
}

impl fmt::Display for Grid {
    /// One row per line, cells separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let mut first = true;
            for cell in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
