use std::fmt;

use rand::Rng;

use crate::error::{LifeError, Result};
use crate::simulation::cell::CellState;

/// Row/column offsets of the eight Moore neighbours
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size board of cells, stored row-major.
///
/// Dimensions are always at least 1x1 and never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let count = Self::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; count],
        })
    }

    /// Create a grid from `rows * cols` row-major cell states.
    ///
    /// Fails without building anything if the dimensions are zero or the
    /// number of states does not match.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self> {
        let expected = Self::cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(LifeError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid with the listed (row, col) cells alive and the rest dead
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &(row, col) in alive {
            let idx = grid.checked_index(row, col)?;
            grid.cells[idx] = CellState::Alive;
        }
        Ok(grid)
    }

    /// Create a grid where each cell is alive with probability `density`
    pub fn random(rows: usize, cols: usize, density: f64) -> Result<Self> {
        Self::random_with(&mut rand::thread_rng(), rows, cols, density)
    }

    /// Same as [`Grid::random`] but drawing from a caller-supplied RNG
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        rows: usize,
        cols: usize,
        density: f64,
    ) -> Result<Self> {
        let count = Self::cell_count(rows, cols)?;
        // NaN would make gen_bool panic
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let cells = (0..count)
            .map(|_| CellState::from(rng.gen_bool(density)))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Number of cells in a `rows x cols` board.
    ///
    /// Zero dimensions, and products too large to address, are rejected.
    pub fn cell_count(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::MalformedDimensions { rows, cols });
        }
        rows.checked_mul(cols)
            .filter(|&count| count <= isize::MAX as usize)
            .ok_or(LifeError::MalformedDimensions { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// State at (row, col), or `None` outside the board. Never wraps.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// State at (row, col); out-of-range coordinates are an error
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Coordinates reached from (row, col) by moving (dr, dc) on the torus
    pub fn wrapped(&self, row: usize, col: usize, dr: isize, dc: isize) -> (usize, usize) {
        (wrap(row, dr, self.rows), wrap(col, dc, self.cols))
    }

    /// Wrapped coordinates of the eight Moore neighbours of (row, col)
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.wrapped(row, col, dr, dc))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn any_alive(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Cells in row-major order together with their coordinates
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &state)| ((idx / cols, idx % cols), state))
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Move `delta` steps from `pos` along an axis of length `len`, wrapping at both ends
fn wrap(pos: usize, delta: isize, len: usize) -> usize {
    (pos as isize + delta).rem_euclid(len as isize) as usize
}
