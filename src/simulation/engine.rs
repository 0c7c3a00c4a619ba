use std::collections::HashSet;

use crate::config::{DEFAULT_COLS, DEFAULT_PATTERN, DEFAULT_ROWS};
use crate::error::Result;
use crate::simulation::cell::CellState;
use crate::simulation::grid::{Grid, NEIGHBOR_OFFSETS};
use crate::simulation::union_find::UnionFind;

/// Game of Life on a torus under the fixed B3/S23 rule.
///
/// The engine exclusively owns its grid. The only mutation is a whole-grid
/// swap in [`LifeEngine::next_generation`], after which the cached alive count
/// is rescanned.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    grid: Grid,
    total_alive: usize,
    generation: u64,
}

impl LifeEngine {
    /// The default 5x5 board, which dies out after four generations
    pub fn new() -> Self {
        let grid = Grid::with_alive(DEFAULT_ROWS, DEFAULT_COLS, &DEFAULT_PATTERN)
            .unwrap_or_else(|e| unreachable!("default pattern fits its board: {}", e));
        Self::from_grid(grid)
    }

    /// Build from `rows * cols` row-major cell states supplied by an external source
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self> {
        Grid::from_cells(rows, cols, cells).map(Self::from_grid)
    }

    /// Take ownership of an already-built grid
    pub fn from_grid(grid: Grid) -> Self {
        let total_alive = grid.alive_count();
        log::debug!(
            "Engine created: {}x{} grid, {} alive",
            grid.rows(),
            grid.cols(),
            total_alive
        );
        Self {
            grid,
            total_alive,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn total_alive_cells(&self) -> usize {
        self.total_alive
    }

    /// Number of single steps applied since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State of the cell at (row, col). Unlike neighbour lookups this does not wrap.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState> {
        self.grid.cell(row, col)
    }

    /// True if at least one cell is alive
    pub fn is_alive(&self) -> bool {
        self.grid.any_alive()
    }

    /// Live cells among the eight wrapped Moore neighbours of (row, col).
    ///
    /// Each offset is counted once even when wrapping makes several of them
    /// land on the same cell, so the result is always in `0..=8`.
    pub fn num_alive_neighbors(&self, row: usize, col: usize) -> usize {
        self.grid
            .neighbors(row, col)
            .filter(|&(r, c)| self.is_alive_at(r, c))
            .count()
    }

    /// The next generation of the current grid. Does not touch engine state.
    pub fn compute_new_grid(&self) -> Grid {
        let cells = self
            .grid
            .iter()
            .map(|((row, col), state)| state.next(self.num_alive_neighbors(row, col)))
            .collect();
        Grid::from_cells(self.grid.rows(), self.grid.cols(), cells)
            .unwrap_or_else(|e| unreachable!("next generation keeps the dimensions: {}", e))
    }

    /// Advance one generation
    pub fn next_generation(&mut self) {
        self.grid = self.compute_new_grid();
        self.total_alive = self.grid.alive_count();
        self.generation += 1;
        log::trace!(
            "Generation {}: {} alive",
            self.generation,
            self.total_alive
        );
    }

    /// Advance `n` generations one step at a time
    pub fn next_generations(&mut self, n: u64) {
        if n == 0 {
            return;
        }
        let start = self.generation;
        for _ in 0..n {
            self.next_generation();
        }
        log::debug!(
            "Advanced generations {} -> {}, {} alive",
            start,
            self.generation,
            self.total_alive
        );
    }

    /// Number of connected groups of live cells, where adjacency is the
    /// wrapped Moore neighbourhood.
    pub fn num_communities(&self) -> usize {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut sets = UnionFind::new(rows, cols);

        for ((row, col), state) in self.grid.iter() {
            if !state.is_alive() {
                continue;
            }
            for &(dr, dc) in &NEIGHBOR_OFFSETS {
                let (r, c) = self.grid.wrapped(row, col, dr, dc);
                if self.is_alive_at(r, c) {
                    sets.union(row, col, r, c);
                }
            }
        }

        let mut roots = HashSet::new();
        for ((row, col), state) in self.grid.iter() {
            if state.is_alive() {
                roots.insert(sets.find(row, col));
            }
        }
        roots.len()
    }

    fn is_alive_at(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col).is_some_and(CellState::is_alive)
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}
