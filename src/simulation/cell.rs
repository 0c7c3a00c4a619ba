use crate::config::{ALIVE_GLYPH, DEAD_GLYPH};

/// State of a single board cell.
///
/// Kept as an enum rather than a `bool` so the B3/S23 rule reads as
/// population logic instead of boolean algebra.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Apply the fixed B3/S23 rule given the number of live Moore neighbours.
    ///
    /// - 0..=1 neighbours: dies (underpopulation)
    /// - 2 neighbours: keeps its current state
    /// - 3 neighbours: alive (survival or birth)
    /// - 4..=8 neighbours: dies (overpopulation)
    pub fn next(self, live_neighbors: usize) -> Self {
        match live_neighbors {
            0 | 1 => CellState::Dead,
            2 => self,
            3 => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    /// Character used when rendering the board as text
    pub fn glyph(self) -> char {
        match self {
            CellState::Alive => ALIVE_GLYPH,
            CellState::Dead => DEAD_GLYPH,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
