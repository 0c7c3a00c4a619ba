mod cell;
mod engine;
mod grid;
mod union_find;

pub use cell::CellState;
pub use engine::LifeEngine;
pub use grid::{Grid, NEIGHBOR_OFFSETS};
pub use union_find::UnionFind;
