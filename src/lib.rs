//! Conway's Game of Life on a toroidal grid, with connected-community
//! counting over live cells.
//!
//! The [`simulation`] module is the engine proper. [`loader`] reads the plain
//! text pattern format and [`app`] drives a run from the command line.

pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod simulation;

pub use error::{LifeError, Result};
pub use simulation::{CellState, Grid, LifeEngine, UnionFind};
