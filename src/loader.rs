use std::fs;
use std::path::Path;

use crate::error::{LifeError, Result};
use crate::simulation::{CellState, Grid};

/// Read a pattern file.
///
/// Format: row count, column count, then `rows * cols` cell values in
/// row-major order, all separated by whitespace. Cell values are
/// `true`/`false`, `1`/`0` or `alive`/`dead` in any case.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = parse_grid(&text)?;
    log::debug!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

/// Parse a pattern from text. Tokens after the last cell are ignored.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut tokens = text.split_whitespace();
    let rows = parse_dimension(tokens.next(), "row")?;
    let cols = parse_dimension(tokens.next(), "column")?;
    let expected = Grid::cell_count(rows, cols)?;
    let cells = tokens
        .take(expected)
        .map(parse_cell)
        .collect::<Result<Vec<_>>>()?;
    if cells.len() < expected {
        return Err(LifeError::CellCountMismatch {
            expected,
            actual: cells.len(),
        });
    }

    Grid::from_cells(rows, cols, cells)
}

fn parse_dimension(token: Option<&str>, what: &'static str) -> Result<usize> {
    let token = token.ok_or(LifeError::MissingDimension(what))?;
    token.parse().map_err(|_| LifeError::InvalidToken {
        token: token.to_string(),
    })
}

fn parse_cell(token: &str) -> Result<CellState> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "1" | "alive" => Ok(CellState::Alive),
        "false" | "0" | "dead" => Ok(CellState::Dead),
        _ => Err(LifeError::InvalidToken {
            token: token.to_string(),
        }),
    }
}
