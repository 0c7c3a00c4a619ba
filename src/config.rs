/// Default grid dimensions (small 5x5 board that dies out after four generations)
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;

/// Live cells of the default board as (row, col)
pub const DEFAULT_PATTERN: [(usize, usize); 5] = [(1, 1), (1, 3), (2, 2), (3, 2), (3, 3)];

// ============================================
// Driver Parameters
// ============================================

/// Generations advanced when none are given on the command line
pub const DEFAULT_GENERATIONS: u64 = 10;

/// Log a population/community summary every N generations
pub const REPORT_INTERVAL: u64 = 1;

/// Pattern argument that asks for a randomly seeded grid instead of a file
pub const RANDOM_PATTERN: &str = "random";

/// Dimensions and live-cell fraction of a randomly seeded grid
pub const RANDOM_ROWS: usize = 32;
pub const RANDOM_COLS: usize = 32;
pub const RANDOM_DENSITY: f64 = 0.3;

/// Environment variable consulted for the log filter
pub const LOG_ENV: &str = "RUST_LOG";

/// Log filter used when LOG_ENV is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================
// Text Rendering
// ============================================

pub const ALIVE_GLYPH: char = 'O';
pub const DEAD_GLYPH: char = '.';
