use std::path::PathBuf;

use crate::config::{
    DEFAULT_GENERATIONS, RANDOM_COLS, RANDOM_DENSITY, RANDOM_PATTERN, RANDOM_ROWS,
    REPORT_INTERVAL,
};
use crate::error::{LifeError, Result};
use crate::loader::load_grid;
use crate::simulation::{Grid, LifeEngine};

/// Command-line options: `[pattern-file] [generations]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Pattern to load; the default 5x5 board when absent, a random board
    /// when it is `random`
    pub pattern: Option<PathBuf>,
    pub generations: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: None,
            generations: DEFAULT_GENERATIONS,
        }
    }
}

impl Options {
    /// Parse positional arguments (program name already stripped).
    ///
    /// A lone numeric argument is taken as the generation count.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        match args.as_slice() {
            [] => {}
            [only] => match only.parse() {
                Ok(generations) => options.generations = generations,
                Err(_) => options.pattern = Some(PathBuf::from(only)),
            },
            [pattern, generations] => {
                options.pattern = Some(PathBuf::from(pattern));
                options.generations = generations.parse().map_err(|_| LifeError::InvalidToken {
                    token: generations.clone(),
                })?;
            }
            [_, _, extra, ..] => return Err(LifeError::UnexpectedArgument(extra.clone())),
        }

        Ok(options)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub alive: usize,
    pub communities: usize,
    pub extinct: bool,
}

/// Drives an engine for a fixed number of generations, reporting as it goes
pub struct App {
    engine: LifeEngine,
    report_interval: u64,
}

impl App {
    pub fn new(engine: LifeEngine) -> Self {
        Self {
            engine,
            report_interval: REPORT_INTERVAL,
        }
    }

    /// Build the engine described by the options
    pub fn from_options(options: &Options) -> Result<Self> {
        let engine = match &options.pattern {
            Some(path) if path.as_os_str() == RANDOM_PATTERN => LifeEngine::from_grid(
                Grid::random(RANDOM_ROWS, RANDOM_COLS, RANDOM_DENSITY)?,
            ),
            Some(path) => LifeEngine::from_grid(load_grid(path)?),
            None => LifeEngine::new(),
        };
        Ok(Self::new(engine))
    }

    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval.max(1);
        self
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Advance up to `generations` steps, stopping early once every cell is dead
    pub fn run(&mut self, generations: u64) -> RunSummary {
        let grid = self.engine.grid();
        log::info!(
            "Starting run: {}x{} grid, {} alive, {} communities",
            grid.rows(),
            grid.cols(),
            self.engine.total_alive_cells(),
            self.engine.num_communities()
        );

        for _ in 0..generations {
            if !self.engine.is_alive() {
                break;
            }
            self.engine.next_generation();

            let generation = self.engine.generation();
            if generation % self.report_interval == 0 {
                log::info!(
                    "Generation {}: {} alive, {} communities",
                    generation,
                    self.engine.total_alive_cells(),
                    self.engine.num_communities()
                );
            }
        }

        let summary = self.summary();
        if summary.extinct {
            log::info!("Population extinct by generation {}", summary.generations);
        }
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            generations: self.engine.generation(),
            alive: self.engine.total_alive_cells(),
            communities: self.engine.num_communities(),
            extinct: !self.engine.is_alive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = Options::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.generations, DEFAULT_GENERATIONS);
    }

    #[test]
    fn test_options_generations_only() {
        let options = Options::from_args(["25"]).unwrap();
        assert_eq!(options.pattern, None);
        assert_eq!(options.generations, 25);
    }

    #[test]
    fn test_options_pattern_and_generations() {
        let options = Options::from_args(["glider.txt", "7"]).unwrap();
        assert_eq!(options.pattern, Some(PathBuf::from("glider.txt")));
        assert_eq!(options.generations, 7);
    }

    #[test]
    fn test_options_bad_generations() {
        assert!(matches!(
            Options::from_args(["glider.txt", "many"]),
            Err(LifeError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_options_reject_extra_arguments() {
        let err = Options::from_args(["glider.txt", "7", "verbose"]).unwrap_err();
        assert!(matches!(err, LifeError::UnexpectedArgument(ref arg) if arg == "verbose"));
    }

    #[test]
    fn test_run_stops_at_extinction() {
        let mut app = App::new(LifeEngine::new());
        let summary = app.run(100);
        assert_eq!(
            summary,
            RunSummary {
                generations: 4,
                alive: 0,
                communities: 0,
                extinct: true,
            }
        );
    }

    #[test]
    fn test_run_still_life() {
        let grid = Grid::with_alive(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        let mut app = App::new(LifeEngine::from_grid(grid)).with_report_interval(3);
        let summary = app.run(6);
        assert_eq!(summary.generations, 6);
        assert_eq!(summary.alive, 4);
        assert_eq!(summary.communities, 1);
        assert!(!summary.extinct);
    }

    #[test]
    fn test_from_options_random() {
        let options = Options::from_args([RANDOM_PATTERN, "3"]).unwrap();
        let app = App::from_options(&options).unwrap();
        assert_eq!(app.engine().grid().rows(), RANDOM_ROWS);
        assert_eq!(app.engine().grid().cols(), RANDOM_COLS);
    }

    #[test]
    fn test_from_options_missing_file() {
        let options = Options {
            pattern: Some(PathBuf::from("/nonexistent/pattern.txt")),
            generations: 1,
        };
        assert!(matches!(App::from_options(&options), Err(LifeError::Io(_))));
    }
}
