use std::{io, path::PathBuf, time::Duration};

use mazecore::{
    algorithms::{random_seed, Generator, Path, Random, Solver, Strategy},
    grid::Grid,
    MazeError,
};
use rand::SeedableRng as _;
use thiserror::Error;

use crate::{renderer::TextRenderer, settings::Settings};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file {path:?}: {source}")]
    Settings {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("Could not find a directory for the settings file")]
    NoConfigDir,
}

/// Everything a single generate and solve run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub columns: i32,
    pub rows: i32,
    pub seed: Option<u64>,
    /// Pause after each drawn event, `None` draws only the result.
    pub delay: Option<Duration>,
    pub strategy: Strategy,
}

impl RunConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            columns: settings.get_columns(),
            rows: settings.get_rows(),
            seed: None,
            delay: settings
                .get_animate()
                .then(|| Duration::from_millis(settings.get_delay_ms())),
            strategy: settings.get_strategy(),
        }
    }
}

pub struct Outcome {
    pub seed: u64,
    pub grid: Grid,
    pub path: Path,
    /// Final maze with the path drawn in.
    pub frame: String,
}

/// Generates a maze, then solves it from the top left to the bottom right corner.
///
/// Animation frames go to `out` while the algorithms run. The finished maze is returned, not
/// written.
pub fn run<W: io::Write>(config: &RunConfig, out: W) -> Result<Outcome, AppError> {
    let seed = config.seed.unwrap_or_else(random_seed);
    log::info!("Seed: {}", seed);

    let mut grid = Grid::new(config.columns, config.rows)?;
    let mut rng = Random::seed_from_u64(seed);
    let mut renderer = TextRenderer::new(out, &grid, config.delay)?;

    let generator = Generator::new().with_strategy(config.strategy);
    generator.generate(&mut grid, &mut rng, &mut renderer)?;
    renderer.take_error()?;

    renderer.clear_marks();
    grid.reset_visited();

    let (entry, exit) = (generator.entry(&grid), generator.exit(&grid));
    let path = Solver::new()
        .with_strategy(config.strategy)
        .solve(&mut grid, entry, exit, &mut renderer)?;
    renderer.take_error()?;

    log::info!("Solved in {} steps", path.len() - 1);

    renderer.clear_marks();
    renderer.mark_path(&path);
    let frame = renderer.frame(&grid);

    Ok(Outcome {
        seed,
        grid,
        path,
        frame,
    })
}
