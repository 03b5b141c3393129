//! Terminal front end for grid_astar.
mod terminal;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use grid_astar::{Config, InteractionController, Viewport, DEFAULT_GRID_SIZE};
use tracing_subscriber::EnvFilter;

use crate::terminal::{TerminalInput, TerminalRenderer, TerminalSession};

/// Paint barriers, pick a start and an end, and watch A* search for the shortest path.
#[derive(Parser, Debug)]
#[command(name = "grid_astar", version, about)]
struct Cli {
    /// Number of rows and columns.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
    /// Pause after every drawn frame, in milliseconds.
    #[arg(long, default_value_t = 5)]
    step_delay_ms: u64,
    /// Write logs to this file; the terminal itself is used for drawing. Filter with RUST_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            grid_size: self.size,
            step_delay: Duration::from_millis(self.step_delay_ms),
            ..Config::default()
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("could not install log subscriber: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let config = cli.config();

    // Two terminal columns per cell keep the cells roughly square.
    let viewport = Viewport::new(config.grid_size, 2, 1);
    let (width, height) = viewport.extent();
    let (columns, rows) = crossterm::terminal::size().context("could not query terminal size")?;
    if width > u32::from(columns) || height + 1 > u32::from(rows) {
        bail!(
            "terminal is {columns}x{rows} but a grid of size {} needs {width}x{}; try a smaller --size",
            config.grid_size,
            height + 1
        );
    }

    let mut controller = InteractionController::new(
        config.grid_size,
        viewport,
        TerminalRenderer::new(config.step_delay),
        TerminalInput,
    )
    .context("invalid grid size")?;

    let _session = TerminalSession::start().context("could not set up the terminal")?;
    controller.run();
    Ok(())
}
