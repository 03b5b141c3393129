//! Editing and search dispatch on top of a [Grid].
//!
//! The controller is a two-state machine. In [Mode::Editing] it applies clicks and key presses
//! to the grid. A search trigger switches it to [Mode::Searching] and runs the whole A* search
//! before returning, so input that arrives in the meantime is drained by the abort poll and
//! dropped, except for a quit request which aborts the search. Editing resumes only once the
//! search has finished.
use crate::config::Config;
use crate::error::GridError;
use crate::grid::Grid;
use crate::search::{astar_search, SearchOutcome};
use crate::viewport::Viewport;
use log::{debug, info};
use std::time::Duration;

/// How long [InteractionController::run] waits for input on each tick.
pub const TICK: Duration = Duration::from_millis(16);

/// Input reported by a front end, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    /// Primary (usually left) button pressed, or dragged while held.
    PrimaryPress { x: u32, y: u32 },
    /// Secondary (usually right) button pressed.
    SecondaryPress { x: u32, y: u32 },
    StartSearch,
    ResetGrid,
}

/// Draws the full grid. Called once per controller tick and once per search step.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, viewport: &Viewport);
}

/// Source of [InputEvent]s.
pub trait InputSource {
    /// Drains pending events, waiting at most `timeout` for the first one to arrive.
    fn poll_events(&mut self, timeout: Duration) -> Vec<InputEvent>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Searching,
}

/// Whether the controller should keep running after handling an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct InteractionController<R, I> {
    grid: Grid,
    viewport: Viewport,
    renderer: R,
    input: I,
    mode: Mode,
    start: Option<usize>,
    end: Option<usize>,
    last_outcome: Option<SearchOutcome>,
}

impl<R: Renderer, I: InputSource> InteractionController<R, I> {
    pub fn new(
        grid_size: usize,
        viewport: Viewport,
        renderer: R,
        input: I,
    ) -> Result<Self, GridError> {
        Ok(InteractionController {
            grid: Grid::try_new(grid_size)?,
            viewport,
            renderer,
            input,
            mode: Mode::Editing,
            start: None,
            end: None,
            last_outcome: None,
        })
    }

    /// Square grid laid out over a square window of `config.window_size` pixels.
    pub fn with_config(config: &Config, renderer: R, input: I) -> Result<Self, GridError> {
        let viewport = Viewport::square(config.window_size, config.grid_size);
        InteractionController::new(config.grid_size, viewport, renderer, input)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn start(&self) -> Option<usize> {
        self.start
    }
    pub fn end(&self) -> Option<usize> {
        self.end
    }
    /// Outcome of the most recent search, cleared by a reset.
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Renders, drains input and dispatches it until a quit is requested.
    pub fn run(&mut self) {
        info!("Editing {}x{} grid", self.grid.size(), self.grid.size());
        loop {
            self.renderer.render(&self.grid, &self.viewport);
            for event in self.input.poll_events(TICK) {
                if self.handle_event(event) == Flow::Quit {
                    info!("Quit requested");
                    return;
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        if self.mode == Mode::Searching && event != InputEvent::Quit {
            debug!("Ignoring {:?} while searching", event);
            return Flow::Continue;
        }
        match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::PrimaryPress { x, y } => {
                if let Some(ix) = self.cell_under(x, y) {
                    self.primary_click(ix);
                }
            }
            InputEvent::SecondaryPress { x, y } => {
                if let Some(ix) = self.cell_under(x, y) {
                    self.secondary_click(ix);
                }
            }
            InputEvent::StartSearch => return self.start_search(),
            InputEvent::ResetGrid => self.reset(),
        }
        Flow::Continue
    }

    fn cell_under(&self, x: u32, y: u32) -> Option<usize> {
        let cell = self
            .viewport
            .cell_at(x, y)
            .and_then(|(row, col)| self.grid.index_of(row, col).ok());
        if cell.is_none() {
            debug!("Press at ({}, {}) is outside the grid", x, y);
        }
        cell
    }

    /// Places the start, then the end, then barriers. A cell never holds both the start and the
    /// end, and neither is overwritten by a barrier.
    pub fn primary_click(&mut self, ix: usize) {
        let is_start = self.start == Some(ix);
        let is_end = self.end == Some(ix);
        if self.start.is_none() && !is_end {
            self.start = Some(ix);
            self.grid.cell_mut(ix).make_start();
            debug!("Start set to {}", self.grid.cell(ix));
        } else if self.end.is_none() && !is_start {
            self.end = Some(ix);
            self.grid.cell_mut(ix).make_end();
            debug!("End set to {}", self.grid.cell(ix));
        } else if !is_start && !is_end {
            self.grid.cell_mut(ix).make_barrier();
        }
    }

    /// Clears a cell, forgetting it as start or end.
    pub fn secondary_click(&mut self, ix: usize) {
        self.grid.cell_mut(ix).reset();
        if self.start == Some(ix) {
            self.start = None;
        } else if self.end == Some(ix) {
            self.end = None;
        }
    }

    /// Replaces the grid with an empty one of the same size.
    pub fn reset(&mut self) {
        if self.mode == Mode::Searching {
            debug!("Ignoring reset while searching");
            return;
        }
        info!("Resetting grid");
        self.grid = Grid::new(self.grid.size());
        self.start = None;
        self.end = None;
        self.last_outcome = None;
    }

    /// Runs a search between the current start and end, blocking until it finishes. Returns
    /// [Flow::Quit] if a quit arrived during the search. Does nothing unless both endpoints are set.
    pub fn start_search(&mut self) -> Flow {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            debug!("Search needs both a start and an end");
            return Flow::Continue;
        };
        if self.mode == Mode::Searching {
            return Flow::Continue;
        }
        self.grid.rebuild_adjacency();
        self.mode = Mode::Searching;

        let InteractionController {
            grid,
            viewport,
            renderer,
            input,
            ..
        } = self;
        let mut quit = false;
        let report = astar_search(
            grid,
            start,
            end,
            |g| renderer.render(g, viewport),
            || {
                let events = input.poll_events(Duration::ZERO);
                quit |= events.contains(&InputEvent::Quit);
                if !quit && !events.is_empty() {
                    debug!("Dropping {} events received during search", events.len());
                }
                quit
            },
        );

        self.mode = Mode::Editing;
        self.last_outcome = Some(report.outcome);
        if quit {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }
}
