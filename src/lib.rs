//! # grid_astar
//!
//! An interactive grid pathfinder. Cells of a square grid are painted as start, end or barrier,
//! then an [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) heuristic looks for a
//! shortest 4-directional path, reporting every expansion to a [Renderer] so the progress can be
//! drawn cell by cell. Note that this assumes a uniform-cost grid.
//!
//! Ties in the frontier are broken by insertion order, so a given layout always produces the same
//! expansion order and the same path.
//!
//! ```
//! use grid_astar::{astar_search, CellState, Grid};
//!
//! let mut grid: Grid = "S..\n.#.\n..E".parse().unwrap();
//! let start = grid.find_state(CellState::Start).unwrap();
//! let end = grid.find_state(CellState::End).unwrap();
//! grid.rebuild_adjacency();
//! let report = astar_search(&mut grid, start, end, |_| {}, || false);
//! assert_eq!(report.outcome.path().unwrap().len(), 5);
//! ```
mod cell;
mod config;
mod controller;
mod error;
mod frontier;
mod grid;
pub mod palette;
mod path;
mod search;
mod viewport;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Insertion-ordered map with the fast non-cryptographic Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

pub use cell::{Cell, CellState};
pub use config::{Config, DEFAULT_GRID_SIZE, DEFAULT_WINDOW_SIZE};
pub use controller::{Flow, InputEvent, InputSource, InteractionController, Mode, Renderer, TICK};
pub use error::GridError;
pub use frontier::FrontierQueue;
pub use grid::{Grid, Neighbours, MAX_GRID_SIZE};
pub use path::reconstruct_path;
pub use search::{astar_search, heuristic, Cost, SearchEngine, SearchOutcome, SearchReport};
pub use viewport::Viewport;
