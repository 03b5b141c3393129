//! A* search over a [Grid] with per-expansion visualization callbacks.
use crate::cell::Cell;
use crate::frontier::FrontierQueue;
use crate::grid::{Grid, Neighbours};
use crate::path::reconstruct_path;
use crate::FxIndexMap;
use fxhash::FxHashSet;
use log::{info, warn};
use num_traits::{Bounded, Zero};

/// Distance type used for g- and f-scores. Every move costs one.
pub type Cost = i32;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells.
/// Admissible and consistent for unit-cost 4-directional movement.
pub fn heuristic(a: &Cell, b: &Cell) -> Cost {
    a.point().manhattan_distance(&b.point())
}

/// Per-cell scores that default to "infinity", the largest representable value.
struct ScoreTable<C> {
    values: Vec<C>,
}

impl<C: Bounded + Copy> ScoreTable<C> {
    fn new(len: usize) -> ScoreTable<C> {
        ScoreTable {
            values: vec![C::max_value(); len],
        }
    }
    fn get(&self, ix: usize) -> C {
        self.values[ix]
    }
    fn set(&mut self, ix: usize, value: C) {
        self.values[ix] = value;
    }
}

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The end was reached; `path` runs from start to end inclusive and has `cost` moves.
    Found { path: Vec<usize>, cost: Cost },
    /// The frontier ran empty before the end was reached.
    NoPath,
    /// The abort poll fired before the search completed.
    Aborted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
    pub fn path(&self) -> Option<&[usize]> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result of one search together with the trace needed to compare runs.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Cells in the order they were popped from the frontier, stale pops included.
    pub expanded: Vec<usize>,
    /// Final predecessor map, in the order predecessors were first recorded.
    pub came_from: FxIndexMap<usize, usize>,
}

/// State of a single A* run. Created fresh for every search and consumed by
/// [run](SearchEngine::run), so nothing survives between searches.
///
/// The grid's adjacency must have been rebuilt before the engine is created, the engine only
/// reads the cached neighbour lists.
pub struct SearchEngine<'a> {
    grid: &'a mut Grid,
    start: usize,
    end: usize,
    g_score: ScoreTable<Cost>,
    f_score: ScoreTable<Cost>,
    came_from: FxIndexMap<usize, usize>,
    open_set: FxHashSet<usize>,
    queue: FrontierQueue<Cost>,
    expanded: Vec<usize>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(grid: &'a mut Grid, start: usize, end: usize) -> SearchEngine<'a> {
        let len = grid.len();
        SearchEngine {
            grid,
            start,
            end,
            g_score: ScoreTable::new(len),
            f_score: ScoreTable::new(len),
            came_from: FxIndexMap::default(),
            open_set: FxHashSet::default(),
            queue: FrontierQueue::new(),
            expanded: Vec::new(),
        }
    }

    fn estimate(&self, ix: usize) -> Cost {
        heuristic(self.grid.cell(ix), self.grid.cell(self.end))
    }

    /// Runs the search to completion. `step` is invoked once per expansion and once per cell of
    /// the reconstructed path; `should_abort` is polled once before every expansion.
    pub fn run<S, A>(mut self, mut step: S, mut should_abort: A) -> SearchReport
    where
        S: FnMut(&Grid),
        A: FnMut() -> bool,
    {
        info!(
            "Searching from {} to {}",
            self.grid.cell(self.start),
            self.grid.cell(self.end)
        );
        let start = self.start;
        let start_estimate = self.estimate(start);
        self.g_score.set(start, Zero::zero());
        self.f_score.set(start, start_estimate);
        self.queue.push(start_estimate, start);
        self.open_set.insert(start);

        while !self.queue.is_empty() {
            if should_abort() {
                info!("Search aborted after {} expansions", self.expanded.len());
                return self.finish(SearchOutcome::Aborted);
            }
            let Some(curr) = self.queue.pop_min() else {
                break;
            };
            // A cell can be queued more than once; only the first pop leaves the open set and
            // later pops are processed again with the current scores.
            self.open_set.remove(&curr);
            self.expanded.push(curr);

            if curr == self.end {
                let path = reconstruct_path(self.grid, &self.came_from, curr, &mut step);
                self.grid.cell_mut(self.start).make_start();
                self.grid.cell_mut(self.end).make_end();
                let cost = self.g_score.get(curr);
                info!(
                    "Found path of cost {} after {} expansions",
                    cost,
                    self.expanded.len()
                );
                return self.finish(SearchOutcome::Found { path, cost });
            }

            let tentative = self.g_score.get(curr) + 1;
            let neighbours = Neighbours::from_slice(self.grid.neighbours_of(curr));
            for nb in neighbours {
                if tentative < self.g_score.get(nb) {
                    self.came_from.insert(nb, curr);
                    self.g_score.set(nb, tentative);
                    let f = tentative + self.estimate(nb);
                    self.f_score.set(nb, f);
                    if self.open_set.insert(nb) {
                        self.queue.push(f, nb);
                        if nb != self.end {
                            self.grid.cell_mut(nb).make_frontier();
                        }
                    }
                }
            }

            step(&*self.grid);

            if curr != self.start {
                self.grid.cell_mut(curr).make_visited();
            }
        }

        if self.grid.reachable(self.start, self.end) {
            warn!("Reachable end could not be pathed to, is the adjacency snapshot current?");
        } else {
            info!(
                "{} is not reachable from {}",
                self.grid.cell(self.end),
                self.grid.cell(self.start)
            );
        }
        self.finish(SearchOutcome::NoPath)
    }

    fn finish(self, outcome: SearchOutcome) -> SearchReport {
        SearchReport {
            outcome,
            expanded: self.expanded,
            came_from: self.came_from,
        }
    }
}

/// Convenience wrapper running a fresh [SearchEngine] on `grid`.
pub fn astar_search<S, A>(
    grid: &mut Grid,
    start: usize,
    end: usize,
    step: S,
    should_abort: A,
) -> SearchReport
where
    S: FnMut(&Grid),
    A: FnMut() -> bool,
{
    SearchEngine::new(grid, start, end).run(step, should_abort)
}
