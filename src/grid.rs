use crate::cell::{Cell, CellState};
use crate::error::GridError;
use core::fmt;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Largest side length accepted by [Grid::try_new]. Positions stay representable as `i32`
/// points and `u32` screen coordinates up to this size.
pub const MAX_GRID_SIZE: usize = u16::MAX as usize;

/// Adjacency list of a single cell; at most four entries on a 4-grid.
pub type Neighbours = SmallVec<[usize; 4]>;

/// [Grid] owns an `N × N` row-major matrix of [Cell]s addressed by the index `row * N + col`.
///
/// Besides the cells it holds a snapshot of the 4-directional adjacency and of the connected
/// components, both taken by [rebuild_adjacency](Self::rebuild_adjacency). The snapshot is not
/// kept up to date while cells are edited and only describes the barrier layout at the time it
/// was taken.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    neighbours: Vec<Neighbours>,
    components: UnionFind<usize>,
}

impl Grid {
    /// Creates an `n × n` grid of empty cells.
    ///
    /// # Panics
    /// Panics if `n` is zero or above [MAX_GRID_SIZE], use [try_new](Self::try_new) to handle
    /// that case.
    pub fn new(n: usize) -> Grid {
        match Grid::try_new(n) {
            Ok(grid) => grid,
            Err(e) => panic!("{e}"),
        }
    }
    pub fn try_new(n: usize) -> Result<Grid, GridError> {
        if n == 0 || n > MAX_GRID_SIZE {
            return Err(GridError::InvalidSize(n));
        }
        let cells = iproduct!(0..n, 0..n)
            .map(|(row, col)| Cell::new(row, col))
            .collect::<Vec<Cell>>();
        Ok(Grid {
            size: n,
            cells,
            neighbours: vec![Neighbours::new(); n * n],
            components: UnionFind::new(n * n),
        })
    }
    /// Side length `N`.
    pub fn size(&self) -> usize {
        self.size
    }
    /// Total number of cells, `N * N`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.in_bounds(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }
    pub fn position_of(&self, ix: usize) -> (usize, usize) {
        (ix / self.size, ix % self.size)
    }
    pub fn cell(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub fn cell_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells[ix]
    }
    pub fn state(&self, ix: usize) -> CellState {
        self.cells[ix].state()
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    /// Index of the first cell in row-major order that has the given state.
    pub fn find_state(&self, state: CellState) -> Option<usize> {
        self.cells.iter().position(|c| c.state() == state)
    }
    /// Number of cells currently in the given state.
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Neighbours of `ix` as recorded by the last [rebuild_adjacency](Self::rebuild_adjacency).
    /// Before the first rebuild every list is empty.
    pub fn neighbours_of(&self, ix: usize) -> &[usize] {
        &self.neighbours[ix]
    }

    /// Computes the current non-barrier neighbours of `ix` in up, down, left, right order.
    fn live_neighbours(&self, ix: usize) -> Neighbours {
        let (row, col) = self.position_of(ix);
        let n = self.size;
        let mut result = Neighbours::new();
        let mut consider = |nb: usize| {
            if !self.cells[nb].is_barrier() {
                result.push(nb);
            }
        };
        if row > 0 {
            consider(ix - n);
        }
        if row + 1 < n {
            consider(ix + n);
        }
        if col > 0 {
            consider(ix - 1);
        }
        if col + 1 < n {
            consider(ix + 1);
        }
        result
    }

    /// Recomputes the neighbour list of every cell from the current barriers and regenerates the
    /// connected components over the same snapshot. Must be called before each search.
    pub fn rebuild_adjacency(&mut self) {
        debug!("Rebuilding adjacency for {}x{} grid", self.size, self.size);
        self.neighbours = (0..self.cells.len())
            .map(|ix| self.live_neighbours(ix))
            .collect();
        self.generate_components();
    }

    /// Generates a new [UnionFind] structure and links up adjacent open cells. Only the down and
    /// right neighbours need to be joined since adjacency is symmetric.
    fn generate_components(&mut self) {
        let n = self.size;
        self.components = UnionFind::new(n * n);
        for (row, col) in iproduct!(0..n, 0..n) {
            let ix = row * n + col;
            if self.cells[ix].is_barrier() {
                continue;
            }
            if row + 1 < n && !self.cells[ix + n].is_barrier() {
                self.components.union(ix, ix + n);
            }
            if col + 1 < n && !self.cells[ix + 1].is_barrier() {
                self.components.union(ix, ix + 1);
            }
        }
    }

    /// Checks if `a` and `b` were on the same component at the last snapshot.
    pub fn reachable(&self, a: usize, b: usize) -> bool {
        a < self.len() && b < self.len() && self.components.equiv(a, b)
    }
    pub fn unreachable(&self, a: usize, b: usize) -> bool {
        !self.reachable(a, b)
    }
}

impl PartialEq for Grid {
    /// Grids are equal when their cells are; the derived snapshot is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line = row
                .iter()
                .map(|c| c.state().symbol())
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses the format produced by [Display](fmt::Display). Blank lines and surrounding
    /// whitespace are ignored.
    fn from_str(s: &str) -> Result<Grid, GridError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let mut grid = Grid::try_new(rows.len())?;
        let n = grid.size;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != n {
                return Err(GridError::NotSquare {
                    row,
                    found,
                    expected: n,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let state = CellState::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, row, col })?;
                grid.cells[row * n + col].set_state(state);
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_row_major_and_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.len(), 16);
        for (ix, cell) in grid.cells().enumerate() {
            assert_eq!((cell.row(), cell.col()), grid.position_of(ix));
            assert_eq!(cell.state(), CellState::Empty);
        }
        assert_eq!(grid.index_of(2, 3), Ok(11));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Grid::try_new(0).unwrap_err(), GridError::InvalidSize(0));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let n = MAX_GRID_SIZE + 1;
        assert_eq!(Grid::try_new(n).unwrap_err(), GridError::InvalidSize(n));
    }

    #[test]
    fn out_of_bounds_index() {
        let grid = Grid::new(3);
        assert_eq!(
            grid.index_of(3, 0),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        );
    }

    /// Neighbours are listed up, down, left, right and clipped at the border.
    #[test]
    fn neighbour_order_and_bounds() {
        let mut grid = Grid::new(3);
        grid.rebuild_adjacency();
        assert_eq!(grid.neighbours_of(4), &[1, 7, 3, 5]);
        assert_eq!(grid.neighbours_of(0), &[3, 1]);
        assert_eq!(grid.neighbours_of(8), &[5, 7]);
    }

    #[test]
    fn barriers_are_excluded_from_every_list() {
        let mut grid: Grid = "
            .#.
            .#.
            ...
        "
        .parse()
        .unwrap();
        grid.rebuild_adjacency();
        let barriers = [1, 4];
        for ix in 0..grid.len() {
            for b in barriers {
                assert!(!grid.neighbours_of(ix).contains(&b));
            }
        }
    }

    /// Adjacency is a snapshot: later edits are not seen until the next rebuild.
    #[test]
    fn adjacency_is_not_live() {
        let mut grid = Grid::new(2);
        grid.rebuild_adjacency();
        grid.cell_mut(1).make_barrier();
        assert!(grid.neighbours_of(0).contains(&1));
        grid.rebuild_adjacency();
        assert!(!grid.neighbours_of(0).contains(&1));
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        // |.#.|
        let mut grid: Grid = ".#.\n.#.\n.#.".parse().unwrap();
        grid.rebuild_adjacency();
        assert!(grid.reachable(0, 6));
        assert!(grid.reachable(2, 8));
        assert!(grid.unreachable(0, 2));
        assert!(grid.unreachable(0, 1));
    }

    #[test]
    fn display_round_trips() {
        let text = "S.#\n.o*\nx.E\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.find_state(CellState::End), Some(8));
        assert_eq!(grid.count_state(CellState::Barrier), 1);
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(
            "..\n...".parse::<Grid>(),
            Err(GridError::NotSquare {
                row: 1,
                found: 3,
                expected: 2
            })
        );
        assert_eq!(
            "..\n.?".parse::<Grid>(),
            Err(GridError::UnknownSymbol {
                symbol: '?',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn equality_ignores_snapshot() {
        let mut a = Grid::new(3);
        let b = Grid::new(3);
        a.rebuild_adjacency();
        assert_eq!(a, b);
    }
}
