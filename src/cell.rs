use core::fmt;
use grid_util::point::Point;

/// The visual and semantic state of a [Cell]. States are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered but not yet expanded.
    Frontier,
    /// Fully expanded.
    Visited,
    Path,
}

impl CellState {
    /// Single character used by the textual grid format.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Barrier => '#',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol {
            '.' => Some(CellState::Empty),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            '#' => Some(CellState::Barrier),
            'o' => Some(CellState::Frontier),
            'x' => Some(CellState::Visited),
            '*' => Some(CellState::Path),
            _ => None,
        }
    }
}

/// A single grid position. The position is fixed at creation, only the state changes.
///
/// Setters do not enforce grid-level invariants such as the uniqueness of the start; that is
/// left to the [InteractionController](crate::InteractionController).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            state: CellState::Empty,
        }
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    /// Position as a [Point] with `x = row` and `y = col`. Cells of a [Grid](crate::Grid) never
    /// exceed [MAX_GRID_SIZE](crate::MAX_GRID_SIZE), so the conversion is lossless there; larger
    /// coordinates saturate.
    pub fn point(&self) -> Point {
        let coord = |v: usize| i32::try_from(v).unwrap_or(i32::MAX);
        Point::new(coord(self.row), coord(self.col))
    }
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    pub fn make_start(&mut self) {
        self.state = CellState::Start;
    }
    pub fn make_end(&mut self) {
        self.state = CellState::End;
    }
    pub fn make_barrier(&mut self) {
        self.state = CellState::Barrier;
    }
    pub fn make_frontier(&mut self) {
        self.state = CellState::Frontier;
    }
    pub fn make_visited(&mut self) {
        self.state = CellState::Visited;
    }
    pub fn make_path(&mut self) {
        self.state = CellState::Path;
    }
    pub fn reset(&mut self) {
        self.state = CellState::Empty;
    }
    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_replace_state() {
        let mut cell = Cell::new(2, 3);
        assert_eq!(cell.state(), CellState::Empty);
        cell.make_barrier();
        assert!(cell.is_barrier());
        cell.make_start();
        assert_eq!(cell.state(), CellState::Start);
        cell.reset();
        assert_eq!(cell.state(), CellState::Empty);
        assert_eq!((cell.row(), cell.col()), (2, 3));
    }

    #[test]
    fn symbols_are_inverse() {
        for symbol in ".SE#ox*".chars() {
            let state = CellState::from_symbol(symbol).unwrap();
            assert_eq!(state.symbol(), symbol);
        }
        assert_eq!(CellState::from_symbol('?'), None);
    }

    #[test]
    fn point_coordinates_saturate() {
        assert_eq!(Cell::new(2, 3).point(), Point::new(2, 3));
        assert_eq!(Cell::new(usize::MAX, 1).point(), Point::new(i32::MAX, 1));
    }
}
