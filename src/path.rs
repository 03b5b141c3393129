use crate::grid::Grid;
use crate::FxIndexMap;

/// Walks `came_from` backwards from `goal` until a cell without a predecessor (the start) is
/// reached, marking every intermediate cell as path and invoking `step` once per marked cell so the
/// path is drawn from the goal towards the start. The goal and the start keep their states.
///
/// Returns the full path from the start to the goal, both included.
pub fn reconstruct_path<F>(
    grid: &mut Grid,
    came_from: &FxIndexMap<usize, usize>,
    goal: usize,
    mut step: F,
) -> Vec<usize>
where
    F: FnMut(&Grid),
{
    let mut path = vec![goal];
    let mut curr = goal;
    while let Some(&prev) = came_from.get(&curr) {
        if came_from.contains_key(&prev) {
            grid.cell_mut(prev).make_path();
            step(&*grid);
        }
        path.push(prev);
        curr = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    #[test]
    fn marks_intermediate_cells_only() {
        // S . . E laid out on the first row of a 4x4 grid
        let mut grid = Grid::new(4);
        grid.cell_mut(0).make_start();
        grid.cell_mut(3).make_end();
        let mut came_from = FxIndexMap::default();
        came_from.insert(1, 0);
        came_from.insert(2, 1);
        came_from.insert(3, 2);

        let mut frames = Vec::new();
        let path = reconstruct_path(&mut grid, &came_from, 3, |g| {
            frames.push(g.count_state(CellState::Path))
        });
        assert_eq!(path, vec![0, 1, 2, 3]);
        // Drawn backwards from the goal, one frame per marked cell
        assert_eq!(frames, vec![1, 2]);
        assert_eq!(grid.state(0), CellState::Start);
        assert_eq!(grid.state(1), CellState::Path);
        assert_eq!(grid.state(2), CellState::Path);
        assert_eq!(grid.state(3), CellState::End);
    }

    #[test]
    fn goal_without_predecessor() {
        let mut grid = Grid::new(2);
        let came_from = FxIndexMap::default();
        let mut steps = 0;
        let path = reconstruct_path(&mut grid, &came_from, 2, |_| steps += 1);
        assert_eq!(path, vec![2]);
        assert_eq!(steps, 0);
    }
}
