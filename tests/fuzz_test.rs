/// Fuzzes the search by checking for many random grids that a path is found exactly when the end
/// is on the same connected component as the start, and that the path found is a shortest one.
use grid_astar::{astar_search, CellState, Grid};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(n: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(n);
    for ix in 0..grid.len() {
        if rng.gen_bool(0.4) {
            grid.cell_mut(ix).make_barrier();
        }
    }
    grid
}

/// Plain breadth-first distances over the adjacency snapshot.
fn bfs_distance(grid: &Grid, start: usize, end: usize) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::from([start]);
    dist[start] = 0;
    while let Some(curr) = queue.pop_front() {
        if curr == end {
            return Some(dist[curr]);
        }
        for &nb in grid.neighbours_of(curr) {
            if dist[nb] == usize::MAX {
                dist[nb] = dist[curr] + 1;
                queue.push_back(nb);
            }
        }
    }
    None
}

fn visualize_grid(grid: &Grid) {
    print!("{grid}");
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = 0;
    let end = N * N - 1;
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.cell_mut(start).make_start();
        grid.cell_mut(end).make_end();
        grid.rebuild_adjacency();
        let reachable = grid.reachable(start, end);
        let shortest = bfs_distance(&grid, start, end);
        let layout = grid.clone();
        let report = astar_search(&mut grid, start, end, |_| {}, || false);
        // Show the grid if the outcome disagrees with the components
        if report.outcome.is_found() != reachable {
            visualize_grid(&layout);
        }
        assert_eq!(report.outcome.is_found(), reachable);
        assert_eq!(shortest.is_some(), reachable);
        if let Some(path) = report.outcome.path() {
            assert_eq!(Some(path.len() - 1), shortest);
            assert_eq!(grid.state(start), CellState::Start);
            assert_eq!(grid.state(end), CellState::End);
        }
    }
}

/// Two runs over identical layouts expand cells in the same order and draw the same path.
#[test]
fn fuzz_determinism() {
    const N: usize = 12;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        let start = rng.gen_range(0..grid.len());
        let mut end = rng.gen_range(0..grid.len());
        if end == start {
            end = (start + 1) % grid.len();
        }
        grid.cell_mut(start).make_start();
        grid.cell_mut(end).make_end();
        grid.rebuild_adjacency();

        let mut first = grid.clone();
        let mut second = grid.clone();
        let a = astar_search(&mut first, start, end, |_| {}, || false);
        let b = astar_search(&mut second, start, end, |_| {}, || false);
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.expanded, b.expanded);
        assert!(a.came_from.iter().eq(b.came_from.iter()));
        assert_eq!(first, second);
    }
}

/// Barriers never show up in any neighbour list after a rebuild.
#[test]
fn fuzz_adjacency_exclusion() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let mut grid = random_grid(15, &mut rng);
        grid.rebuild_adjacency();
        for ix in 0..grid.len() {
            for &nb in grid.neighbours_of(ix) {
                assert_ne!(grid.state(nb), CellState::Barrier);
            }
        }
    }
}
