use grid_astar::{astar_search, Grid, SearchOutcome};
use grid_astar_scenarios::{get_benchmark, get_benchmark_names, Benchmark};
use grid_util::point::Point;

fn base_grid(bench: &Benchmark) -> Grid {
    let mut grid = Grid::new(bench.size);
    for ix in 0..grid.len() {
        let (row, col) = grid.position_of(ix);
        if bench.is_blocked(row, col) {
            grid.cell_mut(ix).make_barrier();
        }
    }
    grid
}

fn index(grid: &Grid, p: &Point) -> usize {
    grid.index_of(p.x as usize, p.y as usize).unwrap()
}

#[test]
fn verify_solution_distance_astar() {
    let names = get_benchmark_names();
    assert!(!names.is_empty());
    for name in names {
        let bench = get_benchmark(&name).unwrap();
        let base = base_grid(&bench);
        for scenario in &bench.scenarios {
            let mut grid = base.clone();
            let start = index(&grid, &scenario.start);
            let end = index(&grid, &scenario.goal);
            grid.cell_mut(start).make_start();
            grid.cell_mut(end).make_end();
            grid.rebuild_adjacency();
            println!(
                "{name}: Start: {}; End: {}; Distance: {}",
                scenario.start, scenario.goal, scenario.distance
            );
            let report = astar_search(&mut grid, start, end, |_| {}, || false);
            match report.outcome {
                SearchOutcome::Found { path, cost } => {
                    println!("My distance: {cost}");
                    assert_eq!(cost as f64, scenario.distance);
                    assert_eq!(path.len() as f64, scenario.distance + 1.0);
                }
                other => panic!("{name}: expected a path, got {other:?}"),
            }
        }
    }
}
