//! Runs the three engines on the same boards and prints a comparison table
//! plus a path overlay, which is roughly what a front end built on this
//! crate would render.
//!
//! Run with `cargo run --example compare`.

use grid_search_lab::{
    Algorithm, GridPreset, Heuristic, OptimalReference, SearchGrid, SearchResult, TerrainGrid,
    TerrainKind,
};
use grid_util::point::Point;

fn print_table(results: &[SearchResult]) {
    println!(
        "{:<16} {:>4} {:>4} {:>9} {:>10} {:>7} {:>7} {:>6} {:>7}",
        "algorithm", "len", "cost", "expanded", "generated", "branch", "penetr", "ratio", "compl%"
    );
    for r in results {
        println!(
            "{:<16} {:>4} {:>4} {:>9} {:>10} {:>7.3} {:>7.3} {:>6.3} {:>7.1}",
            r.algorithm.to_string(),
            r.path.len(),
            r.path_cost,
            r.counters.nodes_expanded,
            r.counters.total_successors,
            r.metrics.branching_factor,
            r.metrics.penetrance,
            r.metrics.path_optimality_ratio,
            r.metrics.completion_percentage,
        );
    }
    for r in results {
        if let Some(details) = &r.astar {
            println!(
                "{:<16} avg h = {:.3}, avg f = {:.3}",
                r.algorithm.to_string(),
                details.avg_heuristic,
                details.avg_f_value
            );
        }
    }
}

fn print_overlay(
    grid: &SearchGrid,
    terrain: Option<&TerrainGrid>,
    result: &SearchResult,
    start: Point,
    goal: Point,
) {
    println!("path overlay for {}:", result.algorithm);
    for y in 0..grid.grid.height as i32 {
        for x in 0..grid.grid.width as i32 {
            let p = Point::new(x, y);
            let c = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if !grid.is_free(p) {
                '#'
            } else if result.path.contains(&p) {
                '*'
            } else if terrain.map_or(false, |t| t.kind_at(p) == TerrainKind::Water) {
                '~'
            } else {
                '.'
            };
            print!("{c}");
        }
        println!();
    }
}

fn engines() -> [Algorithm; 5] {
    [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::AStar(Heuristic::Manhattan),
        Algorithm::AStar(Heuristic::Euclidean),
        Algorithm::AStar(Heuristic::Chebyshev),
    ]
}

fn main() {
    // A small maze with a single best corridor through the middle.
    let maze = SearchGrid::from_ascii(
        "
        ....#....
        .##.#.##.
        .#......#
        .#.###.#.
        .........
        ",
    )
    .unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(8, 4);
    let reference = OptimalReference {
        path_length: 13,
        path_cost: 12,
    };
    println!("uniform maze ({} free cells):", maze.count_free());
    let results: Vec<SearchResult> = engines()
        .into_iter()
        .map(|algorithm| algorithm.run(&maze, start, goal, reference, None))
        .collect();
    print_table(&results);
    print_overlay(&maze, None, &results[2], start, goal);

    // The same comparison with a water column that A* learns to avoid.
    let preset = GridPreset {
        rows: 4,
        cols: 4,
        start: Point::new(0, 0),
        goal: Point::new(3, 3),
        obstacles: vec![],
        terrain_defs: vec![
            (Point::new(1, 0), TerrainKind::Water),
            (Point::new(1, 1), TerrainKind::Water),
            (Point::new(1, 2), TerrainKind::Water),
        ],
        optimal: OptimalReference {
            path_length: 7,
            path_cost: 6,
        },
    };
    let (board, terrain) = preset.build().unwrap();
    let terrain = terrain.unwrap();
    println!("\nweighted board (water column at x = 1):");
    let results: Vec<SearchResult> = engines()
        .into_iter()
        .map(|algorithm| {
            algorithm.run(
                &board,
                preset.start,
                preset.goal,
                preset.optimal,
                Some(&terrain),
            )
        })
        .collect();
    print_table(&results);
    print_overlay(&board, Some(&terrain), &results[2], preset.start, preset.goal);
}
