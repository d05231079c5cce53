//! Depth-first search.

use std::time::Instant;

use grid_util::point::Point;
use log::info;

use crate::grid::SearchGrid;
use crate::metrics::OptimalReference;
use crate::result::SearchResult;
use crate::solver::{assemble, step_successors, traverse, Discipline};
use crate::terrain::{CostModel, TerrainGrid};
use crate::Algorithm;

/// Runs depth-first search from `start` to `goal`.
///
/// The LIFO frontier commits to one direction until it dead-ends, then
/// backtracks, so the first branch tried is still "up" of the fixed
/// expansion order. Paths come with no optimality promise; the point of
/// running this engine is its traversal shape and counters, set against the
/// other two.
///
/// `start` and `goal` must be free cells of `grid`.
pub fn dfs(
    grid: &SearchGrid,
    start: Point,
    goal: Point,
    reference: OptimalReference,
    terrain: Option<&TerrainGrid>,
) -> SearchResult {
    let costs = CostModel::from(terrain);
    debug_assert!(grid.is_free(start), "start {start} must be a free cell");
    debug_assert!(grid.is_free(goal), "goal {goal} must be a free cell");
    info!(
        "DFS: {}x{} board, {start} -> {goal}",
        grid.grid.width, grid.grid.height
    );
    let timer = Instant::now();
    let exploration = traverse(
        &start,
        |node| step_successors(grid, &costs, *node),
        |node| *node == goal,
        Discipline::Lifo,
    );
    let execution_time_ms = timer.elapsed().as_secs_f64() * 1000.0;
    assemble(
        Algorithm::Dfs,
        grid,
        reference,
        costs.is_weighted(),
        execution_time_ms,
        exploration,
        None,
    )
}
