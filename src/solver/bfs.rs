//! Breadth-first search.

use std::time::Instant;

use grid_util::point::Point;
use log::info;

use crate::grid::SearchGrid;
use crate::metrics::OptimalReference;
use crate::result::SearchResult;
use crate::solver::{assemble, step_successors, traverse, Discipline};
use crate::terrain::{CostModel, TerrainGrid};
use crate::Algorithm;

/// Runs breadth-first search from `start` to `goal`.
///
/// The FIFO frontier expands the board in rings of increasing hop distance,
/// so on uniform boards the first path found has the fewest possible
/// positions. On weighted boards the accumulated cost is reported as-is; a
/// hop-optimal path may well be cost-suboptimal there.
///
/// `start` and `goal` must be free cells of `grid`; builders such as
/// [`GridPreset::build`](crate::GridPreset::build) guarantee this.
pub fn bfs(
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
        "BFS: {}x{} board, {start} -> {goal}",
        grid.grid.width, grid.grid.height
    );
    let timer = Instant::now();
    let exploration = traverse(
        &start,
        |node| step_successors(grid, &costs, *node),
        |node| *node == goal,
        Discipline::Fifo,
    );
    let execution_time_ms = timer.elapsed().as_secs_f64() * 1000.0;
    assemble(
        Algorithm::Bfs,
        grid,
        reference,
        costs.is_weighted(),
        execution_time_ms,
        exploration,
        None,
    )
}

#[cfg(test)]
mod tests {
    use grid_util::grid::Grid;

    use super::*;

    fn corner_reference() -> OptimalReference {
        OptimalReference {
            path_length: 5,
            path_cost: 4,
        }
    }

    #[test]
    fn empty_board_trace_is_ring_ordered() {
        let grid = SearchGrid::new(3, 3, false);
        let result = bfs(
            &grid,
            Point::new(0, 0),
            Point::new(2, 2),
            corner_reference(),
            None,
        );
        assert!(result.success);
        assert_eq!(
            result.visited_nodes,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 1),
                Point::new(0, 2),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
        assert_eq!(result.counters.nodes_expanded, 9);
        assert_eq!(result.counters.total_successors, 8);
        assert_eq!(
            result.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_eq!(result.path_cost, 4);
        assert_eq!(result.metrics.path_optimality_ratio, 1.0);
        assert_eq!(result.metrics.completion_percentage, 100.0);
        assert!(result.astar.is_none());
    }

    #[test]
    fn goal_equal_to_start_is_trivial_success() {
        let grid = SearchGrid::new(3, 3, false);
        let start = Point::new(1, 1);
        let reference = OptimalReference {
            path_length: 1,
            path_cost: 0,
        };
        let result = bfs(&grid, start, start, reference, None);
        assert!(result.success);
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.path_cost, 0);
        assert_eq!(result.counters.nodes_expanded, 1);
        assert_eq!(result.counters.total_successors, 0);
    }

    #[test]
    fn walled_goal_fails_with_full_trace() {
        let grid = SearchGrid::from_ascii(
            "
            ...
            ###
            ...
            ",
        )
        .unwrap();
        let result = bfs(
            &grid,
            Point::new(0, 0),
            Point::new(2, 2),
            corner_reference(),
            None,
        );
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.path_cost, 0);
        // The whole top row is swept before giving up.
        assert_eq!(result.counters.nodes_expanded, 3);
        assert_eq!(result.metrics.path_optimality_ratio, 0.0);
        assert_eq!(result.metrics.penetrance, 0.0);
    }

    #[test]
    fn weighted_steps_accumulate_into_path_cost() {
        let grid = SearchGrid::new(3, 1, false);
        let terrain = TerrainGrid::from_defs(
            &grid,
            &[(Point::new(1, 0), crate::terrain::TerrainKind::Water)],
        )
        .unwrap();
        let reference = OptimalReference {
            path_length: 3,
            path_cost: 6,
        };
        let result = bfs(
            &grid,
            Point::new(0, 0),
            Point::new(2, 0),
            reference,
            Some(&terrain),
        );
        assert!(result.success);
        // Entry costs: water (1,0) then road (2,0).
        assert_eq!(result.path_cost, 6);
        assert_eq!(result.metrics.path_optimality_ratio, 1.0);
    }
}
