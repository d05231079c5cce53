//! The shared result contract every engine fills in the same way.

use grid_util::point::Point;

use crate::heuristic::Heuristic;
use crate::metrics::SearchMetrics;
use crate::Algorithm;

/// Counters measured directly while a search runs.
#[derive(Clone, PartialEq, Debug)]
pub struct RawCounters {
    /// Nodes popped from the frontier and processed, duplicates excluded.
    pub nodes_expanded: usize,
    /// Successors accepted onto the frontier across all expansions.
    pub total_successors: usize,
    /// Wall time of the traversal itself, in milliseconds.
    pub execution_time_ms: f64,
}

/// Extra figures only the informed engine can report.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AstarMetrics {
    /// Mean heuristic value over all expanded nodes.
    pub avg_heuristic: f64,
    /// Mean `f = g + h` over all expanded nodes.
    pub avg_f_value: f64,
    /// Which estimate produced those numbers.
    pub heuristic: Heuristic,
}

impl AstarMetrics {
    /// Averages the per-expansion sums, or zeroes when nothing was expanded.
    pub fn from_sums(
        heuristic_sum: f64,
        f_sum: f64,
        nodes_expanded: usize,
        heuristic: Heuristic,
    ) -> AstarMetrics {
        let (avg_heuristic, avg_f_value) = if nodes_expanded == 0 {
            (0.0, 0.0)
        } else {
            let n = nodes_expanded as f64;
            (heuristic_sum / n, f_sum / n)
        };
        AstarMetrics {
            avg_heuristic,
            avg_f_value,
            heuristic,
        }
    }
}

/// Outcome of one engine run on one board.
///
/// Failure to reach the goal is a fully populated result with `success`
/// false, an empty `path` and the complete traversal trace; the counters and
/// metrics describe the work the search actually did.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub success: bool,
    /// Start to goal inclusive; empty when the goal was not reached.
    pub path: Vec<Point>,
    /// Every expanded position, in expansion order.
    pub visited_nodes: Vec<Point>,
    /// Sum of entry costs along `path`, start excluded; zero on failure.
    pub path_cost: i32,
    pub counters: RawCounters,
    pub metrics: SearchMetrics,
    /// Present exactly when `algorithm` is the informed engine.
    pub astar: Option<AstarMetrics>,
}

impl SearchResult {
    /// Positions on the found path, zero on failure.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
}
