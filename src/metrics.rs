//! Derived search metrics.
//!
//! Everything here is a pure function of a finished traversal's raw counters
//! plus two precomputed references about the board: the free-cell count and
//! the known optimum for the start/goal pair. Any division whose denominator
//! is degenerate yields `0.0` instead of a NaN.

use crate::result::RawCounters;

/// The known best answer for a start/goal pair, used to score observed paths.
///
/// For uniform boards only `path_length` matters; weighted boards are judged
/// by `path_cost`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OptimalReference {
    /// Positions on the optimal path, endpoints included.
    pub path_length: usize,
    /// Sum of entry costs along the optimal path, start excluded.
    pub path_cost: i32,
}

/// Comparable quality figures derived from one search run.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SearchMetrics {
    /// Successors generated per expansion.
    pub branching_factor: f64,
    /// Path length over expansions; zero on failure.
    pub penetrance: f64,
    /// Optimal over observed, so 1.0 is optimal and smaller is worse; zero on
    /// failure.
    pub path_optimality_ratio: f64,
    /// Share of the board's free cells expanded, as a percentage.
    pub completion_percentage: f64,
    /// Expansion throughput, from the measured wall time.
    pub nodes_per_second: f64,
}

impl SearchMetrics {
    /// Derives the full metric block for one run.
    ///
    /// `weighted` selects which side of [`OptimalReference`] the optimality
    /// ratio compares against: entry costs on weighted boards, positions
    /// otherwise.
    pub fn derive(
        counters: &RawCounters,
        success: bool,
        path_length: usize,
        path_cost: i32,
        total_free: usize,
        reference: OptimalReference,
        weighted: bool,
    ) -> SearchMetrics {
        let expanded = counters.nodes_expanded as f64;
        let branching_factor = if counters.nodes_expanded == 0 {
            0.0
        } else {
            counters.total_successors as f64 / expanded
        };
        let penetrance = if success && counters.nodes_expanded > 0 {
            path_length as f64 / expanded
        } else {
            0.0
        };
        let path_optimality_ratio = if !success {
            0.0
        } else if weighted {
            if path_cost > 0 {
                reference.path_cost as f64 / path_cost as f64
            } else {
                0.0
            }
        } else if path_length > 0 {
            reference.path_length as f64 / path_length as f64
        } else {
            0.0
        };
        let completion_percentage = if total_free == 0 {
            0.0
        } else {
            expanded / total_free as f64 * 100.0
        };
        let nodes_per_second = if counters.execution_time_ms > 0.0 {
            expanded / (counters.execution_time_ms / 1000.0)
        } else {
            0.0
        };
        SearchMetrics {
            branching_factor,
            penetrance,
            path_optimality_ratio,
            completion_percentage,
            nodes_per_second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(nodes_expanded: usize, total_successors: usize, ms: f64) -> RawCounters {
        RawCounters {
            nodes_expanded,
            total_successors,
            execution_time_ms: ms,
        }
    }

    #[test]
    fn successful_uniform_run() {
        let reference = OptimalReference {
            path_length: 5,
            path_cost: 4,
        };
        let m = SearchMetrics::derive(&counters(8, 12, 2.0), true, 5, 4, 16, reference, false);
        assert_eq!(m.branching_factor, 1.5);
        assert_eq!(m.penetrance, 0.625);
        assert_eq!(m.path_optimality_ratio, 1.0);
        assert_eq!(m.completion_percentage, 50.0);
        assert_eq!(m.nodes_per_second, 4000.0);
    }

    #[test]
    fn weighted_ratio_uses_costs_not_positions() {
        let reference = OptimalReference {
            path_length: 7,
            path_cost: 6,
        };
        // A detour with the same number of positions but double the cost.
        let m = SearchMetrics::derive(&counters(10, 14, 1.0), true, 7, 12, 16, reference, true);
        assert_eq!(m.path_optimality_ratio, 0.5);
        let uniform =
            SearchMetrics::derive(&counters(10, 14, 1.0), true, 7, 12, 16, reference, false);
        assert_eq!(uniform.path_optimality_ratio, 1.0);
    }

    #[test]
    fn failure_zeroes_path_dependent_metrics_only() {
        let reference = OptimalReference {
            path_length: 0,
            path_cost: 0,
        };
        let m = SearchMetrics::derive(&counters(22, 21, 4.0), false, 0, 0, 23, reference, false);
        assert_eq!(m.penetrance, 0.0);
        assert_eq!(m.path_optimality_ratio, 0.0);
        assert!(m.branching_factor > 0.0);
        assert!((m.completion_percentage - 22.0 / 23.0 * 100.0).abs() < 1e-12);
        assert_eq!(m.nodes_per_second, 5500.0);
    }

    #[test]
    fn degenerate_denominators_yield_zero() {
        let reference = OptimalReference {
            path_length: 1,
            path_cost: 0,
        };
        let m = SearchMetrics::derive(&counters(0, 0, 0.0), false, 0, 0, 0, reference, false);
        assert_eq!(m.branching_factor, 0.0);
        assert_eq!(m.penetrance, 0.0);
        assert_eq!(m.path_optimality_ratio, 0.0);
        assert_eq!(m.completion_percentage, 0.0);
        assert_eq!(m.nodes_per_second, 0.0);
    }
}
