use grid_util::point::Point;
use thiserror::Error;

/// Configuration errors: caller/integration bugs that fail fast and loudly.
///
/// A search that exhausts its frontier without reaching the goal is *not* an
/// error: it is a normal [`SearchResult`](crate::SearchResult) with
/// `success == false` and fully populated counters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchConfigError {
    #[error("unknown heuristic name `{0}` (expected manhattan, euclidean or chebyshev)")]
    UnknownHeuristic(String),

    #[error("unknown algorithm name `{0}` (expected bfs, dfs or astar)")]
    UnknownAlgorithm(String),

    #[error("algorithm `astar` requires a heuristic name")]
    MissingHeuristic,

    #[error("grid dimensions must be at least 1x1 (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("{what} {at} lies outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        at: Point,
        width: usize,
        height: usize,
    },

    #[error("{what} {at} is an obstacle cell")]
    BlockedEndpoint { what: &'static str, at: Point },

    #[error("terrain definition at {at} collides with an obstacle")]
    TerrainOnObstacle { at: Point },

    #[error("malformed fixture map: {0}")]
    MalformedFixture(String),
}
