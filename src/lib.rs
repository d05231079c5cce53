//! # grid_search_lab
//!
//! Runs [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on small 2D grids
//! and makes their behaviour comparable. Every engine explores the four
//! cardinal successors in the same fixed order (up, right, down, left) and
//! fills the same [SearchResult]: the found path, the complete expansion
//! trace, raw counters and a block of derived metrics. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so reachability questions need no search. Boards are uniform by default
//! and terrain-weighted when a [TerrainGrid] is supplied.

pub mod error;
pub mod grid;
pub mod heuristic;
pub mod metrics;
pub mod preset;
pub mod result;
pub mod solver;
pub mod terrain;

use core::fmt;

use grid_util::point::Point;

pub use crate::error::SearchConfigError;
pub use crate::grid::{SearchGrid, STEP_ORDER};
pub use crate::heuristic::Heuristic;
pub use crate::metrics::{OptimalReference, SearchMetrics};
pub use crate::preset::GridPreset;
pub use crate::result::{AstarMetrics, RawCounters, SearchResult};
pub use crate::solver::astar::astar;
pub use crate::solver::bfs::bfs;
pub use crate::solver::dfs::dfs;
pub use crate::terrain::{CostModel, TerrainGrid, TerrainKind, IMPASSABLE};

/// An engine selection, carrying the heuristic choice where one applies.
///
/// The informed engine cannot exist without a heuristic, so the type makes
/// the invalid combination unrepresentable; name-based callers go through
/// [`Algorithm::from_name`] and get the same guarantee checked at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar(Heuristic),
}

impl Algorithm {
    /// Runs the selected engine on one board. All engines share this
    /// signature, which is what makes side-by-side comparison mechanical.
    pub fn run(
        self,
        grid: &SearchGrid,
        start: Point,
        goal: Point,
        reference: OptimalReference,
        terrain: Option<&TerrainGrid>,
    ) -> SearchResult {
        match self {
            Algorithm::Bfs => bfs(grid, start, goal, reference, terrain),
            Algorithm::Dfs => dfs(grid, start, goal, reference, terrain),
            Algorithm::AStar(heuristic) => {
                astar(grid, start, goal, heuristic, reference, terrain)
            }
        }
    }

    /// Resolves lowercase engine and heuristic names, failing fast on
    /// anything unknown and on `astar` arriving without a heuristic.
    pub fn from_name(
        name: &str,
        heuristic: Option<&str>,
    ) -> Result<Algorithm, SearchConfigError> {
        match name {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "astar" => {
                let heuristic = heuristic.ok_or(SearchConfigError::MissingHeuristic)?;
                Ok(Algorithm::AStar(heuristic.parse()?))
            }
            other => Err(SearchConfigError::UnknownAlgorithm(other.to_owned())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::AStar(_) => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::AStar(heuristic) => write!(f, "A* ({heuristic})"),
        }
    }
}
