//! The search engines and the plumbing they share.
//!
//! All three engines speak the same contract: they take a board, a start and
//! a goal, explore successors in the fixed up/right/down/left order, and hand
//! their raw traversal to [`assemble`], which stamps out the uniform
//! [`SearchResult`]. The uninformed pair is literally one routine,
//! [`traverse`], parameterised by which end of the frontier it pops.

pub mod astar;
pub mod bfs;
pub mod dfs;

use std::collections::VecDeque;
use std::hash::Hash;

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, info};
use num_traits::Zero;

use crate::grid::SearchGrid;
use crate::metrics::{OptimalReference, SearchMetrics};
use crate::result::{AstarMetrics, RawCounters, SearchResult};
use crate::terrain::CostModel;
use crate::Algorithm;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent slot of the start node in the discovery map.
pub(crate) const ROOT: usize = usize::MAX;

/// Which end of the frontier deque [`traverse`] pops from.
///
/// `Fifo` is breadth-first, `Lifo` depth-first; everything else about the
/// traversal is shared.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Discipline {
    Fifo,
    Lifo,
}

/// Discovery record for one node: the slot of its parent and the accumulated
/// cost of the tree path that discovered it.
pub(crate) struct FrontierRecord<C> {
    parent: usize,
    cost: C,
}

/// What an engine measured and produced, before metric derivation.
pub(crate) struct Exploration<N, C> {
    /// `Some(cost)` exactly when the goal was popped.
    pub(crate) goal_cost: Option<C>,
    /// Start to goal inclusive; empty when the goal was never reached.
    pub(crate) path: Vec<N>,
    /// Every expanded node, in expansion order.
    pub(crate) expansions: Vec<N>,
    /// Successors accepted onto the frontier.
    pub(crate) generated: usize,
}

/// The shared uninformed traversal.
///
/// Nodes are marked visited when *accepted onto the frontier*, never on pop,
/// so a node enters the frontier at most once and the expansion trace carries
/// no duplicates. Under `Lifo` the successor batch is reversed before
/// pushing, which preserves the rule that the first direction in the fixed
/// order is the first one popped.
pub(crate) fn traverse<N, C, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
    discipline: Discipline,
) -> Exploration<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FS: FnMut(&N) -> bool,
{
    let mut seen: FxIndexMap<N, FrontierRecord<C>> = FxIndexMap::default();
    seen.insert(
        start.clone(),
        FrontierRecord {
            parent: ROOT,
            cost: C::zero(),
        },
    );
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);
    let mut expansions: Vec<N> = Vec::new();
    let mut generated = 0;

    while let Some(index) = match discipline {
        Discipline::Fifo => frontier.pop_front(),
        Discipline::Lifo => frontier.pop_back(),
    } {
        let (node, cost) = {
            let (node, record) = seen.get_index(index).unwrap();
            (node.clone(), record.cost)
        };
        expansions.push(node.clone());
        if success(&node) {
            let path = reverse_path(&seen, |record| record.parent, index);
            return Exploration {
                goal_cost: Some(cost),
                path,
                expansions,
                generated,
            };
        }
        let mut batch: Vec<(N, C)> = successors(&node).into_iter().collect();
        if discipline == Discipline::Lifo {
            batch.reverse();
        }
        for (successor, move_cost) in batch {
            if let Entry::Vacant(entry) = seen.entry(successor) {
                frontier.push_back(entry.index());
                entry.insert(FrontierRecord {
                    parent: index,
                    cost: cost + move_cost,
                });
                generated += 1;
            }
        }
    }
    Exploration {
        goal_cost: None,
        path: Vec::new(),
        expansions,
        generated,
    }
}

/// Walks the parent chain from `start` back to [`ROOT`] and reverses it.
pub(crate) fn reverse_path<N, V, F>(
    records: &FxIndexMap<N, V>,
    mut parent: F,
    start: usize,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        records.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Successors of `node` with the cost of stepping onto each, in the fixed
/// expansion order.
pub(crate) fn step_successors(
    grid: &SearchGrid,
    costs: &CostModel,
    node: Point,
) -> Vec<(Point, i32)> {
    grid.successors(node)
        .into_iter()
        .map(|successor| (successor, costs.cost_of(successor)))
        .collect()
}

/// Turns a raw traversal into the uniform [`SearchResult`].
pub(crate) fn assemble(
    algorithm: Algorithm,
    grid: &SearchGrid,
    reference: OptimalReference,
    weighted: bool,
    execution_time_ms: f64,
    exploration: Exploration<Point, i32>,
    astar: Option<AstarMetrics>,
) -> SearchResult {
    let success = exploration.goal_cost.is_some();
    let path_cost = exploration.goal_cost.unwrap_or(0);
    let counters = RawCounters {
        nodes_expanded: exploration.expansions.len(),
        total_successors: exploration.generated,
        execution_time_ms,
    };
    let metrics = SearchMetrics::derive(
        &counters,
        success,
        exploration.path.len(),
        path_cost,
        grid.count_free(),
        reference,
        weighted,
    );
    if success {
        debug!(
            "{algorithm}: goal reached, {} positions at cost {path_cost} after {} expansions",
            exploration.path.len(),
            counters.nodes_expanded
        );
    } else {
        info!(
            "{algorithm}: frontier exhausted after {} expansions without reaching the goal",
            counters.nodes_expanded
        );
    }
    SearchResult {
        algorithm,
        success,
        path: exploration.path,
        visited_nodes: exploration.expansions,
        path_cost,
        counters,
        metrics,
        astar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tiny synthetic graph: 0 -> [1, 2], 1 -> [3], others are leaves.
    fn branches(node: &u8) -> Vec<(u8, i32)> {
        match node {
            0 => vec![(1, 1), (2, 1)],
            1 => vec![(3, 1)],
            _ => vec![],
        }
    }

    #[test]
    fn fifo_expands_in_rings() {
        let out = traverse(&0u8, branches, |&n| n == 3, Discipline::Fifo);
        assert_eq!(out.expansions, vec![0, 1, 2, 3]);
        assert_eq!(out.path, vec![0, 1, 3]);
        assert_eq!(out.goal_cost, Some(2));
        assert_eq!(out.generated, 3);
    }

    #[test]
    fn lifo_dives_down_the_first_branch() {
        let out = traverse(&0u8, branches, |&n| n == 3, Discipline::Lifo);
        // The batch reversal makes successor 1 pop before successor 2.
        assert_eq!(out.expansions, vec![0, 1, 3]);
        assert_eq!(out.path, vec![0, 1, 3]);
        assert_eq!(out.goal_cost, Some(2));
        assert_eq!(out.generated, 3);
    }

    #[test]
    fn goal_at_start_expands_once() {
        let out = traverse(&7u8, branches, |&n| n == 7, Discipline::Fifo);
        assert_eq!(out.expansions, vec![7]);
        assert_eq!(out.path, vec![7]);
        assert_eq!(out.goal_cost, Some(0));
        assert_eq!(out.generated, 0);
    }

    #[test]
    fn exhaustion_reports_failure_with_full_trace() {
        let out = traverse(&0u8, branches, |&n| n == 9, Discipline::Fifo);
        assert_eq!(out.goal_cost, None);
        assert!(out.path.is_empty());
        assert_eq!(out.expansions, vec![0, 1, 2, 3]);
        assert_eq!(out.generated, 3);
    }

    #[test]
    fn rediscovered_nodes_are_not_regenerated() {
        // Diamond: both 1 and 2 offer 3; only the first acceptance counts.
        let diamond = |node: &u8| match node {
            0 => vec![(1u8, 1), (2, 1)],
            1 | 2 => vec![(3, 1)],
            _ => vec![],
        };
        let out = traverse(&0u8, diamond, |&n| n == 9, Discipline::Fifo);
        assert_eq!(out.expansions, vec![0, 1, 2, 3]);
        assert_eq!(out.generated, 3);
    }
}
