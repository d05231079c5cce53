//! A* search over a binary heap with lazy deletion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::time::Instant;

use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use log::info;
use num_traits::Zero;

use crate::grid::SearchGrid;
use crate::heuristic::Heuristic;
use crate::metrics::OptimalReference;
use crate::result::{AstarMetrics, SearchResult};
use crate::solver::{assemble, reverse_path, step_successors, Exploration, FxIndexMap, ROOT};
use crate::terrain::{CostModel, TerrainGrid};
use crate::Algorithm;

/// Open-list entry: a priority and the slot of its node in the discovery map.
///
/// The ordering is reversed so the max-heap pops the smallest `f` first, and
/// ties fall back on push order, earliest first. That makes the pop sequence
/// fully deterministic however many entries share a priority.
struct OpenEntry {
    f: f64,
    seq: usize,
    index: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.f.total_cmp(&self.f) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ordering => ordering,
        }
    }
}

/// Discovery record for one node. `closed` flips when the node is expanded;
/// heap entries that resurface afterwards are stale and get dropped.
struct NodeRecord<C> {
    parent: usize,
    g: C,
    closed: bool,
}

/// An [`Exploration`] plus the per-expansion sums only this engine tracks.
pub(crate) struct AstarTrace<N, C> {
    pub(crate) outcome: Exploration<N, C>,
    pub(crate) heuristic_sum: f64,
    pub(crate) f_sum: f64,
}

/// The A* core: best-first over `f = g + h` with insertion-order tie-breaks.
///
/// Improving a node's `g` pushes a fresh heap entry instead of re-sifting the
/// old one; the superseded entry is recognised later by the `closed` flag and
/// skipped. Expanded nodes contribute their `h` and `f` to the running sums
/// exactly once, at expansion.
pub(crate) fn astar_trace<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> AstarTrace<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy + Into<f64>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> f64,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: FxIndexMap<N, NodeRecord<C>> = FxIndexMap::default();
    nodes.insert(
        start.clone(),
        NodeRecord {
            parent: ROOT,
            g: C::zero(),
            closed: false,
        },
    );
    let mut open = BinaryHeap::new();
    let mut seq = 0;
    open.push(OpenEntry {
        f: heuristic(start),
        seq,
        index: 0,
    });
    let mut expansions: Vec<N> = Vec::new();
    let mut generated = 0;
    let mut heuristic_sum = 0.0;
    let mut f_sum = 0.0;

    while let Some(OpenEntry { index, .. }) = open.pop() {
        let (node, g) = {
            let (node, record) = nodes.get_index_mut(index).unwrap();
            if record.closed {
                continue;
            }
            record.closed = true;
            (node.clone(), record.g)
        };
        expansions.push(node.clone());
        let h = heuristic(&node);
        heuristic_sum += h;
        f_sum += g.into() + h;
        if success(&node) {
            let path = reverse_path(&nodes, |record: &NodeRecord<C>| record.parent, index);
            return AstarTrace {
                outcome: Exploration {
                    goal_cost: Some(g),
                    path,
                    expansions,
                    generated,
                },
                heuristic_sum,
                f_sum,
            };
        }
        for (successor, move_cost) in successors(&node) {
            let tentative = g + move_cost;
            let (slot, h_successor) = match nodes.entry(successor) {
                Vacant(entry) => {
                    let h_successor = heuristic(entry.key());
                    let slot = entry.index();
                    entry.insert(NodeRecord {
                        parent: index,
                        g: tentative,
                        closed: false,
                    });
                    (slot, h_successor)
                }
                Occupied(mut entry) => {
                    if entry.get().closed || entry.get().g <= tentative {
                        continue;
                    }
                    let h_successor = heuristic(entry.key());
                    let slot = entry.index();
                    entry.insert(NodeRecord {
                        parent: index,
                        g: tentative,
                        closed: false,
                    });
                    (slot, h_successor)
                }
            };
            seq += 1;
            open.push(OpenEntry {
                f: tentative.into() + h_successor,
                seq,
                index: slot,
            });
            generated += 1;
        }
    }
    AstarTrace {
        outcome: Exploration {
            goal_cost: None,
            path: Vec::new(),
            expansions,
            generated,
        },
        heuristic_sum,
        f_sum,
    }
}

/// Runs A* from `start` to `goal` under the chosen heuristic.
///
/// With an admissible heuristic the first time the goal is popped its
/// accumulated cost is optimal, on weighted boards included. The result
/// additionally carries [`AstarMetrics`]: the mean `h` and mean `f` over the
/// expansion trace, which show directly how focused each heuristic keeps the
/// search.
///
/// `start` and `goal` must be free cells of `grid`.
pub fn astar(
    grid: &SearchGrid,
    start: Point,
    goal: Point,
    heuristic: Heuristic,
    reference: OptimalReference,
    terrain: Option<&TerrainGrid>,
) -> SearchResult {
    let costs = CostModel::from(terrain);
    debug_assert!(grid.is_free(start), "start {start} must be a free cell");
    debug_assert!(grid.is_free(goal), "goal {goal} must be a free cell");
    info!(
        "A* ({heuristic}): {}x{} board, {start} -> {goal}",
        grid.grid.width, grid.grid.height
    );
    let timer = Instant::now();
    let trace = astar_trace(
        &start,
        |node| step_successors(grid, &costs, *node),
        |node| heuristic.evaluate(*node, goal),
        |node| *node == goal,
    );
    let execution_time_ms = timer.elapsed().as_secs_f64() * 1000.0;
    let astar_metrics = AstarMetrics::from_sums(
        trace.heuristic_sum,
        trace.f_sum,
        trace.outcome.expansions.len(),
        heuristic,
    );
    assemble(
        Algorithm::AStar(heuristic),
        grid,
        reference,
        costs.is_weighted(),
        execution_time_ms,
        trace.outcome,
        Some(astar_metrics),
    )
}
