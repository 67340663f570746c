//! Best-first search shared by both solvers. It is a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! over [Terrain] cells with a configurable policy for repeated queue entries.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::terrain::Terrain;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

/// How a relaxed cell is put back on the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum QueuePolicy {
    /// Push a new entry on every improvement; outdated entries are skipped when popped.
    AllowDuplicates,
    /// Scan the queue first and only push if the cell is not queued yet.
    SkipQueued,
}

struct SmallestCostHolder<C> {
    estimated_cost: C,
    cost: C,
    sequence: usize,
    index: usize,
}

fn compare<C: PartialOrd>(a: &C, b: &C) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<C: PartialOrd> Eq for SmallestCostHolder<C> {}

impl<C: PartialOrd> PartialEq for SmallestCostHolder<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd> PartialOrd for SmallestCostHolder<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> Ord for SmallestCostHolder<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the entry with the largest cost
        // so far, then the entry that was queued first.
        compare(&other.estimated_cost, &self.estimated_cost)
            .then_with(|| compare(&self.cost, &other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

fn reverse_path<C>(parents: &FxIndexMap<Terrain, (usize, C)>, goal: usize) -> Vec<Terrain> {
    let mut path = Vec::new();
    let mut i = goal;
    while let Some((node, &(parent, _))) = parents.get_index(i) {
        // The start cell is the only one without a parent and is left out.
        if parent == NO_PARENT {
            break;
        }
        path.push(node.clone());
        i = parent;
    }
    path.reverse();
    path
}

/// Searches from `start` until a cell equal to `end` is popped and returns the path to it,
/// excluding `start`. Returns an empty path if the queue runs dry first.
pub(crate) fn best_first_search<C, FN, IN, FH>(
    start: &Terrain,
    end: &Terrain,
    policy: QueuePolicy,
    mut successors: FN,
    mut heuristic: FH,
) -> Vec<Terrain>
where
    C: Zero + PartialOrd + Copy,
    FN: FnMut(&Terrain) -> IN,
    IN: IntoIterator<Item = (Terrain, C)>,
    FH: FnMut(&Terrain) -> C,
{
    debug!(
        "Searching from {} to {} ({:?})",
        start.position(),
        end.position(),
        policy
    );
    let mut sequence = 0;
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        sequence,
        index: 0,
    });
    let mut parents: FxIndexMap<Terrain, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let (best_cost, successors) = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if node == end {
                let path = reverse_path(&parents, index);
                debug!("Found path of {} cells to {}", path.len(), end.position());
                return path;
            }
            // With duplicates allowed a cell may sit in the queue several times. Only the
            // entry carrying its best cost is expanded.
            if policy == QueuePolicy::AllowDuplicates && compare(&cost, &c) == Ordering::Greater {
                continue;
            }
            (c, successors(node))
        };
        for (successor, move_cost) in successors {
            let new_cost = best_cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if compare(&new_cost, &e.get().1) == Ordering::Less {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            if policy == QueuePolicy::SkipQueued && to_see.iter().any(|e| e.index == n) {
                continue;
            }
            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                sequence,
                index: n,
            });
        }
    }
    warn!(
        "{} could not be reached from {}",
        end.position(),
        start.position()
    );
    Vec::new()
}
