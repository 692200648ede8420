use crate::collections::{FxHashSet, FxIndexMap};
use crate::errors::GraphError;
use crate::heap::SetHeap;
use super::graph::{Graph, NodeId};
use super::shortest_path;

use std::{fmt::Debug, hash::Hash};
use num_traits::{Bounded, CheckedAdd, Zero};


/// How an unreached but registered destination is reported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reachability {
    /// Fail with [`GraphError::Unreachable`]
    #[default]
    Strict,
    /// Succeed with the infinity sentinel as cost and an empty path
    Lenient,
}

/// Result of a shortest path query
/// path runs from the destination back towards the source and excludes the source,
/// so its length is the number of hops
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<N, C> {
    pub cost: C,
    pub path: Vec<N>,
}

impl<N, C> Route<N, C> {
    /// Hops from the source to the destination
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}


/// Per query search state, node identity stays in the graph
/// cost: best known cost from the source - C::max_value() when unreached
/// through: predecessor on that best path
/// settled: nodes in the order their cost became final
struct Search<C> {
    cost: Vec<C>,
    through: Vec<Option<NodeId>>,
    settled: Vec<NodeId>,
}


impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Bounded + CheckedAdd + Ord + Copy + Debug,
{

    /// Identify the shortest path using Dijkstra's Algorithm
    /// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
    /// An unreached destination is an error, see [`Graph::shortest_path_with`]
    pub fn shortest_path(&self, source: &N, destination: &N) -> Result<Route<N, C>, GraphError> {
        self.shortest_path_with(source, destination, Reachability::Strict)
    }

    /// Shortest path query with explicit handling of unreached destinations
    /// Every query starts from fresh search state, so queries are independent of each other
    pub fn shortest_path_with(&self, source: &N, destination: &N, mode: Reachability) -> Result<Route<N, C>, GraphError> {

        let start = self.node(source)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{source:?}")))?;

        let goal = self.node(destination)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{destination:?}")))?;

        let search = self.search(start);

        let cost = search.cost[goal.index()];
        log::debug!(
            "shortest path {source:?} -> {destination:?}: cost {cost:?}, {} of {} nodes settled",
            search.settled.len(), self.node_count()
        );

        if cost == C::max_value() {
            return match mode {
                Reachability::Strict => Err(GraphError::Unreachable(format!("{destination:?}"))),
                Reachability::Lenient => Ok(Route { cost, path: Vec::new() }),
            };
        }

        let path = shortest_path(self, &search.through, goal);
        Ok(Route { cost, path })
    }

    /// Returns the cost of every node reachable from `source`, source included
    /// Nodes appear in the order they were settled
    pub fn distances(&self, source: &N) -> Result<FxIndexMap<N, C>, GraphError> {

        let start = self.node(source)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{source:?}")))?;

        let search = self.search(start);

        Ok(search.settled.iter()
            .filter_map(|&id| self.value(id).map(|n| (n.clone(), search.cost[id.index()])))
            .collect())
    }

    /// Traverses the graph from `start` until every reachable node is settled
    fn search(&self, start: NodeId) -> Search<C> {

        let size = self.node_count();
        let mut search = Search {
            cost: vec![C::max_value(); size],
            through: vec![None; size],
            settled: Vec::with_capacity(size),
        };

        // settled nodes - cost is final, no longer need to visit
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut heap: SetHeap<NodeId, C> = SetHeap::with_capacity(size);

        search.cost[start.index()] = C::zero();
        heap.push(start, C::zero());

        // Loop until the heap is drained, always expanding the cheapest node
        while let Ok((current, current_cost)) = heap.pop() {
            visited.insert(current);
            search.settled.push(current);

            for edge in self.edges_of(current) {
                if visited.contains(&edge.to) {
                    continue;
                }

                // overflowing costs can never improve on the sentinel
                let Some(new_cost) = current_cost.checked_add(&edge.weight) else {
                    continue;
                };

                let n = edge.to.index();
                if new_cost < search.cost[n] {
                    log::trace!("relax {:?} via {:?}: {:?} -> {:?}", edge.to, current, search.cost[n], new_cost);
                    search.cost[n] = new_cost;
                    search.through[n] = Some(current);
                    // lowers the queued cost when already present
                    heap.push(edge.to, new_cost);
                }
            }
        }

        search
    }
}
