use super::graph::{Graph, NodeId};

use std::hash::Hash;


/// Walk the predecessor table back from the goal node
/// Returns node values from goal towards the source, the source itself excluded
/// through: Vec<Option<NodeId>> - predecessor of every node on its best known path
pub(crate) fn shortest_path<N, C>(graph: &Graph<N, C>, through: &[Option<NodeId>], goal: NodeId) -> Vec<N>
where
    N: Eq + Hash + Clone,
{

    let mut path = Vec::new();
    let mut current = goal;

    // Trace back from goal until the node with no predecessor
    while let Some(parent) = through.get(current.index()).copied().flatten() {
        if let Some(value) = graph.value(current) {
            path.push(value.clone());
        }
        current = parent;
    }

    path
}
