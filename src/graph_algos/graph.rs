use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::{fmt::Debug, hash::Hash};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Handle of a node, its position in the graph's insertion order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Directed, weighted edge to `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<C> {
    pub to: NodeId,
    pub weight: C,
}


/// Mutable directed graph over caller supplied node values
/// N: node value - identity key of a node
/// C: edge weight / path cost
/// Each value maps to (in insertion order) its outgoing edges
#[derive(Clone, Debug)]
pub struct Graph<N, C = i64> {
    adjacency: FxIndexMap<N, Vec<Edge<C>>>,
    edge_count: usize,
}

impl<N, C> Default for Graph<N, C> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Debug,
    C: Zero + Ord + Copy + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node for `value`
    /// Fails when the value is already registered
    pub fn add_node(&mut self, value: N) -> Result<NodeId, GraphError> {
        match self.adjacency.entry(value) {
            Occupied(e) => Err(GraphError::DuplicateNode(format!("{:?}", e.key()))),
            Vacant(e) => {
                let id = NodeId(e.index());
                e.insert(Vec::new());
                Ok(id)
            }
        }
    }

    /// Append a directed edge, both endpoints must already be registered
    /// Parallel edges are kept as is
    pub fn add_edge(&mut self, from: &N, to: &N, weight: C) -> Result<(), GraphError> {
        if weight < C::zero() {
            return Err(GraphError::NegativeWeight(format!("{weight:?}")));
        }
        let to = self.node(to)
            .ok_or_else(|| GraphError::MissingEdgeEndpoint(format!("{to:?}")))?;
        let edges = self.adjacency.get_mut(from)
            .ok_or_else(|| GraphError::MissingEdgeEndpoint(format!("{from:?}")))?;

        edges.push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Same as [`Graph::add_edge`] for handles returned by [`Graph::add_node`]
    pub fn add_edge_by_id(&mut self, from: NodeId, to: NodeId, weight: C) -> Result<(), GraphError> {
        if weight < C::zero() {
            return Err(GraphError::NegativeWeight(format!("{weight:?}")));
        }
        if to.0 >= self.adjacency.len() {
            return Err(GraphError::MissingEdgeEndpoint(format!("{to:?}")));
        }
        let (_, edges) = self.adjacency.get_index_mut(from.0)
            .ok_or_else(|| GraphError::MissingEdgeEndpoint(format!("{from:?}")))?;

        edges.push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash,
{

    /// Handle of the node registered for `value`
    pub fn node(&self, value: &N) -> Option<NodeId> {
        self.adjacency.get_index_of(value).map(NodeId)
    }

    /// Value of the node behind `id`
    pub fn value(&self, id: NodeId) -> Option<&N> {
        self.adjacency.get_index(id.0).map(|(value, _)| value)
    }

    /// Node values in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Outgoing edges of `value`, empty when the value is unknown
    pub fn edges_from(&self, value: &N) -> &[Edge<C>] {
        self.adjacency.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn edges_of(&self, id: NodeId) -> &[Edge<C>] {
        self.adjacency.get_index(id.0).map(|(_, edges)| edges.as_slice()).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
