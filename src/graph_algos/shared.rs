use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use super::dijkstra::{Reachability, Route};
use super::graph::{Graph, NodeId};

use std::{
    fmt::Debug,
    hash::Hash,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use num_traits::{Bounded, CheckedAdd, Zero};


/// Graph behind a read-write lock, safe to build and query from several threads
/// Each operation holds the lock for its whole duration; queries only need the read side
/// since search state lives with the query, so concurrent queries never see each other
#[derive(Debug)]
pub struct SharedGraph<N, C = i64> {
    inner: RwLock<Graph<N, C>>,
}

impl<N, C> SharedGraph<N, C> {

    pub fn new(graph: Graph<N, C>) -> Self {
        Self { inner: RwLock::new(graph) }
    }

    // Every write leaves the graph consistent, so a poisoned lock is still usable
    fn read(&self) -> RwLockReadGuard<'_, Graph<N, C>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Graph<N, C>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_inner(self) -> Graph<N, C> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<N, C> SharedGraph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Bounded + CheckedAdd + Ord + Copy + Debug,
{

    pub fn add_node(&self, value: N) -> Result<NodeId, GraphError> {
        self.write().add_node(value)
    }

    pub fn add_edge(&self, from: &N, to: &N, weight: C) -> Result<(), GraphError> {
        self.write().add_edge(from, to, weight)
    }

    pub fn node(&self, value: &N) -> Option<NodeId> {
        self.read().node(value)
    }

    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    pub fn shortest_path(&self, source: &N, destination: &N) -> Result<Route<N, C>, GraphError> {
        self.read().shortest_path(source, destination)
    }

    pub fn shortest_path_with(&self, source: &N, destination: &N, mode: Reachability) -> Result<Route<N, C>, GraphError> {
        self.read().shortest_path_with(source, destination, mode)
    }

    pub fn distances(&self, source: &N) -> Result<FxIndexMap<N, C>, GraphError> {
        self.read().distances(source)
    }
}

impl<N, C> Default for SharedGraph<N, C> {
    fn default() -> Self {
        Self::new(Graph::default())
    }
}

impl<N, C> From<Graph<N, C>> for SharedGraph<N, C> {
    fn from(graph: Graph<N, C>) -> Self {
        Self::new(graph)
    }
}
