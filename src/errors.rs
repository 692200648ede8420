use thiserror::Error;


/// Failures raised while building or querying a [`crate::graph_algos::Graph`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is not registered in the graph")]
    NodeNotFound(String), // source or destination unknown at query time
    #[error("node {0} is already registered in the graph")]
    DuplicateNode(String),
    #[error("edge endpoint {0} is not registered in the graph")]
    MissingEdgeEndpoint(String),
    #[error("edge weight {0} is negative")]
    NegativeWeight(String),
    #[error("node {0} cannot be reached from the source")]
    Unreachable(String), // registered, but never relaxed below the sentinel
}

/// Heap precondition violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("pop called on an empty heap")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack holds {available} items, {requested} requested")]
    Empty { requested: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("item {0} is not in the queue")]
    ItemNotQueued(String),
}
