//! Small algorithms toolkit for grid and graph puzzles
//!
//! - [`graph_algos`]: weighted directed graph with Dijkstra shortest paths
//! - [`heap`]: identity keyed binary min-heap and a value priority queue
//! - [`grid`]: sparse 2D grid with a growing bounding rectangle
//! - [`sets`]: set algebra over hashable values
//! - [`stack`]: LIFO stack with bottom access

pub mod errors;
pub mod collections;
pub mod geometry;
pub mod graph_algos;
pub mod heap;
pub mod grid;
pub mod sets;
pub mod stack;

pub use errors::{GraphError, HeapError, QueueError, StackError};
pub use geometry::{Bounds, Loc};
pub use graph_algos::{Edge, Graph, NodeId, Reachability, Route, SharedGraph};
pub use grid::Grid;
pub use heap::{SetHeap, priority_queue::PriorityQueue};
pub use sets::Set;
pub use stack::Stack;
