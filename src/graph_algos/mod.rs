pub mod graph;
pub mod dijkstra;
pub mod shared;
mod shortest_path;

use shortest_path::shortest_path;

pub use graph::{Edge, Graph, NodeId};
pub use dijkstra::{Reachability, Route};
pub use shared::SharedGraph;
