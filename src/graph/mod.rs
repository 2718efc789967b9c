//! Graph representation, topological sorting and traversal.

pub mod digraph;
pub mod topology;
pub mod traversal;

pub use digraph::Graph;
pub use topology::{TopoOrder, is_topological_order, topological_sort, topological_sort_adjacency};
pub use traversal::bfs;
