pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod search;
pub mod sort;

pub use error::{Error, Result};
pub use graph::{Graph, TopoOrder, topological_sort};
