//! Topological sorting using Kahn's algorithm.

use super::Graph;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Outcome of a topological sort.
///
/// A cycle is an ordinary outcome, not an error. An empty graph sorts to
/// `Sorted { order: [] }`, which never collides with `CycleDetected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopoOrder {
    /// Every vertex exactly once, each edge pointing forward.
    Sorted { order: Vec<usize> },
    /// No order exists. `unresolved` lists, ascending, the vertices whose
    /// prerequisites were never all placed: those on a cycle or downstream
    /// of one. It carries no ordering information.
    CycleDetected { unresolved: Vec<usize> },
}

impl TopoOrder {
    pub fn order(&self) -> Option<&[usize]> {
        match self {
            TopoOrder::Sorted { order } => Some(order),
            TopoOrder::CycleDetected { .. } => None,
        }
    }

    pub fn into_order(self) -> Option<Vec<usize>> {
        match self {
            TopoOrder::Sorted { order } => Some(order),
            TopoOrder::CycleDetected { .. } => None,
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, TopoOrder::CycleDetected { .. })
    }
}

/// Sort the vertices of `graph` so every edge points forward.
///
/// Vertices that become ready together leave in FIFO order, and the initial
/// frontier is seeded in ascending vertex order, so the result is fully
/// determined by the graph and the order of each adjacency list.
pub fn topological_sort(graph: &Graph) -> TopoOrder {
    let n = graph.vertex_count();
    let mut indegree = graph.indegrees();

    let mut frontier: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(node) = frontier.pop_front() {
        order.push(node);
        for &next in graph.successors(node) {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                frontier.push_back(next);
            }
        }
    }

    if order.len() == n {
        tracing::debug!(vertices = n, edges = graph.edge_count(), "graph sorted");
        TopoOrder::Sorted { order }
    } else {
        let unresolved: Vec<usize> = (0..n).filter(|&v| indegree[v] > 0).collect();
        tracing::debug!(
            vertices = n,
            placed = order.len(),
            unresolved = unresolved.len(),
            "cycle detected"
        );
        TopoOrder::CycleDetected { unresolved }
    }
}

/// Validate raw input, then sort it.
///
/// `adjacency` must have one entry per vertex and only reference vertices
/// in `0..vertex_count`; anything else is rejected before sorting starts.
pub fn topological_sort_adjacency(
    vertex_count: usize,
    adjacency: &[Vec<usize>],
) -> Result<TopoOrder> {
    let graph = Graph::with_vertex_count(vertex_count, adjacency.to_vec())?;
    Ok(topological_sort(&graph))
}

/// Check that `order` is a permutation of the graph's vertices in which
/// every edge points forward.
pub fn is_topological_order(graph: &Graph, order: &[usize]) -> bool {
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (index, &vertex) in order.iter().enumerate() {
        if vertex >= n || position[vertex] != usize::MAX {
            return false;
        }
        position[vertex] = index;
    }

    graph.edges().all(|(from, to)| position[from] < position[to])
}
