//! Validated directed graph over dense vertex ids.
//!
//! Vertices are `0..vertex_count`. Each vertex owns an ordered list of
//! successors; an edge `u -> v` means "u must come before v".

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A directed graph whose edges are all known to stay in range.
///
/// Multi-edges and self-loops are allowed. Construction is the only place
/// the range contract is checked, so algorithms taking `&Graph` never fail
/// on bad indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
}

/// On-disk shape: either an adjacency list, an edge list, or both
/// (edges are appended after the adjacency entries).
#[derive(Debug, Deserialize)]
struct RawGraph {
    vertex_count: usize,
    #[serde(default)]
    adjacency: Option<Vec<Vec<usize>>>,
    #[serde(default)]
    edges: Vec<(usize, usize)>,
}

impl TryFrom<RawGraph> for Graph {
    type Error = Error;

    fn try_from(raw: RawGraph) -> Result<Self> {
        let mut graph = match raw.adjacency {
            Some(adjacency) => Graph::with_vertex_count(raw.vertex_count, adjacency)?,
            None => Graph::empty(raw.vertex_count),
        };
        for (from, to) in raw.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }
}

impl Graph {
    /// Graph with `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Build from an adjacency list; the vertex count is its length.
    pub fn new(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        Self::with_vertex_count(adjacency.len(), adjacency)
    }

    /// Build from an explicit vertex count and an index-aligned adjacency list.
    ///
    /// Every vertex needs an entry, even if it has no successors.
    pub fn with_vertex_count(vertex_count: usize, adjacency: Vec<Vec<usize>>) -> Result<Self> {
        if adjacency.len() != vertex_count {
            return Err(Error::AdjacencyLength {
                expected: vertex_count,
                actual: adjacency.len(),
            });
        }

        for (from, successors) in adjacency.iter().enumerate() {
            if let Some(&to) = successors.iter().find(|&&to| to >= vertex_count) {
                return Err(Error::VertexOutOfRange {
                    from,
                    to,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            vertex_count,
            adjacency,
        })
    }

    /// Build from `(from, to)` pairs, keeping their order per source vertex.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::empty(vertex_count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Append the edge `from -> to`.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return Err(Error::VertexOutOfRange {
                from,
                to,
                vertex_count: self.vertex_count,
            });
        }
        self.adjacency[from].push(to);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Successors of `vertex` in insertion order.
    ///
    /// # Panics
    /// If `vertex` is not in the graph.
    pub fn successors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// All edges as `(from, to)`, grouped by source in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, successors)| successors.iter().map(move |&to| (from, to)))
    }

    /// Number of incoming edges per vertex, counting multi-edges.
    pub fn indegrees(&self) -> Vec<usize> {
        let mut indegree = vec![0; self.vertex_count];
        for (_, to) in self.edges() {
            indegree[to] += 1;
        }
        indegree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_vertices_and_edges() {
        let graph = Graph::new(vec![vec![1, 2], vec![2], vec![]]).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.successors(0), &[1, 2]);
    }

    #[test]
    fn test_out_of_range_target_rejected() {
        let result = Graph::new(vec![vec![1], vec![5]]);
        assert!(matches!(
            result,
            Err(Error::VertexOutOfRange {
                from: 1,
                to: 5,
                vertex_count: 2
            })
        ));
    }

    #[test]
    fn test_adjacency_length_mismatch_rejected() {
        let result = Graph::with_vertex_count(3, vec![vec![], vec![]]);
        assert!(matches!(
            result,
            Err(Error::AdjacencyLength {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_from_edges_keeps_insertion_order() {
        let graph = Graph::from_edges(6, [(5, 2), (5, 0), (4, 0), (4, 1)]).unwrap();
        assert_eq!(graph.successors(5), &[2, 0]);
        assert_eq!(graph.successors(4), &[0, 1]);
        assert!(graph.successors(0).is_empty());
    }

    #[test]
    fn test_add_edge_checks_source_too() {
        let mut graph = Graph::empty(2);
        assert!(graph.add_edge(2, 0).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_indegrees_count_multi_edges() {
        let graph = Graph::from_edges(3, [(0, 2), (0, 2), (1, 2), (2, 2)]).unwrap();
        assert_eq!(graph.indegrees(), vec![0, 0, 4]);
    }

    #[test]
    fn test_deserialize_adjacency_form() {
        let graph: Graph =
            serde_json::from_str(r#"{"vertex_count": 3, "adjacency": [[1], [2], []]}"#).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_deserialize_edge_form() {
        let graph: Graph =
            serde_json::from_str(r#"{"vertex_count": 4, "edges": [[0, 1], [2, 3]]}"#).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let result: std::result::Result<Graph, _> =
            serde_json::from_str(r#"{"vertex_count": 2, "edges": [[0, 7]]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("outside the graph"), "unexpected error: {err}");
    }

    #[test]
    fn test_serialize_round_shape() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"vertex_count": 2, "adjacency": [[1], []]})
        );
    }
}
