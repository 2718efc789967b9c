use super::Graph;
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Breadth-first traversal from `start`, returning vertices in visit order.
///
/// Vertices are marked when enqueued, so each appears once even when
/// several edges lead to it. Unreachable vertices are not included.
pub fn bfs(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    if start >= graph.vertex_count() {
        return Err(Error::StartOutOfRange {
            start,
            vertex_count: graph.vertex_count(),
        });
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();
    visited[start] = true;

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &next in graph.successors(node) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::new(vec![
            vec![1, 2],
            vec![0, 3, 4],
            vec![0, 5],
            vec![1],
            vec![1],
            vec![2],
        ])
        .unwrap()
    }

    #[test]
    fn test_bfs_from_root() {
        assert_eq!(bfs(&sample(), 0).unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bfs_from_inner_vertex() {
        assert_eq!(bfs(&sample(), 1).unwrap(), vec![1, 0, 3, 4, 2, 5]);
    }

    #[test]
    fn test_bfs_single_vertex() {
        assert_eq!(bfs(&Graph::empty(1), 0).unwrap(), vec![0]);
    }

    #[test]
    fn test_bfs_skips_unreachable() {
        let graph = Graph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_bfs_bad_start() {
        let result = bfs(&Graph::empty(2), 2);
        assert!(matches!(
            result,
            Err(Error::StartOutOfRange {
                start: 2,
                vertex_count: 2
            })
        ));
    }
}
