use std::collections::VecDeque;

use super::trace_back;
use crate::error::Result;
use crate::{bail_invalid, ensure_vertex};
use crate::graph::Adjacency;

/// Breadth-first search tree from one or more sources.
///
/// `dist_to(v)` is the fewest edges on any path from a source to `v`, which
/// holds for undirected graphs and digraphs alike.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    marked: Vec<bool>,
    edge_to: Vec<usize>,
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    pub fn new<G: Adjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn from_sources<G: Adjacency + ?Sized>(graph: &G, sources: &[usize]) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        if sources.is_empty() {
            bail_invalid!("sources", "zero vertices");
        }
        for &s in sources {
            ensure_vertex!(s, vertex_count);
        }

        let mut marked = vec![false; vertex_count];
        let mut edge_to: Vec<usize> = (0..vertex_count).collect();
        let mut dist_to = vec![None; vertex_count];
        let mut queue = VecDeque::new();

        for &s in sources {
            if !marked[s] {
                marked[s] = true;
                dist_to[s] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            let mut i = 0;
            while let Some(w) = graph.target_at(v, i) {
                i += 1;
                if !marked[w] {
                    marked[w] = true;
                    edge_to[w] = v;
                    dist_to[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }

        Ok(Self {
            marked,
            edge_to,
            dist_to,
        })
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        ensure_vertex!(v, self.marked.len());
        Ok(self.marked[v])
    }

    /// Number of edges on a shortest path from a source to `v`
    pub fn dist_to(&self, v: usize) -> Result<Option<usize>> {
        ensure_vertex!(v, self.dist_to.len());
        Ok(self.dist_to[v])
    }

    /// A shortest path from the nearest source to `v`, source first
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let dist_to = &self.dist_to;
        Ok(Some(trace_back(&self.edge_to, v, |x| dist_to[x] == Some(0))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{Digraph, Graph};

    const TINY_CG: &str = "6 8 0 5 2 4 2 3 1 2 0 1 3 4 3 5 0 2";
    const TINY_DG: &str = "13 22 4 2 2 3 3 2 6 0 0 1 2 0 11 12 12 9 9 10 9 11 7 9 10 12 11 4 4 3 3 5 6 8 8 6 5 4 0 5 6 4 6 9 7 6";

    #[test]
    fn test_distances_in_connected_graph() {
        let graph: Graph = TINY_CG.parse().unwrap();
        let bfs = BreadthFirstPaths::new(&graph, 0).unwrap();
        let distances: Vec<usize> = (0..6).map(|v| bfs.dist_to(v).unwrap().unwrap()).collect();
        assert_eq!(distances, vec![0, 1, 1, 2, 2, 1]);
        let path = bfs.path_to(4).unwrap().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], 0);
        assert_eq!(path[2], 4);
    }

    #[test]
    fn test_directed_distances() {
        let digraph: Digraph = TINY_DG.parse().unwrap();
        let bfs = BreadthFirstPaths::new(&digraph, 3).unwrap();
        assert_eq!(bfs.dist_to(2).unwrap(), Some(1));
        assert_eq!(bfs.dist_to(0).unwrap(), Some(2));
        assert_eq!(bfs.dist_to(1).unwrap(), Some(3));
        assert_eq!(bfs.path_to(1).unwrap(), Some(vec![3, 2, 0, 1]));
        assert!(!bfs.has_path_to(6).unwrap());
        assert_eq!(bfs.dist_to(6).unwrap(), None);
        assert_eq!(bfs.path_to(7).unwrap(), None);
    }

    #[test]
    fn test_multi_source_uses_nearest_source() {
        let mut digraph = Digraph::new(5);
        for (v, w) in [(0, 1), (1, 2), (2, 3), (4, 3)] {
            digraph.add_edge(v, w).unwrap();
        }
        let bfs = BreadthFirstPaths::from_sources(&digraph, &[0, 4]).unwrap();
        assert_eq!(bfs.dist_to(3).unwrap(), Some(1));
        assert_eq!(bfs.path_to(3).unwrap(), Some(vec![4, 3]));
        assert_eq!(bfs.path_to(2).unwrap(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_empty_sources_rejected() {
        let graph = Graph::new(2);
        assert!(matches!(
            BreadthFirstPaths::from_sources(&graph, &[]),
            Err(GraphError::InvalidValue { .. })
        ));
        assert!(BreadthFirstPaths::new(&graph, 2).is_err());
    }
}
