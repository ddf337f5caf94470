use std::fmt;
use std::str::FromStr;

use super::parse::Tokens;
use super::Adjacency;
use crate::capacity::filled;
use crate::ensure_vertex;
use crate::error::{GraphError, Result};

/// Undirected graph as per-vertex neighbour lists.
///
/// Adding `v-w` records `w` in `adj(v)` and `v` in `adj(w)`, so a self-loop
/// appears twice in its vertex's list and the degree sum is always `2E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// An empty graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Like `new`, but a count too large to allocate is an `InvalidValue`
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            adj: filled("number of vertices", vertex_count, Vec::new())?,
            edge_count: 0,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        ensure_vertex!(v, self.adj.len());
        ensure_vertex!(w, self.adj.len());
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.edge_count += 1;
        Ok(())
    }

    /// Neighbours of `v`, one entry per incident edge endpoint
    pub fn adj(&self, v: usize) -> Result<&[usize]> {
        ensure_vertex!(v, self.adj.len());
        Ok(&self.adj[v])
    }

    pub fn degree(&self, v: usize) -> Result<usize> {
        Ok(self.adj(v)?.len())
    }

    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn average_degree(&self) -> f64 {
        if self.adj.is_empty() {
            0.0
        } else {
            2.0 * self.edge_count as f64 / self.adj.len() as f64
        }
    }

    /// Every edge once as `(v, w)` with `v <= w`, parallel edges repeated
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (v, neighbors) in self.adj.iter().enumerate() {
            let mut loops = 0;
            for &w in neighbors {
                if w > v {
                    edges.push((v, w));
                } else if w == v {
                    // A self-loop is stored twice in its own list.
                    if loops % 2 == 0 {
                        edges.push((v, v));
                    }
                    loops += 1;
                }
            }
        }
        edges
    }

    pub fn self_loop_count(&self) -> usize {
        let endpoints: usize = self
            .adj
            .iter()
            .enumerate()
            .map(|(v, neighbors)| neighbors.iter().filter(|&&w| w == v).count())
            .sum();
        endpoints / 2
    }
}

impl Adjacency for Graph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn target_at(&self, v: usize, i: usize) -> Option<usize> {
        self.adj[v].get(i).copied()
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let vertex_count = tokens.next_count("number of vertices")?;
        let edge_count = tokens.next_count("number of edges")?;

        let mut graph = Graph::try_new(vertex_count)?;
        for _ in 0..edge_count {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            graph.add_edge(v, w)?;
        }
        tokens.expect_end()?;
        Ok(graph)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.adj.len(), self.edge_count)?;
        for (v, neighbors) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for w in neighbors {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
