use std::fmt;
use std::str::FromStr;

use super::edge::{DirectedEdge, Edge};
use super::parse::Tokens;
use super::Adjacency;
use crate::capacity::filled;
use crate::ensure_vertex;
use crate::error::{GraphError, Result};

/// Undirected graph whose adjacency lists hold weighted [`Edge`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedGraph {
    adj: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl EdgeWeightedGraph {
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

    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let v = edge.either();
        let w = edge.other(v)?;
        ensure_vertex!(v, self.adj.len());
        ensure_vertex!(w, self.adj.len());
        self.adj[v].push(edge);
        self.adj[w].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> Result<&[Edge]> {
        ensure_vertex!(v, self.adj.len());
        Ok(&self.adj[v])
    }

    pub fn degree(&self, v: usize) -> Result<usize> {
        Ok(self.adj(v)?.len())
    }

    /// Every edge exactly once; a self-loop is listed once even though it
    /// occupies two adjacency slots.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (v, incident) in self.adj.iter().enumerate() {
            let mut self_loops = 0;
            for edge in incident {
                match edge.other(v) {
                    Ok(w) if w > v => edges.push(*edge),
                    Ok(w) if w == v => {
                        if self_loops % 2 == 0 {
                            edges.push(*edge);
                        }
                        self_loops += 1;
                    }
                    _ => {}
                }
            }
        }
        edges
    }
}

impl Adjacency for EdgeWeightedGraph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn target_at(&self, v: usize, i: usize) -> Option<usize> {
        self.adj[v].get(i).and_then(|edge| edge.other(v).ok())
    }
}

impl FromStr for EdgeWeightedGraph {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let vertex_count = tokens.next_count("number of vertices")?;
        let edge_count = tokens.next_count("number of edges")?;

        let mut graph = EdgeWeightedGraph::try_new(vertex_count)?;
        for _ in 0..edge_count {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            let weight = tokens.next_weight()?;
            graph.add_edge(Edge::new(v, w, weight)?)?;
        }
        tokens.expect_end()?;
        Ok(graph)
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.adj.len(), self.edge_count)?;
        for (v, incident) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for edge in incident {
                write!(f, " {}", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Directed graph whose adjacency lists hold outgoing [`DirectedEdge`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedDigraph {
    adj: Vec<Vec<DirectedEdge>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl EdgeWeightedDigraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            in_degree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Like `new`, but a count too large to allocate is an `InvalidValue`
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            adj: filled("number of vertices", vertex_count, Vec::new())?,
            in_degree: filled("number of vertices", vertex_count, 0)?,
            edge_count: 0,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        ensure_vertex!(edge.from(), self.adj.len());
        ensure_vertex!(edge.to(), self.adj.len());
        self.adj[edge.from()].push(edge);
        self.in_degree[edge.to()] += 1;
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> Result<&[DirectedEdge]> {
        ensure_vertex!(v, self.adj.len());
        Ok(&self.adj[v])
    }

    pub fn out_degree(&self, v: usize) -> Result<usize> {
        Ok(self.adj(v)?.len())
    }

    pub fn in_degree(&self, v: usize) -> Result<usize> {
        ensure_vertex!(v, self.adj.len());
        Ok(self.in_degree[v])
    }

    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> + '_ {
        self.adj.iter().flatten()
    }

    /// The edge stored in slot `i` of `v`'s adjacency list
    pub(crate) fn edge_at(&self, v: usize, i: usize) -> Option<&DirectedEdge> {
        self.adj.get(v).and_then(|edges| edges.get(i))
    }
}

impl Adjacency for EdgeWeightedDigraph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn target_at(&self, v: usize, i: usize) -> Option<usize> {
        self.adj[v].get(i).map(DirectedEdge::to)
    }
}

impl FromStr for EdgeWeightedDigraph {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let vertex_count = tokens.next_count("number of vertices")?;
        let edge_count = tokens.next_count("number of edges")?;

        let mut digraph = EdgeWeightedDigraph::try_new(vertex_count)?;
        for _ in 0..edge_count {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            let weight = tokens.next_weight()?;
            digraph.add_edge(DirectedEdge::new(v, w, weight)?)?;
        }
        tokens.expect_end()?;
        Ok(digraph)
    }
}

impl fmt::Display for EdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.adj.len(), self.edge_count)?;
        for (v, outgoing) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for edge in outgoing {
                write!(f, " {}", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
