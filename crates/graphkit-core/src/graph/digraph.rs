use std::fmt;
use std::str::FromStr;

use super::parse::Tokens;
use super::Adjacency;
use crate::capacity::filled;
use crate::ensure_vertex;
use crate::error::{GraphError, Result};

/// Directed graph; `adj(v)` holds the heads of edges leaving `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

impl Digraph {
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

    /// Add the directed edge `v->w`
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        ensure_vertex!(v, self.adj.len());
        ensure_vertex!(w, self.adj.len());
        self.adj[v].push(w);
        self.in_degree[w] += 1;
        self.edge_count += 1;
        Ok(())
    }

    pub fn adj(&self, v: usize) -> Result<&[usize]> {
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

    /// A new digraph with every edge flipped
    pub fn reverse(&self) -> Digraph {
        let mut reversed = Digraph::new(self.adj.len());
        for (v, targets) in self.adj.iter().enumerate() {
            for &w in targets {
                reversed.adj[w].push(v);
                reversed.in_degree[v] += 1;
            }
        }
        reversed.edge_count = self.edge_count;
        reversed
    }

    /// Every edge as a `(from, to)` pair, grouped by tail vertex
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(v, targets)| targets.iter().map(move |&w| (v, w)))
    }
}

impl Adjacency for Digraph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn target_at(&self, v: usize, i: usize) -> Option<usize> {
        self.adj[v].get(i).copied()
    }
}

impl FromStr for Digraph {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let vertex_count = tokens.next_count("number of vertices")?;
        let edge_count = tokens.next_count("number of edges")?;

        let mut digraph = Digraph::try_new(vertex_count)?;
        for _ in 0..edge_count {
            let v = tokens.next_vertex()?;
            let w = tokens.next_vertex()?;
            digraph.add_edge(v, w)?;
        }
        tokens.expect_end()?;
        Ok(digraph)
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.adj.len(), self.edge_count)?;
        for (v, targets) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for w in targets {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
