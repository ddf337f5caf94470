//! Seeded random graph generators.
//!
//! Every generator draws from the random source held by [`Generator`], so a
//! fixed seed always reproduces the same graph.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::digraph::Digraph;
use super::edge::{DirectedEdge, Edge};
use super::matrix::AdjMatrixEdgeWeightedDigraph;
use super::undirected::Graph;
use super::weighted::{EdgeWeightedDigraph, EdgeWeightedGraph};
use crate::bail_invalid;
use crate::capacity::identity;
use crate::error::{GraphError, Result};

pub struct Generator<R: Rng> {
    rng: R,
}

impl Generator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

fn too_many_edges(requested: usize, limit: usize, kind: &str) -> GraphError {
    GraphError::invalid_value(
        "number of edges",
        format!("{} (a {} on these vertices holds at most {})", requested, kind, limit),
    )
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn weight(&mut self) -> f64 {
        (100.0 * self.rng.gen::<f64>()).round() / 100.0
    }

    /// Draw `count` distinct ordered pairs `(v, w)`, `v != w`; with
    /// `ordered == false` the pairs are canonicalized so that `v < w`.
    fn distinct_pairs(&mut self, vertex_count: usize, count: usize, ordered: bool) -> Vec<(usize, usize)> {
        let mut seen = HashSet::with_capacity(count);
        let mut pairs = Vec::with_capacity(count);
        while pairs.len() < count {
            let v = self.rng.gen_range(0..vertex_count);
            let w = self.rng.gen_range(0..vertex_count);
            if v == w {
                continue;
            }
            let key = if ordered { (v, w) } else { (v.min(w), v.max(w)) };
            if seen.insert(key) {
                pairs.push(if ordered { (v, w) } else { key });
            }
        }
        pairs
    }

    /// Simple undirected graph: no self-loops, no parallel edges.
    pub fn simple_graph(&mut self, vertex_count: usize, edge_count: usize) -> Result<Graph> {
        let limit = vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2;
        if edge_count > limit {
            return Err(too_many_edges(edge_count, limit, "simple graph"));
        }
        let mut graph = Graph::try_new(vertex_count)?;
        for (v, w) in self.distinct_pairs(vertex_count, edge_count, false) {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Erdos-Renyi graph: each of the `V(V-1)/2` pairs present with probability `p`.
    pub fn erdos_renyi_graph(&mut self, vertex_count: usize, p: f64) -> Result<Graph> {
        if !(0.0..=1.0).contains(&p) {
            bail_invalid!("edge probability", p);
        }
        let mut graph = Graph::try_new(vertex_count)?;
        for v in 0..vertex_count {
            for w in (v + 1)..vertex_count {
                if self.rng.gen_bool(p) {
                    graph.add_edge(v, w)?;
                }
            }
        }
        Ok(graph)
    }

    /// Simple digraph: no self-loops, no parallel edges.
    pub fn simple_digraph(&mut self, vertex_count: usize, edge_count: usize) -> Result<Digraph> {
        let limit = vertex_count.saturating_mul(vertex_count.saturating_sub(1));
        if edge_count > limit {
            return Err(too_many_edges(edge_count, limit, "simple digraph"));
        }
        let mut digraph = Digraph::try_new(vertex_count)?;
        for (v, w) in self.distinct_pairs(vertex_count, edge_count, true) {
            digraph.add_edge(v, w)?;
        }
        Ok(digraph)
    }

    /// Random permutation of `0..vertex_count`, used to hide the DAG order.
    fn permutation(&mut self, vertex_count: usize) -> Result<Vec<usize>> {
        let mut order = identity("number of vertices", vertex_count)?;
        order.shuffle(&mut self.rng);
        Ok(order)
    }

    /// Simple DAG: every edge points forward in a hidden random vertex order.
    pub fn dag(&mut self, vertex_count: usize, edge_count: usize) -> Result<Digraph> {
        let limit = vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2;
        if edge_count > limit {
            return Err(too_many_edges(edge_count, limit, "DAG"));
        }
        let order = self.permutation(vertex_count)?;
        let mut digraph = Digraph::try_new(vertex_count)?;
        for (v, w) in self.distinct_pairs(vertex_count, edge_count, false) {
            digraph.add_edge(order[v], order[w])?;
        }
        Ok(digraph)
    }

    /// Edge-weighted graph with random endpoints (self-loops and parallel
    /// edges allowed) and weights in `[0, 1]` rounded to two decimals.
    pub fn edge_weighted_graph(&mut self, vertex_count: usize, edge_count: usize) -> Result<EdgeWeightedGraph> {
        if vertex_count == 0 && edge_count > 0 {
            return Err(too_many_edges(edge_count, 0, "graph"));
        }
        let mut graph = EdgeWeightedGraph::try_new(vertex_count)?;
        for _ in 0..edge_count {
            let v = self.rng.gen_range(0..vertex_count);
            let w = self.rng.gen_range(0..vertex_count);
            let weight = self.weight();
            graph.add_edge(Edge::new(v, w, weight)?)?;
        }
        Ok(graph)
    }

    /// Edge-weighted DAG with distinct edges and weights in `[0, 1]`.
    pub fn edge_weighted_dag(&mut self, vertex_count: usize, edge_count: usize) -> Result<EdgeWeightedDigraph> {
        let limit = vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2;
        if edge_count > limit {
            return Err(too_many_edges(edge_count, limit, "DAG"));
        }
        let order = self.permutation(vertex_count)?;
        let mut digraph = EdgeWeightedDigraph::try_new(vertex_count)?;
        for (v, w) in self.distinct_pairs(vertex_count, edge_count, false) {
            let weight = self.weight();
            digraph.add_edge(DirectedEdge::new(order[v], order[w], weight)?)?;
        }
        Ok(digraph)
    }

    /// Dense edge-weighted digraph with distinct ordered pairs (self-loops
    /// allowed).
    pub fn adj_matrix_digraph(&mut self, vertex_count: usize, edge_count: usize) -> Result<AdjMatrixEdgeWeightedDigraph> {
        AdjMatrixEdgeWeightedDigraph::random(vertex_count, edge_count, &mut self.rng)
    }
}
