//! Topological order of a digraph.
//!
//! An order exists exactly when the digraph has no directed cycle; for a
//! cyclic input no order (partial or otherwise) is ever produced.

use crate::cycle::find_directed_cycle;
use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::Adjacency;
use crate::search::DepthFirstOrder;

#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<Option<usize>>,
}

impl Topological {
    /// Works for `Digraph` and `EdgeWeightedDigraph` alike
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new<G: Adjacency + ?Sized>(graph: &G) -> Self {
        let vertex_count = graph.vertex_count();
        let mut rank = vec![None; vertex_count];

        if find_directed_cycle(graph).is_some() {
            tracing::debug!("digraph has a cycle; no topological order");
            return Self { order: None, rank };
        }

        let order = DepthFirstOrder::new(graph).reverse_postorder();
        for (i, &v) in order.iter().enumerate() {
            rank[v] = Some(i);
        }
        Self {
            order: Some(order),
            rank,
        }
    }

    /// Whether the digraph is a DAG
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in the topological order
    pub fn rank(&self, v: usize) -> Result<Option<usize>> {
        ensure_vertex!(v, self.rank.len());
        Ok(self.rank[v])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::DirectedCycle;
    use crate::graph::{Digraph, EdgeWeightedDigraph};

    fn position(order: &[usize], v: usize) -> usize {
        order.iter().position(|&x| x == v).unwrap()
    }

    #[test]
    fn test_diamond_order() {
        let digraph: Digraph = "4 4 0 1 0 2 1 3 2 3".parse().unwrap();
        let topological = Topological::new(&digraph);
        assert!(topological.has_order());
        let order = topological.order().unwrap();
        assert!(position(order, 0) < position(order, 1));
        assert!(position(order, 0) < position(order, 2));
        assert!(position(order, 1) < position(order, 3));
        assert!(position(order, 2) < position(order, 3));
        assert_eq!(topological.rank(0).unwrap(), Some(0));
    }

    #[test]
    fn test_cycle_means_no_order() {
        let digraph: Digraph = "4 4 0 1 1 2 2 0 2 3".parse().unwrap();
        let topological = Topological::new(&digraph);
        assert!(!topological.has_order());
        assert_eq!(topological.order(), None);
        assert_eq!(topological.rank(3).unwrap(), None);
        assert!(DirectedCycle::new(&digraph).has_cycle());
    }

    #[test]
    fn test_rank_validates_vertex() {
        let topological = Topological::new(&Digraph::new(2));
        assert!(topological.rank(2).is_err());
        assert_eq!(topological.order(), Some(&[1, 0][..]));
    }

    #[test]
    fn test_edge_weighted_dag() {
        let digraph: EdgeWeightedDigraph =
            "5 5 0 1 0.5 1 2 0.5 0 3 0.5 3 2 0.5 2 4 0.5".parse().unwrap();
        let topological = Topological::new(&digraph);
        let order = topological.order().unwrap();
        for edge in digraph.edges() {
            assert!(position(order, edge.from()) < position(order, edge.to()));
        }
    }
}
