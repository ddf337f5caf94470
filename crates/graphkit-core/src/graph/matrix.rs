use rand::Rng;

use super::edge::DirectedEdge;
use super::weighted::EdgeWeightedDigraph;
use crate::capacity::filled;
use crate::{bail_invalid, ensure_vertex};
use crate::error::Result;

/// Dense edge-weighted digraph: a `V x V` matrix holding at most one edge
/// per ordered pair. Adding `v->w` twice replaces the earlier weight.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjMatrixEdgeWeightedDigraph {
    matrix: Vec<Vec<Option<DirectedEdge>>>,
    edge_count: usize,
}

impl AdjMatrixEdgeWeightedDigraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: vec![vec![None; vertex_count]; vertex_count],
            edge_count: 0,
        }
    }

    /// Like `new`, but a count whose `V x V` matrix cannot be allocated is an
    /// `InvalidValue`
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        if vertex_count.checked_mul(vertex_count).is_none() {
            bail_invalid!(
                "number of vertices",
                format!("{} (matrix too large to allocate)", vertex_count)
            );
        }
        let mut matrix = filled("number of vertices", vertex_count, Vec::new())?;
        for row in &mut matrix {
            *row = filled("number of vertices", vertex_count, None)?;
        }
        Ok(Self {
            matrix,
            edge_count: 0,
        })
    }

    /// `edge_count` distinct random edges with weights in `[0, 1)` rounded to
    /// two decimals, drawn from the caller's random source.
    pub fn random<R: Rng + ?Sized>(
        vertex_count: usize,
        edge_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let limit = vertex_count.saturating_mul(vertex_count);
        if edge_count > limit {
            bail_invalid!(
                "number of edges",
                format!("{} (at most {} for {} vertices)", edge_count, limit, vertex_count)
            );
        }

        let mut digraph = Self::try_new(vertex_count)?;
        while digraph.edge_count < edge_count {
            let v = rng.gen_range(0..vertex_count);
            let w = rng.gen_range(0..vertex_count);
            let weight = (100.0 * rng.gen::<f64>()).round() / 100.0;
            digraph.add_edge(DirectedEdge::new(v, w, weight)?)?;
        }
        Ok(digraph)
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, edge: DirectedEdge) -> Result<()> {
        ensure_vertex!(edge.from(), self.matrix.len());
        ensure_vertex!(edge.to(), self.matrix.len());
        let slot = &mut self.matrix[edge.from()][edge.to()];
        if slot.is_none() {
            self.edge_count += 1;
        }
        *slot = Some(edge);
        Ok(())
    }

    /// Outgoing edges of `v` in increasing order of head vertex
    pub fn adj(&self, v: usize) -> Result<impl Iterator<Item = &DirectedEdge> + '_> {
        ensure_vertex!(v, self.matrix.len());
        Ok(self.matrix[v].iter().flatten())
    }

    /// Convert to the adjacency-list representation
    pub fn to_edge_weighted_digraph(&self) -> Result<EdgeWeightedDigraph> {
        let mut digraph = EdgeWeightedDigraph::new(self.matrix.len());
        for edge in self.matrix.iter().flatten().flatten() {
            digraph.add_edge(*edge)?;
        }
        Ok(digraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_duplicate_edge_replaces_weight() {
        let mut digraph = AdjMatrixEdgeWeightedDigraph::new(3);
        digraph.add_edge(DirectedEdge::new(0, 1, 0.5).unwrap()).unwrap();
        digraph.add_edge(DirectedEdge::new(0, 1, 0.75).unwrap()).unwrap();
        assert_eq!(digraph.edge_count(), 1);
        let weights: Vec<f64> = digraph.adj(0).unwrap().map(DirectedEdge::weight).collect();
        assert_eq!(weights, vec![0.75]);
    }

    #[test]
    fn test_random_is_reproducible_from_seed() {
        let first = AdjMatrixEdgeWeightedDigraph::random(6, 12, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = AdjMatrixEdgeWeightedDigraph::random(6, 12, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.edge_count(), 12);
        assert_eq!(first.to_edge_weighted_digraph().unwrap().edge_count(), 12);
    }

    #[test]
    fn test_random_rejects_too_many_edges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(AdjMatrixEdgeWeightedDigraph::random(2, 5, &mut rng).is_err());
    }

    #[test]
    fn test_adj_sorted_by_head() {
        let mut digraph = AdjMatrixEdgeWeightedDigraph::new(4);
        digraph.add_edge(DirectedEdge::new(2, 3, 1.0).unwrap()).unwrap();
        digraph.add_edge(DirectedEdge::new(2, 0, 1.0).unwrap()).unwrap();
        let heads: Vec<usize> = digraph.adj(2).unwrap().map(DirectedEdge::to).collect();
        assert_eq!(heads, vec![0, 3]);
        assert!(digraph.adj(4).is_err());
    }

    #[test]
    fn test_conversion_keeps_every_edge() {
        let mut matrix = AdjMatrixEdgeWeightedDigraph::new(3);
        matrix.add_edge(DirectedEdge::new(2, 2, 0.5).unwrap()).unwrap();
        matrix.add_edge(DirectedEdge::new(0, 2, 1.5).unwrap()).unwrap();
        let digraph = matrix.to_edge_weighted_digraph().unwrap();
        assert_eq!(digraph.vertex_count(), 3);
        assert_eq!(digraph.edge_count(), 2);
        assert_eq!(digraph.in_degree(2).unwrap(), 2);
    }

    #[test]
    fn test_try_new_rejects_unallocatable_matrix() {
        assert!(matches!(
            AdjMatrixEdgeWeightedDigraph::try_new(usize::MAX / 2),
            Err(GraphError::InvalidValue { .. })
        ));
        assert_eq!(AdjMatrixEdgeWeightedDigraph::try_new(2).unwrap().vertex_count(), 2);
    }
}
