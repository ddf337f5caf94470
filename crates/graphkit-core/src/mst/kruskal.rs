use std::time::Instant;

use crate::graph::{Edge, EdgeWeightedGraph};
use crate::trace_time;
use crate::uf::{DisjointSet, UF};

const FLOATING_POINT_EPSILON: f64 = 1e-12;

/// Largest graph the debug-build optimality check runs on
const CHECK_LIMIT: usize = 256;

/// Kruskal's algorithm: scan edges by increasing weight and keep each one
/// that joins two different trees.
///
/// On a disconnected graph the result is a minimum spanning forest with one
/// tree per connected component.
#[derive(Debug, Clone)]
pub struct KruskalMST {
    edges: Vec<Edge>,
    weight: f64,
}

impl KruskalMST {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let start = Instant::now();
        let vertex_count = graph.vertex_count();
        let mut candidates = graph.edges();
        candidates.sort_by(Edge::compare_weight);
        trace_time!(start, "kruskal_sort", candidates = candidates.len());

        let mut uf = UF::new(vertex_count);
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
        let mut weight = 0.0;
        for edge in candidates {
            if edges.len() + 1 >= vertex_count {
                break;
            }
            let (v, w) = edge.endpoints();
            // Endpoints come from the graph itself, so they are in range.
            if let Ok(true) = uf.union(v, w) {
                weight += edge.weight();
                edges.push(edge);
            }
        }

        let mst = Self { edges, weight };
        debug_assert!(mst.debug_check(graph));
        tracing::debug!(edges = mst.edges.len(), weight, "kruskal_complete");
        mst
    }

    /// Edges of the spanning forest, in the order they were accepted
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the forest's edge weights
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `check` for graphs small enough to afford its `O(V(V + E))` cut scan
    fn debug_check(&self, graph: &EdgeWeightedGraph) -> bool {
        graph.vertex_count() > CHECK_LIMIT || self.check(graph)
    }

    /// Verify that the forest is acyclic, spans every component of `graph`,
    /// sums to `weight()` and satisfies the cut optimality condition.
    pub fn check(&self, graph: &EdgeWeightedGraph) -> bool {
        let total: f64 = self.edges.iter().map(Edge::weight).sum();
        if (total - self.weight).abs() > FLOATING_POINT_EPSILON {
            tracing::warn!(total, weight = self.weight, "mst_weight_mismatch");
            return false;
        }

        let vertex_count = graph.vertex_count();
        let mut forest = UF::new(vertex_count);
        for edge in &self.edges {
            let (v, w) = edge.endpoints();
            if !matches!(forest.union(v, w), Ok(true)) {
                tracing::warn!(%edge, "mst_not_a_forest");
                return false;
            }
        }

        let all_edges = graph.edges();
        for edge in &all_edges {
            let (v, w) = edge.endpoints();
            if !matches!(forest.connected(v, w), Ok(true)) {
                tracing::warn!(%edge, "mst_not_spanning");
                return false;
            }
        }

        // Every tree edge must be a lightest edge across the cut its removal
        // opens.
        for (i, tree_edge) in self.edges.iter().enumerate() {
            let mut cut = UF::new(vertex_count);
            for (j, other) in self.edges.iter().enumerate() {
                if i != j {
                    let (v, w) = other.endpoints();
                    if let Err(err) = cut.union(v, w) {
                        tracing::warn!(%err, %other, "mst_edge_out_of_range");
                        return false;
                    }
                }
            }
            for edge in &all_edges {
                let (v, w) = edge.endpoints();
                if matches!(cut.connected(v, w), Ok(false))
                    && edge.weight() < tree_edge.weight()
                {
                    tracing::warn!(%edge, %tree_edge, "mst_cut_violation");
                    return false;
                }
            }
        }

        true
    }
}
