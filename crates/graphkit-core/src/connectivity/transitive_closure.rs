use std::time::Instant;

use crate::error::Result;
use crate::graph::Adjacency;
use crate::search::DepthFirstSearch;
use crate::{ensure_vertex, trace_time};

/// All-pairs reachability: one depth-first search per vertex, so
/// construction costs `O(V(V + E))` time and `O(V^2)` space.
#[derive(Debug, Clone)]
pub struct TransitiveClosure {
    searches: Vec<DepthFirstSearch>,
}

impl TransitiveClosure {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new<G: Adjacency + ?Sized>(graph: &G) -> Result<Self> {
        let start = Instant::now();
        let searches = (0..graph.vertex_count())
            .map(|v| DepthFirstSearch::new(graph, v))
            .collect::<Result<Vec<_>>>()?;
        trace_time!(start, "transitive_closure", vertices = searches.len());
        Ok(Self { searches })
    }

    /// Is there a directed path from `v` to `w`? Every vertex reaches itself.
    pub fn reachable(&self, v: usize, w: usize) -> Result<bool> {
        ensure_vertex!(v, self.searches.len());
        self.searches[v].marked(w)
    }
}
