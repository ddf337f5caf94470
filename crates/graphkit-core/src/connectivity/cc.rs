use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::Undirected;
use crate::search::{explore, DfsEvent};

/// Connected components of an undirected graph, labelled `0..count()` in
/// order of their smallest vertex.
#[derive(Debug, Clone)]
pub struct CC {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl CC {
    /// Accepts `Graph` or `EdgeWeightedGraph`
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new<G: Undirected + ?Sized>(graph: &G) -> Self {
        let vertex_count = graph.vertex_count();
        let mut marked = vec![false; vertex_count];
        let mut id = vec![0; vertex_count];
        let mut size = Vec::new();

        for s in 0..vertex_count {
            if marked[s] {
                continue;
            }
            let label = size.len();
            let reached = explore(graph, s, &mut marked, |event| {
                if let DfsEvent::Discover(v) = event {
                    id[v] = label;
                }
            });
            size.push(reached);
        }

        tracing::debug!(components = size.len(), "connected_components");
        Self { id, size }
    }

    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component label of `v`
    pub fn id(&self, v: usize) -> Result<usize> {
        ensure_vertex!(v, self.id.len());
        Ok(self.id[v])
    }

    /// Number of vertices in `v`'s component
    pub fn size(&self, v: usize) -> Result<usize> {
        Ok(self.size[self.id(v)?])
    }

    pub fn connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Vertices grouped by component label
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components: Vec<Vec<usize>> = self.size.iter().map(|&n| Vec::with_capacity(n)).collect();
        for (v, &label) in self.id.iter().enumerate() {
            components[label].push(v);
        }
        components
    }
}
