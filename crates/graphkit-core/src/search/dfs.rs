use super::{explore, trace_back, DfsEvent};
use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::Adjacency;

/// Vertices reachable from one or more sources.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    marked: Vec<bool>,
    count: usize,
}

impl DepthFirstSearch {
    pub fn new<G: Adjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Reachability from any vertex in `sources`
    pub fn from_sources<G: Adjacency + ?Sized>(graph: &G, sources: &[usize]) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        for &s in sources {
            ensure_vertex!(s, vertex_count);
        }

        let mut marked = vec![false; vertex_count];
        let mut count = 0;
        for &s in sources {
            if !marked[s] {
                count += explore(graph, s, &mut marked, |_| {});
            }
        }
        Ok(Self { marked, count })
    }

    /// Is there a path from a source to `v`?
    pub fn marked(&self, v: usize) -> Result<bool> {
        ensure_vertex!(v, self.marked.len());
        Ok(self.marked[v])
    }

    /// Number of vertices reachable from the sources, sources included
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Depth-first search tree from a single source, for path reconstruction.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<usize>,
}

impl DepthFirstPaths {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new<G: Adjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        ensure_vertex!(source, vertex_count);

        let mut marked = vec![false; vertex_count];
        let mut edge_to = vec![source; vertex_count];
        explore(graph, source, &mut marked, |event| {
            if let DfsEvent::TreeEdge(v, w) = event {
                edge_to[w] = v;
            }
        });

        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        ensure_vertex!(v, self.marked.len());
        Ok(self.marked[v])
    }

    /// A path from the source to `v`, source first, or `None` if `v` is
    /// unreachable
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<usize>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let source = self.source;
        Ok(Some(trace_back(&self.edge_to, v, |x| x == source)))
    }
}

impl From<DepthFirstPaths> for DepthFirstSearch {
    fn from(paths: DepthFirstPaths) -> Self {
        let count = paths.marked.iter().filter(|&&m| m).count();
        DepthFirstSearch {
            marked: paths.marked,
            count,
        }
    }
}
