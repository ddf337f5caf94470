use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use crate::topological::Topological;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    fn unreached(self) -> f64 {
        match self {
            Objective::Shortest => f64::INFINITY,
            Objective::Longest => f64::NEG_INFINITY,
        }
    }

    fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Objective::Shortest => candidate < best,
            Objective::Longest => candidate > best,
        }
    }
}

/// Distances and last edges shared by the shortest and longest searches
#[derive(Debug, Clone)]
struct DagPaths {
    source: usize,
    dist_to: Vec<f64>,
    edge_to: Vec<Option<DirectedEdge>>,
}

impl DagPaths {
    fn solve(graph: &EdgeWeightedDigraph, source: usize, objective: Objective) -> Result<Self> {
        let vertex_count = graph.vertex_count();
        ensure_vertex!(source, vertex_count);

        let topological = Topological::new(graph);
        let order = topological.order().ok_or(GraphError::NotAcyclic)?;

        let mut dist_to = vec![objective.unreached(); vertex_count];
        let mut edge_to: Vec<Option<DirectedEdge>> = vec![None; vertex_count];
        dist_to[source] = 0.0;

        let mut relaxed = 0usize;
        for &v in order {
            if v != source && edge_to[v].is_none() {
                continue;
            }
            for edge in graph.adj(v)? {
                let w = edge.to();
                let candidate = dist_to[v] + edge.weight();
                if objective.improves(candidate, dist_to[w]) {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(*edge);
                    relaxed += 1;
                }
            }
        }

        tracing::debug!(source, relaxed, ?objective, "dag_paths_complete");
        Ok(Self {
            source,
            dist_to,
            edge_to,
        })
    }

    fn dist_to(&self, v: usize) -> Result<f64> {
        ensure_vertex!(v, self.dist_to.len());
        Ok(self.dist_to[v])
    }

    fn has_path_to(&self, v: usize) -> Result<bool> {
        ensure_vertex!(v, self.edge_to.len());
        Ok(v == self.source || self.edge_to[v].is_some())
    }

    fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(edge) = self.edge_to[x] {
            path.push(edge);
            x = edge.from();
        }
        path.reverse();
        Ok(Some(path))
    }
}

/// Shortest paths from one source in an edge-weighted DAG.
///
/// `dist_to(v)` is `+inf` for vertices the source cannot reach.
#[derive(Debug, Clone)]
pub struct AcyclicSP {
    paths: DagPaths,
}

impl AcyclicSP {
    /// Fails with [`GraphError::NotAcyclic`] when `graph` has a directed cycle.
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        let paths = DagPaths::solve(graph, source, Objective::Shortest)?;
        Ok(Self { paths })
    }

    pub fn source(&self) -> usize {
        self.paths.source
    }

    pub fn dist_to(&self, v: usize) -> Result<f64> {
        self.paths.dist_to(v)
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.paths.has_path_to(v)
    }

    /// Edges of a shortest path from the source to `v`, or `None` if `v` is
    /// unreachable. The path to the source itself is empty.
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        self.paths.path_to(v)
    }
}

/// Longest paths from one source in an edge-weighted DAG, the basis of
/// critical-path scheduling.
///
/// `dist_to(v)` is `-inf` for vertices the source cannot reach.
#[derive(Debug, Clone)]
pub struct AcyclicLP {
    paths: DagPaths,
}

impl AcyclicLP {
    /// Fails with [`GraphError::NotAcyclic`] when `graph` has a directed cycle.
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &EdgeWeightedDigraph, source: usize) -> Result<Self> {
        let paths = DagPaths::solve(graph, source, Objective::Longest)?;
        Ok(Self { paths })
    }

    pub fn source(&self) -> usize {
        self.paths.source
    }

    pub fn dist_to(&self, v: usize) -> Result<f64> {
        self.paths.dist_to(v)
    }

    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        self.paths.has_path_to(v)
    }

    pub fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge>>> {
        self.paths.path_to(v)
    }
}
