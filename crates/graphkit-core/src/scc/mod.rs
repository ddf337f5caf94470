//! Strongly connected components.
//!
//! Three algorithms share the [`StronglyConnectedComponents`] contract and
//! always produce the same partition, up to the numbering of components:
//! - `KosarajuSharirSCC`: two passes, the first over the reversed digraph
//! - `TarjanSCC`: one pass with preorder numbers and low links
//! - `GabowSCC`: one pass with a path stack and a root-boundary stack
//!
//! Debug builds cross-check results on small digraphs against
//! [`TransitiveClosure`].

mod gabow;
mod kosaraju;
mod tarjan;

use std::fmt;
use std::str::FromStr;

use crate::connectivity::TransitiveClosure;
use crate::ensure_vertex;
use crate::error::{GraphError, Result};
use crate::graph::Digraph;

pub use gabow::GabowSCC;
pub use kosaraju::KosarajuSharirSCC;
pub use tarjan::TarjanSCC;

pub trait StronglyConnectedComponents {
    /// Number of strongly connected components
    fn count(&self) -> usize;

    /// Component label of every vertex, indexed by vertex
    fn ids(&self) -> &[usize];

    /// Component label of `v`, in `[0, count())`
    fn id(&self, v: usize) -> Result<usize> {
        let ids = self.ids();
        ensure_vertex!(v, ids.len());
        Ok(ids[v])
    }

    /// Are `v` and `w` mutually reachable?
    fn strongly_connected(&self, v: usize, w: usize) -> Result<bool> {
        Ok(self.id(v)? == self.id(w)?)
    }

    /// Vertices grouped by component label
    fn components(&self) -> Vec<Vec<usize>> {
        let mut components = vec![Vec::new(); self.count()];
        for (v, &label) in self.ids().iter().enumerate() {
            components[label].push(v);
        }
        components
    }
}

/// Does `scc` put `v` and `w` together exactly when each reaches the other?
pub fn agrees_with_closure(graph: &Digraph, scc: &dyn StronglyConnectedComponents) -> bool {
    let Ok(closure) = TransitiveClosure::new(graph) else {
        return false;
    };
    let vertex_count = graph.vertex_count();
    (0..vertex_count).all(|v| {
        (0..vertex_count).all(|w| {
            let mutual = matches!(
                (closure.reachable(v, w), closure.reachable(w, v)),
                (Ok(true), Ok(true))
            );
            matches!(scc.strongly_connected(v, w), Ok(together) if together == mutual)
        })
    })
}

/// Largest digraph the debug-build closure cross-check runs on
const CLOSURE_CHECK_LIMIT: usize = 256;

/// `agrees_with_closure` for digraphs small enough to afford it
pub(crate) fn debug_check(graph: &Digraph, scc: &dyn StronglyConnectedComponents) -> bool {
    graph.vertex_count() > CLOSURE_CHECK_LIMIT || agrees_with_closure(graph, scc)
}

/// Selects an SCC algorithm at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Kosaraju,
    Tarjan,
    Gabow,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kosaraju, Algorithm::Tarjan, Algorithm::Gabow];

    pub fn compute(self, graph: &Digraph) -> Box<dyn StronglyConnectedComponents> {
        match self {
            Algorithm::Kosaraju => Box::new(KosarajuSharirSCC::new(graph)),
            Algorithm::Tarjan => Box::new(TarjanSCC::new(graph)),
            Algorithm::Gabow => Box::new(GabowSCC::new(graph)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "kosaraju" | "kosaraju-sharir" => Ok(Algorithm::Kosaraju),
            "tarjan" => Ok(Algorithm::Tarjan),
            "gabow" => Ok(Algorithm::Gabow),
            other => Err(GraphError::invalid_value("SCC algorithm", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Kosaraju => write!(f, "kosaraju"),
            Algorithm::Tarjan => write!(f, "tarjan"),
            Algorithm::Gabow => write!(f, "gabow"),
        }
    }
}
