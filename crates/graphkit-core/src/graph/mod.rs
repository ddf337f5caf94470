//! Graph representations
//!
//! Vertices are positional identifiers in `[0, V)`; every representation
//! fixes `V` at construction and grows only by `add_edge`:
//! - `Graph`: undirected, self-loops and parallel edges permitted
//! - `Digraph`: directed, out-neighbours only
//! - `EdgeWeightedGraph` / `EdgeWeightedDigraph`: adjacency of weighted edges
//! - `AdjMatrixEdgeWeightedDigraph`: dense matrix, at most one edge per pair
//!
//! Algorithms never mutate the graph they run on; `Digraph::reverse` and
//! `Clone` produce new structures.

mod digraph;
mod edge;
pub mod generate;
mod matrix;
pub(crate) mod parse;
mod undirected;
mod weighted;

pub use digraph::Digraph;
pub use edge::{DirectedEdge, Edge};
pub use generate::Generator;
pub use matrix::AdjMatrixEdgeWeightedDigraph;
pub use undirected::Graph;
pub use weighted::{EdgeWeightedDigraph, EdgeWeightedGraph};

/// Positional adjacency access shared by the traversal engines.
///
/// Implementors expose each vertex's adjacency list by slot index so that a
/// traversal can resume a vertex from an explicit `(vertex, cursor)` frame
/// instead of recursing.
pub trait Adjacency {
    /// Number of vertices `V`
    fn vertex_count(&self) -> usize;

    /// Vertex reached through the `i`th adjacency slot of `v`, or `None`
    /// once `i` runs past the end of the list.
    ///
    /// `v` must already be validated by the caller.
    fn target_at(&self, v: usize, i: usize) -> Option<usize>;
}

/// Adjacency whose edges have no direction: `w` is listed in `adj(v)`
/// exactly as often as `v` is listed in `adj(w)`.
pub trait Undirected: Adjacency {}

impl Undirected for Graph {}
impl Undirected for EdgeWeightedGraph {}
