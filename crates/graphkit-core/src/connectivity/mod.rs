//! Connectivity queries: connected components of undirected graphs and
//! all-pairs reachability of digraphs.

mod cc;
mod transitive_closure;

pub use cc::CC;
pub use transitive_closure::TransitiveClosure;
