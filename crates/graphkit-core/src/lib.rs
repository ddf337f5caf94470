//! Graphkit Core Library
//!
//! Graph representations and the classical algorithms built on them:
//! traversal, cycles, topological order, connectivity, strong components,
//! DAG shortest/longest paths, minimum spanning forests and union-find.

mod capacity;
pub mod config;
pub mod connectivity;
pub mod cycle;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod mst;
pub mod scc;
pub mod search;
pub mod sp;
pub mod topological;
pub mod uf;
