//! Single-source shortest and longest paths in edge-weighted DAGs.
//!
//! Both searches relax every edge once, vertex by vertex in topological
//! order, so each distance is final the moment its vertex is visited.
//! Negative weights are fine; a directed cycle is not.

mod acyclic;

pub use acyclic::{AcyclicLP, AcyclicSP};
