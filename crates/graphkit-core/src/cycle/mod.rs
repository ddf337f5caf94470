//! Cycle detection for undirected graphs, digraphs and edge-weighted
//! digraphs. Each finder reports at most one cycle, as a closed walk whose
//! first and last vertices coincide.

mod directed;
mod undirected;

pub use directed::{DirectedCycle, EdgeWeightedDirectedCycle};
pub use undirected::Cycle;

pub(crate) use directed::find_directed_cycle;
