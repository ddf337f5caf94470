//! Minimum spanning forests of edge-weighted graphs.

mod kruskal;

pub use kruskal::KruskalMST;
