//! CLI commands for graphkit

pub mod cc;
pub mod closure;
pub mod cycle;
pub mod dispatch;
pub mod generate;
pub mod mst;
pub mod paths;
pub mod scc;
pub mod sp;
pub mod stats;
pub mod topo;
pub mod uf;

use serde::Serialize;

use graphkit_core::error::Result;

/// Pretty-print a JSON document to stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Space-separated vertex list
pub(crate) fn join_vertices(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
