//! `graphkit scc` - strongly connected components of a digraph

use serde::Serialize;

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};
use crate::cli::SccArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::Digraph;

#[derive(Debug, Serialize)]
struct SccReport {
    algorithm: String,
    count: usize,
    /// Vertices of each component, indexed by component id
    components: Vec<Vec<usize>>,
}

/// Execute the scc command
pub fn execute(ctx: &CommandContext, args: &SccArgs) -> Result<()> {
    let digraph: Digraph = ctx.load(&args.input)?;
    let scc = args.algorithm.compute(&digraph);

    let report = SccReport {
        algorithm: args.algorithm.to_string(),
        count: scc.count(),
        components: scc.components(),
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            println!("{} strong components", report.count);
            for component in &report.components {
                println!("{}", join_vertices(component));
            }
        }
    )
}
