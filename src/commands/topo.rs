//! `graphkit topo` - topological order of a digraph

use serde::Serialize;

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};
use crate::cli::TopoArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::{Digraph, EdgeWeightedDigraph};
use graphkit_core::topological::Topological;

#[derive(Debug, Serialize)]
struct TopoReport {
    has_order: bool,
    order: Option<Vec<usize>>,
}

/// Execute the topo command
///
/// A cyclic digraph is a legitimate answer ("no order"), not an error.
pub fn execute(ctx: &CommandContext, args: &TopoArgs) -> Result<()> {
    let topological = if args.weighted {
        let digraph: EdgeWeightedDigraph = ctx.load(&args.input)?;
        Topological::new(&digraph)
    } else {
        let digraph: Digraph = ctx.load(&args.input)?;
        Topological::new(&digraph)
    };

    let report = TopoReport {
        has_order: topological.has_order(),
        order: topological.order().map(<[usize]>::to_vec),
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            match &report.order {
                Some(order) => println!("{}", join_vertices(order)),
                None => println!("no topological order: digraph has a cycle"),
            }
        }
    )
}
