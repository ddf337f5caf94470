//! `graphkit cc` - connected components of an undirected graph

use serde::Serialize;

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};
use crate::cli::CcArgs;
use crate::output_by_format;
use graphkit_core::connectivity::CC;
use graphkit_core::error::Result;
use graphkit_core::graph::{EdgeWeightedGraph, Graph};

#[derive(Debug, Serialize)]
struct ComponentsReport {
    count: usize,
    components: Vec<Vec<usize>>,
}

/// Execute the cc command
pub fn execute(ctx: &CommandContext, args: &CcArgs) -> Result<()> {
    let cc = if args.weighted {
        let graph: EdgeWeightedGraph = ctx.load(&args.input)?;
        CC::new(&graph)
    } else {
        let graph: Graph = ctx.load(&args.input)?;
        CC::new(&graph)
    };

    let report = ComponentsReport {
        count: cc.count(),
        components: cc.components(),
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            println!("{} components", report.count);
            for component in &report.components {
                println!("{}", join_vertices(component));
            }
        }
    )
}
