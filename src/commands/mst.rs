//! `graphkit mst` - Kruskal minimum spanning forest

use serde::Serialize;

use super::dispatch::CommandContext;
use super::print_json;
use crate::cli::MstArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::{Edge, EdgeWeightedGraph};
use graphkit_core::mst::KruskalMST;

#[derive(Debug, Serialize)]
struct MstReport {
    weight: f64,
    edges: Vec<Edge>,
}

/// Execute the mst command
pub fn execute(ctx: &CommandContext, args: &MstArgs) -> Result<()> {
    let graph: EdgeWeightedGraph = ctx.load(&args.input)?;
    let mst = KruskalMST::new(&graph);

    let report = MstReport {
        weight: mst.weight(),
        edges: mst.edges().to_vec(),
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            for edge in &report.edges {
                println!("{}", edge);
            }
            println!("{:.5}", report.weight);
        }
    )
}
