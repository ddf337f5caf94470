//! `graphkit cycle` - find one cycle in a graph or digraph

use serde::Serialize;

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};
use crate::cli::CycleArgs;
use crate::output_by_format;
use graphkit_core::cycle::{Cycle, DirectedCycle, EdgeWeightedDirectedCycle};
use graphkit_core::error::Result;
use graphkit_core::graph::{Digraph, DirectedEdge, EdgeWeightedDigraph, Graph};

#[derive(Debug, Serialize)]
struct CycleReport {
    has_cycle: bool,
    /// Closed walk, first vertex repeated at the end
    cycle: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<Vec<DirectedEdge>>,
}

/// Execute the cycle command
pub fn execute(ctx: &CommandContext, args: &CycleArgs) -> Result<()> {
    let report = if args.weighted {
        let digraph: EdgeWeightedDigraph = ctx.load(&args.input)?;
        let finder = EdgeWeightedDirectedCycle::new(&digraph);
        let edges = finder.cycle().map(<[DirectedEdge]>::to_vec);
        let cycle = edges.as_ref().map(|edges| {
            let mut walk: Vec<usize> = edges.iter().map(DirectedEdge::from).collect();
            walk.extend(edges.last().map(DirectedEdge::to));
            walk
        });
        CycleReport {
            has_cycle: finder.has_cycle(),
            cycle,
            edges: Some(edges.unwrap_or_default()),
        }
    } else if args.directed {
        let digraph: Digraph = ctx.load(&args.input)?;
        let finder = DirectedCycle::new(&digraph);
        CycleReport {
            has_cycle: finder.has_cycle(),
            cycle: finder.cycle().map(<[usize]>::to_vec),
            edges: None,
        }
    } else {
        let graph: Graph = ctx.load(&args.input)?;
        let finder = Cycle::new(&graph);
        CycleReport {
            has_cycle: finder.has_cycle(),
            cycle: finder.cycle().map(<[usize]>::to_vec),
            edges: None,
        }
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            match &report.cycle {
                Some(cycle) => {
                    println!("cycle: {}", join_vertices(cycle));
                    for edge in report.edges.iter().flatten() {
                        println!("{}", edge);
                    }
                }
                None => println!("no cycle"),
            }
        }
    )
}
