//! `graphkit sp` - shortest or longest paths in an edge-weighted DAG

use serde::Serialize;

use super::dispatch::CommandContext;
use super::print_json;
use crate::cli::SpArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::{DirectedEdge, EdgeWeightedDigraph};
use graphkit_core::sp::{AcyclicLP, AcyclicSP};

#[derive(Debug, Serialize)]
struct PathEntry {
    vertex: usize,
    /// `None` when the vertex is unreachable
    distance: Option<f64>,
    path: Option<Vec<DirectedEdge>>,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    source: usize,
    objective: &'static str,
    paths: Vec<PathEntry>,
}

/// Execute the sp command
pub fn execute(ctx: &CommandContext, args: &SpArgs) -> Result<()> {
    let digraph: EdgeWeightedDigraph = ctx.load(&args.input)?;
    let vertices = digraph.vertex_count();
    let mut paths = Vec::with_capacity(vertices);

    if args.longest {
        let lp = AcyclicLP::new(&digraph, args.source)?;
        for v in 0..vertices {
            let path = lp.path_to(v)?;
            let distance = path.as_ref().map(|_| lp.dist_to(v)).transpose()?;
            paths.push(PathEntry {
                vertex: v,
                distance,
                path,
            });
        }
    } else {
        let sp = AcyclicSP::new(&digraph, args.source)?;
        for v in 0..vertices {
            let path = sp.path_to(v)?;
            let distance = path.as_ref().map(|_| sp.dist_to(v)).transpose()?;
            paths.push(PathEntry {
                vertex: v,
                distance,
                path,
            });
        }
    }

    let report = PathsReport {
        source: args.source,
        objective: if args.longest { "longest" } else { "shortest" },
        paths,
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            for entry in &report.paths {
                match (&entry.path, entry.distance) {
                    (Some(path), Some(distance)) => {
                        print!("{} to {} ({:.2})  ", report.source, entry.vertex, distance);
                        for edge in path {
                            print!("{}   ", edge);
                        }
                        println!();
                    }
                    _ => println!("{} to {}         no path", report.source, entry.vertex),
                }
            }
        }
    )
}
