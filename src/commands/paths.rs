//! `graphkit paths` - depth-first or breadth-first paths from one source

use serde::Serialize;

use super::dispatch::CommandContext;
use super::{join_vertices, print_json};
use crate::cli::PathsArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::{Adjacency, Digraph, Graph};
use graphkit_core::search::{BreadthFirstPaths, DepthFirstPaths};

#[derive(Debug, Serialize)]
struct PathEntry {
    vertex: usize,
    path: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
struct PathsReport {
    source: usize,
    search: &'static str,
    paths: Vec<PathEntry>,
}

fn collect<G: Adjacency>(graph: &G, source: usize, bfs: bool) -> Result<PathsReport> {
    let vertex_count = graph.vertex_count();
    let mut paths = Vec::with_capacity(vertex_count);
    if bfs {
        let search = BreadthFirstPaths::new(graph, source)?;
        for v in 0..vertex_count {
            paths.push(PathEntry {
                vertex: v,
                path: search.path_to(v)?,
            });
        }
    } else {
        let search = DepthFirstPaths::new(graph, source)?;
        for v in 0..vertex_count {
            paths.push(PathEntry {
                vertex: v,
                path: search.path_to(v)?,
            });
        }
    }

    Ok(PathsReport {
        source,
        search: if bfs { "bfs" } else { "dfs" },
        paths,
    })
}

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let report = if args.directed {
        let digraph: Digraph = ctx.load(&args.input)?;
        collect(&digraph, args.source, args.bfs)?
    } else {
        let graph: Graph = ctx.load(&args.input)?;
        collect(&graph, args.source, args.bfs)?
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            for entry in &report.paths {
                match &entry.path {
                    Some(path) => println!(
                        "{} to {} ({}): {}",
                        report.source,
                        entry.vertex,
                        path.len() - 1,
                        join_vertices(path)
                    ),
                    None => println!("{} to {}: not connected", report.source, entry.vertex),
                }
            }
        }
    )
}
