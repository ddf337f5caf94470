//! `graphkit closure` - all-pairs reachability table

use serde::Serialize;

use super::dispatch::CommandContext;
use super::print_json;
use crate::cli::ClosureArgs;
use crate::output_by_format;
use graphkit_core::connectivity::TransitiveClosure;
use graphkit_core::error::Result;
use graphkit_core::graph::Digraph;

#[derive(Debug, Serialize)]
struct ClosureReport {
    vertices: usize,
    /// `reachable[v]` lists every `w` reachable from `v`, `v` included
    reachable: Vec<Vec<usize>>,
}

/// Execute the closure command
pub fn execute(ctx: &CommandContext, args: &ClosureArgs) -> Result<()> {
    let digraph: Digraph = ctx.load(&args.input)?;
    let closure = TransitiveClosure::new(&digraph)?;
    let vertices = digraph.vertex_count();

    let mut reachable = Vec::with_capacity(vertices);
    for v in 0..vertices {
        let mut row = Vec::new();
        for w in 0..vertices {
            if closure.reachable(v, w)? {
                row.push(w);
            }
        }
        reachable.push(row);
    }
    let report = ClosureReport {
        vertices,
        reachable,
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            print!("    ");
            for w in 0..report.vertices {
                print!("{:3}", w);
            }
            println!();
            for (v, row) in report.reachable.iter().enumerate() {
                print!("{:3}:", v);
                for w in 0..report.vertices {
                    print!("{:>3}", if row.contains(&w) { "T" } else { "" });
                }
                println!();
            }
        }
    )
}
