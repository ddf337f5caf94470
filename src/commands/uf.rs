//! `graphkit uf` - dynamic connectivity over a stream of pairs

use serde::Serialize;

use super::dispatch::{trace_command, CommandContext};
use super::print_json;
use crate::cli::UfArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::uf::Connections;

#[derive(Debug, Serialize)]
struct UnionReport {
    algorithm: String,
    sites: usize,
    components: usize,
    /// Pairs that merged two components, in input order
    unions: Vec<(usize, usize)>,
}

/// Execute the uf command
pub fn execute(ctx: &CommandContext, args: &UfArgs) -> Result<()> {
    let connections: Connections = ctx.read_input(&args.file)?.parse()?;
    trace_command!(ctx.cli, ctx.start, "parse_connections");

    let mut set = args.algorithm.build(connections.sites)?;
    let mut unions = Vec::new();
    for &(p, q) in &connections.pairs {
        if set.union(p, q)? {
            unions.push((p, q));
        }
    }

    let report = UnionReport {
        algorithm: args.algorithm.to_string(),
        sites: connections.sites,
        components: set.count(),
        unions,
    };

    output_by_format!(ctx.format,
        json => print_json(&report),
        human => {
            for (p, q) in &report.unions {
                println!("{} {}", p, q);
            }
            println!("{} components", report.components);
        }
    )
}
