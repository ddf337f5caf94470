//! Command implementations for all graphkit commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use graphkit_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Stats(args) => commands::stats::execute(ctx, args),
            Commands::Paths(args) => commands::paths::execute(ctx, args),
            Commands::Cycle(args) => commands::cycle::execute(ctx, args),
            Commands::Topo(args) => commands::topo::execute(ctx, args),
            Commands::Cc(args) => commands::cc::execute(ctx, args),
            Commands::Scc(args) => commands::scc::execute(ctx, args),
            Commands::Closure(args) => commands::closure::execute(ctx, args),
            Commands::Sp(args) => commands::sp::execute(ctx, args),
            Commands::Mst(args) => commands::mst::execute(ctx, args),
            Commands::Uf(args) => commands::uf::execute(ctx, args),
            Commands::Generate(args) => commands::generate::execute(ctx, args),
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}
