//! CLI argument parsing for graphkit
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{
    CcArgs, ClosureArgs, CycleArgs, GenerateArgs, GraphKind, InputArgs, MstArgs, PathsArgs,
    SccArgs, SpArgs, StatsArgs, TopoArgs, UfArgs,
};
pub use output::OutputFormat;

/// Graphkit - classical graph algorithms over edge-list files
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file value, then human)
    #[arg(long, global = true, value_parser = output::format_parser())]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphkit_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Explicit config file (defaults to ~/.config/graphkit/config.toml)
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Vertex, edge and degree statistics
    Stats(StatsArgs),

    /// Paths from a source vertex by depth-first or breadth-first search
    Paths(PathsArgs),

    /// Find a cycle
    Cycle(CycleArgs),

    /// Topological order of a digraph
    Topo(TopoArgs),

    /// Connected components of an undirected graph
    Cc(CcArgs),

    /// Strongly connected components of a digraph
    Scc(SccArgs),

    /// All-pairs reachability of a digraph
    Closure(ClosureArgs),

    /// Shortest or longest paths in an edge-weighted DAG
    Sp(SpArgs),

    /// Minimum spanning forest of an edge-weighted graph
    Mst(MstArgs),

    /// Run union-find over a list of connections
    Uf(UfArgs),

    /// Write a random graph in edge-list format
    Generate(GenerateArgs),
}
