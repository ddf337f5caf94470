//! Command argument structures

use clap::{Args, ValueEnum};

use graphkit_core::{scc, uf};

/// Graph input shared by every analysis command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Edge-list file (`V`, `E`, then one edge per line); `-` reads stdin
    #[arg(default_value = "-")]
    pub file: String,
}

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Read a digraph
    #[arg(long)]
    pub directed: bool,

    /// Read weighted edges (`v w weight`)
    #[arg(long)]
    pub weighted: bool,

    /// Also print every adjacency list
    #[arg(long)]
    pub adjacency: bool,
}

/// Arguments for the paths command.
#[derive(Args, Debug)]
pub struct PathsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Source vertex
    #[arg(long, short)]
    pub source: usize,

    /// Breadth-first search (shortest paths by edge count)
    #[arg(long)]
    pub bfs: bool,

    /// Read a digraph
    #[arg(long)]
    pub directed: bool,
}

/// Arguments for the cycle command.
#[derive(Args, Debug)]
pub struct CycleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Read a digraph
    #[arg(long)]
    pub directed: bool,

    /// Read an edge-weighted digraph and report cycle edges
    #[arg(long)]
    pub weighted: bool,
}

/// Arguments for the topo command.
#[derive(Args, Debug)]
pub struct TopoArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Read an edge-weighted digraph
    #[arg(long)]
    pub weighted: bool,
}

/// Arguments for the cc command.
#[derive(Args, Debug)]
pub struct CcArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Read an edge-weighted graph
    #[arg(long)]
    pub weighted: bool,
}

/// Arguments for the scc command.
#[derive(Args, Debug)]
pub struct SccArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// kosaraju, tarjan or gabow
    #[arg(long, short, default_value_t)]
    pub algorithm: scc::Algorithm,
}

/// Arguments for the closure command.
#[derive(Args, Debug)]
pub struct ClosureArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the sp command.
#[derive(Args, Debug)]
pub struct SpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Source vertex
    #[arg(long, short)]
    pub source: usize,

    /// Longest paths instead of shortest
    #[arg(long)]
    pub longest: bool,
}

/// Arguments for the mst command.
#[derive(Args, Debug)]
pub struct MstArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the uf command.
#[derive(Args, Debug)]
pub struct UfArgs {
    /// Site count followed by `p q` pairs; `-` reads stdin
    #[arg(default_value = "-")]
    pub file: String,

    /// rank, weighted, quick-union or quick-find
    #[arg(long, short, default_value_t)]
    pub algorithm: uf::Algorithm,
}

/// Kinds of random graph the generate command can write.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Simple undirected graph
    Graph,
    /// Simple digraph
    Digraph,
    /// Directed acyclic graph
    Dag,
    /// Edge-weighted graph (self-loops and parallel edges allowed)
    WeightedGraph,
    /// Edge-weighted DAG
    WeightedDag,
    /// Edge-weighted digraph with at most one edge per ordered pair
    Matrix,
}

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Kind of graph to generate
    #[arg(value_enum)]
    pub kind: GraphKind,

    /// Number of vertices
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Number of edges
    #[arg(long, short = 'e')]
    pub edges: usize,

    /// Random seed (defaults to the config file value)
    #[arg(long)]
    pub seed: Option<u64>,
}
