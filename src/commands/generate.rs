//! `graphkit generate` - write a seeded random graph in edge-list format

use clap::ValueEnum;
use serde::Serialize;

use super::dispatch::CommandContext;
use super::print_json;
use crate::cli::{GenerateArgs, GraphKind};
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::{Digraph, DirectedEdge, Edge, Generator, Graph};

/// Edges of a generated graph, in the shape its kind serializes to
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum EdgeList {
    Unweighted(Vec<(usize, usize)>),
    Weighted(Vec<Edge>),
    Directed(Vec<DirectedEdge>),
}

impl EdgeList {
    fn len(&self) -> usize {
        match self {
            EdgeList::Unweighted(edges) => edges.len(),
            EdgeList::Weighted(edges) => edges.len(),
            EdgeList::Directed(edges) => edges.len(),
        }
    }

    /// One edge per line: `v w` or `v w weight`
    fn lines(&self) -> Vec<String> {
        match self {
            EdgeList::Unweighted(edges) => edges.iter().map(|(v, w)| format!("{} {}", v, w)).collect(),
            EdgeList::Weighted(edges) => edges
                .iter()
                .map(|edge| {
                    let (v, w) = edge.endpoints();
                    format!("{} {} {}", v, w, edge.weight())
                })
                .collect(),
            EdgeList::Directed(edges) => edges
                .iter()
                .map(|edge| format!("{} {} {}", edge.from(), edge.to(), edge.weight()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GeneratedGraph {
    kind: String,
    seed: u64,
    vertices: usize,
    edges: EdgeList,
}

fn graph_edges(graph: &Graph) -> EdgeList {
    EdgeList::Unweighted(graph.edges())
}

fn digraph_edges(digraph: &Digraph) -> EdgeList {
    EdgeList::Unweighted(digraph.edges().collect())
}

/// Execute the generate command
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let seed = ctx.config.seed_or_default(args.seed);
    let mut generator = Generator::seeded(seed);
    let (v, e) = (args.vertices, args.edges);

    let edges = match args.kind {
        GraphKind::Graph => graph_edges(&generator.simple_graph(v, e)?),
        GraphKind::Digraph => digraph_edges(&generator.simple_digraph(v, e)?),
        GraphKind::Dag => digraph_edges(&generator.dag(v, e)?),
        GraphKind::WeightedGraph => EdgeList::Weighted(generator.edge_weighted_graph(v, e)?.edges()),
        GraphKind::WeightedDag => {
            EdgeList::Directed(generator.edge_weighted_dag(v, e)?.edges().copied().collect())
        }
        GraphKind::Matrix => EdgeList::Directed(
            generator
                .adj_matrix_digraph(v, e)?
                .to_edge_weighted_digraph()?
                .edges()
                .copied()
                .collect(),
        ),
    };
    tracing::debug!(seed, vertices = v, edges = edges.len(), "graph_generated");

    let generated = GeneratedGraph {
        kind: args
            .kind
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default(),
        seed,
        vertices: v,
        edges,
    };

    output_by_format!(ctx.format,
        json => print_json(&generated),
        human => {
            println!("{}", generated.vertices);
            println!("{}", generated.edges.len());
            for line in generated.edges.lines() {
                println!("{}", line);
            }
        }
    )
}
