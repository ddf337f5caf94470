//! `graphkit stats` - size and degree summary of any graph representation

use std::fmt::Display;

use serde::Serialize;

use super::dispatch::CommandContext;
use super::print_json;
use crate::cli::StatsArgs;
use crate::output_by_format;
use graphkit_core::error::Result;
use graphkit_core::graph::{Digraph, EdgeWeightedDigraph, EdgeWeightedGraph, Graph};

#[derive(Debug, Serialize)]
struct Stats {
    kind: &'static str,
    vertices: usize,
    edges: usize,
    /// Largest degree (out-degree for digraphs)
    max_degree: usize,
    average_degree: f64,
    self_loops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_weight: Option<f64>,
}

fn average(total: usize, vertices: usize) -> f64 {
    if vertices == 0 {
        0.0
    } else {
        total as f64 / vertices as f64
    }
}

fn graph_stats(graph: &Graph) -> Stats {
    Stats {
        kind: "graph",
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        max_degree: graph.max_degree(),
        average_degree: graph.average_degree(),
        self_loops: graph.self_loop_count(),
        total_weight: None,
    }
}

fn digraph_stats(digraph: &Digraph) -> Stats {
    let vertices = digraph.vertex_count();
    Stats {
        kind: "digraph",
        vertices,
        edges: digraph.edge_count(),
        max_degree: (0..vertices)
            .filter_map(|v| digraph.out_degree(v).ok())
            .max()
            .unwrap_or(0),
        average_degree: average(digraph.edge_count(), vertices),
        self_loops: digraph.edges().filter(|(v, w)| v == w).count(),
        total_weight: None,
    }
}

fn weighted_graph_stats(graph: &EdgeWeightedGraph) -> Stats {
    let vertices = graph.vertex_count();
    let edges = graph.edges();
    Stats {
        kind: "weighted-graph",
        vertices,
        edges: graph.edge_count(),
        max_degree: (0..vertices)
            .filter_map(|v| graph.degree(v).ok())
            .max()
            .unwrap_or(0),
        average_degree: average(2 * graph.edge_count(), vertices),
        self_loops: edges
            .iter()
            .filter(|edge| {
                let (v, w) = edge.endpoints();
                v == w
            })
            .count(),
        total_weight: Some(edges.iter().map(|edge| edge.weight()).sum()),
    }
}

fn weighted_digraph_stats(digraph: &EdgeWeightedDigraph) -> Stats {
    let vertices = digraph.vertex_count();
    Stats {
        kind: "weighted-digraph",
        vertices,
        edges: digraph.edge_count(),
        max_degree: (0..vertices)
            .filter_map(|v| digraph.out_degree(v).ok())
            .max()
            .unwrap_or(0),
        average_degree: average(digraph.edge_count(), vertices),
        self_loops: digraph.edges().filter(|edge| edge.from() == edge.to()).count(),
        total_weight: Some(digraph.edges().map(|edge| edge.weight()).sum()),
    }
}

/// Execute the stats command
pub fn execute(ctx: &CommandContext, args: &StatsArgs) -> Result<()> {
    let (stats, adjacency): (Stats, Box<dyn Display>) = match (args.directed, args.weighted) {
        (false, false) => {
            let graph: Graph = ctx.load(&args.input)?;
            (graph_stats(&graph), Box::new(graph) as Box<dyn Display>)
        }
        (true, false) => {
            let digraph: Digraph = ctx.load(&args.input)?;
            (digraph_stats(&digraph), Box::new(digraph) as Box<dyn Display>)
        }
        (false, true) => {
            let graph: EdgeWeightedGraph = ctx.load(&args.input)?;
            (weighted_graph_stats(&graph), Box::new(graph) as Box<dyn Display>)
        }
        (true, true) => {
            let digraph: EdgeWeightedDigraph = ctx.load(&args.input)?;
            (weighted_digraph_stats(&digraph), Box::new(digraph) as Box<dyn Display>)
        }
    };

    output_by_format!(ctx.format,
        json => print_json(&stats),
        human => {
            println!("kind: {}", stats.kind);
            println!("vertices: {}", stats.vertices);
            println!("edges: {}", stats.edges);
            println!("max degree: {}", stats.max_degree);
            println!("average degree: {:.2}", stats.average_degree);
            println!("self-loops: {}", stats.self_loops);
            if let Some(total) = stats.total_weight {
                println!("total weight: {:.5}", total);
            }
            if args.adjacency {
                print!("{}", adjacency);
            }
        }
    )
}
