use crate::graph::Digraph;
use crate::search::{explore, DepthFirstOrder, DfsEvent};

use super::StronglyConnectedComponents;

/// Kosaraju-Sharir: search the digraph in the reverse postorder of its
/// reverse; every search tree is one strong component.
#[derive(Debug, Clone)]
pub struct KosarajuSharirSCC {
    id: Vec<usize>,
    count: usize,
}

impl KosarajuSharirSCC {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &Digraph) -> Self {
        let order = DepthFirstOrder::new(&graph.reverse());
        let mut marked = vec![false; graph.vertex_count()];
        let mut id = vec![0; graph.vertex_count()];
        let mut count = 0;

        for s in order.reverse_postorder() {
            if marked[s] {
                continue;
            }
            explore(graph, s, &mut marked, |event| {
                if let DfsEvent::Discover(v) = event {
                    id[v] = count;
                }
            });
            count += 1;
        }

        let scc = Self { id, count };
        debug_assert!(super::debug_check(graph, &scc));
        tracing::debug!(components = count, "kosaraju_complete");
        scc
    }
}

impl StronglyConnectedComponents for KosarajuSharirSCC {
    fn count(&self) -> usize {
        self.count
    }

    fn ids(&self) -> &[usize] {
        &self.id
    }
}
