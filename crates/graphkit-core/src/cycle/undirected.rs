use crate::graph::{Adjacency, Graph};

/// Finds a cycle in an undirected graph.
///
/// A self-loop `v-v` is reported as `[v, v]` and a pair of parallel edges
/// `v-w` as `[v, w, v]` before any search runs; otherwise a depth-first
/// search reports the first non-tree edge it meets.
#[derive(Debug, Clone)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &Graph) -> Self {
        let cycle = self_loop(graph)
            .or_else(|| parallel_edges(graph))
            .or_else(|| depth_first_cycle(graph));
        tracing::debug!(found = cycle.is_some(), "undirected_cycle");
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

fn self_loop(graph: &Graph) -> Option<Vec<usize>> {
    (0..graph.vertex_count()).find_map(|v| {
        let mut i = 0;
        while let Some(w) = graph.target_at(v, i) {
            if w == v {
                return Some(vec![v, v]);
            }
            i += 1;
        }
        None
    })
}

fn parallel_edges(graph: &Graph) -> Option<Vec<usize>> {
    let mut marked = vec![false; graph.vertex_count()];
    for v in 0..graph.vertex_count() {
        let mut i = 0;
        while let Some(w) = graph.target_at(v, i) {
            if marked[w] {
                return Some(vec![v, w, v]);
            }
            marked[w] = true;
            i += 1;
        }

        let mut i = 0;
        while let Some(w) = graph.target_at(v, i) {
            marked[w] = false;
            i += 1;
        }
    }
    None
}

/// Assumes no self-loops or parallel edges, so meeting any marked vertex
/// other than the parent closes a cycle through an ancestor.
fn depth_first_cycle(graph: &Graph) -> Option<Vec<usize>> {
    let vertex_count = graph.vertex_count();
    let mut marked = vec![false; vertex_count];
    let mut edge_to = vec![0; vertex_count];

    for s in 0..vertex_count {
        if marked[s] {
            continue;
        }
        marked[s] = true;
        // (vertex, parent, cursor); the root is its own parent
        let mut stack = vec![(s, s, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (v, parent, cursor) = *frame;
            let Some(w) = graph.target_at(v, cursor) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;

            if !marked[w] {
                marked[w] = true;
                edge_to[w] = v;
                stack.push((w, v, 0));
            } else if w != parent {
                let mut up = Vec::new();
                let mut x = v;
                while x != w {
                    up.push(x);
                    x = edge_to[x];
                }
                let mut cycle = vec![v, w];
                cycle.extend(up.into_iter().rev());
                return Some(cycle);
            }
        }
    }
    None
}
