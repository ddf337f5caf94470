use crate::graph::{Adjacency, DirectedEdge, EdgeWeightedDigraph};

/// Depth-first search for a directed cycle, stopping at the first edge that
/// points back into the current search path.
///
/// The cycle comes back as adjacency slots `(v, i)` (the `i`th edge leaving
/// `v`) in walk order, so callers can recover either vertices or the exact
/// parallel edge taken.
pub(crate) fn find_directed_cycle<G: Adjacency + ?Sized>(graph: &G) -> Option<Vec<(usize, usize)>> {
    let vertex_count = graph.vertex_count();
    let mut marked = vec![false; vertex_count];
    let mut on_stack = vec![false; vertex_count];
    let mut edge_to = vec![(0usize, 0usize); vertex_count];

    for s in 0..vertex_count {
        if marked[s] {
            continue;
        }
        marked[s] = true;
        on_stack[s] = true;
        let mut stack = vec![(s, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (v, cursor) = *frame;
            let Some(w) = graph.target_at(v, cursor) else {
                on_stack[v] = false;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if !marked[w] {
                marked[w] = true;
                on_stack[w] = true;
                edge_to[w] = (v, cursor);
                stack.push((w, 0));
            } else if on_stack[w] {
                let mut slots = vec![(v, cursor)];
                let mut x = v;
                while x != w {
                    let slot = edge_to[x];
                    slots.push(slot);
                    x = slot.0;
                }
                slots.reverse();
                return Some(slots);
            }
        }
    }
    None
}

/// Finds a directed cycle, if one exists.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new<G: Adjacency + ?Sized>(graph: &G) -> Self {
        let cycle = find_directed_cycle(graph).map(|slots| {
            let mut vertices = Vec::with_capacity(slots.len() + 1);
            vertices.push(slots[0].0);
            vertices.extend(slots.iter().filter_map(|&(v, i)| graph.target_at(v, i)));
            vertices
        });
        debug_assert!(cycle
            .as_ref()
            .map_or(true, |c| c.first() == c.last() && c.len() >= 2));
        tracing::debug!(found = cycle.is_some(), "directed_cycle");
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The cycle as a closed walk: first and last vertex coincide
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Finds a directed cycle in an edge-weighted digraph, reported as the
/// edges taken.
#[derive(Debug, Clone)]
pub struct EdgeWeightedDirectedCycle {
    cycle: Option<Vec<DirectedEdge>>,
}

impl EdgeWeightedDirectedCycle {
    pub fn new(graph: &EdgeWeightedDigraph) -> Self {
        let cycle = find_directed_cycle(graph).map(|slots| {
            slots
                .iter()
                .filter_map(|&(v, i)| graph.edge_at(v, i).copied())
                .collect::<Vec<_>>()
        });
        debug_assert!(cycle.as_ref().map_or(true, |edges| {
            edges.windows(2).all(|pair| pair[0].to() == pair[1].from())
                && edges.first().map(DirectedEdge::from) == edges.last().map(DirectedEdge::to)
        }));
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }
}
