//! Traversal engines: depth-first and breadth-first search, path
//! reconstruction and depth-first vertex orderings.
//!
//! Depth-first traversals run on an explicit stack of `(vertex, cursor)`
//! frames, so the depth of the search never touches the call stack.

mod bfs;
mod dfs;
mod order;

pub use bfs::BreadthFirstPaths;
pub use dfs::{DepthFirstPaths, DepthFirstSearch};
pub use order::DepthFirstOrder;

use crate::graph::Adjacency;

/// Event reported by [`explore`] in the order a recursive DFS would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// First visit of a vertex
    Discover(usize),
    /// `v-w` led to the discovery of `w`
    TreeEdge(usize, usize),
    /// Every neighbour of the vertex has been examined
    Finish(usize),
}

/// Depth-first search from `source` over unmarked vertices.
///
/// Marks every vertex it reaches and returns how many were newly marked.
/// `source` must be valid and unmarked.
pub(crate) fn explore<G, F>(graph: &G, source: usize, marked: &mut [bool], mut visit: F) -> usize
where
    G: Adjacency + ?Sized,
    F: FnMut(DfsEvent),
{
    let mut reached = 1;
    marked[source] = true;
    visit(DfsEvent::Discover(source));

    let mut stack = vec![(source, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let (v, cursor) = *frame;
        match graph.target_at(v, cursor) {
            Some(w) => {
                frame.1 += 1;
                if !marked[w] {
                    marked[w] = true;
                    reached += 1;
                    visit(DfsEvent::TreeEdge(v, w));
                    visit(DfsEvent::Discover(w));
                    stack.push((w, 0));
                }
            }
            None => {
                stack.pop();
                visit(DfsEvent::Finish(v));
            }
        }
    }
    reached
}

/// Walk `edge_to` links back from `v` until `is_root` holds, returning the
/// vertices root first.
pub(crate) fn trace_back(edge_to: &[usize], v: usize, is_root: impl Fn(usize) -> bool) -> Vec<usize> {
    let mut path = vec![v];
    let mut x = v;
    while !is_root(x) {
        x = edge_to[x];
        path.push(x);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Digraph;

    #[test]
    fn test_explore_event_order_matches_recursion() {
        let digraph: Digraph = "4 3 0 1 1 2 0 3".parse().unwrap();
        let mut marked = vec![false; 4];
        let mut events = Vec::new();
        let reached = explore(&digraph, 0, &mut marked, |event| events.push(event));

        assert_eq!(reached, 4);
        assert_eq!(
            events,
            vec![
                DfsEvent::Discover(0),
                DfsEvent::TreeEdge(0, 1),
                DfsEvent::Discover(1),
                DfsEvent::TreeEdge(1, 2),
                DfsEvent::Discover(2),
                DfsEvent::Finish(2),
                DfsEvent::Finish(1),
                DfsEvent::TreeEdge(0, 3),
                DfsEvent::Discover(3),
                DfsEvent::Finish(3),
                DfsEvent::Finish(0),
            ]
        );
    }

    #[test]
    fn test_explore_deep_chain_does_not_recurse() {
        let n = 200_000;
        let mut digraph = Digraph::new(n);
        for v in 0..n - 1 {
            digraph.add_edge(v, v + 1).unwrap();
        }
        let mut marked = vec![false; n];
        assert_eq!(explore(&digraph, 0, &mut marked, |_| {}), n);
    }

    #[test]
    fn test_trace_back() {
        let edge_to = vec![0, 0, 1, 2];
        assert_eq!(trace_back(&edge_to, 3, |x| x == 0), vec![0, 1, 2, 3]);
        assert_eq!(trace_back(&edge_to, 0, |x| x == 0), vec![0]);
    }
}
