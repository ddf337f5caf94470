use crate::graph::{Adjacency, Digraph};

use super::StronglyConnectedComponents;

/// Tarjan: one depth-first pass tracking the lowest preorder number
/// reachable from each subtree.
#[derive(Debug, Clone)]
pub struct TarjanSCC {
    id: Vec<usize>,
    count: usize,
}

impl TarjanSCC {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &Digraph) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut low = vec![0; n];
        let mut id = vec![0; n];
        let mut pre = 0;
        let mut count = 0;
        let mut stack = Vec::new();
        // (vertex, cursor, lowest link seen from its subtree)
        let mut frames: Vec<(usize, usize, usize)> = Vec::new();

        for s in 0..n {
            if marked[s] {
                continue;
            }
            marked[s] = true;
            low[s] = pre;
            pre += 1;
            stack.push(s);
            frames.push((s, 0, low[s]));

            while let Some(frame) = frames.last_mut() {
                let (v, cursor, min) = *frame;
                if let Some(w) = graph.target_at(v, cursor) {
                    frame.1 += 1;
                    if marked[w] {
                        frame.2 = min.min(low[w]);
                    } else {
                        marked[w] = true;
                        low[w] = pre;
                        pre += 1;
                        stack.push(w);
                        frames.push((w, 0, low[w]));
                    }
                    continue;
                }

                frames.pop();
                if min < low[v] {
                    low[v] = min;
                } else {
                    // v is the root of a component: everything above it on
                    // the stack belongs to it. Retired vertices get a link of
                    // n so they never lower a later minimum.
                    while let Some(w) = stack.pop() {
                        id[w] = count;
                        low[w] = n;
                        if w == v {
                            break;
                        }
                    }
                    count += 1;
                }
                if let Some(parent) = frames.last_mut() {
                    parent.2 = parent.2.min(low[v]);
                }
            }
        }

        let scc = Self { id, count };
        debug_assert!(super::debug_check(graph, &scc));
        tracing::debug!(components = count, "tarjan_complete");
        scc
    }
}

impl StronglyConnectedComponents for TarjanSCC {
    fn count(&self) -> usize {
        self.count
    }

    fn ids(&self) -> &[usize] {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cycles_joined_one_way() {
        // 0<->1 feeds 2<->3
        let digraph: Digraph = "4 5 0 1 1 0 1 2 2 3 3 2".parse().unwrap();
        let scc = TarjanSCC::new(&digraph);
        assert_eq!(scc.count(), 2);
        assert!(scc.strongly_connected(0, 1).unwrap());
        assert!(scc.strongly_connected(2, 3).unwrap());
        assert!(!scc.strongly_connected(1, 2).unwrap());
        // Components are numbered as their roots finish, sinks first.
        assert_eq!(scc.id(2).unwrap(), 0);
    }

    #[test]
    fn test_cross_edge_into_finished_component() {
        // 2 reaches the finished component {0, 1} but must stay separate
        let digraph: Digraph = "3 3 0 1 1 0 2 0".parse().unwrap();
        let scc = TarjanSCC::new(&digraph);
        assert_eq!(scc.count(), 2);
        assert!(!scc.strongly_connected(2, 0).unwrap());
    }

    #[test]
    fn test_long_cycle_is_stack_safe() {
        let n = 100_000;
        let mut digraph = Digraph::new(n);
        for v in 0..n {
            digraph.add_edge(v, (v + 1) % n).unwrap();
        }
        assert_eq!(TarjanSCC::new(&digraph).count(), 1);
    }
}
