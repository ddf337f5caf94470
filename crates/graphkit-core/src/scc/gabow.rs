use crate::graph::{Adjacency, Digraph};

use super::StronglyConnectedComponents;

const UNASSIGNED: usize = usize::MAX;

/// Gabow's path-based algorithm: one depth-first pass with a stack of
/// visited vertices and a stack of candidate component roots.
#[derive(Debug, Clone)]
pub struct GabowSCC {
    id: Vec<usize>,
    count: usize,
}

impl GabowSCC {
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
    pub fn new(graph: &Digraph) -> Self {
        let n = graph.vertex_count();
        let mut preorder = vec![UNASSIGNED; n];
        let mut id = vec![UNASSIGNED; n];
        let mut pre = 0;
        let mut count = 0;
        let mut visited = Vec::new();
        let mut roots = Vec::new();
        let mut frames: Vec<(usize, usize)> = Vec::new();

        for s in 0..n {
            if preorder[s] != UNASSIGNED {
                continue;
            }
            preorder[s] = pre;
            pre += 1;
            visited.push(s);
            roots.push(s);
            frames.push((s, 0));

            while let Some(frame) = frames.last_mut() {
                let (v, cursor) = *frame;
                if let Some(w) = graph.target_at(v, cursor) {
                    frame.1 += 1;
                    if preorder[w] == UNASSIGNED {
                        preorder[w] = pre;
                        pre += 1;
                        visited.push(w);
                        roots.push(w);
                        frames.push((w, 0));
                    } else if id[w] == UNASSIGNED {
                        // w is still open: collapse every candidate root
                        // discovered after it.
                        while roots.last().is_some_and(|&r| preorder[r] > preorder[w]) {
                            roots.pop();
                        }
                    }
                    continue;
                }

                frames.pop();
                if roots.last() == Some(&v) {
                    roots.pop();
                    while let Some(w) = visited.pop() {
                        id[w] = count;
                        if w == v {
                            break;
                        }
                    }
                    count += 1;
                }
            }
        }

        let scc = Self { id, count };
        debug_assert!(super::debug_check(graph, &scc));
        tracing::debug!(components = count, "gabow_complete");
        scc
    }
}

impl StronglyConnectedComponents for GabowSCC {
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
    fn test_nested_cycles_merge() {
        // 0->1->2->0 and 2->3->1 form one component; 4 hangs off it
        let digraph: Digraph = "5 6 0 1 1 2 2 0 2 3 3 1 3 4".parse().unwrap();
        let scc = GabowSCC::new(&digraph);
        assert_eq!(scc.count(), 2);
        assert!(scc.strongly_connected(0, 3).unwrap());
        assert!(!scc.strongly_connected(3, 4).unwrap());
        assert_eq!(scc.id(4).unwrap(), 0);
    }

    #[test]
    fn test_self_loop_is_singleton() {
        let digraph: Digraph = "2 2 0 0 0 1".parse().unwrap();
        let scc = GabowSCC::new(&digraph);
        assert_eq!(scc.count(), 2);
        assert!(scc.ids().iter().all(|&label| label < 2));
    }

    #[test]
    fn test_long_chain_and_cycle_are_stack_safe() {
        let n = 200_000;
        let mut digraph = Digraph::new(n);
        for v in 1..n {
            digraph.add_edge(v - 1, v).unwrap();
        }
        assert_eq!(GabowSCC::new(&digraph).count(), n);

        digraph.add_edge(n - 1, 0).unwrap();
        let scc = GabowSCC::new(&digraph);
        assert_eq!(scc.count(), 1);
        assert!(scc.strongly_connected(0, n - 1).unwrap());
    }
}
