use super::{explore, DfsEvent};
use crate::ensure_vertex;
use crate::error::Result;
use crate::graph::Adjacency;

/// Preorder, postorder and reverse postorder of a full depth-first search,
/// starting a new tree at each unmarked vertex in increasing order.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    pub fn new<G: Adjacency + ?Sized>(graph: &G) -> Self {
        let vertex_count = graph.vertex_count();
        let mut pre = vec![0; vertex_count];
        let mut post = vec![0; vertex_count];
        let mut preorder = Vec::with_capacity(vertex_count);
        let mut postorder = Vec::with_capacity(vertex_count);
        let mut marked = vec![false; vertex_count];

        for s in 0..vertex_count {
            if marked[s] {
                continue;
            }
            explore(graph, s, &mut marked, |event| match event {
                DfsEvent::Discover(v) => {
                    pre[v] = preorder.len();
                    preorder.push(v);
                }
                DfsEvent::Finish(v) => {
                    post[v] = postorder.len();
                    postorder.push(v);
                }
                DfsEvent::TreeEdge(..) => {}
            });
        }

        Self {
            pre,
            post,
            preorder,
            postorder,
        }
    }

    /// Preorder number of `v`
    pub fn pre(&self, v: usize) -> Result<usize> {
        ensure_vertex!(v, self.pre.len());
        Ok(self.pre[v])
    }

    /// Postorder number of `v`
    pub fn post(&self, v: usize) -> Result<usize> {
        ensure_vertex!(v, self.post.len());
        Ok(self.post[v])
    }

    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    pub fn reverse_postorder(&self) -> Vec<usize> {
        self.postorder.iter().rev().copied().collect()
    }
}
