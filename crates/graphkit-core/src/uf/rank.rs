//! Union by rank with path compression by halving.
//!
//! Amortized cost per operation is near-constant (inverse Ackermann).

use super::DisjointSet;
use crate::capacity::{filled, identity};
use crate::ensure_vertex;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct UF {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl UF {
    /// `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    /// Like `new`, but a universe too large to allocate is an `InvalidValue`
    pub fn try_new(n: usize) -> Result<Self> {
        Ok(Self {
            parent: identity("number of sites", n)?,
            rank: filled("number of sites", n, 0)?,
            count: n,
        })
    }
}

impl DisjointSet for UF {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> Result<usize> {
        ensure_vertex!(p, self.parent.len());
        while p != self.parent[p] {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        Ok(p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        // Shallower tree goes under the deeper one; ties favour p's root.
        match self.rank[root_p].cmp(&self.rank[root_q]) {
            std::cmp::Ordering::Less => self.parent[root_p] = root_q,
            std::cmp::Ordering::Greater => self.parent[root_q] = root_p,
            std::cmp::Ordering::Equal => {
                self.parent[root_q] = root_p;
                self.rank[root_p] = self.rank[root_p].saturating_add(1);
            }
        }
        self.count -= 1;
        Ok(true)
    }
}
