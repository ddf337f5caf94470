//! Weighted quick-union: the smaller tree always goes under the larger one.

use super::DisjointSet;
use crate::capacity::{filled, identity};
use crate::ensure_vertex;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct WeightedQuickUnionUF {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl WeightedQuickUnionUF {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Like `new`, but a universe too large to allocate is an `InvalidValue`
    pub fn try_new(n: usize) -> Result<Self> {
        Ok(Self {
            parent: identity("number of sites", n)?,
            size: filled("number of sites", n, 1)?,
            count: n,
        })
    }
}

impl DisjointSet for WeightedQuickUnionUF {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> Result<usize> {
        ensure_vertex!(p, self.parent.len());
        while p != self.parent[p] {
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

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
        Ok(true)
    }
}
