//! Quick-find: `find` reads one array slot, `union` rewrites the array.

use super::DisjointSet;
use crate::capacity::identity;
use crate::ensure_vertex;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct QuickFindUF {
    id: Vec<usize>,
    count: usize,
}

impl QuickFindUF {
    pub fn new(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            count: n,
        }
    }

    /// Like `new`, but a universe too large to allocate is an `InvalidValue`
    pub fn try_new(n: usize) -> Result<Self> {
        Ok(Self {
            id: identity("number of sites", n)?,
            count: n,
        })
    }
}

impl DisjointSet for QuickFindUF {
    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> Result<usize> {
        ensure_vertex!(p, self.id.len());
        Ok(self.id[p])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let p_id = self.find(p)?;
        let q_id = self.find(q)?;
        if p_id == q_id {
            return Ok(false);
        }
        for id in self.id.iter_mut().filter(|id| **id == p_id) {
            *id = q_id;
        }
        self.count -= 1;
        Ok(true)
    }
}
