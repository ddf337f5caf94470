//! Union-find (disjoint-set) structures
//!
//! All variants share the [`DisjointSet`] contract and differ only in how
//! they balance their trees:
//! - `UF`: union by rank with path compression by halving
//! - `WeightedQuickUnionUF`: union by size, no compression
//! - `QuickUnionUF`: unbalanced trees
//! - `QuickFindUF`: flat `id[]` array, linear-time union

mod quick_find;
mod quick_union;
mod rank;
mod weighted;

use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, Result};
use crate::graph::parse::Tokens;

pub use quick_find::QuickFindUF;
pub use quick_union::QuickUnionUF;
pub use rank::UF;
pub use weighted::WeightedQuickUnionUF;

/// Disjoint sets over the elements `0..len()`
pub trait DisjointSet {
    /// Number of elements in the universe
    fn len(&self) -> usize;

    /// Number of disjoint sets
    fn count(&self) -> usize;

    /// Canonical element of the set containing `p`
    fn find(&mut self, p: usize) -> Result<usize>;

    /// Merge the sets containing `p` and `q`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// `p` and `q` were already connected.
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` and `q` are in the same set
    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

/// Selects a union-find variant at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Rank,
    Weighted,
    QuickUnion,
    QuickFind,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Rank,
        Algorithm::Weighted,
        Algorithm::QuickUnion,
        Algorithm::QuickFind,
    ];

    /// Build an empty structure of `n` singleton sets
    pub fn build(self, n: usize) -> Result<Box<dyn DisjointSet>> {
        let set: Box<dyn DisjointSet> = match self {
            Algorithm::Rank => Box::new(UF::try_new(n)?),
            Algorithm::Weighted => Box::new(WeightedQuickUnionUF::try_new(n)?),
            Algorithm::QuickUnion => Box::new(QuickUnionUF::try_new(n)?),
            Algorithm::QuickFind => Box::new(QuickFindUF::try_new(n)?),
        };
        Ok(set)
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rank" | "uf" => Ok(Algorithm::Rank),
            "weighted" => Ok(Algorithm::Weighted),
            "quick-union" | "quickunion" => Ok(Algorithm::QuickUnion),
            "quick-find" | "quickfind" => Ok(Algorithm::QuickFind),
            other => Err(GraphError::invalid_value("union-find algorithm", other)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Rank => write!(f, "rank"),
            Algorithm::Weighted => write!(f, "weighted"),
            Algorithm::QuickUnion => write!(f, "quick-union"),
            Algorithm::QuickFind => write!(f, "quick-find"),
        }
    }
}

/// A universe size followed by `p q` pairs to connect, read until the end
/// of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connections {
    pub sites: usize,
    pub pairs: Vec<(usize, usize)>,
}

impl FromStr for Connections {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);
        let sites = tokens.next_count("number of sites")?;
        let mut pairs = Vec::new();
        while !tokens.is_exhausted() {
            let p = tokens.next_vertex()?;
            let q = tokens.next_vertex()?;
            if p >= sites || q >= sites {
                return Err(GraphError::vertex_out_of_range(p.max(q), sites));
            }
            pairs.push((p, q));
        }
        Ok(Self { sites, pairs })
    }
}
