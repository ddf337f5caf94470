use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Weighted undirected edge `v-w`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    v: usize,
    w: usize,
    weight: f64,
}

impl Edge {
    /// Rejects NaN weights; infinities and negative weights are allowed.
    pub fn new(v: usize, w: usize, weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(GraphError::NanWeight { from: v, to: w });
        }
        Ok(Self { v, w, weight })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// One of the two endpoints
    pub fn either(&self) -> usize {
        self.v
    }

    /// Both endpoints, `either()` first
    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }

    /// The endpoint opposite `vertex`
    pub fn other(&self, vertex: usize) -> Result<usize> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex,
                edge: self.to_string(),
            })
        }
    }

    /// Total order on weight, used to sort edges for Kruskal
    pub fn compare_weight(&self, other: &Edge) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// Weighted directed edge `from->to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(GraphError::NanWeight { from, to });
        }
        Ok(Self { from, to, weight })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:5.2}", self.from, self.to, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_endpoints() {
        let edge = Edge::new(12, 34, 5.67).unwrap();
        assert_eq!(edge.either(), 12);
        assert_eq!(edge.other(12).unwrap(), 34);
        assert_eq!(edge.other(34).unwrap(), 12);
        assert!(matches!(
            edge.other(5),
            Err(GraphError::NotAnEndpoint { vertex: 5, .. })
        ));
        assert_eq!(edge.to_string(), "12-34 5.67000");
    }

    #[test]
    fn test_self_loop_other_is_itself() {
        let edge = Edge::new(3, 3, 1.0).unwrap();
        assert_eq!(edge.other(3).unwrap(), 3);
    }

    #[test]
    fn test_nan_weight_rejected() {
        assert!(matches!(
            Edge::new(0, 1, f64::NAN),
            Err(GraphError::NanWeight { from: 0, to: 1 })
        ));
        assert!(DirectedEdge::new(0, 1, f64::NAN).is_err());
        assert!(DirectedEdge::new(0, 1, -2.5).is_ok());
    }

    #[test]
    fn test_directed_edge_accessors() {
        let edge = DirectedEdge::new(5, 7, 0.25).unwrap();
        assert_eq!(edge.from(), 5);
        assert_eq!(edge.to(), 7);
        assert_eq!(edge.weight(), 0.25);
        assert_eq!(edge.to_string(), "5->7  0.25");
    }

    #[test]
    fn test_compare_weight() {
        let light = Edge::new(0, 1, 0.1).unwrap();
        let heavy = Edge::new(1, 2, 0.9).unwrap();
        assert_eq!(light.compare_weight(&heavy), Ordering::Less);
        assert_eq!(heavy.compare_weight(&light), Ordering::Greater);
    }
}
