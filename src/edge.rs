use std::fmt::{Debug, Display};

use crate::Node;

/// A weighted edge from `src` to `dest`.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq)]
pub struct Edge<W> {
    pub src: Node,
    pub dest: Node,
    pub weight: W,
}

/// The edge counter of a graph. `n * (n - 1)` ordered pairs of `2^32 - 1` nodes
/// do not fit into `u32`, hence `u64`.
pub type NumEdges = u64;

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.src, self.dest, self.weight)
    }
}

impl<W: Debug> Debug for Edge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{:?})", self.src, self.dest, self.weight)
    }
}

impl<W: Copy> Edge<W> {
    /// Creates a new edge
    pub fn new(src: Node, dest: Node, weight: W) -> Self {
        Self { src, dest, weight }
    }

    /// Returns the endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.src, self.dest)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge::new(
            self.src.min(self.dest),
            self.src.max(self.dest),
            self.weight,
        )
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.src <= self.dest
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.src == self.dest
    }

    /// Reverses the edge by switching the endpoints; the weight is kept
    pub fn reverse(&self) -> Self {
        Edge::new(self.dest, self.src, self.weight)
    }
}

impl<W> From<(Node, Node, W)> for Edge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        Edge {
            src: value.0,
            dest: value.1,
            weight: value.2,
        }
    }
}

impl<W: Copy> From<&(Node, Node, W)> for Edge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        Edge {
            src: value.0,
            dest: value.1,
            weight: value.2,
        }
    }
}

impl<W: Copy> From<&Edge<W>> for Edge<W> {
    fn from(value: &Edge<W>) -> Self {
        *value
    }
}
