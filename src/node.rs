/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
Nodes are positional: the vertex with id `u` is stored at index `u` of the vertex sequence,
and row/column `u` of the adjacency matrix belongs to it.
*/

use std::fmt::{Debug, Display};

use crate::weight::Weight;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// A vertex is its positional id together with an associated weight.
#[derive(Copy, Clone, PartialEq)]
pub struct Vertex<W> {
    pub id: Node,
    pub weight: W,
}

impl<W: Weight> Vertex<W> {
    /// Creates a new vertex
    pub fn new(id: Node, weight: W) -> Self {
        Self { id, weight }
    }

    /// Creates a vertex with weight `W::zero()`
    pub fn unweighted(id: Node) -> Self {
        Self::new(id, W::zero())
    }
}

impl<W: Display> Display for Vertex<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.id, self.weight)
    }
}

impl<W: Debug> Debug for Vertex<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{:?}]", self.id, self.weight)
    }
}

impl<W> From<(Node, W)> for Vertex<W> {
    fn from(value: (Node, W)) -> Self {
        Vertex {
            id: value.0,
            weight: value.1,
        }
    }
}
