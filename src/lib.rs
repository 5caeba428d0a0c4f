/*!
`wgraphs` is a small library for **w**eighted graphs stored in a growable dense matrix.
- Nodes are numbered `0` to `n - 1` and carry a weight
- Edges are directed and carry a weight; undirected graphs use the symmetric edge operations
- The graph can grow one vertex at a time without losing any stored edge

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
A vertex is the pair [`Vertex { id, weight }`](crate::node::Vertex), an edge the triple
[`Edge { src, dest, weight }`](crate::edge::Edge).

Adjacency is stored in a [`Matrix`](crate::matrix::Matrix) of `Option<W>`: cell `(u, v)` is
`Some(weight)` exactly if the edge `(u, v)` exists. The matrix itself is a general-purpose,
row-major container that can grow by rows, columns or both while preserving its content.

All fallible operations return a [`GraphResult`] and never leave a container half-modified:
out-of-bounds indices, invalid sizes and failed allocations are reported as a [`GraphError`].

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, errors, the matrix, basic graph operations and the [`MatrixGraph`](crate::repr::MatrixGraph) representation,
- [`algo`] includes derived-graph constructions implemented on the graph itself (`graph.complement()`),
- [`matrix`] includes the underlying growable matrix that can be used on its own,
- [`weight`] includes the [`Weight`] trait and conversions into weight types.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# Logging

Structural events (matrix growth, added vertices, complements) are emitted through the
[`log`](https://crates.io/crates/log) facade at `trace`/`debug` level; install any logger to see them.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod matrix;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod weight;

pub use edge::{Edge, NumEdges};
pub use error::{GraphError, GraphResult};
pub use node::{Node, NumNodes, Vertex};
pub use weight::Weight;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, matrix::*, node::*, ops::*, repr::*, weight::*};
}
