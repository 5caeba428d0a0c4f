/*!
# Graph Representations

Currently the only storage backend is [`MatrixGraph`]: vertices are kept in a `Vec` and
edge weights in a dense [`Matrix`] of `Option<W>`. Edge queries are `O(1)`, neighborhood
iteration is `O(n)` and adding a vertex relocates the `n x n` adjacency matrix.
*/

use crate::{matrix::Matrix, ops::*, *};

mod matrix_graph;

pub use matrix_graph::*;
