/*!
# Complement Graphs

The complement of a graph on `n` vertices contains the (ordered) edge `(u, v)`, `u != v`,
exactly if the original graph does not.
*/

use log::debug;

use super::*;

/// Trait for deriving the complement graph.
pub trait Complement: Sized {
    /// Returns a new graph with the same vertices (and vertex weights) in which the
    /// presence of every non-loop edge is inverted.
    ///
    /// Original edge weights are **not** preserved: every edge of the complement carries
    /// the placeholder weight `W::one()`. Self-loops are copied unchanged. The edge counter
    /// of the result is `n * (n - 1) - m` where `m` is the edge counter of `self`
    /// (saturating at zero).
    ///
    /// # Errors
    /// Returns [`GraphError::Allocation`] if the copy cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph: MatrixGraph<i32> = MatrixGraph::try_from_edges(3, [(0, 1, 5), (1, 2, 7)]).unwrap();
    /// let complement = graph.complement().unwrap();
    ///
    /// assert_eq!(complement.number_of_edges(), 4);
    /// assert_eq!(complement.edge_weight(0, 1), None);
    /// assert_eq!(complement.edge_weight(0, 2), Some(1));
    /// ```
    fn complement(&self) -> GraphResult<Self>;
}

impl<W: Weight> Complement for MatrixGraph<W> {
    fn complement(&self) -> GraphResult<Self> {
        let mut complement = self.try_clone()?;

        let n = self.number_of_nodes() as NumEdges;
        complement.set_number_of_edges(
            (n * n.saturating_sub(1)).saturating_sub(self.number_of_edges()),
        );

        for u in self.vertices() {
            for v in self.vertices() {
                if u == v {
                    continue;
                }

                if self.has_edge(u, v) {
                    complement.clear_edge(u, v)?;
                } else {
                    complement.update_edge(u, v, W::one())?;
                }
            }
        }

        debug!(
            "built complement of a graph with {n} vertices and {} edges",
            self.number_of_edges()
        );
        Ok(complement)
    }
}
