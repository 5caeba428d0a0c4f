/*!
# Errors

All fallible operations of this crate return a [`GraphResult`]. The variants separate
*bad calls* (zero sizes, empty batches) from *bad indices* (out-of-bounds cells or
vertices) so that callers can tell them apart without inspecting messages.
*/

use std::collections::TryReserveError;

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// All errors that can occur when building or editing matrices and graphs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A matrix was requested with a zero dimension.
    #[error("matrix dimensions must be non-zero, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    /// Initial data does not fit the requested shape.
    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Growth by zero rows.
    #[error("number of new rows must be non-zero")]
    InvalidNewRows,

    /// Growth by zero columns.
    #[error("number of new columns must be non-zero")]
    InvalidNewColumns,

    /// A graph was requested without any vertices.
    #[error("number of vertices must be non-zero")]
    InvalidVertexCount,

    /// A batch update was called without entries.
    #[error("batch update requires at least one entry")]
    EmptyBatch,

    /// Cell index outside of the matrix.
    #[error("cell ({row},{column}) is out of bounds for a {rows}x{columns} matrix")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Vertex index outside of the graph.
    #[error("vertex {vertex} is out of bounds for a graph with {number_of_nodes} vertices")]
    VertexOutOfBounds {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// Entry `index` of a batch update failed; all entries before it were applied.
    #[error("batch entry {index} failed: {source}")]
    BatchEntry {
        index: usize,
        #[source]
        source: Box<GraphError>,
    },

    /// The requested size does not fit into the index types.
    #[error("requested size exceeds the addressable capacity")]
    CapacityOverflow,

    /// The allocator could not provide the requested storage.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Convenience result type for matrix and graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// Returns *true* for errors caused by an index outside of the structure
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            GraphError::CellOutOfBounds { .. } | GraphError::VertexOutOfBounds { .. }
        )
    }

    /// Wraps `self` as the failure of entry `index` of a batch update
    pub(crate) fn at_batch_entry(self, index: usize) -> Self {
        GraphError::BatchEntry {
            index,
            source: Box::new(self),
        }
    }
}
