use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow `self` and can be used while mutating the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns `Ok(u)` if `u` is a vertex of the graph and [`GraphError::VertexOutOfBounds`] otherwise
    fn check_vertex(&self, u: Node) -> GraphResult<Node> {
        if self.contains_vertex(u) {
            Ok(u)
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges that were added to the graph.
    ///
    /// This is a running counter maintained by the *add*-operations of [`GraphEdgeEditing`]
    /// and not recomputed from the stored weights.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the edge counter is zero.
    /// Edges written by *update*-operations are not taken into account.
    fn has_no_added_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weights, neighborhoods & edges
pub trait WeightedAdjacency<W: Weight>: GraphNodeOrder + Sized {
    /// Returns the weight of vertex `u` or `None` if `u >= n`
    fn vertex_weight(&self, u: Node) -> Option<W>;

    /// Returns the weight of the edge `(u, v)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `u >= n` or `v >= n`.
    fn try_edge_weight(&self, u: Node, v: Node) -> GraphResult<Option<W>>;

    /// Returns the weight of the edge `(u, v)` or `None` if there is no such edge
    /// or any of the endpoints is out of bounds
    fn edge_weight(&self, u: Node, v: Node) -> Option<W> {
        self.try_edge_weight(u, v).ok().flatten()
    }

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// Returns *false* if any endpoint is out of bounds.
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Returns *true* if a self-loop (u,u) exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }

    /// Returns an iterator over the outgoing edges of a given vertex in ascending order
    /// of their destination.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge<W>> + '_;

    /// Returns an iterator over the (out-)neighbors of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges_of(u).map(|e| e.dest)
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.edges_of(u).count() as NumNodes
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.vertices()
            .map(|u| self.degree_of(u))
            .max()
            .unwrap_or(0)
    }

    /// Collects the outgoing edges of `u` in ascending order of their destination.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `u >= n` and
    /// [`GraphError::Allocation`] if the result cannot be allocated.
    fn vertex_neighbours(&self, u: Node) -> GraphResult<Vec<Edge<W>>> {
        self.check_vertex(u)?;

        let mut neighbours = Vec::new();
        neighbours.try_reserve_exact(self.degree_of(u) as usize)?;
        neighbours.extend(self.edges_of(u));
        Ok(neighbours)
    }

    /// Returns an iterator over all stored edges in the graph, ordered by source and destination
    fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns all vertex weights in order of their ids
    fn vertex_weights(&self) -> Vec<W> {
        self.vertices()
            .filter_map(|u| self.vertex_weight(u))
            .collect_vec()
    }
}

/// Trait for creating a new graph
pub trait GraphNew: Sized {
    /// Creates a graph with `n` singleton nodes of weight zero.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] if `n == 0`.
    fn try_new(n: NumNodes) -> GraphResult<Self>;
}

/// Provides functions to update and insert vertices
pub trait GraphVertexEditing<W: Weight>: GraphNodeOrder {
    /// Replaces vertex `id` by `Vertex { id, weight }`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `id >= n`.
    fn update_vertex(&mut self, id: Node, weight: W) -> GraphResult<()>;

    /// Applies [`GraphVertexEditing::update_vertex`] to each entry in order.
    ///
    /// # Errors
    /// - [`GraphError::EmptyBatch`] if `vertices` is empty
    /// - [`GraphError::BatchEntry`] with the position of the first failing entry;
    ///   all entries before it have been applied
    fn update_vertices_from(&mut self, vertices: &[Vertex<W>]) -> GraphResult<()> {
        if vertices.is_empty() {
            return Err(GraphError::EmptyBatch);
        }

        for (index, vertex) in vertices.iter().enumerate() {
            self.update_vertex(vertex.id, vertex.weight)
                .map_err(|err| err.at_batch_entry(index))?;
        }

        Ok(())
    }

    /// Appends a new vertex with the given weight and returns its id.
    /// The graph is left unchanged if the vertex cannot be added.
    fn add_vertex(&mut self, weight: W) -> GraphResult<Node>;

    /// Appends one vertex per weight and returns the range of new ids
    fn add_vertices(&mut self, weights: impl IntoIterator<Item = W>) -> GraphResult<Range<Node>> {
        let first = self.number_of_nodes();
        for weight in weights {
            self.add_vertex(weight)?;
        }
        Ok(first..self.number_of_nodes())
    }
}

/// Provides functions to set and insert weighted edges.
///
/// *update*-operations only write weights, *add*-operations additionally count the edge.
pub trait GraphEdgeEditing<W: Weight>: GraphNodeOrder {
    /// Sets the weight of edge `(u, v)` without touching the edge counter.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `u >= n` or `v >= n`.
    fn update_edge(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()>;

    /// Sets the weight of both `(u, v)` and `(v, u)` without touching the edge counter.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `u >= n` or `v >= n`.
    fn update_edge_symmetric(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()>;

    /// Removes the edge `(u, v)` if present, without touching the edge counter.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] if `u >= n` or `v >= n`.
    fn clear_edge(&mut self, u: Node, v: Node) -> GraphResult<()>;

    /// Applies [`GraphEdgeEditing::update_edge`] to each entry in order.
    ///
    /// # Errors
    /// - [`GraphError::EmptyBatch`] if `edges` is empty
    /// - [`GraphError::BatchEntry`] with the position of the first failing entry;
    ///   all entries before it have been applied
    fn update_edges_from(&mut self, edges: &[Edge<W>]) -> GraphResult<()> {
        if edges.is_empty() {
            return Err(GraphError::EmptyBatch);
        }

        for (index, edge) in edges.iter().enumerate() {
            self.update_edge(edge.src, edge.dest, edge.weight)
                .map_err(|err| err.at_batch_entry(index))?;
        }

        Ok(())
    }

    /// Sets the weight of edge `(u, v)` and counts it as one added edge
    fn add_edge(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()>;

    /// Sets the weight of `(u, v)` and `(v, u)` and counts the pair as one added edge
    fn add_edge_symmetric(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()>;

    /// Adds all edges in the collection, stopping at the first failure
    fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<Edge<W>>>,
    ) -> GraphResult<()> {
        for Edge { src, dest, weight } in edges.into_iter().map(|e| e.into()) {
            self.add_edge(src, dest, weight)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch<W: Weight>: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge<W>>>,
    ) -> GraphResult<Self>;
}

impl<W: Weight, G: GraphNew + GraphEdgeEditing<W>> GraphFromScratch<W> for G {
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge<W>>>,
    ) -> GraphResult<Self> {
        let mut graph = Self::try_new(n)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
