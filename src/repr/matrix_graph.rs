use log::debug;

use super::*;

/// A weighted (directed) graph stored as an adjacency matrix.
///
/// - Vertex `u` is stored at position `u` of `vertices`.
/// - Cell `(u, v)` of `adjacency` holds `Some(weight)` exactly if the edge `(u, v)` exists.
/// - `num_edges` counts edges added via [`GraphEdgeEditing::add_edge`] and
///   [`GraphEdgeEditing::add_edge_symmetric`] only.
///
/// Undirected graphs are modelled by the symmetric edge operations.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph: MatrixGraph<i32> = MatrixGraph::try_new(3).unwrap();
/// graph.add_edge(0, 1, 5).unwrap();
/// graph.add_edge_symmetric(1, 2, 7).unwrap();
///
/// assert_eq!(graph.number_of_edges(), 2);
/// assert_eq!(graph.edge_weight(2, 1), Some(7));
/// assert_eq!(graph.vertex_neighbours(0).unwrap(), vec![Edge::new(0, 1, 5)]);
///
/// let id = graph.add_vertex(3).unwrap();
/// assert_eq!(id, 3);
/// assert!(!graph.has_edge(0, 3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixGraph<W> {
    vertices: Vec<Vertex<W>>,
    adjacency: Matrix<Option<W>>,
    num_edges: NumEdges,
}

impl<W: Weight> MatrixGraph<W> {
    /// Creates a graph with `n` vertices and room for `capacity` vertices
    /// before the vertex sequence has to reallocate.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] if `n == 0`.
    pub fn with_vertex_capacity(n: NumNodes, capacity: usize) -> GraphResult<Self> {
        if n == 0 {
            return Err(GraphError::InvalidVertexCount);
        }

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(capacity.max(n as usize))?;
        vertices.extend((0..n).map(Vertex::unweighted));

        Ok(Self {
            vertices,
            adjacency: Matrix::new(n as usize, n as usize)?,
            num_edges: 0,
        })
    }

    /// Returns the vertices ordered by id
    pub fn vertices_slice(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    /// Returns a deep copy of the vertex sequence
    pub fn copy_vertices(&self) -> GraphResult<Vec<Vertex<W>>> {
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(self.vertices.len())?;
        vertices.extend_from_slice(&self.vertices);
        Ok(vertices)
    }

    /// Returns the adjacency matrix; cell `(u, v)` is the weight of edge `(u, v)`
    pub fn adjacency(&self) -> &Matrix<Option<W>> {
        &self.adjacency
    }

    /// Creates a deep copy, reporting allocation failure instead of aborting
    pub fn try_clone(&self) -> GraphResult<Self> {
        Ok(Self {
            vertices: self.copy_vertices()?,
            adjacency: self.adjacency.try_clone()?,
            num_edges: self.num_edges,
        })
    }

    /// Overwrites the edge counter
    pub(crate) fn set_number_of_edges(&mut self, m: NumEdges) {
        self.num_edges = m;
    }

    fn set_cell(&mut self, u: Node, v: Node, weight: Option<W>) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency.update(u as usize, v as usize, weight)
    }
}

impl<W: Weight> GraphNodeOrder for MatrixGraph<W> {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl<W: Weight> GraphEdgeOrder for MatrixGraph<W> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<W: Weight> GraphNew for MatrixGraph<W> {
    fn try_new(n: NumNodes) -> GraphResult<Self> {
        Self::with_vertex_capacity(n, n as usize)
    }
}

impl<W: Weight> WeightedAdjacency<W> for MatrixGraph<W> {
    fn vertex_weight(&self, u: Node) -> Option<W> {
        self.vertices.get(u as usize).map(|v| v.weight)
    }

    fn try_edge_weight(&self, u: Node, v: Node) -> GraphResult<Option<W>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(*self.adjacency.at(u as usize, v as usize)?)
    }

    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge<W>> + '_ {
        let Some(row) = self.adjacency.row(u as usize) else {
            panic!(
                "vertex {u} is out of bounds for a graph with {} vertices",
                self.number_of_nodes()
            );
        };

        row.iter()
            .enumerate()
            .filter_map(move |(v, w)| w.map(|w| Edge::new(u, v as Node, w)))
    }
}

impl<W: Weight> GraphVertexEditing<W> for MatrixGraph<W> {
    fn update_vertex(&mut self, id: Node, weight: W) -> GraphResult<()> {
        self.check_vertex(id)?;
        self.vertices[id as usize] = Vertex::new(id, weight);
        Ok(())
    }

    fn add_vertex(&mut self, weight: W) -> GraphResult<Node> {
        let id = self.number_of_nodes();
        if id == Node::MAX {
            return Err(GraphError::CapacityOverflow);
        }

        // Both reservations succeed before the vertex becomes visible
        self.vertices.try_reserve(1)?;
        self.adjacency.expand(1)?;
        self.vertices.push(Vertex::new(id, weight));

        debug!("added vertex {id}, graph now has {} vertices", id + 1);
        Ok(id)
    }
}

impl<W: Weight> GraphEdgeEditing<W> for MatrixGraph<W> {
    fn update_edge(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()> {
        self.set_cell(u, v, Some(weight))
    }

    fn update_edge_symmetric(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency
            .update_symmetric(u as usize, v as usize, Some(weight))
    }

    fn clear_edge(&mut self, u: Node, v: Node) -> GraphResult<()> {
        self.set_cell(u, v, None)
    }

    fn add_edge(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()> {
        self.update_edge(u, v, weight)?;
        self.num_edges += 1;
        Ok(())
    }

    fn add_edge_symmetric(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()> {
        self.update_edge_symmetric(u, v, weight)?;
        self.num_edges += 1;
        Ok(())
    }
}
