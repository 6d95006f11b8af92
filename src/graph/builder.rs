//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges can be declared in any order; everything is
/// validated when [`build`](GraphBuilder::build) replays the declarations
/// through the checked graph operations, so duplicate vertices and
/// unknown edge endpoints fail exactly as they would in direct
/// construction.
pub struct GraphBuilder {
    id: u64,
    vertices: Vec<u64>,
    edges: Vec<(u64, u64, i32)>,
}

impl GraphBuilder {
    /// Create a builder for a graph with the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, id: u64) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// Declare several vertices at once, in slice order.
    pub fn vertices(&mut self, ids: &[u64]) -> &mut Self {
        self.vertices.extend_from_slice(ids);
        self
    }

    /// Declare a directed edge.
    pub fn edge(&mut self, source_id: u64, target_id: u64, weight: i32) -> &mut Self {
        self.edges.push((source_id, target_id, weight));
        self
    }

    /// Declare an undirected connection: the matched pair of directed
    /// edges `a -> b` and `b -> a`, both with the given weight.
    pub fn undirected(&mut self, a: u64, b: u64, weight: i32) -> &mut Self {
        self.edges.push((a, b, weight));
        self.edges.push((b, a, weight));
        self
    }

    /// Build the final graph: vertices are added in declaration order,
    /// then edges in declaration order.
    ///
    /// Surfaces [`DuplicateVertex`](crate::GraphError::DuplicateVertex),
    /// [`VertexNotFound`](crate::GraphError::VertexNotFound) and
    /// [`UnknownDestination`](crate::GraphError::UnknownDestination) from
    /// the underlying graph operations.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.id);
        for id in self.vertices {
            graph.add_vertex(id)?;
        }
        for (source_id, target_id, weight) in self.edges {
            graph.add_adjacent_many(source_id, &[(target_id, weight)])?;
        }
        Ok(graph)
    }
}
