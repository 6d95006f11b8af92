//! The vertex and its owned edge list.

use serde::Serialize;

use super::Edge;

/// A graph vertex: a caller-supplied id plus the ordered list of its
/// outgoing edges.
///
/// The edge list is append-only and keeps insertion order; traversals
/// explore a vertex's neighbours in exactly that order. Vertices carry no
/// traversal state of their own; distances, parents and visited flags live
/// in the result records returned by [`bfs`](crate::graph::bfs) and
/// [`dfs`](crate::graph::dfs).
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    id: u64,
    edges: Vec<Edge>,
}

impl Vertex {
    /// Create a vertex with no outgoing edges.
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    /// The caller-supplied identifier, unique within its graph.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Append an outgoing edge. Only the graph's adjacency ops call this;
    /// they have already validated both endpoints.
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}
