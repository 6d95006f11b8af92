//! Core graph container — the vertex set plus adjacency construction.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex};

/// An in-memory directed graph: an ordered, owned collection of vertices,
/// each owning its outgoing edges.
///
/// Vertices are stored in insertion order and that order drives every
/// order-sensitive enumeration (listing, export, traversal tie-breaking).
/// Lookup by id goes through an id -> slot index so adjacency construction
/// and traversal stay O(1) per step. Slots are stable: the vertex set is
/// append-only.
///
/// Dropping the graph releases every vertex and edge with it; there is no
/// manual teardown.
#[derive(Debug)]
pub struct Graph {
    /// Caller-supplied numeric identification of the graph.
    id: u64,
    /// All vertices, in insertion order.
    vertices: Vec<Vertex>,
    /// Lookup index: vertex id -> slot in the vertices vec.
    index: HashMap<u64, usize>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The graph's own identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of directed edges across all vertices.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.out_degree()).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex with the given id and an empty edge list.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if the id is already
    /// present; the graph is left unchanged in that case.
    pub fn add_vertex(&mut self, id: u64) -> GraphResult<&Vertex> {
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }

        log::debug!("add_vertex: {}", id);

        let slot = self.vertices.len();
        self.vertices.push(Vertex::new(id));
        self.index.insert(id, slot);

        Ok(&self.vertices[slot])
    }

    /// Look up a vertex by id.
    pub fn find_vertex(&self, id: u64) -> Option<&Vertex> {
        self.index.get(&id).map(|&slot| &self.vertices[slot])
    }

    /// True if a vertex with this id exists.
    pub fn contains_vertex(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Append one directed edge per `(destination_id, weight)` pair to the
    /// source vertex, preserving call order.
    ///
    /// Every destination is resolved before anything is appended: a missing
    /// source fails with [`GraphError::VertexNotFound`], a missing
    /// destination with [`GraphError::UnknownDestination`], and in either
    /// case no partial edge set is left behind.
    ///
    /// Self-loops and parallel edges are accepted; the traversals tolerate
    /// both.
    pub fn add_adjacent_many(&mut self, source_id: u64, pairs: &[(u64, i32)]) -> GraphResult<()> {
        let slot = *self
            .index
            .get(&source_id)
            .ok_or(GraphError::VertexNotFound(source_id))?;

        // Resolve every destination up front; a failed pair must leave no
        // partial edge set.
        for &(target_id, _) in pairs {
            if !self.index.contains_key(&target_id) {
                return Err(GraphError::UnknownDestination(target_id));
            }
        }

        for &(target_id, weight) in pairs {
            log::trace!("add_adjacent: {} -> {} [{}]", source_id, target_id, weight);
            self.vertices[slot].push_edge(Edge::new(source_id, target_id, weight));
        }

        Ok(())
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The outgoing edges of a vertex, in insertion order. Empty for an
    /// unknown id.
    pub fn edges_from(&self, id: u64) -> &[Edge] {
        if let Some(&slot) = self.index.get(&id) {
            self.vertices[slot].edges()
        } else {
            &[]
        }
    }
}
