//! The directed edge record.

use serde::Serialize;

/// A directed, weighted connection between two vertices.
///
/// Edges are one-directional records: an undirected connection is a
/// matched pair (A -> B plus B -> A) that the caller adds explicitly. The
/// weight is carried for the dot exporter's labels; breadth-first search
/// deliberately ignores it and treats every edge as a single hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Id of the vertex this edge leaves from (informational back-reference).
    pub source_id: u64,
    /// Id of the adjacent vertex this edge points at.
    pub target_id: u64,
    /// Caller-supplied weight, never consulted during traversal.
    pub weight: i32,
}

impl Edge {
    /// Create a new directed edge.
    pub fn new(source_id: u64, target_id: u64, weight: i32) -> Self {
        Self {
            source_id,
            target_id,
            weight,
        }
    }
}
