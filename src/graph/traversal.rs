//! Graph traversal algorithms (BFS and DFS).
//!
//! Both traversals read the graph through `&Graph` and collect their
//! findings into a per-call result record, so a graph can be traversed
//! any number of times, from any sources, without one run contaminating
//! the next.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Breadth-first search from a source vertex.
///
/// Explores via a FIFO frontier, labelling each newly discovered vertex
/// with its hop distance from the source and the predecessor it was first
/// reached through. Edge weights are deliberately ignored: every edge
/// counts as one hop, and each reachable vertex ends with its minimum hop
/// count from the source.
///
/// Edges are scanned in insertion order and the frontier is strict FIFO,
/// so the parent recorded for a vertex with several shortest-path
/// predecessors is deterministic: the first one discovered in frontier
/// order.
///
/// Fails with [`GraphError::VertexNotFound`] if the source is absent.
pub fn bfs(graph: &Graph, source_id: u64) -> GraphResult<BfsResult> {
    if !graph.contains_vertex(source_id) {
        return Err(GraphError::VertexNotFound(source_id));
    }

    let mut distances: HashMap<u64, u32> = HashMap::new();
    let mut parents: HashMap<u64, u64> = HashMap::new();
    let mut order: Vec<u64> = Vec::new();
    let mut frontier: VecDeque<(u64, u32)> = VecDeque::new();

    distances.insert(source_id, 0);
    order.push(source_id);
    frontier.push_back((source_id, 0));

    while let Some((current_id, depth)) = frontier.pop_front() {
        for edge in graph.edges_from(current_id) {
            if distances.contains_key(&edge.target_id) {
                continue;
            }
            distances.insert(edge.target_id, depth + 1);
            parents.insert(edge.target_id, current_id);
            order.push(edge.target_id);
            frontier.push_back((edge.target_id, depth + 1));
        }
    }

    Ok(BfsResult {
        source: source_id,
        distances,
        parents,
        order,
    })
}

/// Depth-first search from a source vertex.
///
/// Explores via a LIFO frontier. Adjacent vertices are pushed
/// unconditionally; the visited check happens only when a vertex is
/// popped, and an already-visited pop is discarded. A vertex can therefore
/// sit on the frontier more than once. That inflates only the transient
/// frontier, never the final visited set, and total work stays bounded by
/// the edge count even on cyclic graphs.
///
/// Because pushes follow edge insertion order onto a stack, a vertex's
/// last-added neighbour is explored first.
///
/// Fails with [`GraphError::VertexNotFound`] if the source is absent.
pub fn dfs(graph: &Graph, source_id: u64) -> GraphResult<DfsResult> {
    if !graph.contains_vertex(source_id) {
        return Err(GraphError::VertexNotFound(source_id));
    }

    let mut visited: HashSet<u64> = HashSet::new();
    let mut order: Vec<u64> = Vec::new();
    let mut frontier: Vec<u64> = vec![source_id];

    while let Some(current_id) = frontier.pop() {
        if visited.contains(&current_id) {
            continue;
        }
        visited.insert(current_id);
        order.push(current_id);

        for edge in graph.edges_from(current_id) {
            frontier.push(edge.target_id);
        }
    }

    Ok(DfsResult {
        source: source_id,
        visited,
        order,
    })
}

/// Everything a BFS run found: hop distances, parent links and discovery
/// order, keyed by vertex id.
///
/// Vertices the search never reached have no entry; they answer `None` /
/// `false` through the accessors, the moral equivalent of an infinite
/// distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    source: u64,
    distances: HashMap<u64, u32>,
    parents: HashMap<u64, u64>,
    order: Vec<u64>,
}

impl BfsResult {
    /// The source vertex this search ran from.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// Shortest-hop distance from the source, `None` if unreached.
    pub fn distance(&self, id: u64) -> Option<u32> {
        self.distances.get(&id).copied()
    }

    /// The predecessor this vertex was first discovered through. `None`
    /// for the source itself and for unreached vertices.
    pub fn parent(&self, id: u64) -> Option<u64> {
        self.parents.get(&id).copied()
    }

    /// True if the search reached this vertex.
    pub fn is_reached(&self, id: u64) -> bool {
        self.distances.contains_key(&id)
    }

    /// Vertices in discovery order, source first.
    pub fn order(&self) -> &[u64] {
        &self.order
    }

    /// Number of vertices reached, the source included.
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// A shortest-hop path from the source to `id`, both endpoints
    /// included, reconstructed by walking the parent links. `None` if the
    /// vertex was never reached. The returned path has `distance + 1`
    /// vertices.
    pub fn path_to(&self, id: u64) -> Option<Vec<u64>> {
        self.distances.get(&id)?;

        let mut path = vec![id];
        let mut current = id;
        while let Some(&parent) = self.parents.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Everything a DFS run found: the set of reachable vertices and the
/// order they were first visited in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    source: u64,
    visited: HashSet<u64>,
    order: Vec<u64>,
}

impl DfsResult {
    /// The source vertex this search ran from.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// True if the search visited this vertex, i.e. it is reachable from
    /// the source by a directed path.
    pub fn is_visited(&self, id: u64) -> bool {
        self.visited.contains(&id)
    }

    /// Vertices in visit order, source first.
    pub fn order(&self) -> &[u64] {
        &self.order
    }

    /// Number of vertices visited, the source included.
    pub fn visit_count(&self) -> usize {
        self.visited.len()
    }
}
