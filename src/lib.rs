//! hopgraph — small in-memory directed graph with BFS/DFS traversal.
//!
//! Vertices carry caller-supplied ids and own their outgoing, weighted
//! edges in insertion order. Breadth-first search labels reachable
//! vertices with shortest-hop distances and parent links; depth-first
//! search computes the reachable set and a visit order. Both return
//! per-call result records, so traversals never mutate the graph and can
//! be repeated from any source. Finished graphs can be written out as
//! Graphviz dot files or plain-text vertex listings.

pub mod export;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use export::{write_vertices, write_vertices_with_bfs, write_vertices_with_dfs, DotExporter};
pub use graph::{bfs, dfs, BfsResult, DfsResult, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, Vertex};
