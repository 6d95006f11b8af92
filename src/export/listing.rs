//! Plain-text vertex listings, optionally annotated with traversal results.

use std::io::Write;

use crate::graph::{BfsResult, DfsResult, Graph};
use crate::types::GraphResult;

/// Write one line per vertex, in insertion order:
/// `vertex <id>: edges=<out_degree>`.
pub fn write_vertices(graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
    for vertex in graph.vertices() {
        writeln!(writer, "vertex {}: edges={}", vertex.id(), vertex.out_degree())?;
    }
    Ok(())
}

/// Write one line per vertex with its BFS labels, in insertion order:
/// `vertex <id>: distance=<d|inf> parent=<id|none>`.
pub fn write_vertices_with_bfs(
    graph: &Graph,
    result: &BfsResult,
    writer: &mut impl Write,
) -> GraphResult<()> {
    for vertex in graph.vertices() {
        let distance = match result.distance(vertex.id()) {
            Some(d) => d.to_string(),
            None => String::from("inf"),
        };
        let parent = match result.parent(vertex.id()) {
            Some(p) => p.to_string(),
            None => String::from("none"),
        };
        writeln!(
            writer,
            "vertex {}: distance={} parent={}",
            vertex.id(),
            distance,
            parent
        )?;
    }
    Ok(())
}

/// Write one line per vertex with its DFS flag, in insertion order:
/// `vertex <id>: visited=<true|false>`.
pub fn write_vertices_with_dfs(
    graph: &Graph,
    result: &DfsResult,
    writer: &mut impl Write,
) -> GraphResult<()> {
    for vertex in graph.vertices() {
        writeln!(
            writer,
            "vertex {}: visited={}",
            vertex.id(),
            result.is_visited(vertex.id())
        )?;
    }
    Ok(())
}
