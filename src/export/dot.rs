//! Writes Graphviz dot files from an in-memory graph.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::graph::Graph;
use crate::types::GraphResult;

/// Writer for the Graphviz `graph { ... }` text format.
///
/// The output treats the graph as undirected: a matched pair of directed
/// edges (A -> B plus B -> A) produces a single `A -- B` line. Vertices are
/// walked in insertion order and each vertex's edges in insertion order,
/// so the line order is deterministic.
#[derive(Default)]
pub struct DotExporter;

impl DotExporter {
    /// Create a new exporter.
    pub fn new() -> Self {
        Self
    }

    /// Write the graph to a dot file at `path`.
    ///
    /// A target that cannot be created surfaces as
    /// [`GraphError::Io`](crate::GraphError::Io).
    pub fn write_to_file(&self, graph: &Graph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)
    }

    /// Write the graph in dot format to any writer.
    pub fn write_to(&self, graph: &Graph, writer: &mut impl Write) -> GraphResult<()> {
        // Ordered pairs already emitted. Recording both directions of a
        // pair skips the counter-edge of an undirected connection; an
        // unmatched one-directional edge still comes out exactly once.
        let mut exported: HashSet<(u64, u64)> = HashSet::new();
        let mut lines = 0usize;

        writeln!(writer, "graph {{")?;

        for vertex in graph.vertices() {
            for edge in vertex.edges() {
                if exported.contains(&(edge.source_id, edge.target_id)) {
                    continue;
                }
                exported.insert((edge.source_id, edge.target_id));
                exported.insert((edge.target_id, edge.source_id));

                writeln!(
                    writer,
                    "\t{} -- {} [label = {}];",
                    edge.source_id, edge.target_id, edge.weight
                )?;
                lines += 1;
            }
        }

        writeln!(writer, "}}")?;
        writer.flush()?;

        log::debug!(
            "dot export: {} vertices, {} edge lines",
            graph.vertex_count(),
            lines
        );

        Ok(())
    }
}
