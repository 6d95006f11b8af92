//! 100K vertex performance demo.
//!
//! Bulk-builds a sparse graph, runs both traversals and writes the dot
//! file, timing each stage.

use std::time::Instant;

use hopgraph::*;

fn main() -> GraphResult<()> {
    let vertex_count: usize = 100_000;
    let edges_per_vertex: usize = 3;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();
    let mut graph = Graph::new(1);
    for id in 0..vertex_count as u64 {
        graph.add_vertex(id)?;
    }
    println!("  Vertices added in {:?}", start.elapsed());

    // Deterministic sparse adjacency: each vertex points a few strides ahead
    let start = Instant::now();
    for i in 0..vertex_count {
        let mut pairs: Vec<(u64, i32)> = Vec::with_capacity(edges_per_vertex);
        for j in 1..=edges_per_vertex {
            let target = (i + j * 7) % vertex_count;
            if target != i {
                pairs.push((target as u64, j as i32));
            }
        }
        graph.add_adjacent_many(i as u64, &pairs)?;
    }
    println!(
        "  Adjacency built in {:?} ({} edges)",
        start.elapsed(),
        graph.edge_count()
    );

    // BFS over the whole component
    let start = Instant::now();
    let reach = bfs(&graph, 50_000)?;
    println!(
        "  BFS from 50000: {} vertices reached in {:?}",
        reach.reached_count(),
        start.elapsed()
    );

    // DFS over the whole component
    let start = Instant::now();
    let visits = dfs(&graph, 50_000)?;
    println!(
        "  DFS from 50000: {} vertices visited in {:?}",
        visits.visit_count(),
        start.elapsed()
    );

    // Dot export
    let path = std::path::Path::new("/tmp/large_graph.dot");
    let start = Instant::now();
    DotExporter::new().write_to_file(&graph, path)?;
    let file_size = std::fs::metadata(path)?.len();
    println!(
        "  Dot written in {:?} ({:.1} MB)",
        start.elapsed(),
        file_size as f64 / 1_048_576.0
    );

    println!("\nDone!");
    Ok(())
}
