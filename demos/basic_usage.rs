//! Basic build -> traverse -> export flow.

use hopgraph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    // Build a small diamond-shaped graph
    let mut builder = GraphBuilder::new(1);
    builder.vertices(&[1, 2, 3, 4]);
    builder
        .edge(1, 2, 5)
        .edge(1, 3, 1)
        .edge(2, 4, 2)
        .edge(3, 4, 9);
    let graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    // BFS: shortest-hop distances and parents from vertex 1
    let reach = bfs(&graph, 1)?;
    println!("\nBFS from vertex 1:");
    let mut stdout = std::io::stdout();
    write_vertices_with_bfs(&graph, &reach, &mut stdout)?;
    if let Some(path) = reach.path_to(4) {
        println!("shortest-hop path to 4: {:?}", path);
    }

    // DFS: reachability from vertex 1
    let visits = dfs(&graph, 1)?;
    println!("\nDFS from vertex 1 (visit order {:?}):", visits.order());
    write_vertices_with_dfs(&graph, &visits, &mut stdout)?;

    // Traversal results serialize for downstream consumers
    println!(
        "\nBFS result as JSON:\n{}",
        serde_json::to_string_pretty(&reach).unwrap()
    );

    // Save the graph as a Graphviz dot file
    let path = std::path::Path::new("/tmp/basic_usage.dot");
    DotExporter::new().write_to_file(&graph, path)?;
    println!("\nSaved dot file to {}", path.display());

    Ok(())
}
