//! Export tests: dot format, undirected pair dedup, vertex listings.

use hopgraph::export::{
    write_vertices, write_vertices_with_bfs, write_vertices_with_dfs, DotExporter,
};
use hopgraph::graph::{bfs, dfs, Graph, GraphBuilder};
use hopgraph::types::error::GraphError;

use tempfile::tempdir;

/// Render a graph to a dot string through an in-memory writer.
fn dot_string(graph: &Graph) -> String {
    let mut buf: Vec<u8> = Vec::new();
    DotExporter::new().write_to(graph, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// ==================== Dot Format ====================

#[test]
fn test_dot_empty_graph() {
    let graph = Graph::new(1);
    assert_eq!(dot_string(&graph), "graph {\n}\n");
}

#[test]
fn test_dot_line_format() {
    let mut graph = Graph::new(1);
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_adjacent_many(1, &[(2, 7)]).unwrap();

    assert_eq!(dot_string(&graph), "graph {\n\t1 -- 2 [label = 7];\n}\n");
}

#[test]
fn test_dot_undirected_pair_emitted_once() {
    let mut builder = GraphBuilder::new(1);
    builder.vertex(1).vertex(2);
    builder.undirected(1, 2, 4);
    let graph = builder.build().unwrap();

    let out = dot_string(&graph);
    let edge_lines: Vec<&str> = out.lines().filter(|l| l.contains(" -- ")).collect();
    assert_eq!(edge_lines, vec!["\t1 -- 2 [label = 4];"]);
    assert!(!out.contains("2 -- 1"));
}

#[test]
fn test_dot_one_directional_edge_emitted_once() {
    // An unmatched directed edge still produces exactly one line.
    let mut graph = Graph::new(1);
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_adjacent_many(1, &[(2, 3)]).unwrap();

    let out = dot_string(&graph);
    assert_eq!(out.lines().filter(|l| l.contains(" -- ")).count(), 1);
}

#[test]
fn test_dot_lines_follow_insertion_order() {
    let mut builder = GraphBuilder::new(1);
    builder.vertices(&[1, 2, 3]);
    builder.undirected(1, 2, 5);
    builder.undirected(2, 3, 8);
    let graph = builder.build().unwrap();

    assert_eq!(
        dot_string(&graph),
        "graph {\n\t1 -- 2 [label = 5];\n\t2 -- 3 [label = 8];\n}\n"
    );
}

#[test]
fn test_dot_negative_weight_label() {
    let mut graph = Graph::new(1);
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_adjacent_many(1, &[(2, -3)]).unwrap();

    assert!(dot_string(&graph).contains("\t1 -- 2 [label = -3];"));
}

#[test]
fn test_dot_self_loop_emitted_once() {
    let mut graph = Graph::new(1);
    graph.add_vertex(1).unwrap();
    graph.add_adjacent_many(1, &[(1, 2)]).unwrap();

    let out = dot_string(&graph);
    assert_eq!(out.lines().filter(|l| l.contains(" -- ")).count(), 1);
    assert!(out.contains("\t1 -- 1 [label = 2];"));
}

#[test]
fn test_dot_write_to_file() {
    let mut builder = GraphBuilder::new(1);
    builder.vertices(&[1, 2]);
    builder.undirected(1, 2, 9);
    let graph = builder.build().unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.dot");
    DotExporter::new().write_to_file(&graph, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("graph {\n"));
    assert!(contents.ends_with("}\n"));
    assert!(contents.contains("1 -- 2 [label = 9];"));
}

#[test]
fn test_dot_unwritable_path_fails() {
    let graph = Graph::new(1);

    let dir = tempdir().unwrap();
    let path = dir.path().join("missing_subdir").join("graph.dot");
    let result = DotExporter::new().write_to_file(&graph, &path);
    assert!(result.is_err());
    match result.unwrap_err() {
        GraphError::Io(_) => {}
        e => panic!("Expected Io error, got {:?}", e),
    }
}

// ==================== Vertex Listing ====================

#[test]
fn test_listing_plain() {
    let mut graph = Graph::new(1);
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.add_adjacent_many(1, &[(2, 5), (2, 6)]).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    write_vertices(&graph, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "vertex 1: edges=2\nvertex 2: edges=0\n"
    );
}

#[test]
fn test_listing_follows_insertion_order() {
    let mut graph = Graph::new(1);
    for id in [3, 1, 2] {
        graph.add_vertex(id).unwrap();
    }

    let mut buf: Vec<u8> = Vec::new();
    write_vertices(&graph, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "vertex 3: edges=0\nvertex 1: edges=0\nvertex 2: edges=0\n"
    );
}

#[test]
fn test_listing_with_bfs() {
    let mut graph = Graph::new(1);
    for id in [1, 2, 3] {
        graph.add_vertex(id).unwrap();
    }
    graph.add_adjacent_many(1, &[(2, 5)]).unwrap();

    let result = bfs(&graph, 1).unwrap();
    let mut buf: Vec<u8> = Vec::new();
    write_vertices_with_bfs(&graph, &result, &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "vertex 1: distance=0 parent=none\n\
         vertex 2: distance=1 parent=1\n\
         vertex 3: distance=inf parent=none\n"
    );
}

#[test]
fn test_listing_with_dfs() {
    let mut graph = Graph::new(1);
    for id in [1, 2, 3] {
        graph.add_vertex(id).unwrap();
    }
    graph.add_adjacent_many(1, &[(2, 5)]).unwrap();

    let result = dfs(&graph, 1).unwrap();
    let mut buf: Vec<u8> = Vec::new();
    write_vertices_with_dfs(&graph, &result, &mut buf).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "vertex 1: visited=true\nvertex 2: visited=true\nvertex 3: visited=false\n"
    );
}
