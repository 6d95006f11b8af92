//! Export surfaces that read finished graph state.

pub mod dot;
pub mod listing;

pub use dot::DotExporter;
pub use listing::{write_vertices, write_vertices_with_bfs, write_vertices_with_dfs};
