//! Error types for the hopgraph library.

use thiserror::Error;

/// All errors that can occur in the hopgraph library.
///
/// These are the conditions the original design aborted on (duplicate
/// vertex, unknown adjacency destination, export I/O failure), surfaced
/// as recoverable values so callers decide what is fatal.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex with this id is already present in the graph.
    #[error("vertex {0} already exists in the graph")]
    DuplicateVertex(u64),

    /// An adjacency pair references a destination id not present in the graph.
    #[error("adjacency destination {0} not found in the graph")]
    UnknownDestination(u64),

    /// An operation referenced a source vertex id not present in the graph.
    #[error("vertex {0} not found in the graph")]
    VertexNotFound(u64),

    /// IO error while writing an export target.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for hopgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
