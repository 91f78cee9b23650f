//! Error types for graph construction.

use thiserror::Error;

/// Errors that can occur while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge references a vertex index outside `[0, num_vertices)`.
    #[error("edge endpoint {vertex} is out of range for {num_vertices} vertices")]
    EndpointOutOfRange { vertex: usize, num_vertices: usize },
}
