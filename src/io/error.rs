//! Error types for the I/O adapters.

use thiserror::Error;

use crate::graph::GraphError;

/// Errors that can occur while loading a graph description.
///
/// A load failure aborts that input only; batch drivers continue with
/// the remaining inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or a missing required field; the underlying error
    /// names the offending structure.
    #[error("malformed graph description: {0}")]
    Json(#[from] serde_json::Error),

    /// The vertex list declares the same label twice.
    #[error("vertex {label:?} is declared more than once")]
    DuplicateVertex { label: String },

    /// An edge endpoint names a vertex the description never declares.
    #[error("edge {start:?} -- {end:?} references undeclared vertex {label:?}")]
    UnknownVertex {
        start: String,
        end: String,
        label: String,
    },

    /// The resolved edge list violated a graph invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
