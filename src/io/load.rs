//! JSON graph loader.
//!
//! Parses a textual description of named vertices and weighted edges:
//!
//! ```json
//! {
//!   "vertices": ["A", "B", "C"],
//!   "edges": [{"start": "A", "end": "B", "weight": 2.5}]
//! }
//! ```
//!
//! Labels are assigned dense indices in declaration order; the engines
//! only ever see the indices.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::graph::{Edge, Graph};

use super::LoadError;

#[derive(Debug, Deserialize)]
struct GraphFile {
    vertices: Vec<String>,
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
struct EdgeEntry {
    start: String,
    end: String,
    weight: f64,
}

/// A dense-indexed graph together with the labels it was loaded from,
/// in index order.
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    pub graph: Graph,
    pub labels: Vec<String>,
}

impl LabeledGraph {
    /// Label of vertex `v`.
    pub fn label(&self, v: usize) -> &str {
        &self.labels[v]
    }
}

/// Load a graph description from a JSON file.
///
/// # Errors
/// Fails fast on unreadable files, malformed JSON, missing fields,
/// duplicate vertex declarations, and edges referencing undeclared
/// vertices, identifying the offending path, field, or label.
pub fn load_graph(path: &Path) -> Result<LabeledGraph, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let labeled = parse_graph(&text)?;
    tracing::debug!(
        path = %path.display(),
        vertices = labeled.graph.num_vertices(),
        edges = labeled.graph.num_edges(),
        "graph loaded"
    );
    Ok(labeled)
}

/// Parse a JSON graph description from a string.
///
/// # Errors
/// See [`load_graph`]; everything but the file read applies.
pub fn parse_graph(text: &str) -> Result<LabeledGraph, LoadError> {
    let file: GraphFile = serde_json::from_str(text)?;

    let mut index = HashMap::new();
    for (i, label) in file.vertices.iter().enumerate() {
        if index.insert(label.clone(), i).is_some() {
            return Err(LoadError::DuplicateVertex {
                label: label.clone(),
            });
        }
    }

    let mut edges = Vec::with_capacity(file.edges.len());
    for entry in &file.edges {
        let source = resolve(&index, entry, &entry.start)?;
        let target = resolve(&index, entry, &entry.end)?;
        edges.push(Edge::new(source, target, entry.weight));
    }

    let graph = Graph::new(file.vertices.len(), edges)?;
    Ok(LabeledGraph {
        graph,
        labels: file.vertices,
    })
}

fn resolve(
    index: &HashMap<String, usize>,
    entry: &EdgeEntry,
    label: &str,
) -> Result<usize, LoadError> {
    index.get(label).copied().ok_or_else(|| LoadError::UnknownVertex {
        start: entry.start.clone(),
        end: entry.end.clone(),
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assigns_declaration_order_indices() {
        let labeled = parse_graph(
            r#"{
                "vertices": ["A", "B", "C"],
                "edges": [
                    {"start": "C", "end": "A", "weight": 4.0},
                    {"start": "A", "end": "B", "weight": 1.0}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(labeled.labels, vec!["A", "B", "C"]);
        assert_eq!(labeled.graph.num_vertices(), 3);
        assert_eq!(
            labeled.graph.edges(),
            &[Edge::new(2, 0, 4.0), Edge::new(0, 1, 1.0)]
        );
        assert_eq!(labeled.label(2), "C");
    }

    #[test]
    fn test_unknown_vertex_names_the_offender() {
        let err = parse_graph(
            r#"{
                "vertices": ["A"],
                "edges": [{"start": "A", "end": "Z", "weight": 1.0}]
            }"#,
        )
        .unwrap_err();

        match err {
            LoadError::UnknownVertex { label, .. } => assert_eq!(label, "Z"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_vertex_is_rejected() {
        let err = parse_graph(r#"{"vertices": ["A", "A"], "edges": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateVertex { label } if label == "A"));
    }

    #[test]
    fn test_missing_field_is_a_json_error() {
        let err = parse_graph(
            r#"{
                "vertices": ["A", "B"],
                "edges": [{"start": "A", "end": "B"}]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_empty_description() {
        let labeled = parse_graph(r#"{"vertices": [], "edges": []}"#).unwrap();
        assert_eq!(labeled.graph.num_vertices(), 0);
        assert_eq!(labeled.graph.num_edges(), 0);
    }
}
