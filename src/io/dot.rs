//! Graphviz DOT export.
//!
//! Renders the loaded graph in `graph G { ... }` notation, one line per
//! vertex and one `--` line per edge. When a run result is supplied, its
//! selected edges are drawn in red so the tree stands out against the
//! rest of the graph.

use std::io::{self, Write};

use crate::graph::Edge;
use crate::mst::MSTResult;

use super::LabeledGraph;

/// Write a DOT description of `labeled`, highlighting the edges selected
/// by `mst` when given.
///
/// # Errors
/// Propagates write failures.
pub fn write_dot<W: Write>(
    out: &mut W,
    labeled: &LabeledGraph,
    mst: Option<&MSTResult>,
) -> io::Result<()> {
    // Duplicate edges are independent entries, so each selected edge
    // highlights exactly one matching input line.
    let mut remaining: Vec<Edge> = mst.map(|m| m.edges.clone()).unwrap_or_default();

    writeln!(out, "graph G {{")?;
    for v in labeled.graph.vertices() {
        writeln!(out, "  \"{}\";", labeled.label(v))?;
    }
    for edge in labeled.graph.edges() {
        let start = labeled.label(edge.source);
        let end = labeled.label(edge.target);
        if take_match(&mut remaining, edge) {
            writeln!(
                out,
                "  \"{start}\" -- \"{end}\" [label=\"{:.2}\", color=red];",
                edge.weight
            )?;
        } else {
            writeln!(out, "  \"{start}\" -- \"{end}\" [label=\"{:.2}\"];", edge.weight)?;
        }
    }
    writeln!(out, "}}")
}

/// Remove and report the first selected edge equal to `edge` up to
/// endpoint orientation.
fn take_match(remaining: &mut Vec<Edge>, edge: &Edge) -> bool {
    let position = remaining.iter().position(|selected| {
        selected.weight == edge.weight
            && ((selected.source == edge.source && selected.target == edge.target)
                || (selected.source == edge.target && selected.target == edge.source))
    });
    match position {
        Some(i) => {
            remaining.swap_remove(i);
            true
        }
        None => false,
    }
}
