//! spannr - Minimum Spanning Tree Engines with Run Instrumentation
//!
//! spannr computes minimum spanning trees of weighted undirected graphs
//! via two classical algorithms: Kruskal's (sorted edges + disjoint-set
//! forest) and Prim's (priority-queue growth, in a lazy edge-keyed and an
//! eager vertex-keyed variant). Every run returns a fresh result carrying
//! the selected edges, total weight, operation counters, and elapsed time,
//! so the engines can be compared against each other on the same input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       io                                 │
//! │     (JSON loader, run reports, DOT export, labels)      │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ feeds / consumes
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                    graph + mst                           │
//! │   (dense-indexed model, union-find, Kruskal, Prim)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The algorithmic core never performs I/O and never sees vertex labels;
//! it works on dense `usize` indices only. Label mapping, file parsing,
//! and report writing live in [`io`].
//!
//! # Modules
//!
//! - [`graph`] - Undirected weighted graph model
//! - [`mst`] - Kruskal and Prim engines, union-find, per-run counters
//! - [`io`] - JSON graph loading, run reports, Graphviz export
//!
//! # Example
//!
//! ```
//! use spannr::graph::{Edge, Graph};
//! use spannr::mst::kruskal;
//!
//! let edges = vec![
//!     Edge::new(0, 1, 1.0),
//!     Edge::new(1, 2, 2.0),
//!     Edge::new(0, 2, 4.0),
//! ];
//! let graph = Graph::new(3, edges).unwrap();
//!
//! let run = kruskal(&graph);
//! assert_eq!(run.edges.len(), 2);
//! assert_eq!(run.total_weight, 3.0);
//! ```

pub mod graph;
pub mod io;
pub mod mst;

// Re-export main types for convenience
pub use graph::{Edge, Graph, GraphError};
pub use io::{LabeledGraph, LoadError, Report};
pub use mst::{kruskal, prim_eager, prim_lazy, MSTResult, OpCounters, UnionFind};
