//! I/O adapters around the algorithmic core.
//!
//! Everything that touches files, labels, or serialized formats lives
//! here: the JSON graph loader, the JSON run-report serializer, and the
//! Graphviz DOT exporter. The engines consume and produce dense-indexed
//! values only; these adapters translate at the boundary.

mod dot;
mod error;
mod load;
mod report;

pub use dot::write_dot;
pub use error::LoadError;
pub use load::{load_graph, parse_graph, LabeledGraph};
pub use report::{Report, ReportCounters, ReportEdge};
