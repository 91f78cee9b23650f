//! JSON run reports.
//!
//! Serializable view of an engine run with vertex labels restored. The
//! core result types stay serde-free; this module owns the mirror
//! structs that define the report format.

use serde::Serialize;

use crate::mst::{MSTResult, OpCounters};

use super::LabeledGraph;

/// One engine run, ready to serialize.
#[derive(Debug, Serialize)]
pub struct Report {
    pub algorithm: String,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub total_weight: f64,
    pub elapsed_ms: u64,
    /// `false` when the run produced a partial spanning forest.
    pub connected: bool,
    pub counters: ReportCounters,
    /// Selected edges in selection order, labels restored.
    pub mst_edges: Vec<ReportEdge>,
}

#[derive(Debug, Serialize)]
pub struct ReportCounters {
    pub edges_examined: u64,
    pub queue_pops: u64,
    pub relaxations: u64,
    pub union_operations: u64,
    pub find_operations: u64,
}

#[derive(Debug, Serialize)]
pub struct ReportEdge {
    pub start: String,
    pub end: String,
    pub weight: f64,
}

impl Report {
    /// Build a report for `result`, restoring labels from `labeled`.
    pub fn new(algorithm: &str, labeled: &LabeledGraph, result: &MSTResult) -> Self {
        let OpCounters {
            edges_examined,
            queue_pops,
            relaxations,
            union_operations,
            find_operations,
        } = result.counters;

        Self {
            algorithm: algorithm.to_string(),
            num_vertices: result.num_vertices,
            num_edges: result.num_edges,
            total_weight: result.total_weight,
            elapsed_ms: result.elapsed_ms,
            connected: result.is_spanning_tree(),
            counters: ReportCounters {
                edges_examined,
                queue_pops,
                relaxations,
                union_operations,
                find_operations,
            },
            mst_edges: result
                .edges
                .iter()
                .map(|edge| ReportEdge {
                    start: labeled.label(edge.source).to_string(),
                    end: labeled.label(edge.target).to_string(),
                    weight: edge.weight,
                })
                .collect(),
        }
    }

    /// Render as pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::io::parse_graph;
    use crate::mst::kruskal;

    use super::*;

    #[test]
    fn test_report_shape() {
        let labeled = parse_graph(
            r#"{
                "vertices": ["A", "B", "C"],
                "edges": [
                    {"start": "A", "end": "B", "weight": 1.0},
                    {"start": "B", "end": "C", "weight": 2.0},
                    {"start": "A", "end": "C", "weight": 4.0}
                ]
            }"#,
        )
        .unwrap();
        let result = kruskal(&labeled.graph);
        let report = Report::new("kruskal", &labeled, &result);

        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["algorithm"], "kruskal");
        assert_eq!(json["num_vertices"], 3);
        assert_eq!(json["num_edges"], 3);
        assert_eq!(json["total_weight"], 3.0);
        assert_eq!(json["connected"], true);
        assert_eq!(json["counters"]["edges_examined"], 2);
        assert_eq!(json["mst_edges"][0]["start"], "A");
        assert_eq!(json["mst_edges"][0]["end"], "B");
        assert_eq!(json["mst_edges"][1]["weight"], 2.0);
    }
}
