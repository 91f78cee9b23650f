//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Sorts an owned copy of the edge list by ascending weight and greedily
//! selects every edge whose endpoints are not yet connected in a
//! disjoint-set forest.

use std::time::Instant;

use crate::graph::Graph;

use super::{MSTResult, OpCounters, UnionFind};

/// Kruskal's minimum spanning tree algorithm.
///
/// Edges are taken in ascending weight under a stable sort, so
/// equal-weight edges keep their input order and repeated runs over the
/// same graph select the identical edge sequence. The engine sorts an
/// owned copy; the caller's edge order survives the run.
///
/// The loop stops as soon as `n - 1` edges are selected. On a
/// disconnected graph it instead exhausts all edges and returns the
/// minimum spanning forest of the components it could merge, which is
/// documented behavior rather than an error.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal(graph: &Graph) -> MSTResult {
    let n = graph.num_vertices();
    let start = Instant::now();

    let mut edges = graph.edges().to_vec();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(n);
    let mut selected = Vec::new();
    let mut total_weight = 0.0;
    let mut edges_examined = 0u64;

    for edge in edges {
        edges_examined += 1;
        if !uf.connected(edge.source, edge.target) {
            uf.union(edge.source, edge.target);
            total_weight += edge.weight;
            selected.push(edge);
            // A spanning tree is complete at n - 1 edges.
            if selected.len() + 1 == n {
                break;
            }
        }
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    tracing::debug!(
        selected = selected.len(),
        total_weight,
        edges_examined,
        elapsed_ms,
        "kruskal run complete"
    );

    MSTResult {
        edges: selected,
        total_weight,
        num_vertices: n,
        num_edges: graph.num_edges(),
        counters: OpCounters {
            edges_examined,
            union_operations: uf.union_operations(),
            find_operations: uf.find_operations(),
            ..OpCounters::default()
        },
        elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Edge;

    use super::*;

    fn diamond() -> Graph {
        // Vertices A=0, B=1, C=2, D=3.
        Graph::new(
            4,
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 2.0),
                Edge::new(2, 3, 3.0),
                Edge::new(0, 3, 10.0),
                Edge::new(0, 2, 4.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_diamond_selection_order_and_weight() {
        let result = kruskal(&diamond());

        assert_eq!(
            result.edges,
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 2.0),
                Edge::new(2, 3, 3.0),
            ]
        );
        assert_eq!(result.total_weight, 6.0);
        assert_eq!(result.num_vertices, 4);
        assert_eq!(result.num_edges, 5);
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn test_early_termination_skips_remaining_edges() {
        let result = kruskal(&diamond());
        // The tree is complete after examining the three cheapest edges;
        // A-C and A-D are never looked at.
        assert_eq!(result.counters.edges_examined, 3);
        assert_eq!(result.counters.union_operations, 3);
        assert!(result.counters.find_operations > 0);
    }

    #[test]
    fn test_single_vertex() {
        let graph = Graph::new(1, Vec::new()).unwrap();
        let result = kruskal(&graph);
        assert!(result.edges.is_empty());
        assert_eq!(result.total_weight, 0.0);
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn test_self_loops_and_duplicates_are_processed() {
        let graph = Graph::new(
            2,
            vec![
                Edge::new(0, 0, 0.5),
                Edge::new(0, 1, 2.0),
                Edge::new(0, 1, 1.0),
            ],
        )
        .unwrap();
        let result = kruskal(&graph);

        // The self-loop connects nothing; the cheaper duplicate wins.
        assert_eq!(result.edges, vec![Edge::new(0, 1, 1.0)]);
        assert_eq!(result.total_weight, 1.0);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let graph = Graph::new(
            3,
            vec![
                Edge::new(1, 2, 1.0),
                Edge::new(0, 1, 1.0),
                Edge::new(0, 2, 1.0),
            ],
        )
        .unwrap();
        let result = kruskal(&graph);

        // All weights tie; the stable sort preserves input order, so the
        // first two listed edges form the tree.
        assert_eq!(
            result.edges,
            vec![Edge::new(1, 2, 1.0), Edge::new(0, 1, 1.0)]
        );
    }

    #[test]
    fn test_determinism_across_runs() {
        let graph = diamond();
        let first = kruskal(&graph);
        let second = kruskal(&graph);
        assert_eq!(first.edges, second.edges);
        assert_eq!(first.total_weight, second.total_weight);
    }

    #[test]
    fn test_input_edge_order_survives() {
        let graph = Graph::new(3, vec![Edge::new(1, 2, 3.0), Edge::new(0, 1, 1.0)]).unwrap();
        let before = graph.edges().to_vec();
        kruskal(&graph);
        assert_eq!(graph.edges(), before.as_slice());
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        // Two triangles with distinct weights, no edge between them.
        let graph = Graph::new(
            6,
            vec![
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 2.0),
                Edge::new(0, 2, 5.0),
                Edge::new(3, 4, 3.0),
                Edge::new(4, 5, 4.0),
                Edge::new(3, 5, 6.0),
            ],
        )
        .unwrap();
        let result = kruskal(&graph);

        // Two cheapest edges per triangle.
        assert_eq!(result.edges.len(), 4);
        assert_eq!(result.total_weight, 1.0 + 2.0 + 3.0 + 4.0);
        assert!(!result.is_spanning_tree());
        // Every edge was examined; the loop never reached n - 1 picks.
        assert_eq!(result.counters.edges_examined, 6);
    }
}
