//! Minimum spanning tree via Prim's algorithm.
//!
//! Grows a tree outward from vertex 0 by repeatedly taking the cheapest
//! edge crossing the visited boundary. Two variants share the adjacency
//! view: a lazy one keyed on edges, and an eager one keyed on vertices.
//! Both produce the same total weight on the same input; they differ
//! only in operation counts.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::graph::{Edge, Graph};

use super::{MSTResult, OpCounters};

/// Min-heap entry. `BinaryHeap` is a max-heap, so the weight comparison
/// is reversed; payloads never participate in the ordering.
#[derive(Debug, Clone, Copy)]
struct MinEntry<T> {
    weight: f64,
    item: T,
}

impl<T> PartialEq for MinEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl<T> Eq for MinEntry<T> {}

impl<T> Ord for MinEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.total_cmp(&self.weight)
    }
}

impl<T> PartialOrd for MinEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy Prim: edge-keyed priority queue with discard-on-pop.
///
/// The queue receives every edge that crossed the boundary at the moment
/// its near endpoint was visited. Entries whose far endpoint has been
/// visited since are stale and dropped at extraction time; each
/// extraction, stale or not, counts as a queue pop.
///
/// On a disconnected graph the result is the minimum spanning tree of
/// vertex 0's component only; unreached vertices contribute no edges and
/// no error is raised.
///
/// Time: O(E log E) with the heap holding up to E entries.
pub fn prim_lazy(graph: &Graph) -> MSTResult {
    let n = graph.num_vertices();
    let start = Instant::now();

    let adjacency = graph.adjacency();
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut selected = Vec::new();
    let mut total_weight = 0.0;
    let mut queue_pops = 0u64;

    if n > 0 {
        visit(0, &adjacency, &mut visited, &mut heap);
    }

    while let Some(MinEntry { item: edge, .. }) = heap.pop() {
        queue_pops += 1;
        // Stale entry: the far endpoint was reached while it sat queued.
        if visited[edge.target] {
            continue;
        }
        total_weight += edge.weight;
        selected.push(edge);
        visit(edge.target, &adjacency, &mut visited, &mut heap);
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    tracing::debug!(
        selected = selected.len(),
        total_weight,
        queue_pops,
        elapsed_ms,
        "lazy prim run complete"
    );

    MSTResult {
        edges: selected,
        total_weight,
        num_vertices: n,
        num_edges: graph.num_edges(),
        counters: OpCounters {
            queue_pops,
            ..OpCounters::default()
        },
        elapsed_ms,
    }
}

/// Mark `v` visited and queue its edges to not-yet-visited neighbors.
fn visit(
    v: usize,
    adjacency: &[Vec<Edge>],
    visited: &mut [bool],
    heap: &mut BinaryHeap<MinEntry<Edge>>,
) {
    visited[v] = true;
    for &edge in &adjacency[v] {
        if !visited[edge.target] {
            heap.push(MinEntry {
                weight: edge.weight,
                item: edge,
            });
        }
    }
}

/// Eager Prim: vertex-keyed priority queue over best connection weights.
///
/// `dist_to[v]` holds the cheapest known weight connecting `v` to the
/// tree and `edge_to[v]` the corresponding edge. Instead of an in-place
/// decrease-key, a cheaper rediscovery pushes a duplicate entry and the
/// outdated one is filtered on extraction; this is behaviorally
/// equivalent to a decrease-key queue and differs only in operation
/// counts. Each extraction counts as a queue pop, each improvement of a
/// neighbor's best weight as a relaxation.
///
/// Disconnected input behaves as in [`prim_lazy`]: the tree covers
/// vertex 0's component and nothing else.
///
/// Time: O(E log V) with up to E queued entries.
pub fn prim_eager(graph: &Graph) -> MSTResult {
    let n = graph.num_vertices();
    let start = Instant::now();

    let adjacency = graph.adjacency();
    let mut dist_to = vec![f64::INFINITY; n];
    let mut edge_to: Vec<Option<Edge>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut selected = Vec::new();
    let mut total_weight = 0.0;
    let mut queue_pops = 0u64;
    let mut relaxations = 0u64;

    if n > 0 {
        dist_to[0] = 0.0;
        heap.push(MinEntry {
            weight: 0.0,
            item: 0usize,
        });
    }

    while let Some(MinEntry { item: v, .. }) = heap.pop() {
        queue_pops += 1;
        // Duplicate left behind by a later, cheaper rediscovery.
        if visited[v] {
            continue;
        }
        visited[v] = true;
        if let Some(edge) = edge_to[v] {
            total_weight += edge.weight;
            selected.push(edge);
        }
        for &edge in &adjacency[v] {
            let w = edge.target;
            if !visited[w] && edge.weight < dist_to[w] {
                relaxations += 1;
                dist_to[w] = edge.weight;
                edge_to[w] = Some(edge);
                heap.push(MinEntry {
                    weight: edge.weight,
                    item: w,
                });
            }
        }
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    tracing::debug!(
        selected = selected.len(),
        total_weight,
        queue_pops,
        relaxations,
        elapsed_ms,
        "eager prim run complete"
    );

    MSTResult {
        edges: selected,
        total_weight,
        num_vertices: n,
        num_edges: graph.num_edges(),
        counters: OpCounters {
            queue_pops,
            relaxations,
            ..OpCounters::default()
        },
        elapsed_ms,
    }
}
