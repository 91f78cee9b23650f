//! Per-run operation counters.

/// Operation counts for a single engine run.
///
/// A fresh record is produced for every invocation and attached to that
/// run's [`MSTResult`](super::MSTResult); nothing accumulates across
/// runs. Fields an engine does not track stay zero: Kruskal never pops a
/// queue, the Prim variants never touch the disjoint-set forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounters {
    /// Edges examined in ascending-weight order (Kruskal).
    pub edges_examined: u64,
    /// Priority-queue extractions, stale entries included (Prim).
    pub queue_pops: u64,
    /// Successful distance improvements (eager Prim).
    pub relaxations: u64,
    /// Union calls, including those that found the endpoints already
    /// joined (Kruskal).
    pub union_operations: u64,
    /// Find traversal steps, final root comparison included (Kruskal).
    pub find_operations: u64,
}
