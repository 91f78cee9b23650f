//! Disjoint-set forest with path compression and union by size.

/// Union-find over `n` dense elements, used by Kruskal's selection loop
/// to track connected components.
///
/// `find` halves the paths it walks by repointing visited nodes to their
/// grandparents; `union` attaches the smaller tree under the larger root.
/// Together these keep the amortized cost per operation near-constant
/// over a run. Each instance counts its own operations, so a fresh forest
/// per run gives per-run instrumentation for free.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
    union_operations: u64,
    find_operations: u64,
}

impl UnionFind {
    /// `n` singleton components, each self-rooted with size 1.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
            union_operations: 0,
            find_operations: 0,
        }
    }

    /// Representative root of the component containing `p`.
    ///
    /// Every pointer hop, the final root comparison included, is counted
    /// as a find operation; a `find` on a root costs exactly one.
    pub fn find(&mut self, mut p: usize) -> usize {
        self.find_operations += 1;
        while p != self.parent[p] {
            self.parent[p] = self.parent[self.parent[p]]; // path compression
            p = self.parent[p];
            self.find_operations += 1;
        }
        p
    }

    /// Whether `p` and `q` are in the same component.
    ///
    /// Costs two counted finds; it is not recorded as a union.
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merge the components containing `p` and `q`.
    ///
    /// The call is recorded even when both endpoints already share a
    /// root, in which case no structural change is made.
    pub fn union(&mut self, p: usize, q: usize) {
        self.union_operations += 1;
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return;
        }
        // Union by size: smaller tree goes under the larger root.
        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }
        self.count -= 1;
    }

    /// Number of connected components formed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Union calls recorded on this instance.
    pub fn union_operations(&self) -> u64 {
        self.union_operations
    }

    /// Find traversal steps recorded on this instance.
    pub fn find_operations(&self) -> u64 {
        self.find_operations
    }
}
