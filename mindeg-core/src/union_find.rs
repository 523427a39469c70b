//! Union-find (disjoint set union) over vertex identifiers.
//!
//! The reducer uses this structure to track which safe vertices are already
//! joined through the safe forest, so a candidate edge whose endpoints share
//! a representative can be discarded without walking the tree.

/// Array-backed disjoint sets with path compression and union by rank.
///
/// Every identifier below [`DisjointSet::len`] starts in its own singleton
/// set. Querying an identifier beyond the current length grows the structure,
/// so the operations are total over any vertex identifier.
///
/// # Examples
/// ```
/// use mindeg_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert!(sets.connected(0, 1));
/// assert!(!sets.connected(0, 2));
/// assert_eq!(sets.set_count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `node_count` singleton sets `{0}, {1}, ..., {node_count - 1}`.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            sets: node_count,
        }
    }

    /// Returns the number of identifiers currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no identifier has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `node`, registering
    /// `node` (and any smaller unseen identifiers) as singletons first.
    pub fn find(&mut self, mut node: usize) -> usize {
        self.register(node);

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when the
    /// identifiers already shared a representative.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    fn register(&mut self, node: usize) {
        let len = self.parent.len();
        if node < len {
            return;
        }
        self.parent.extend(len..=node);
        self.rank.resize(node + 1, 0);
        self.sets += node + 1 - len;
    }
}

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for disjoint-set invariants.

    use super::DisjointSet;

    /// Verifies that unions never lose identifiers and that the set count
    /// drops by exactly one per successful merge.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_union_accounting_4_nodes() {
        let mut sets = DisjointSet::new(4);
        let mut merges = 0usize;
        for _ in 0..3 {
            let left: usize = kani::any();
            let right: usize = kani::any();
            kani::assume(left < 4 && right < 4);
            if sets.union(left, right) {
                merges += 1;
            }
            kani::assert(sets.connected(left, right), "union must connect its arguments");
        }
        kani::assert(sets.set_count() == 4 - merges, "set count must track merges");
        kani::assert(sets.len() == 4, "unions must not register new identifiers");
    }
}
