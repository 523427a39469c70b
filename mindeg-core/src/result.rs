//! Result types returned by a degree reduction run.

use crate::{graph::Edge, union_find::DisjointSet};

/// A spanning tree over vertices `0..node_count`, stored as sorted canonical
/// edges with cached vertex degrees.
///
/// # Examples
/// ```
/// use mindeg_core::{AdjacencyGraph, DegreeReducerBuilder, Edge};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1), (1, 2), (0, 2)])?;
/// let reduction = DegreeReducerBuilder::new().build()?.run(&graph)?;
/// let tree = reduction.tree();
/// assert_eq!(tree.edges(), &[Edge::new(0, 1), Edge::new(0, 2)]);
/// assert_eq!(tree.max_degree(), 2);
/// assert!(tree.is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    node_count: usize,
    edges: Vec<Edge>,
    degrees: Vec<usize>,
}

impl SpanningTree {
    pub(crate) fn new(node_count: usize, mut edges: Vec<Edge>) -> Self {
        edges.sort_unstable();
        let mut degrees = vec![0; node_count];
        for edge in &edges {
            let (source, target) = edge.endpoints();
            degrees[source] += 1;
            degrees[target] += 1;
        }
        Self {
            node_count,
            edges,
            degrees,
        }
    }

    /// Returns the tree edges in ascending order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of vertices the tree spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the tree degree of `node`, or `0` when `node` is out of range.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.degrees.get(node).copied().unwrap_or(0)
    }

    /// Returns the per-vertex tree degrees.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns the largest vertex degree, or `0` for trees without edges.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.degrees.iter().copied().max().unwrap_or(0)
    }

    /// Returns `true` when the tree contains `edge`.
    #[must_use]
    pub fn contains(&self, edge: Edge) -> bool {
        self.edges.binary_search(&edge).is_ok()
    }

    /// Checks the spanning-tree properties: `node_count - 1` edges, no
    /// self-loops and no cycles.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.edges.len() != self.node_count.saturating_sub(1) {
            return false;
        }
        let mut components = DisjointSet::new(self.node_count);
        self.edges.iter().all(|edge| {
            let (source, target) = edge.endpoints();
            !edge.is_loop() && target < self.node_count && components.union(source, target)
        })
    }

    /// Returns the tree edges as a vector, consuming the tree.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Outcome of [`crate::DegreeReducer::run`]: the final tree plus statistics
/// about the search that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeReduction {
    pub(crate) tree: SpanningTree,
    pub(crate) initial_max_degree: usize,
    pub(crate) rounds: usize,
    pub(crate) swaps: usize,
    pub(crate) repairs: usize,
    pub(crate) converged: bool,
    pub(crate) max_degree_history: Vec<usize>,
}

impl DegreeReduction {
    /// Returns the final spanning tree.
    #[must_use]
    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Consumes the reduction, returning the final spanning tree.
    #[must_use]
    pub fn into_tree(self) -> SpanningTree {
        self.tree
    }

    /// Maximum degree of the starting tree.
    #[must_use]
    pub fn initial_max_degree(&self) -> usize {
        self.initial_max_degree
    }

    /// Maximum degree of the final tree.
    #[must_use]
    pub fn final_max_degree(&self) -> usize {
        self.tree.max_degree()
    }

    /// Number of improvement rounds that ran.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of edge swaps that removed a tree edge at a maximum-degree
    /// vertex.
    #[must_use]
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Number of secondary swaps that freed a candidate endpoint before a
    /// primary swap.
    #[must_use]
    pub fn repairs(&self) -> usize {
        self.repairs
    }

    /// `false` when the run stopped because it hit the configured round
    /// limit rather than because no further improvement was found.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Maximum degree of the starting tree followed by the maximum degree
    /// after each round.
    #[must_use]
    pub fn max_degree_history(&self) -> &[usize] {
        &self.max_degree_history
    }
}
