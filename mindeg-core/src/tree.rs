//! The spanning tree the reducer rewires in place.

use crate::{
    error::MdstError,
    graph::{AdjacencyGraph, Edge, GraphView, tree_path},
    result::SpanningTree,
};

/// Mutable spanning tree with constant-time degree lookup.
///
/// Callers keep the spanning-tree invariant themselves: every removal is
/// paired with an insertion that reconnects the two halves.
#[derive(Clone, Debug)]
pub(crate) struct WorkingTree {
    edges: AdjacencyGraph,
}

impl WorkingTree {
    pub(crate) fn from_edges(node_count: usize, edges: &[Edge]) -> Self {
        let mut tree = AdjacencyGraph::empty(node_count);
        for &edge in edges {
            tree.insert_edge(edge);
        }
        Self { edges: tree }
    }

    pub(crate) fn max_degree(&self) -> usize {
        (0..self.node_count())
            .map(|node| self.degree(node))
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn vertices_with_degree(&self, degree: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(move |&node| self.degree(node) == degree)
    }

    #[cfg(test)]
    pub(crate) fn contains_edge(&self, edge: Edge) -> bool {
        self.edges.contains_edge(edge)
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge) -> Result<(), MdstError> {
        if self.edges.insert_edge(edge) {
            Ok(())
        } else {
            Err(MdstError::invariant("inserted tree edge must be new"))
        }
    }

    pub(crate) fn remove_edge(&mut self, edge: Edge) -> Result<(), MdstError> {
        if self.edges.remove_edge(edge) {
            Ok(())
        } else {
            Err(MdstError::invariant("removed tree edge must exist"))
        }
    }

    /// Returns the unique tree path from `from` to `to`.
    pub(crate) fn path(&self, from: usize, to: usize) -> Result<Vec<usize>, MdstError> {
        tree_path(&self.edges, from, to)
            .ok_or(MdstError::invariant("working tree must connect every pair of vertices"))
    }

    pub(crate) fn into_spanning_tree(self) -> SpanningTree {
        SpanningTree::new(self.node_count(), self.edges.edges().collect())
    }
}

impl GraphView for WorkingTree {
    fn node_count(&self) -> usize {
        self.edges.node_count()
    }

    fn neighbours(&self, node: usize) -> &[usize] {
        self.edges.neighbours(node)
    }

    fn name(&self) -> &str {
        "working-tree"
    }

    fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }
}
