//! Adjacency-list graph storage.

use std::{collections::HashSet, sync::Arc};

use crate::error::PreconditionError;

use super::{Edge, GraphView};

const DEFAULT_NAME: &str = "graph";

/// Simple undirected graph stored as one neighbour list per vertex.
///
/// Built through [`AdjacencyGraph::from_edges`], which rejects out-of-range
/// vertices, self-loops and repeated edges, so every instance satisfies the
/// reducer's input preconditions apart from connectivity.
///
/// # Examples
/// ```
/// use mindeg_core::{AdjacencyGraph, Edge, GraphView};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1), (2, 1)])?.with_name("path");
/// assert_eq!(graph.name(), "path");
/// assert_eq!(graph.neighbours(1), &[0, 2]);
/// assert!(graph.contains_edge(Edge::new(1, 2)));
/// # Ok::<(), mindeg_core::PreconditionError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph {
    name: Arc<str>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Builds a graph on `node_count` vertices from undirected edges.
    ///
    /// Neighbour lists are sorted, so [`GraphView::edges`] enumerates edges in
    /// lexicographic order.
    ///
    /// # Errors
    /// Returns [`PreconditionError::NodeOutOfRange`] for an endpoint
    /// `>= node_count`, [`PreconditionError::SelfLoop`] for an edge `(v, v)`
    /// and [`PreconditionError::DuplicateEdge`] when an edge is listed twice
    /// (in either orientation).
    pub fn from_edges<I, E>(node_count: usize, edges: I) -> Result<Self, PreconditionError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::empty(node_count);
        let mut seen = HashSet::new();
        for edge in edges {
            let edge = edge.into();
            let (source, target) = edge.endpoints();
            if target >= node_count {
                return Err(PreconditionError::NodeOutOfRange {
                    node: target,
                    node_count,
                });
            }
            if edge.is_loop() {
                return Err(PreconditionError::SelfLoop { node: source });
            }
            if !seen.insert(edge) {
                return Err(PreconditionError::DuplicateEdge {
                    left: source,
                    right: target,
                });
            }
            graph.insert_edge(edge);
        }
        for neighbours in &mut graph.adjacency {
            neighbours.sort_unstable();
        }
        Ok(graph)
    }

    /// Attaches a display name used in diagnostics.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns `true` when the graph contains `edge`.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        let (source, target) = edge.endpoints();
        self.neighbours(source).contains(&target)
    }

    pub(crate) fn empty(node_count: usize) -> Self {
        Self {
            name: Arc::from(DEFAULT_NAME),
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Inserts `edge`, returning `false` when it is already present or an
    /// endpoint is out of range.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        let (source, target) = edge.endpoints();
        if edge.is_loop() || target >= self.adjacency.len() || self.contains_edge(edge) {
            return false;
        }
        self.adjacency[source].push(target);
        self.adjacency[target].push(source);
        self.edge_count += 1;
        true
    }

    /// Removes `edge`, returning `false` when it was not present.
    pub(crate) fn remove_edge(&mut self, edge: Edge) -> bool {
        let (source, target) = edge.endpoints();
        if !detach(&mut self.adjacency, source, target) {
            return false;
        }
        detach(&mut self.adjacency, target, source);
        self.edge_count -= 1;
        true
    }
}

fn detach(adjacency: &mut [Vec<usize>], node: usize, neighbour: usize) -> bool {
    let Some(neighbours) = adjacency.get_mut(node) else {
        return false;
    };
    let Some(position) = neighbours.iter().position(|&other| other == neighbour) else {
        return false;
    };
    neighbours.swap_remove(position);
    true
}

impl GraphView for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbours(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}
