//! Fixture types for reducer property tests.

use test_strategy::Arbitrary;

use crate::{
    builder::InitialTree,
    error::PreconditionError,
    graph::AdjacencyGraph,
};

/// Shape of a generated input graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphFamily {
    /// Random tree plus a handful of extra edges.
    #[weight(3)]
    Sparse,
    /// Random tree overlaid with many random pairs.
    #[weight(2)]
    Dense,
    /// A few hubs adjacent to most vertices, so breadth-first trees start
    /// with very high degree.
    #[weight(3)]
    HubHeavy,
    /// Every pair adjacent.
    #[weight(1)]
    Complete,
    /// A cycle with random chords.
    #[weight(1)]
    ChordedCycle,
}

/// Generated graph together with the starting-tree strategy to reduce it
/// with.
#[derive(Clone, Debug)]
pub(super) struct ReducerFixture {
    /// Family the graph was drawn from.
    pub family: GraphFamily,
    /// Number of vertices.
    pub node_count: usize,
    /// Distinct undirected edges; the graph is always connected.
    pub edges: Vec<(usize, usize)>,
    /// Strategy used to extract the starting tree.
    pub initial_tree: InitialTree,
}

impl ReducerFixture {
    /// Builds the adjacency graph described by the fixture.
    pub fn graph(&self) -> Result<AdjacencyGraph, PreconditionError> {
        Ok(AdjacencyGraph::from_edges(self.node_count, self.edges.iter().copied())?
            .with_name(format!("{:?}", self.family)))
    }
}
