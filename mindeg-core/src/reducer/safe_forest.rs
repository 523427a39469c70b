//! Per-round bookkeeping of the tree edges that may be rewired freely.

use crate::{
    graph::{AdjacencyGraph, Edge, GraphView, connected_components, tree_path},
    tree::WorkingTree,
    union_find::DisjointSet,
};

/// How close a vertex sits to the round's maximum degree `D`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum VertexClass {
    /// Usable as a candidate endpoint.
    Safe,
    /// Degree `D - 1`.
    Fragile,
    /// Degree `D`.
    Blocked,
}

impl VertexClass {
    pub(super) fn of(degree: usize, max_degree: usize) -> Self {
        if degree >= max_degree {
            Self::Blocked
        } else if degree + 1 == max_degree {
            Self::Fragile
        } else {
            Self::Safe
        }
    }
}

/// The tree restricted to edges between safe vertices, with a disjoint set
/// mirroring its components.
///
/// Classes only move towards `Safe` within a round: blocked vertices are
/// demoted to fragile when a swap relieves them, fragile vertices are
/// promoted or absorbed once they stop threatening the maximum.
#[derive(Debug)]
pub(super) struct SafeForest {
    edges: AdjacencyGraph,
    components: DisjointSet,
    classes: Vec<VertexClass>,
    blocked: usize,
}

impl SafeForest {
    pub(super) fn build(tree: &WorkingTree, max_degree: usize) -> Self {
        let node_count = tree.node_count();
        let classes: Vec<_> = (0..node_count)
            .map(|node| VertexClass::of(tree.degree(node), max_degree))
            .collect();
        let blocked = tree.vertices_with_degree(max_degree).count();

        let mut edges = AdjacencyGraph::empty(node_count);
        for edge in tree.edges() {
            let (source, target) = edge.endpoints();
            if classes[source] == VertexClass::Safe && classes[target] == VertexClass::Safe {
                edges.insert_edge(edge);
            }
        }

        let mut components = DisjointSet::new(node_count);
        for component in connected_components(&edges) {
            for pair in component.windows(2) {
                components.union(pair[0], pair[1]);
            }
        }

        Self {
            edges,
            components,
            classes,
            blocked,
        }
    }

    pub(super) fn class(&self, node: usize) -> VertexClass {
        self.classes[node]
    }

    pub(super) fn is_safe(&self, node: usize) -> bool {
        self.class(node) == VertexClass::Safe
    }

    pub(super) fn blocked_count(&self) -> usize {
        self.blocked
    }

    pub(super) fn connected(&mut self, left: usize, right: usize) -> bool {
        self.components.connected(left, right)
    }

    /// Adds a tree edge to the forest, merging the components of its
    /// endpoints. Already-present edges only refresh the merge.
    pub(super) fn link(&mut self, edge: Edge) {
        let (source, target) = edge.endpoints();
        self.edges.insert_edge(edge);
        self.components.union(source, target);
    }

    /// Drops a forest edge. The caller must reconnect both sides with another
    /// edge, since the disjoint set cannot split a component.
    pub(super) fn unlink(&mut self, edge: Edge) -> bool {
        self.edges.remove_edge(edge)
    }

    /// Returns the forest path between two vertices, if they share a
    /// component.
    pub(super) fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        tree_path(&self.edges, from, to)
    }

    /// Lets a fragile vertex that lies on a safe cycle act as a safe one.
    pub(super) fn absorb(&mut self, node: usize) {
        if self.classes[node] == VertexClass::Fragile {
            self.classes[node] = VertexClass::Safe;
        }
    }

    /// Records that a blocked vertex lost one tree edge.
    pub(super) fn demote(&mut self, node: usize) {
        if self.classes[node] == VertexClass::Blocked {
            self.classes[node] = VertexClass::Fragile;
            self.blocked -= 1;
        }
    }

    /// Turns a fragile vertex safe and links it to every safe tree
    /// neighbour.
    pub(super) fn promote(&mut self, node: usize, tree: &WorkingTree) {
        self.classes[node] = VertexClass::Safe;
        for &neighbour in tree.neighbours(node) {
            if self.is_safe(neighbour) {
                self.link(Edge::new(node, neighbour));
            }
        }
    }
}
