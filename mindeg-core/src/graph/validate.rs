//! Precondition checks run before the reducer touches a graph.

use crate::{error::PreconditionError, union_find::DisjointSet};

use super::{Edge, GraphView, connected_components};

/// Checks that `graph` is simple, symmetric and connected.
///
/// Graphs with fewer than two vertices are accepted trivially.
pub(crate) fn validate_graph<G: GraphView>(graph: &G) -> Result<(), PreconditionError> {
    let node_count = graph.node_count();
    let mut arcs = Vec::new();

    for source in 0..node_count {
        for &target in graph.neighbours(source) {
            if target >= node_count {
                return Err(PreconditionError::NodeOutOfRange {
                    node: target,
                    node_count,
                });
            }
            if target == source {
                return Err(PreconditionError::SelfLoop { node: source });
            }
            arcs.push((source, target));
        }
    }

    arcs.sort_unstable();
    if let Some(&[(source, target), _]) = arcs
        .windows(2)
        .find(|pair| matches!(pair, [first, second] if first == second))
    {
        let edge = Edge::new(source, target);
        return Err(PreconditionError::DuplicateEdge {
            left: edge.source(),
            right: edge.target(),
        });
    }

    if let Some(&(left, right)) = arcs
        .iter()
        .find(|&&(source, target)| arcs.binary_search(&(target, source)).is_err())
    {
        return Err(PreconditionError::AsymmetricAdjacency { left, right });
    }

    let components = connected_components(graph).len();
    if components > 1 {
        return Err(PreconditionError::Disconnected { components });
    }
    Ok(())
}

/// Checks that `edges` form a spanning tree of `graph`: exactly
/// `node_count - 1` edges, each present in the graph, with no cycle.
pub(crate) fn validate_tree<G: GraphView>(graph: &G, edges: &[Edge]) -> Result<(), PreconditionError> {
    let node_count = graph.node_count();
    if edges.len() != node_count.saturating_sub(1) {
        return Err(PreconditionError::InvalidInitialTree {
            reason: "a spanning tree needs exactly node_count - 1 edges",
        });
    }

    let mut components = DisjointSet::new(node_count);
    for edge in edges {
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
        if !graph.neighbours(source).contains(&target) {
            return Err(PreconditionError::InvalidInitialTree {
                reason: "tree edge is not an edge of the graph",
            });
        }
        if !components.union(source, target) {
            return Err(PreconditionError::InvalidInitialTree {
                reason: "tree edges contain a cycle",
            });
        }
    }
    Ok(())
}
