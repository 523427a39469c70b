//! Breadth- and depth-first walks: components, spanning trees and tree paths.

use std::collections::VecDeque;

use crate::{builder::InitialTree, error::PreconditionError};

use super::{Edge, GraphView};

/// Partitions the vertices of `graph` into connected components.
///
/// Components are listed in order of their smallest vertex; each component
/// lists its vertices in breadth-first order from that vertex.
///
/// # Examples
/// ```
/// use mindeg_core::{AdjacencyGraph, connected_components};
///
/// let graph = AdjacencyGraph::from_edges(5, [(0, 1), (3, 4)])?;
/// assert_eq!(connected_components(&graph), vec![vec![0, 1], vec![2], vec![3, 4]]);
/// # Ok::<(), mindeg_core::PreconditionError>(())
/// ```
pub fn connected_components<G: GraphView>(graph: &G) -> Vec<Vec<usize>> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for &next in graph.neighbours(node) {
                if next < node_count && !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Extracts an arbitrary spanning tree of a connected graph, rooted at vertex
/// `0` and grown with the requested search order.
///
/// # Errors
/// Returns [`PreconditionError::Disconnected`] when some vertex cannot be
/// reached from vertex `0`.
///
/// # Examples
/// ```
/// use mindeg_core::{AdjacencyGraph, Edge, InitialTree, spanning_tree};
///
/// let graph = AdjacencyGraph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)])?;
/// let bfs = spanning_tree(&graph, InitialTree::BreadthFirst)?;
/// assert_eq!(bfs, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)]);
///
/// let dfs = spanning_tree(&graph, InitialTree::DepthFirst)?;
/// assert_eq!(dfs, vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]);
/// # Ok::<(), mindeg_core::PreconditionError>(())
/// ```
pub fn spanning_tree<G: GraphView>(
    graph: &G,
    strategy: InitialTree,
) -> Result<Vec<Edge>, PreconditionError> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Ok(Vec::new());
    }

    let edges = match strategy {
        InitialTree::BreadthFirst => breadth_first_tree(graph),
        InitialTree::DepthFirst => depth_first_tree(graph),
    };

    if edges.len() + 1 != node_count {
        return Err(PreconditionError::Disconnected {
            components: connected_components(graph).len(),
        });
    }
    Ok(edges)
}

fn breadth_first_tree<G: GraphView>(graph: &G) -> Vec<Edge> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    let mut queue = VecDeque::from([0]);
    visited[0] = true;

    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbours(node) {
            if next < node_count && !visited[next] {
                visited[next] = true;
                edges.push(Edge::new(node, next));
                queue.push_back(next);
            }
        }
    }
    edges
}

fn depth_first_tree<G: GraphView>(graph: &G) -> Vec<Edge> {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    let mut stack = vec![(0, None)];

    while let Some((node, parent)) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        if let Some(parent) = parent {
            edges.push(Edge::new(parent, node));
        }
        // Reverse so the first-listed neighbour is explored first.
        for &next in graph.neighbours(node).iter().rev() {
            if next < node_count && !visited[next] {
                stack.push((next, Some(node)));
            }
        }
    }
    edges
}

/// Returns the vertex sequence of the unique simple path from `from` to `to`
/// in an acyclic graph, or `None` when they are not connected.
///
/// In a graph with cycles this returns a shortest path.
pub(crate) fn tree_path<G: GraphView>(graph: &G, from: usize, to: usize) -> Option<Vec<usize>> {
    let node_count = graph.node_count();
    if from >= node_count || to >= node_count {
        return None;
    }

    let mut parent: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::from([from]);
    visited[from] = true;

    while let Some(node) = queue.pop_front() {
        if node == to {
            break;
        }
        for &next in graph.neighbours(node) {
            if next < node_count && !visited[next] {
                visited[next] = true;
                parent[next] = Some(node);
                queue.push_back(next);
            }
        }
    }

    if !visited[to] {
        return None;
    }

    let mut path = vec![to];
    let mut current = to;
    while let Some(previous) = parent[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Some(path)
}
