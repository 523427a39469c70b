use mindeg_core::{AdjacencyGraph, GraphView};

/// Two hubs, 0 and 4, joined by an edge; 1-5 and 2-3 offer detours.
#[must_use]
pub fn two_stars() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(
        7,
        [(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (2, 3), (4, 5), (4, 6)],
    )
    .expect("two-stars edges are valid")
    .with_name("two-stars")
}

#[must_use]
pub fn complete(node_count: usize) -> AdjacencyGraph {
    let edges: Vec<_> = (0..node_count)
        .flat_map(|source| (source + 1..node_count).map(move |target| (source, target)))
        .collect();
    AdjacencyGraph::from_edges(node_count, edges)
        .expect("complete graph edges are valid")
        .with_name("complete")
}

/// Unchecked adjacency lists, for feeding malformed graphs to the reducer.
pub struct RawLists {
    name: &'static str,
    lists: Vec<Vec<usize>>,
}

impl RawLists {
    #[must_use]
    pub fn new(name: &'static str, lists: Vec<Vec<usize>>) -> Self {
        Self { name, lists }
    }
}

impl GraphView for RawLists {
    fn node_count(&self) -> usize {
        self.lists.len()
    }

    fn neighbours(&self, node: usize) -> &[usize] {
        self.lists.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn name(&self) -> &str {
        self.name
    }
}
