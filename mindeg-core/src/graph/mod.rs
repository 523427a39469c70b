//! Graph collaborators consumed by the degree reducer.
//!
//! The reducer reads its input through the [`GraphView`] trait and never
//! mutates it, so one graph can be shared by several independent runs.
//! [`AdjacencyGraph`] is the validated adjacency-list implementation shipped
//! with the crate; it also backs the reducer's mutable working tree and safe
//! forest.

mod adjacency;
mod traversal;
mod validate;

use std::fmt;

pub use self::adjacency::AdjacencyGraph;
pub use self::traversal::{connected_components, spanning_tree};

pub(crate) use self::traversal::tree_path;
pub(crate) use self::validate::{validate_graph, validate_tree};

/// An undirected edge in canonical form (`source <= target`).
///
/// # Examples
/// ```
/// use mindeg_core::Edge;
///
/// let edge = Edge::new(7, 2);
/// assert_eq!((edge.source(), edge.target()), (2, 7));
/// assert_eq!(edge, Edge::new(2, 7));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates the canonical edge joining `left` and `right`.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        if left <= right {
            Self {
                source: left,
                target: right,
            }
        } else {
            Self {
                source: right,
                target: left,
            }
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(usize, usize)> for Edge {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Read-only view over a simple undirected graph on vertices
/// `0..node_count()`.
///
/// Implementations must list every neighbour exactly once and symmetrically;
/// the reducer checks this before it starts and rejects graphs that do not
/// comply.
///
/// # Examples
/// ```
/// use mindeg_core::{Edge, GraphView};
///
/// struct Triangle;
///
/// impl GraphView for Triangle {
///     fn node_count(&self) -> usize { 3 }
///     fn neighbours(&self, node: usize) -> &[usize] {
///         match node {
///             0 => &[1, 2],
///             1 => &[0, 2],
///             2 => &[0, 1],
///             _ => &[],
///         }
///     }
/// }
///
/// let edges: Vec<Edge> = Triangle.edges().collect();
/// assert_eq!(edges, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)]);
/// ```
pub trait GraphView {
    /// Returns the number of vertices.
    fn node_count(&self) -> usize;

    /// Returns the neighbours of `node`, or an empty slice when `node` is out
    /// of range.
    fn neighbours(&self, node: usize) -> &[usize];

    /// Returns a display name used in diagnostics and errors.
    fn name(&self) -> &str {
        "graph"
    }

    /// Returns the number of neighbours of `node`.
    fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    /// Enumerates every undirected edge once, ordered by source and then by
    /// the source's adjacency order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.node_count()).flat_map(move |source| {
            self.neighbours(source)
                .iter()
                .copied()
                .filter(move |&target| source < target)
                .map(move |target| Edge::new(source, target))
        })
    }

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
