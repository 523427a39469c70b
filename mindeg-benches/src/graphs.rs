//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random recursive tree guarantees
//! connectivity and the chosen [`GraphShape`] decides which extra edges sit
//! on top of it. Generation is deterministic for a given seed so benchmark
//! runs compare like with like.

use std::{collections::BTreeSet, fmt};

use mindeg_core::AdjacencyGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Number of hub vertices drawn for [`GraphShape::HubHeavy`].
const HUB_COUNT: usize = 4;

/// Family of synthetic graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphShape {
    /// A random tree plus uniformly drawn chords.
    Sparse,
    /// A random tree plus a few hubs adjacent to about half of the vertices.
    /// Breadth-first starts on these graphs have very high maximum degree.
    HubHeavy,
    /// Every pair of vertices is adjacent.
    Complete,
}

impl fmt::Display for GraphShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sparse => "sparse",
            Self::HubHeavy => "hubs",
            Self::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub node_count: usize,
    /// Chords added on top of the random tree. Only [`GraphShape::Sparse`]
    /// reads this value.
    pub extra_edges: usize,
    /// Family the graph is drawn from.
    pub shape: GraphShape,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from the given configuration.
///
/// The graph is named `"{shape}-{node_count}"`.
///
/// # Errors
///
/// Returns [`BenchSetupError::ZeroValue`] if `node_count` is zero, or
/// [`BenchSetupError::Graph`] if the generated edges are rejected.
///
/// # Examples
///
/// ```
/// use mindeg_benches::graphs::{GraphShape, SyntheticGraphConfig, generate_graph};
/// use mindeg_core::GraphView;
///
/// let config = SyntheticGraphConfig {
///     node_count: 16,
///     extra_edges: 8,
///     shape: GraphShape::Sparse,
///     seed: 7,
/// };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.node_count(), 16);
/// assert_eq!(graph.name(), "sparse-16");
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<AdjacencyGraph, BenchSetupError> {
    if config.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = random_tree(config.node_count, &mut rng);
    match config.shape {
        GraphShape::Sparse => add_chords(&mut edges, config, &mut rng),
        GraphShape::HubHeavy => add_hubs(&mut edges, config.node_count, &mut rng),
        GraphShape::Complete => add_all_pairs(&mut edges, config.node_count),
    }

    let graph = AdjacencyGraph::from_edges(config.node_count, edges)?;
    Ok(graph.with_name(format!("{}-{}", config.shape, config.node_count)))
}

fn random_tree(node_count: usize, rng: &mut SmallRng) -> BTreeSet<(usize, usize)> {
    (1..node_count)
        .map(|node| (rng.gen_range(0..node), node))
        .collect()
}

fn add_chords(
    edges: &mut BTreeSet<(usize, usize)>,
    config: &SyntheticGraphConfig,
    rng: &mut SmallRng,
) {
    if config.node_count < 2 {
        return;
    }
    let target = edges.len().saturating_add(config.extra_edges);
    // Saturated graphs cannot take every requested chord.
    for _ in 0..config.extra_edges.saturating_mul(4) {
        if edges.len() >= target {
            break;
        }
        let left = rng.gen_range(0..config.node_count);
        let right = rng.gen_range(0..config.node_count);
        if left != right {
            edges.insert((left.min(right), left.max(right)));
        }
    }
}

fn add_hubs(edges: &mut BTreeSet<(usize, usize)>, node_count: usize, rng: &mut SmallRng) {
    for hub in 0..HUB_COUNT.min(node_count) {
        for node in (hub + 1)..node_count {
            if rng.gen_ratio(1, 2) {
                edges.insert((hub, node));
            }
        }
    }
}

fn add_all_pairs(edges: &mut BTreeSet<(usize, usize)>, node_count: usize) {
    for left in 0..node_count {
        edges.extend(((left + 1)..node_count).map(|right| (left, right)));
    }
}
