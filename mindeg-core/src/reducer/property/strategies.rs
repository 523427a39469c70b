//! Graph generators for reducer property tests.
//!
//! Every generator starts from a random spanning tree, so the resulting
//! graph is connected, then layers family-specific edges on top. Seeds come
//! from proptest; the graphs themselves are built with [`SmallRng`] so a
//! failing seed reproduces exactly.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::builder::InitialTree;

use super::types::{GraphFamily, ReducerFixture};

const MIN_NODES: usize = 6;
const MAX_NODES: usize = 40;
/// Dense and complete graphs stay small to bound the quadratic edge count.
const DENSE_MAX_NODES: usize = 18;
const COMPLETE_MAX_NODES: usize = 10;
/// The brute-force oracle enumerates edge subsets, so its graphs stay tiny.
const ORACLE_MAX_NODES: usize = 6;

/// Generates fixtures across every [`GraphFamily`] and both starting-tree
/// strategies.
pub(super) fn reducer_fixture_strategy() -> impl Strategy<Value = ReducerFixture> {
    (any::<GraphFamily>(), any::<u64>(), any::<bool>()).prop_map(|(family, seed, depth_first)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let initial_tree = if depth_first {
            InitialTree::DepthFirst
        } else {
            InitialTree::BreadthFirst
        };
        generate_fixture(family, initial_tree, &mut rng)
    })
}

/// Generates connected graphs small enough for the exhaustive oracle.
pub(super) fn oracle_fixture_strategy() -> impl Strategy<Value = ReducerFixture> {
    (2..=ORACLE_MAX_NODES, any::<u64>()).prop_map(|(node_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = random_tree(node_count, &mut rng);
        let density = rng.gen_range(0.1..=0.6);
        add_random_pairs(node_count, density, &mut edges, &mut rng);
        fixture(GraphFamily::Sparse, node_count, edges, InitialTree::BreadthFirst)
    })
}

/// Generates a fixture for an explicit family, for targeted rstest cases.
pub(super) fn generate_fixture(
    family: GraphFamily,
    initial_tree: InitialTree,
    rng: &mut SmallRng,
) -> ReducerFixture {
    let (node_count, edges) = match family {
        GraphFamily::Sparse => sparse(rng),
        GraphFamily::Dense => dense(rng),
        GraphFamily::HubHeavy => hub_heavy(rng),
        GraphFamily::Complete => complete(rng),
        GraphFamily::ChordedCycle => chorded_cycle(rng),
    };
    fixture(family, node_count, edges, initial_tree)
}

fn fixture(
    family: GraphFamily,
    node_count: usize,
    edges: BTreeSet<(usize, usize)>,
    initial_tree: InitialTree,
) -> ReducerFixture {
    ReducerFixture {
        family,
        node_count,
        edges: edges.into_iter().collect(),
        initial_tree,
    }
}

fn sparse(rng: &mut SmallRng) -> (usize, BTreeSet<(usize, usize)>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = random_tree(node_count, rng);
    let extra = rng.gen_range(0..=node_count);
    for _ in 0..extra {
        insert_pair(rng.gen_range(0..node_count), rng.gen_range(0..node_count), &mut edges);
    }
    (node_count, edges)
}

fn dense(rng: &mut SmallRng) -> (usize, BTreeSet<(usize, usize)>) {
    let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let mut edges = random_tree(node_count, rng);
    let density = rng.gen_range(0.4..=0.9);
    add_random_pairs(node_count, density, &mut edges, rng);
    (node_count, edges)
}

fn hub_heavy(rng: &mut SmallRng) -> (usize, BTreeSet<(usize, usize)>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let hubs = rng.gen_range(1..=3);
    let mut edges = BTreeSet::new();
    for hub in 0..hubs {
        for node in 0..node_count {
            if node == hub || rng.gen_bool(0.85) {
                insert_pair(hub, node, &mut edges);
            }
        }
    }
    // Hubs may miss some vertices; a backbone path keeps the graph connected.
    for node in 1..node_count {
        if rng.gen_bool(0.5) || !edges.iter().any(|&(_, target)| target == node) {
            insert_pair(node - 1, node, &mut edges);
        }
    }
    (node_count, edges)
}

fn complete(rng: &mut SmallRng) -> (usize, BTreeSet<(usize, usize)>) {
    let node_count = rng.gen_range(3..=COMPLETE_MAX_NODES);
    let mut edges = BTreeSet::new();
    add_random_pairs(node_count, 1.0, &mut edges, rng);
    (node_count, edges)
}

fn chorded_cycle(rng: &mut SmallRng) -> (usize, BTreeSet<(usize, usize)>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = BTreeSet::new();
    for node in 0..node_count {
        insert_pair(node, (node + 1) % node_count, &mut edges);
    }
    let chords = rng.gen_range(0..=node_count / 3);
    for _ in 0..chords {
        insert_pair(rng.gen_range(0..node_count), rng.gen_range(0..node_count), &mut edges);
    }
    (node_count, edges)
}

/// Random recursive tree: each vertex attaches to an earlier one, which
/// favours low-numbered hubs.
fn random_tree(node_count: usize, rng: &mut SmallRng) -> BTreeSet<(usize, usize)> {
    let mut edges = BTreeSet::new();
    for node in 1..node_count {
        insert_pair(rng.gen_range(0..node), node, &mut edges);
    }
    edges
}

fn add_random_pairs(
    node_count: usize,
    probability: f64,
    edges: &mut BTreeSet<(usize, usize)>,
    rng: &mut SmallRng,
) {
    for source in 0..node_count {
        for target in source + 1..node_count {
            if rng.gen_bool(probability) {
                insert_pair(source, target, edges);
            }
        }
    }
}

fn insert_pair(left: usize, right: usize, edges: &mut BTreeSet<(usize, usize)>) {
    if left != right {
        edges.insert((left.min(right), left.max(right)));
    }
}
