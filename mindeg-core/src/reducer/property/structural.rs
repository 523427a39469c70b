//! Structural invariants of a finished reduction.
//!
//! - **Spanning**: `n - 1` edges, acyclic, every edge taken from the input.
//! - **Degrees**: cached degrees match the edge list.
//! - **History**: starts at the initial maximum, ends at the final one, and
//!   never rises.
//! - **Accounting**: one history entry per round, every round but the last
//!   made at least one swap, and no more rounds ran than there are vertices.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    builder::DegreeReducerBuilder,
    graph::{AdjacencyGraph, GraphView},
    result::DegreeReduction,
};

use super::types::ReducerFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &ReducerFixture) -> TestCaseResult {
    let graph = fixture
        .graph()
        .map_err(|err| TestCaseError::fail(format!("fixture graph is invalid: {err}")))?;
    let reduction = DegreeReducerBuilder::new()
        .with_initial_tree(fixture.initial_tree)
        .build()
        .and_then(|reducer| reducer.run(&graph))
        .map_err(|err| {
            TestCaseError::fail(format!(
                "reduction failed: {err} (family={:?}, nodes={}, edges={})",
                fixture.family,
                fixture.node_count,
                fixture.edges.len(),
            ))
        })?;

    validate_spanning(&graph, &reduction)?;
    validate_degrees(&reduction)?;
    validate_history(&reduction)?;
    validate_accounting(&reduction)
}

fn validate_spanning(graph: &AdjacencyGraph, reduction: &DegreeReduction) -> TestCaseResult {
    let tree = reduction.tree();
    if tree.node_count() != graph.node_count() || !tree.is_valid() {
        return Err(TestCaseError::fail(format!(
            "result is not a spanning tree: {} edges over {} vertices",
            tree.edge_count(),
            tree.node_count(),
        )));
    }
    if let Some(edge) = tree.edges().iter().find(|&&edge| !graph.contains_edge(edge)) {
        return Err(TestCaseError::fail(format!(
            "tree edge {edge} is not an edge of the input graph"
        )));
    }
    Ok(())
}

fn validate_degrees(reduction: &DegreeReduction) -> TestCaseResult {
    let tree = reduction.tree();
    let mut expected = vec![0; tree.node_count()];
    for edge in tree.edges() {
        expected[edge.source()] += 1;
        expected[edge.target()] += 1;
    }
    if expected != tree.degrees() {
        return Err(TestCaseError::fail(format!(
            "cached degrees {:?} disagree with edges {expected:?}",
            tree.degrees(),
        )));
    }
    Ok(())
}

fn validate_history(reduction: &DegreeReduction) -> TestCaseResult {
    let history = reduction.max_degree_history();
    if history.first() != Some(&reduction.initial_max_degree())
        || history.last() != Some(&reduction.final_max_degree())
    {
        return Err(TestCaseError::fail(format!(
            "history {history:?} does not run from {} to {}",
            reduction.initial_max_degree(),
            reduction.final_max_degree(),
        )));
    }
    if let Some(window) = history.windows(2).find(|pair| pair[1] > pair[0]) {
        return Err(TestCaseError::fail(format!(
            "maximum degree rose between rounds: {window:?} in {history:?}"
        )));
    }
    Ok(())
}

fn validate_accounting(reduction: &DegreeReduction) -> TestCaseResult {
    let rounds = reduction.rounds();
    if reduction.max_degree_history().len() != rounds + 1 {
        return Err(TestCaseError::fail(format!(
            "{} history entries for {rounds} rounds",
            reduction.max_degree_history().len(),
        )));
    }
    if reduction.swaps() + 1 < rounds {
        return Err(TestCaseError::fail(format!(
            "{rounds} rounds ran with only {} swaps",
            reduction.swaps(),
        )));
    }
    if rounds > reduction.tree().node_count() {
        return Err(TestCaseError::fail(format!(
            "{rounds} rounds for {} vertices",
            reduction.tree().node_count(),
        )));
    }
    if !reduction.converged() {
        return Err(TestCaseError::fail("unbounded run reported no convergence"));
    }
    Ok(())
}
