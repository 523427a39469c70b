//! Exhaustive minimum-degree oracle for tiny graphs.
//!
//! Enumerates every `(n - 1)`-edge subset, keeps the spanning trees, and
//! reports the smallest maximum degree among them. Exponential, so callers
//! keep `n` to a handful of vertices.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{builder::DegreeReducerBuilder, union_find::DisjointSet};

use super::types::ReducerFixture;

/// Returns the optimal maximum degree over all spanning trees, or `None`
/// when the edges do not connect every vertex.
pub(super) fn optimal_max_degree(node_count: usize, edges: &[(usize, usize)]) -> Option<usize> {
    if node_count < 2 {
        return Some(0);
    }
    let mut chosen = Vec::with_capacity(node_count - 1);
    let mut best = None;
    search(node_count, edges, 0, &mut chosen, &mut best);
    best
}

fn search(
    node_count: usize,
    edges: &[(usize, usize)],
    next: usize,
    chosen: &mut Vec<(usize, usize)>,
    best: &mut Option<usize>,
) {
    if chosen.len() + 1 == node_count {
        if let Some(degree) = spanning_max_degree(node_count, chosen) {
            *best = Some(best.map_or(degree, |current| current.min(degree)));
        }
        return;
    }
    for index in next..edges.len() {
        chosen.push(edges[index]);
        search(node_count, edges, index + 1, chosen, best);
        chosen.pop();
    }
}

fn spanning_max_degree(node_count: usize, edges: &[(usize, usize)]) -> Option<usize> {
    let mut components = DisjointSet::new(node_count);
    let mut degrees = vec![0; node_count];
    for &(source, target) in edges {
        if !components.union(source, target) {
            return None;
        }
        degrees[source] += 1;
        degrees[target] += 1;
    }
    degrees.into_iter().max()
}

/// The reducer never beats the optimum, and it never moves away from a
/// starting tree that is already optimal.
pub(super) fn run_oracle_property(fixture: &ReducerFixture) -> TestCaseResult {
    let optimum = optimal_max_degree(fixture.node_count, &fixture.edges)
        .ok_or_else(|| TestCaseError::fail("oracle fixture must be connected"))?;
    let graph = fixture
        .graph()
        .map_err(|err| TestCaseError::fail(format!("fixture graph is invalid: {err}")))?;
    let reduction = DegreeReducerBuilder::new()
        .with_initial_tree(fixture.initial_tree)
        .build()
        .and_then(|reducer| reducer.run(&graph))
        .map_err(|err| TestCaseError::fail(format!("reduction failed: {err}")))?;

    if reduction.final_max_degree() < optimum {
        return Err(TestCaseError::fail(format!(
            "reported degree {} beats the optimum {optimum} on {:?}",
            reduction.final_max_degree(),
            fixture.edges,
        )));
    }
    if reduction.initial_max_degree() == optimum && reduction.final_max_degree() != optimum {
        return Err(TestCaseError::fail("an optimal starting tree was made worse"));
    }
    Ok(())
}
