//! Determinism and round-limit behaviour.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    builder::DegreeReducerBuilder,
    graph::AdjacencyGraph,
    result::DegreeReduction,
};

use super::types::ReducerFixture;

fn reduce(
    graph: &AdjacencyGraph,
    fixture: &ReducerFixture,
    max_rounds: Option<usize>,
) -> Result<DegreeReduction, TestCaseError> {
    let builder = DegreeReducerBuilder::new().with_initial_tree(fixture.initial_tree);
    let builder = match max_rounds {
        Some(rounds) => builder.with_max_rounds(rounds),
        None => builder,
    };
    builder
        .build()
        .and_then(|reducer| reducer.run(graph))
        .map_err(|err| TestCaseError::fail(format!("reduction failed: {err}")))
}

fn fixture_graph(fixture: &ReducerFixture) -> Result<AdjacencyGraph, TestCaseError> {
    fixture
        .graph()
        .map_err(|err| TestCaseError::fail(format!("fixture graph is invalid: {err}")))
}

/// Two runs over the same graph produce identical reductions.
pub(super) fn run_determinism_property(fixture: &ReducerFixture) -> TestCaseResult {
    let graph = fixture_graph(fixture)?;
    let first = reduce(&graph, fixture, None)?;
    let second = reduce(&graph, fixture, None)?;
    if first != second {
        return Err(TestCaseError::fail(format!(
            "runs diverged: {:?} vs {:?}",
            first.tree().edges(),
            second.tree().edges(),
        )));
    }
    Ok(())
}

/// A capped run is a prefix of the unbounded one, and restarting from its
/// tree never loses ground.
pub(super) fn run_round_limit_property(fixture: &ReducerFixture, limit: usize) -> TestCaseResult {
    let graph = fixture_graph(fixture)?;
    let full = reduce(&graph, fixture, None)?;
    let capped = reduce(&graph, fixture, Some(limit))?;

    if capped.rounds() > limit {
        return Err(TestCaseError::fail(format!(
            "{} rounds ran under a limit of {limit}",
            capped.rounds(),
        )));
    }
    let prefix = &full.max_degree_history()[..capped.max_degree_history().len()];
    if prefix != capped.max_degree_history() {
        return Err(TestCaseError::fail(format!(
            "capped history {:?} is not a prefix of {:?}",
            capped.max_degree_history(),
            full.max_degree_history(),
        )));
    }
    if capped.converged() && capped != full {
        return Err(TestCaseError::fail("converged capped run differs from the unbounded run"));
    }

    let resumed = DegreeReducerBuilder::new()
        .build()
        .and_then(|reducer| reducer.run_from_tree(&graph, capped.tree().edges()))
        .map_err(|err| TestCaseError::fail(format!("resumed reduction failed: {err}")))?;
    if resumed.final_max_degree() > capped.final_max_degree() {
        return Err(TestCaseError::fail(format!(
            "resuming raised the maximum degree from {} to {}",
            capped.final_max_degree(),
            resumed.final_max_degree(),
        )));
    }
    Ok(())
}
