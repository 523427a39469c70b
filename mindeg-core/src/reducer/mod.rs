//! Degree reduction orchestration.
//!
//! Provides the [`DegreeReducer`] entry point. Each round freezes the current
//! maximum degree `D`, rebuilds the safe forest, and scans the input graph
//! for non-tree edges whose tree cycle runs through a vertex of degree `D`.
//! Swapping such an edge in relieves that vertex without raising any other
//! vertex to `D`. Rounds repeat until one finds no swap.

mod round;
mod safe_forest;

#[cfg(test)]
mod property;

use std::num::NonZeroUsize;

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::InitialTree,
    error::{MdstError, PreconditionError},
    graph::{Edge, GraphView, spanning_tree, validate_graph, validate_tree},
    result::DegreeReduction,
    tree::WorkingTree,
};

use self::round::{Round, RoundOutcome};

/// Below this maximum degree every spanning tree is a path, which no swap
/// can improve.
const PATH_DEGREE: usize = 2;

/// Entry point for reducing the maximum degree of a spanning tree.
///
/// A reducer holds configuration only; it can be reused across graphs and
/// shared between threads.
///
/// # Examples
/// ```
/// use mindeg_core::{AdjacencyGraph, DegreeReducerBuilder};
///
/// // Two hubs joined by vertex 4; leaves 1 and 5 are also adjacent.
/// let graph = AdjacencyGraph::from_edges(
///     7,
///     [(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (2, 3), (4, 5), (4, 6)],
/// )?;
/// let reduction = DegreeReducerBuilder::new().build()?.run(&graph)?;
///
/// assert_eq!(reduction.initial_max_degree(), 4);
/// assert_eq!(reduction.final_max_degree(), 3);
/// assert!(reduction.tree().is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DegreeReducer {
    max_rounds: Option<NonZeroUsize>,
    initial_tree: InitialTree,
}

impl DegreeReducer {
    pub(crate) fn new(max_rounds: Option<NonZeroUsize>, initial_tree: InitialTree) -> Self {
        Self {
            max_rounds,
            initial_tree,
        }
    }

    /// Returns the configured round limit, or `None` when rounds are
    /// unbounded.
    #[must_use]
    pub fn max_rounds(&self) -> Option<NonZeroUsize> {
        self.max_rounds
    }

    /// Returns the strategy used to extract the starting spanning tree.
    #[must_use]
    pub fn initial_tree(&self) -> InitialTree {
        self.initial_tree
    }

    /// Reduces a spanning tree extracted from `graph` with the configured
    /// [`InitialTree`] strategy.
    ///
    /// # Errors
    /// Returns [`MdstError::PreconditionViolation`] when `graph` lists an
    /// out-of-range vertex, a self-loop, a repeated or one-sided neighbour,
    /// or is disconnected. Returns [`MdstError::InvariantViolation`] if the
    /// search corrupts its own state; no tree is returned in that case.
    #[instrument(
        name = "reducer.run",
        err,
        skip(self, graph),
        fields(
            graph = %graph.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            max_rounds = ?self.max_rounds,
            initial_tree = ?self.initial_tree,
        ),
    )]
    pub fn run<G: GraphView>(&self, graph: &G) -> Result<DegreeReduction> {
        check_graph(graph)?;
        let edges = spanning_tree(graph, self.initial_tree)
            .map_err(|error| reject(graph, error))?;
        self.reduce(graph, WorkingTree::from_edges(graph.node_count(), &edges))
    }

    /// Reduces a caller-supplied spanning tree of `graph`.
    ///
    /// The configured [`InitialTree`] strategy is ignored.
    ///
    /// # Errors
    /// Returns [`MdstError::PreconditionViolation`] when `graph` is invalid
    /// as for [`DegreeReducer::run`], or when `initial` is not a spanning
    /// tree of `graph`.
    ///
    /// # Examples
    /// ```
    /// use mindeg_core::{AdjacencyGraph, DegreeReducerBuilder, Edge};
    ///
    /// let graph = AdjacencyGraph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)])?;
    /// let star = [Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)];
    /// let reduction = DegreeReducerBuilder::new().build()?.run_from_tree(&graph, &star)?;
    ///
    /// assert_eq!(reduction.initial_max_degree(), 3);
    /// assert_eq!(reduction.final_max_degree(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(
        name = "reducer.run",
        err,
        skip(self, graph, initial),
        fields(
            graph = %graph.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            max_rounds = ?self.max_rounds,
            initial_tree = "supplied",
        ),
    )]
    pub fn run_from_tree<G: GraphView>(
        &self,
        graph: &G,
        initial: &[Edge],
    ) -> Result<DegreeReduction> {
        check_graph(graph)?;
        validate_tree(graph, initial).map_err(|error| reject(graph, error))?;
        self.reduce(graph, WorkingTree::from_edges(graph.node_count(), initial))
    }

    fn reduce<G: GraphView>(&self, graph: &G, mut tree: WorkingTree) -> Result<DegreeReduction> {
        let initial_max_degree = tree.max_degree();
        let mut history = vec![initial_max_degree];
        let mut totals = RoundOutcome::default();
        let mut rounds = 0;

        let converged = loop {
            if tree.max_degree() <= PATH_DEGREE {
                break true;
            }
            if self.max_rounds.is_some_and(|limit| rounds >= limit.get()) {
                warn!(
                    rounds,
                    max_degree = tree.max_degree(),
                    "round limit reached before convergence"
                );
                break false;
            }

            rounds += 1;
            let outcome = Round::new(graph, &mut tree).run(rounds)?;
            record_round_metrics(&outcome);
            totals.swaps += outcome.swaps;
            totals.repairs += outcome.repairs;
            history.push(tree.max_degree());

            if outcome.swaps == 0 {
                break true;
            }
        };

        let tree = tree.into_spanning_tree();
        if !tree.is_valid() {
            return Err(MdstError::invariant("reduced tree must remain a spanning tree"));
        }

        info!(
            rounds,
            swaps = totals.swaps,
            repairs = totals.repairs,
            initial_max_degree,
            final_max_degree = tree.max_degree(),
            converged,
            "degree reduction finished"
        );

        Ok(DegreeReduction {
            tree,
            initial_max_degree,
            rounds,
            swaps: totals.swaps,
            repairs: totals.repairs,
            converged,
            max_degree_history: history,
        })
    }
}

fn check_graph<G: GraphView>(graph: &G) -> Result<()> {
    validate_graph(graph).map_err(|error| reject(graph, error))
}

fn reject<G: GraphView>(graph: &G, error: PreconditionError) -> MdstError {
    warn!(graph = graph.name(), %error, "rejecting input graph");
    MdstError::precondition(graph.name(), error)
}

#[cfg(feature = "metrics")]
fn record_round_metrics(outcome: &RoundOutcome) {
    metrics::counter!("mindeg_rounds_total").increment(1);
    metrics::counter!("mindeg_swaps_total").increment(outcome.swaps as u64);
    metrics::counter!("mindeg_repairs_total").increment(outcome.repairs as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_round_metrics(_outcome: &RoundOutcome) {}
