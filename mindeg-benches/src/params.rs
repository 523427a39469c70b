//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark ids
//! render consistently in Criterion reports.

use std::fmt;

use mindeg_core::InitialTree;

use crate::graphs::GraphShape;

/// Parameters for a degree-reduction benchmark run.
#[derive(Clone, Debug)]
pub struct ReducerBenchParams {
    /// Family the benchmark graph was drawn from.
    pub shape: GraphShape,
    /// Number of vertices in the graph.
    pub node_count: usize,
    /// Strategy used to extract the starting tree.
    pub initial_tree: InitialTree,
}

impl fmt::Display for ReducerBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = match self.initial_tree {
            InitialTree::BreadthFirst => "bfs",
            InitialTree::DepthFirst => "dfs",
        };
        write!(f, "{},n={},start={start}", self.shape, self.node_count)
    }
}

/// Parameters for a spanning-tree extraction benchmark run.
#[derive(Clone, Debug)]
pub struct TreeBenchParams {
    /// Number of vertices in the graph.
    pub node_count: usize,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}
