//! Minimum-degree spanning tree construction.
//!
//! `mindeg-core` searches for a spanning tree of a connected, undirected,
//! unweighted graph whose maximum vertex degree is as small as a local search
//! can make it. The search starts from an arbitrary spanning tree and rewires
//! it one edge swap at a time, each swap lowering the number of vertices that
//! sit at the current maximum degree without creating a new one.
//!
//! The result is a heuristic: it never reports a tree worse than the starting
//! tree, but it does not promise the optimum.
//!
//! # Examples
//! ```
//! use mindeg_core::{AdjacencyGraph, DegreeReducerBuilder};
//!
//! // A wheel-like graph: vertex 0 touches every other vertex.
//! let graph = AdjacencyGraph::from_edges(
//!     5,
//!     [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (2, 3), (3, 4)],
//! )?;
//! let reducer = DegreeReducerBuilder::new().build()?;
//! let reduction = reducer.run(&graph)?;
//!
//! assert_eq!(reduction.tree().edge_count(), 4);
//! assert!(reduction.final_max_degree() <= reduction.initial_max_degree());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the reducer emits the counters
//! `mindeg_rounds_total`, `mindeg_swaps_total` and `mindeg_repairs_total`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod reducer;
mod result;
mod tree;
mod union_find;


pub use crate::{
    builder::{DegreeReducerBuilder, InitialTree},
    error::{MdstError, MdstErrorCode, PreconditionError, PreconditionErrorCode, Result},
    graph::{AdjacencyGraph, Edge, GraphView, connected_components, spanning_tree},
    reducer::DegreeReducer,
    result::{DegreeReduction, SpanningTree},
    union_find::DisjointSet,
};
