//! Error types for the minimum-degree spanning tree library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A property of the input graph or initial tree that the reducer requires
/// but the caller did not provide.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PreconditionError {
    /// An edge or adjacency entry referenced a vertex outside `0..node_count`.
    #[error("vertex {node} is out of range for a graph with {node_count} vertices")]
    NodeOutOfRange {
        /// The offending vertex identifier.
        node: usize,
        /// Number of vertices in the graph.
        node_count: usize,
    },
    /// The graph contains an edge from a vertex to itself.
    #[error("vertex {node} has a self-loop")]
    SelfLoop {
        /// Vertex carrying the loop.
        node: usize,
    },
    /// The graph contains the same undirected edge more than once.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated edge.
        left: usize,
        /// Larger endpoint of the repeated edge.
        right: usize,
    },
    /// Vertex `left` lists `right` as a neighbour but not the other way round.
    #[error("vertex {left} lists neighbour {right}, but {right} does not list {left}")]
    AsymmetricAdjacency {
        /// Vertex whose adjacency list contains the one-sided entry.
        left: usize,
        /// Neighbour missing the reverse entry.
        right: usize,
    },
    /// The graph has more than one connected component, so no spanning tree
    /// exists.
    #[error("graph is disconnected ({components} components)")]
    Disconnected {
        /// Number of connected components found.
        components: usize,
    },
    /// A caller-supplied initial tree is not a spanning tree of the graph.
    #[error("initial tree is not a spanning tree of the graph: {reason}")]
    InvalidInitialTree {
        /// Which spanning-tree property the supplied edges break.
        reason: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`PreconditionError`] variants.
    enum PreconditionErrorCode for PreconditionError {
        /// A vertex identifier was out of range.
        NodeOutOfRange => NodeOutOfRange { .. } => "PRECONDITION_NODE_OUT_OF_RANGE",
        /// The graph contains a self-loop.
        SelfLoop => SelfLoop { .. } => "PRECONDITION_SELF_LOOP",
        /// The graph contains a repeated edge.
        DuplicateEdge => DuplicateEdge { .. } => "PRECONDITION_DUPLICATE_EDGE",
        /// The adjacency lists are not symmetric.
        AsymmetricAdjacency => AsymmetricAdjacency { .. } => "PRECONDITION_ASYMMETRIC_ADJACENCY",
        /// The graph is disconnected.
        Disconnected => Disconnected { .. } => "PRECONDITION_DISCONNECTED",
        /// The supplied initial tree is not a spanning tree.
        InvalidInitialTree => InvalidInitialTree { .. } => "PRECONDITION_INVALID_INITIAL_TREE",
    }
}

/// Error type produced when configuring or running [`crate::DegreeReducer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MdstError {
    /// The configured round limit must be greater than zero.
    #[error("max_rounds must be at least 1 (got {got})")]
    InvalidRoundLimit {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
    /// The input graph or initial tree violated a precondition of the
    /// reducer. Raised before any round runs.
    #[error("graph `{graph}` violates a precondition: {error}")]
    PreconditionViolation {
        /// Name of the graph that was rejected.
        graph: Arc<str>,
        #[source]
        /// The precondition that failed.
        error: PreconditionError,
    },
    /// An internal invariant was violated, indicating a logic error in the
    /// reducer rather than bad input.
    #[error("reducer invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`MdstError`] variants.
    enum MdstErrorCode for MdstError {
        /// The round limit must be greater than zero.
        InvalidRoundLimit => InvalidRoundLimit { .. } => "MDST_INVALID_ROUND_LIMIT",
        /// The input violated a precondition.
        PreconditionViolation => PreconditionViolation { .. } => "MDST_PRECONDITION_VIOLATION",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MDST_INVARIANT_VIOLATION",
    }
}

impl MdstError {
    /// Retrieve the inner [`PreconditionErrorCode`] when the error was raised
    /// by input validation.
    #[must_use]
    pub const fn precondition_code(&self) -> Option<PreconditionErrorCode> {
        match self {
            Self::PreconditionViolation { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn precondition(graph: &str, error: PreconditionError) -> Self {
        Self::PreconditionViolation {
            graph: Arc::from(graph),
            error,
        }
    }

    pub(crate) const fn invariant(invariant: &'static str) -> Self {
        Self::InvariantViolation { invariant }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MdstError>;
