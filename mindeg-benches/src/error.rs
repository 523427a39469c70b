//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark graphs so
//! that setup functions can propagate failures with `?` instead of using
//! `.expect()`.

use mindeg_core::{MdstError, PreconditionError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generated edge list was rejected by the graph constructor.
    #[error("synthetic graph construction failed: {0}")]
    Graph(#[from] PreconditionError),
    /// Building the reducer or extracting a starting tree failed.
    #[error("reducer setup failed: {0}")]
    Reducer(#[from] MdstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
