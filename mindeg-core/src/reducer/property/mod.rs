//! Property-based tests for the degree reducer.
//!
//! Checks that every reduction returns a spanning tree of the input, that
//! the maximum degree never rises between rounds, that runs are
//! deterministic, and that tiny graphs never report a degree below the
//! brute-force optimum.

mod oracle;
mod progress;
mod strategies;
mod structural;
mod types;
