//! Builder utilities for configuring the degree reducer.
//!
//! Exposes the initial spanning-tree strategy and the builder validation used
//! before constructing [`DegreeReducer`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::MdstError, reducer::DegreeReducer};

/// Selects how the arbitrary starting spanning tree is extracted from the
/// input graph. Both strategies start at vertex `0`.
///
/// Breadth-first trees tend to concentrate degree on early vertices, giving
/// the reducer more work; depth-first trees tend towards long paths.
///
/// # Examples
/// ```
/// use mindeg_core::InitialTree;
///
/// assert_eq!(InitialTree::default(), InitialTree::BreadthFirst);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialTree {
    /// Breadth-first search tree rooted at vertex `0`.
    #[default]
    BreadthFirst,
    /// Depth-first search tree rooted at vertex `0`.
    DepthFirst,
}

/// Configures and constructs [`DegreeReducer`] instances.
///
/// # Examples
/// ```
/// use mindeg_core::{DegreeReducerBuilder, InitialTree};
///
/// let reducer = DegreeReducerBuilder::new()
///     .with_max_rounds(16)
///     .with_initial_tree(InitialTree::DepthFirst)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(reducer.max_rounds().map(|rounds| rounds.get()), Some(16));
/// assert_eq!(reducer.initial_tree(), InitialTree::DepthFirst);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DegreeReducerBuilder {
    max_rounds: Option<usize>,
    initial_tree: InitialTree,
}

impl DegreeReducerBuilder {
    /// Creates a builder with unbounded rounds and breadth-first initial
    /// trees.
    ///
    /// # Examples
    /// ```
    /// use mindeg_core::{DegreeReducerBuilder, InitialTree};
    ///
    /// let builder = DegreeReducerBuilder::new();
    /// assert_eq!(builder.max_rounds(), None);
    /// assert_eq!(builder.initial_tree(), InitialTree::BreadthFirst);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of improvement rounds. A capped run may stop before
    /// convergence; it still returns a valid spanning tree.
    ///
    /// # Examples
    /// ```
    /// use mindeg_core::DegreeReducerBuilder;
    ///
    /// let builder = DegreeReducerBuilder::new().with_max_rounds(3);
    /// assert_eq!(builder.max_rounds(), Some(3));
    /// ```
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Returns the configured round limit, if any.
    #[must_use]
    pub fn max_rounds(&self) -> Option<usize> {
        self.max_rounds
    }

    /// Sets the strategy used to extract the starting spanning tree.
    #[must_use]
    pub fn with_initial_tree(mut self, strategy: InitialTree) -> Self {
        self.initial_tree = strategy;
        self
    }

    /// Returns the configured initial tree strategy.
    #[must_use]
    pub fn initial_tree(&self) -> InitialTree {
        self.initial_tree
    }

    /// Validates the configuration and constructs a [`DegreeReducer`].
    ///
    /// # Errors
    /// Returns [`MdstError::InvalidRoundLimit`] when a round limit of zero was
    /// configured.
    ///
    /// # Examples
    /// ```
    /// use mindeg_core::{DegreeReducerBuilder, MdstError};
    ///
    /// let err = DegreeReducerBuilder::new()
    ///     .with_max_rounds(0)
    ///     .build()
    ///     .expect_err("zero rounds is rejected");
    /// assert!(matches!(err, MdstError::InvalidRoundLimit { got: 0 }));
    /// ```
    pub fn build(self) -> Result<DegreeReducer> {
        let max_rounds = self
            .max_rounds
            .map(|rounds| NonZeroUsize::new(rounds).ok_or(MdstError::InvalidRoundLimit { got: rounds }))
            .transpose()?;

        Ok(DegreeReducer::new(max_rounds, self.initial_tree))
    }
}
