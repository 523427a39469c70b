//! One scan over the input graph at a fixed maximum degree.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    error::MdstError,
    graph::{Edge, GraphView},
    tree::WorkingTree,
};

use super::safe_forest::{SafeForest, VertexClass};

/// Counters gathered while a round runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct RoundOutcome {
    pub(super) swaps: usize,
    pub(super) repairs: usize,
    pub(super) absorbed: usize,
}

/// State owned by a single round. The safe forest and the witness ledger
/// are rebuilt from the tree each time, so nothing here outlives the scan.
pub(super) struct Round<'a, G> {
    graph: &'a G,
    tree: &'a mut WorkingTree,
    forest: SafeForest,
    /// Non-tree edge whose tree cycle passes through the key vertex. Swapping
    /// it in relieves the vertex by one degree.
    witnesses: HashMap<usize, Edge>,
    max_degree: usize,
    outcome: RoundOutcome,
}

impl<'a, G: GraphView> Round<'a, G> {
    pub(super) fn new(graph: &'a G, tree: &'a mut WorkingTree) -> Self {
        let max_degree = tree.max_degree();
        let forest = SafeForest::build(tree, max_degree);
        Self {
            graph,
            tree,
            forest,
            witnesses: HashMap::new(),
            max_degree,
            outcome: RoundOutcome::default(),
        }
    }

    #[instrument(
        name = "reducer.round",
        level = "debug",
        err,
        skip(self),
        fields(max_degree = self.max_degree, blocked = self.forest.blocked_count()),
    )]
    pub(super) fn run(mut self, round: usize) -> Result<RoundOutcome, MdstError> {
        let graph = self.graph;
        for candidate in graph.edges() {
            if self.forest.blocked_count() == 0 {
                break;
            }
            self.examine(candidate)?;
        }
        debug!(
            swaps = self.outcome.swaps,
            repairs = self.outcome.repairs,
            absorbed = self.outcome.absorbed,
            "round finished"
        );
        Ok(self.outcome)
    }

    fn examine(&mut self, candidate: Edge) -> Result<(), MdstError> {
        let (source, target) = candidate.endpoints();
        if !self.forest.is_safe(source)
            || !self.forest.is_safe(target)
            || self.forest.connected(source, target)
        {
            return Ok(());
        }

        let path = self.tree.path(source, target)?;
        if self.blocked_position(&path).is_none() {
            self.absorb_path(&path, candidate);
            return Ok(());
        }

        let (first, last) = (path[1], path[path.len() - 2]);
        if !self.make_room(source, first)? || !self.make_room(target, last)? {
            return Ok(());
        }
        // A repair on one side may have used the other endpoint.
        if !self.has_slack(source) || !self.has_slack(target) {
            return Ok(());
        }

        let path = self.tree.path(source, target)?;
        match self.blocked_position(&path) {
            None => self.absorb_path(&path, candidate),
            Some(position) => self.swap(candidate, path[position - 1], path[position])?,
        }
        Ok(())
    }

    /// Makes sure `node` can take one more tree edge without reaching the
    /// fragile degree, repairing it through its witness if needed.
    fn make_room(&mut self, node: usize, avoid: usize) -> Result<bool, MdstError> {
        if self.has_slack(node) {
            return Ok(true);
        }
        match self.witnesses.get(&node).copied() {
            Some(witness) => self.repair(node, witness, avoid),
            None => Ok(false),
        }
    }

    /// Swaps `witness` into the tree in place of a forest edge at `node`.
    ///
    /// The witness is only usable while both of its endpoints have slack and
    /// its forest cycle still runs through `node`; earlier swaps in the same
    /// round may have invalidated either condition.
    fn repair(&mut self, node: usize, witness: Edge, avoid: usize) -> Result<bool, MdstError> {
        let (source, target) = witness.endpoints();
        if !self.has_slack(source) || !self.has_slack(target) {
            return Ok(false);
        }
        let Some(cycle) = self.forest.path(source, target) else {
            return Ok(false);
        };
        let Some(position) = cycle.iter().position(|&vertex| vertex == node) else {
            return Ok(false);
        };
        if position == 0 || position + 1 == cycle.len() {
            return Ok(false);
        }

        let detached = match (cycle[position - 1], cycle[position + 1]) {
            (before, after) if before == avoid => after,
            (before, _) => before,
        };
        let cut = Edge::new(node, detached);
        self.tree.remove_edge(cut)?;
        self.tree.insert_edge(witness)?;
        if !self.forest.unlink(cut) {
            return Err(MdstError::invariant("repaired edge must belong to the safe forest"));
        }
        self.forest.link(witness);
        self.witnesses.remove(&node);
        self.outcome.repairs += 1;
        debug!(node, cut = %cut, witness = %witness, "repaired fragile endpoint");
        Ok(true)
    }

    /// Folds a cycle free of blocked vertices into one forest component.
    /// Interior vertices one below the maximum remember `candidate` as their
    /// witness.
    fn absorb_path(&mut self, path: &[usize], candidate: Edge) {
        for pair in path.windows(2) {
            self.forest.link(Edge::new(pair[0], pair[1]));
        }
        for &node in &path[1..path.len() - 1] {
            if self.tree.degree(node) + 1 == self.max_degree {
                self.forest.absorb(node);
                self.witnesses.insert(node, candidate);
            }
        }
        self.outcome.absorbed += 1;
    }

    /// Replaces tree edge `(anchor, blocked)` with `candidate`.
    fn swap(&mut self, candidate: Edge, anchor: usize, blocked: usize) -> Result<(), MdstError> {
        let removed = Edge::new(anchor, blocked);
        self.tree.remove_edge(removed)?;
        self.tree.insert_edge(candidate)?;
        self.forest.link(candidate);
        self.forest.demote(blocked);
        self.reclassify(anchor);
        self.outcome.swaps += 1;
        debug!(
            blocked,
            detached = %removed,
            inserted = %candidate,
            remaining = self.forest.blocked_count(),
            "swapped tree edge"
        );
        Ok(())
    }

    fn reclassify(&mut self, node: usize) {
        match self.forest.class(node) {
            VertexClass::Blocked => self.forest.demote(node),
            VertexClass::Fragile => {
                self.forest.promote(node, &*self.tree);
                self.witnesses.remove(&node);
            }
            VertexClass::Safe => {
                if self.has_slack(node) {
                    self.witnesses.remove(&node);
                }
            }
        }
    }

    fn blocked_position(&self, path: &[usize]) -> Option<usize> {
        path.iter()
            .position(|&node| self.forest.class(node) == VertexClass::Blocked)
    }

    fn has_slack(&self, node: usize) -> bool {
        self.tree.degree(node) + 2 <= self.max_degree
    }
}
