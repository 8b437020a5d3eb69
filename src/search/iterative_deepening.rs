use std::hash::Hash;

use tracing::{debug, trace};

use crate::search::{
    DeepeningOutcome, DepthLimitedSearch, Neighborhood, SearchOutcome, walker::VisitScope,
};

/// Iterative deepening: depth-limited searches with budgets 0, 1, 2, ...
/// each starting from an empty visited set, until one finds the target.
///
/// Passes run with [`VisitScope::Budget`] by default. A user first reached
/// deep in a failed branch can still be reached through a shorter sibling, so
/// the first successful budget equals the fewest-hops distance, and a pass
/// enters each user at most once per budget level.
///
/// Without `max_depth` an unreachable target keeps the loop running forever.
/// With it, the run gives up after trying that budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterativeDeepening {
    pub max_depth: Option<usize>,
    pub scope: VisitScope,
}

impl IterativeDeepening {
    pub fn new() -> Self {
        IterativeDeepening {
            max_depth: None,
            scope: VisitScope::Budget,
        }
    }

    pub fn bounded(max_depth: usize) -> Self {
        IterativeDeepening {
            max_depth: Some(max_depth),
            ..Self::new()
        }
    }

    pub fn with_scope(mut self, scope: VisitScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn run<G, U>(&self, graph: &G, start: &U, target: &U) -> DeepeningOutcome<U>
    where
        G: Neighborhood<U> + ?Sized,
        U: Eq + Hash + Clone,
    {
        let mut depth = 0;
        loop {
            let pass = DepthLimitedSearch::new(depth).with_scope(self.scope);
            let outcome = pass.run(graph, start, target);
            trace!(depth, found = outcome.is_found(), "deepening pass");

            let capped = self.max_depth.is_some_and(|max| depth >= max);
            if outcome.is_found() || capped {
                debug!(depth, found = outcome.is_found(), "iterative deepening done");
                return DeepeningOutcome { outcome, depth };
            }
            depth += 1;
        }
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new()
    }
}

/// Unbounded iterative deepening. Never returns if `target` cannot be
/// reached from `start`; use [`IterativeDeepening::bounded`] when that is
/// possible.
///
/// # Examples
///
/// ```
/// use socialsearch::{network::SocialNetwork, search::iterative_deepening_search};
///
/// let mut network = SocialNetwork::new();
/// for user in ["A", "B", "C", "D"] {
///     network.add_user(user);
/// }
/// network.add_friendship(&"A", &"B");
/// network.add_friendship(&"B", &"C");
/// network.add_friendship(&"C", &"D");
///
/// let outcome = iterative_deepening_search(&network, &"A", &"D");
/// assert_eq!(outcome.path, Some(vec!["A", "B", "C", "D"]));
/// ```
pub fn iterative_deepening_search<G, U>(graph: &G, start: &U, target: &U) -> SearchOutcome<U>
where
    G: Neighborhood<U> + ?Sized,
    U: Eq + Hash + Clone,
{
    IterativeDeepening::new().run(graph, start, target).outcome
}
