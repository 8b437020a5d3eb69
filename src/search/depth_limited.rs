use std::hash::Hash;

use tracing::debug;

use crate::{
    search::{
        Neighborhood, SearchOutcome,
        walker::{VisitScope, walk},
    },
    sets::visited::{VisitedSet, VisitorSet},
};

/// Depth-first search for `target` that never goes more than `depth`
/// friendships away from the start.
///
/// The target test runs before the budget test, so a search from the target
/// itself succeeds even with a zero budget. The first neighbor whose subtree
/// reaches the target wins; later siblings are not tried.
///
/// Step accounting: every level contributes one step to the outcome it hands
/// back. A success therefore reports one step per user on the returned path,
/// while a failure reports a single step regardless of how much was explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimitedSearch {
    pub depth: usize,
    pub scope: VisitScope,
}

impl DepthLimitedSearch {
    pub fn new(depth: usize) -> Self {
        DepthLimitedSearch {
            depth,
            scope: VisitScope::Invocation,
        }
    }

    pub fn with_scope(mut self, scope: VisitScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn run<G, U>(&self, graph: &G, start: &U, target: &U) -> SearchOutcome<U>
    where
        G: Neighborhood<U> + ?Sized,
        U: Eq + Hash + Clone,
    {
        self.run_with_visited(graph, start, target, &mut VisitedSet::new())
    }

    /// Runs against a caller-provided visited set. Users already in it are
    /// never entered, except `start`.
    pub fn run_with_visited<G, U, V>(
        &self,
        graph: &G,
        start: &U,
        target: &U,
        visited: &mut V,
    ) -> SearchOutcome<U>
    where
        G: Neighborhood<U> + ?Sized,
        U: Eq + Hash + Clone,
        V: VisitorSet<U>,
    {
        let found = walk(
            graph,
            start,
            Some(target),
            Some(self.depth),
            self.scope,
            visited,
            |_| {},
        );
        debug!(
            depth = self.depth,
            found = found.is_some(),
            "depth-limited search done"
        );

        match found {
            Some(path) => {
                let steps = path.len();
                SearchOutcome::found(path, steps)
            }
            None => SearchOutcome::not_found(1),
        }
    }
}

impl Default for DepthLimitedSearch {
    fn default() -> Self {
        DepthLimitedSearch::new(0)
    }
}

/// Depth-limited search with a fresh visited set shared by the whole
/// invocation.
///
/// # Examples
///
/// ```
/// use socialsearch::{network::SocialNetwork, search::depth_limited_search};
///
/// let mut network = SocialNetwork::new();
/// for user in ["A", "B", "C", "D"] {
///     network.add_user(user);
/// }
/// network.add_friendship(&"A", &"B");
/// network.add_friendship(&"B", &"C");
/// network.add_friendship(&"C", &"D");
///
/// assert!(!depth_limited_search(&network, &"A", &"D", 2).is_found());
/// assert_eq!(
///     depth_limited_search(&network, &"A", &"D", 3).path,
///     Some(vec!["A", "B", "C", "D"])
/// );
/// ```
pub fn depth_limited_search<G, U>(
    graph: &G,
    start: &U,
    target: &U,
    depth: usize,
) -> SearchOutcome<U>
where
    G: Neighborhood<U> + ?Sized,
    U: Eq + Hash + Clone,
{
    DepthLimitedSearch::new(depth).run(graph, start, target)
}
