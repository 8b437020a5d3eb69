use std::hash::Hash;

use tracing::debug;

use crate::{
    search::{
        Neighborhood,
        walker::{VisitScope, walk},
    },
    sets::visited::{VisitedSet, VisitorSet},
};

/// Every user reachable from `start`, in depth-first discovery order.
///
/// `start` comes first; earlier-listed neighbors are explored before later
/// ones. Runs on an explicit stack, so long friendship chains cannot exhaust
/// the call stack.
///
/// # Examples
///
/// ```
/// use socialsearch::{network::SocialNetwork, search::dfs_explore};
///
/// let mut network = SocialNetwork::new();
/// for user in 0..4 {
///     network.add_user(user);
/// }
/// network.add_friendship(&0, &2);
/// network.add_friendship(&0, &1);
///
/// assert_eq!(dfs_explore(&network, &0), vec![0, 2, 1]);
/// assert_eq!(dfs_explore(&network, &3), vec![3]);
/// ```
pub fn dfs_explore<G, U>(graph: &G, start: &U) -> Vec<U>
where
    G: Neighborhood<U> + ?Sized,
    U: Eq + Hash + Clone,
{
    dfs_explore_with(graph, start, &mut VisitedSet::new())
}

/// [`dfs_explore`] against a caller-provided visited set.
///
/// Users already in `visited` are treated as explored and neither reported
/// nor expanded, with the exception of `start` itself, which is always
/// reported first. The set is left holding everything the walk reached.
pub fn dfs_explore_with<G, U, V>(graph: &G, start: &U, visited: &mut V) -> Vec<U>
where
    G: Neighborhood<U> + ?Sized,
    U: Eq + Hash + Clone,
    V: VisitorSet<U>,
{
    let mut connections = Vec::new();
    walk(
        graph,
        start,
        None,
        None,
        VisitScope::Invocation,
        visited,
        |user| connections.push(user.clone()),
    );
    debug!(reached = connections.len(), "dfs exploration done");
    connections
}
