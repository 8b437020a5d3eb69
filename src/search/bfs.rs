use std::{collections::VecDeque, hash::Hash};

use tracing::debug;

use crate::{
    search::{Neighborhood, SearchOutcome},
    sets::visited::{VisitedSet, VisitorSet},
};

/// Breadth-first search for a fewest-hops path from `start` to `target`.
///
/// The frontier holds whole partial paths rather than bare users, so the
/// winning path is read straight off the queue. Users are marked the moment
/// they are enqueued, which keeps each of them out of the frontier after the
/// first (and therefore shortest) route to them.
///
/// `steps` counts frontier pops, the pop that yields the target included.
/// Searching from a user to itself returns `[start]` in one step. An unknown
/// `start` has no neighbors and fails after that single pop.
///
/// # Examples
///
/// ```
/// use socialsearch::{network::SocialNetwork, search::bfs_shortest_path};
///
/// let mut network = SocialNetwork::new();
/// for user in ["A", "B", "C"] {
///     network.add_user(user);
/// }
/// network.add_friendship(&"A", &"B");
/// network.add_friendship(&"B", &"C");
///
/// let outcome = bfs_shortest_path(&network, &"A", &"C");
/// assert_eq!(outcome.path, Some(vec!["A", "B", "C"]));
/// assert_eq!(outcome.steps, 3);
/// ```
pub fn bfs_shortest_path<G, U>(graph: &G, start: &U, target: &U) -> SearchOutcome<U>
where
    G: Neighborhood<U> + ?Sized,
    U: Eq + Hash + Clone,
{
    let mut visited = VisitedSet::new();
    visited.set(start);
    let mut frontier: VecDeque<Vec<&U>> = VecDeque::from([vec![start]]);
    let mut steps = 0;

    while let Some(path) = frontier.pop_front() {
        steps += 1;
        let Some(&user) = path.last() else {
            continue;
        };

        if user == target {
            debug!(steps, hops = path.len() - 1, "bfs reached target");
            return SearchOutcome::found(path.into_iter().cloned().collect(), steps);
        }

        for friend in graph.neighbors_of(user) {
            if visited.set(friend) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(friend);
                frontier.push_back(extended);
            }
        }
    }

    debug!(steps, "bfs exhausted the frontier");
    SearchOutcome::not_found(steps)
}
