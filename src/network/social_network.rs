use std::{fmt::Debug, hash::Hash};

use hashbrown::HashMap;
use tracing::trace;

use crate::{network::NetworkError, search::Neighborhood};

/// Undirected friendship graph stored as an adjacency list.
///
/// # Invariants
/// - Every user registered through [`add_user`](Self::add_user) owns a
///   neighbor list, possibly empty.
/// - Friendships are symmetric: an accepted `add_friendship(a, b)` appends
///   `b` to `a`'s list and `a` to `b`'s list.
/// - Neither self-loops nor repeated friendships are rejected. Adding the
///   same friendship twice yields duplicate neighbor entries.
/// - Nothing is ever removed.
///
/// Traversals only ever see the graph through [`Neighborhood`], by shared
/// reference, so a fully built network can be searched from several threads.
#[derive(Debug, Clone)]
pub struct SocialNetwork<U> {
    adjacency: HashMap<U, Vec<U>>,
    friendships: usize,
}

impl<U> SocialNetwork<U>
where
    U: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        SocialNetwork {
            adjacency: HashMap::new(),
            friendships: 0,
        }
    }

    /// Registers `user` with no friends. Returns `false` (and changes nothing)
    /// if the user was already present.
    pub fn add_user(&mut self, user: U) -> bool {
        if self.adjacency.contains_key(&user) {
            return false;
        }
        self.adjacency.insert(user, Vec::new());
        true
    }

    /// Links `a` and `b` in both directions.
    ///
    /// If either endpoint was never registered the call is a silent no-op,
    /// leaving both neighbor lists untouched.
    pub fn add_friendship(&mut self, a: &U, b: &U) {
        if !self.link(a, b) {
            trace!("dropping friendship with an unregistered endpoint");
        }
    }

    /// Strict counterpart of [`add_friendship`](Self::add_friendship): reports
    /// the first missing endpoint instead of dropping the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialsearch::network::{NetworkError, SocialNetwork};
    ///
    /// let mut network = SocialNetwork::new();
    /// network.add_user("alice");
    /// assert_eq!(
    ///     network.try_add_friendship(&"alice", &"bob"),
    ///     Err(NetworkError::UnknownUser("bob"))
    /// );
    /// ```
    pub fn try_add_friendship(&mut self, a: &U, b: &U) -> Result<(), NetworkError<U>>
    where
        U: Debug,
    {
        for endpoint in [a, b] {
            if !self.contains(endpoint) {
                return Err(NetworkError::UnknownUser(endpoint.clone()));
            }
        }
        self.link(a, b);
        Ok(())
    }

    fn link(&mut self, a: &U, b: &U) -> bool {
        if !(self.contains(a) && self.contains(b)) {
            return false;
        }
        // both lookups were just checked, the lists exist
        if let Some(friends) = self.adjacency.get_mut(a) {
            friends.push(b.clone());
        }
        if let Some(friends) = self.adjacency.get_mut(b) {
            friends.push(a.clone());
        }
        self.friendships += 1;
        true
    }

    /// Neighbor list of `user`, empty when the user is unknown.
    pub fn neighbors_of(&self, user: &U) -> &[U] {
        self.adjacency.get(user).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, user: &U) -> bool {
        self.adjacency.contains_key(user)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of accepted friendships, duplicates and self-loops included.
    pub fn friendship_count(&self) -> usize {
        self.friendships
    }

    /// Registered users, in no particular order.
    pub fn users(&self) -> impl Iterator<Item = &U> {
        self.adjacency.keys()
    }
}

impl<U> Default for SocialNetwork<U>
where
    U: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Neighborhood<U> for SocialNetwork<U>
where
    U: Eq + Hash + Clone,
{
    fn neighbors_of(&self, user: &U) -> &[U] {
        SocialNetwork::neighbors_of(self, user)
    }
}
