use std::hash::Hash;

use hashbrown::HashSet;

use crate::sets::visited::VisitorSet;

/// Hash-backed visited set, scoped to a single traversal invocation.
///
/// # Examples
///
/// ```
/// use socialsearch::sets::visited::{VisitedSet, VisitorSet};
///
/// let mut visited = VisitedSet::new();
/// assert!(visited.set("alice"));
/// assert!(!visited.set("alice"));
/// assert!(visited.get(&"alice"));
/// ```
#[derive(Debug, Clone)]
pub struct VisitedSet<U> {
    members: HashSet<U>,
}

impl<U: Eq + Hash> VisitedSet<U> {
    pub fn new() -> Self {
        VisitedSet {
            members: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &U> {
        self.members.iter()
    }
}

impl<U: Eq + Hash> Default for VisitedSet<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Eq + Hash> FromIterator<U> for VisitedSet<U> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        VisitedSet {
            members: iter.into_iter().collect(),
        }
    }
}

impl<U: Eq + Hash> VisitorSet<U> for VisitedSet<U> {
    fn get(&self, user: &U) -> bool {
        self.members.contains(user)
    }

    fn set(&mut self, user: U) -> bool {
        self.members.insert(user)
    }
}
