use std::{hash::Hash, iter};

use hashbrown::HashMap;

use crate::{search::Neighborhood, sets::visited::VisitorSet};

/// Which already-entered users a depth-first walk may enter again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitScope {
    /// Marks persist for the whole invocation: a user reached once is never
    /// entered again, even through a shorter route after its branch failed.
    #[default]
    Invocation,
    /// A user may be entered again, but only with strictly more remaining
    /// budget than any earlier entry gave it. A shorter route found after a
    /// failed detour gets explored, and each user is entered at most once per
    /// budget level. Users on the current path always hold a larger budget
    /// than their descendants, so paths stay simple.
    Budget,
}

/// One pending unit of depth-first work, standing in for a call frame.
///
/// `budget` is the remaining depth allowance, `None` when unbounded.
#[derive(Debug)]
enum Frame<'a, U> {
    /// `user` has been reached and not processed yet.
    Enter { user: &'a U, budget: Option<usize> },
    /// `user` is being expanded; neighbors before position `next` are done.
    Resume {
        user: &'a U,
        budget: Option<usize>,
        next: usize,
    },
}

impl<'a, U> Frame<'a, U> {
    fn expanding(&self) -> Option<&'a U> {
        match *self {
            Frame::Resume { user, .. } => Some(user),
            Frame::Enter { .. } => None,
        }
    }
}

/// Visited marks of one walk: the caller's set, plus the deepest budget each
/// user was entered with when the scope allows re-entry.
struct Marks<'a, 'v, U, V> {
    visited: &'v mut V,
    deepest: HashMap<&'a U, usize>,
    scope: VisitScope,
}

impl<'a, 'v, U, V> Marks<'a, 'v, U, V>
where
    U: Eq + Hash + Clone,
    V: VisitorSet<U>,
{
    fn enter(&mut self, user: &'a U, budget: Option<usize>) {
        self.visited.set(user.clone());
        if self.scope == VisitScope::Budget {
            self.deepest.insert(user, budget.unwrap_or(usize::MAX));
        }
    }

    fn is_open(&self, user: &U, budget: Option<usize>) -> bool {
        match (self.scope, self.deepest.get(user)) {
            (VisitScope::Budget, Some(&deepest)) => budget.unwrap_or(usize::MAX) > deepest,
            // seeded users are never in `deepest` and stay closed
            _ => !self.visited.get(user),
        }
    }
}

/// Explicit-stack depth-first walk shared by exploration and depth-limited
/// search.
///
/// Reproduces recursive pre-order visiting exactly: a user is marked when
/// entered, then its neighbors are tried in stored order, each one only if
/// it is still open at the moment its turn comes. `on_enter` sees every
/// entered user in that order.
///
/// Returns the path from `start` to `target` as soon as the target is
/// entered (the walk stops there), or `None` once the stack drains.
pub(crate) fn walk<'a, G, U, V>(
    graph: &'a G,
    start: &'a U,
    target: Option<&U>,
    budget: Option<usize>,
    scope: VisitScope,
    visited: &mut V,
    mut on_enter: impl FnMut(&'a U),
) -> Option<Vec<U>>
where
    G: Neighborhood<U> + ?Sized,
    U: Eq + Hash + Clone,
    V: VisitorSet<U>,
{
    let mut marks = Marks {
        visited,
        deepest: HashMap::new(),
        scope,
    };
    let mut stack = vec![Frame::Enter {
        user: start,
        budget,
    }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter { user, budget } => {
                marks.enter(user, budget);
                on_enter(user);

                if target == Some(user) {
                    // everything below an Enter frame is the chain of its ancestors
                    return Some(
                        stack
                            .iter()
                            .filter_map(Frame::expanding)
                            .chain(iter::once(user))
                            .cloned()
                            .collect(),
                    );
                }

                if budget == Some(0) {
                    continue;
                }

                stack.push(Frame::Resume {
                    user,
                    budget,
                    next: 0,
                });
            }
            Frame::Resume { user, budget, next } => {
                let child_budget = budget.map(|remaining| remaining - 1);
                let open = graph
                    .neighbors_of(user)
                    .iter()
                    .enumerate()
                    .skip(next)
                    .find(|(_, friend)| marks.is_open(friend, child_budget));

                if let Some((position, friend)) = open {
                    stack.push(Frame::Resume {
                        user,
                        budget,
                        next: position + 1,
                    });
                    stack.push(Frame::Enter {
                        user: friend,
                        budget: child_budget,
                    });
                }
            }
        }
    }

    None
}
