/// Result of a targeted search: the path found, if any, and the work spent.
///
/// Not finding the target is an ordinary outcome, never an error. What a
/// "step" is depends on the algorithm: frontier pops for breadth-first search,
/// one per level of the returned path for depth-limited search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<U> {
    pub path: Option<Vec<U>>,
    pub steps: usize,
}

impl<U> SearchOutcome<U> {
    pub fn found(path: Vec<U>, steps: usize) -> Self {
        SearchOutcome {
            path: Some(path),
            steps,
        }
    }

    pub fn not_found(steps: usize) -> Self {
        SearchOutcome { path: None, steps }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of friendships along the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// Outcome of an iterative-deepening run together with the last depth budget
/// it tried: the budget that succeeded, or the cap it gave up at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepeningOutcome<U> {
    pub outcome: SearchOutcome<U>,
    pub depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hops_counts_edges_not_users() {
        assert_eq!(SearchOutcome::found(vec!['a'], 1).hops(), Some(0));
        assert_eq!(SearchOutcome::found(vec!['a', 'b', 'c'], 3).hops(), Some(2));
        assert_eq!(SearchOutcome::<char>::not_found(4).hops(), None);
    }

    #[test]
    fn test_not_found_keeps_step_count() {
        let outcome = SearchOutcome::<u32>::not_found(12);
        assert!(!outcome.is_found());
        assert_eq!(outcome.steps, 12);
    }
}
