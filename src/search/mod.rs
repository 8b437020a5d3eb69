//! Uninformed search strategies over a [`Neighborhood`].
//!
//! - [`bfs_shortest_path`]: breadth-first, fewest-hops path between two users
//! - [`dfs_explore`]: depth-first enumeration of a user's connected component
//! - [`depth_limited_search`] / [`DepthLimitedSearch`]: depth-first search under a
//!   hop budget
//! - [`iterative_deepening_search`] / [`IterativeDeepening`]: depth-limited search with growing budgets
//!
//! None of them mutate the graph, and each invocation owns its visited set.

mod bfs;
mod depth_limited;
mod dfs;
mod iterative_deepening;
mod neighborhood;
mod outcome;
mod walker;

pub use bfs::*;
pub use depth_limited::*;
pub use dfs::*;
pub use iterative_deepening::*;
pub use neighborhood::*;
pub use outcome::*;
pub use walker::VisitScope;

#[cfg(test)]
mod tests;
