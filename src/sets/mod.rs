//! Data structures shared by the traversal algorithms.
//!
//! # Submodules
//!
//! - [`visited`]: per-invocation tracking of users already reached by a traversal
pub mod visited;
