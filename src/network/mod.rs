//! The in-memory friendship graph.
//!
//! Users are opaque handles; friendships are undirected and stored as an
//! adjacency list in insertion order, so every traversal over the same
//! construction sequence is deterministic.

mod error;
mod social_network;

pub use error::*;
pub use social_network::*;
