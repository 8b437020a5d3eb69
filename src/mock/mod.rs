//! Randomly populated networks for exercising the search strategies.
//!
//! Users are named `User0`, `User1`, ... and friendships join two distinct
//! users drawn uniformly at random. Given a seed, the same parameters always
//! produce the same network, neighbor order included.

mod generator;
mod params;

pub use generator::*;
pub use params::*;
