//! Run reports for the search strategies.
//!
//! This module records what each strategy returned (path, step count,
//! component size) along with how long it took, and renders the collection
//! either as the human-readable console report or as JSON.

mod report;
pub use report::*;
