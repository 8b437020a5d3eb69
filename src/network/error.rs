use std::fmt::Debug;

use thiserror::Error;

/// Errors surfaced by the strict edge-insertion mode.
///
/// The lenient mode never produces these: it drops the edge instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError<U: Debug> {
    #[error("friendship endpoint {0:?} is not a registered user")]
    UnknownUser(U),
}
