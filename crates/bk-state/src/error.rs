use bk_core::{BargeId, Target};
use thiserror::Error;

/// Contract violations: an id reached the applier that the instance does not
/// contain.  Candidates produced by [`candidates`][crate::candidates] never
/// trigger these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("barge {0} not found")]
    UnknownBarge(BargeId),

    #[error("target {0} not found")]
    UnknownTarget(Target),
}

pub type StateResult<T> = Result<T, StateError>;
