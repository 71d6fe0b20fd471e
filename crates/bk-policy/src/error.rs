use bk_core::BargeId;
use bk_state::StateError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("policy invoked with no candidates")]
    NoCandidates,

    #[error("origin candidate for barge {0} has no greedy score")]
    OriginNotScored(BargeId),

    #[error("candidate refers to an unknown entity: {0}")]
    Unknown(#[from] StateError),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
