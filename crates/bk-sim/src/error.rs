use bk_model::ModelError;
use bk_policy::PolicyError;
use bk_state::StateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("instance has no vessels; the simulation horizon is undefined")]
    EmptyInstance,

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
