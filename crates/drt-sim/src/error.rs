use drt_core::DrtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("fleet error: {0}")]
    Fleet(#[from] DrtError),
}

pub type SimResult<T> = Result<T, SimError>;
