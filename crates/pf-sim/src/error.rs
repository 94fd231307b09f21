use pf_core::PfError;
use pf_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] PfError),

    #[error("placement error: {0}")]
    Grid(#[from] GridError),

    #[error("population needs {needed} free cells but only {available} remain")]
    GridFull {
        needed:    usize,
        available: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
