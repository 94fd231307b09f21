//! Grid error type.

use thiserror::Error;

use pf_core::{GridPos, PfError};

use crate::Occupant;

/// Errors produced by `pf-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("position {0} is outside the grid")]
    OutOfBounds(GridPos),

    #[error("{0} is already on the grid")]
    AlreadyPlaced(Occupant),

    #[error(transparent)]
    Id(#[from] PfError),
}

pub type GridResult<T> = Result<T, GridError>;
