//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `PfError` as one variant
//! via `From` impls.

use thiserror::Error;

/// The top-level error type for `pf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{kind} index {index} does not fit the id type")]
    IdOverflow { kind: &'static str, index: usize },
}

/// Shorthand result type for all `pf-*` crates.
pub type PfResult<T> = Result<T, PfError>;
