use crate::alloc_prelude::*;
use thiserror::Error;

/// Errors produced while accumulating rows or rendering fragments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// Unrecognized dialect name at construction
    #[error("invalid dialect: {0}")]
    InvalidDialect(String),

    /// A single row carries more values than one statement may bind
    #[error("row has {arity} values but the dialect allows {max_params} parameters per statement")]
    RowTooLarge { arity: usize, max_params: usize },

    /// A row's arity differs from the arity fixed by the first append
    #[error("row has {got} values but this builder was started with {expected}-value rows")]
    InconsistentArity { expected: usize, got: usize },

    /// Formatting failure while writing a fragment. Fragments are written
    /// into an in-memory buffer, so this arm is not expected to be hit.
    #[error("failed to render placeholder fragment: {0}")]
    Render(#[from] core::fmt::Error),
}

/// Result type for builder operations
pub type Result<T> = core::result::Result<T, BatchError>;
