//! Dispatch-subsystem error type.

use thiserror::Error;

use ems_graph::GraphError;

/// Errors produced by `ems-dispatch`.
///
/// Note that an unreachable route is **not** among them: the engine treats
/// [`GraphError::NoRoute`] as "skip this pair", so the only graph errors
/// that surface here come from input validation and path composition.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("unknown vertex name '{0}' in scenario input")]
    UnknownVertex(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
