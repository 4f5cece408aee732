//! Graph-subsystem error type.

use thiserror::Error;

use ems_core::VertexId;

/// Errors produced by `ems-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    #[error("unknown vertex name '{0}'")]
    UnknownVertex(String),

    #[error("self-loop on vertex {0} — the road graph is simple")]
    SelfLoop(VertexId),

    #[error("duplicate edge between {a} and {b} — the road graph is simple")]
    DuplicateEdge { a: VertexId, b: VertexId },

    #[error("edge weight {0} is not a non-negative finite number")]
    BadWeight(f64),

    #[error("cannot join paths: first ends at {end}, second starts at {start}")]
    JoinMismatch { end: VertexId, start: VertexId },
}

pub type GraphResult<T> = Result<T, GraphError>;
