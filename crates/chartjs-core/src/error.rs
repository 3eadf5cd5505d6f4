// File: crates/chartjs-core/src/error.rs
// Summary: Error types for value encoding and chart serialization.

use thiserror::Error;

/// Point data whose populated axes do not form one of the three JSON point shapes.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("bad format of values: radius given without x values")]
    RadiusWithoutX,

    #[error("bad format of values: x and y must be of the same length (x={xs}, y={ys})")]
    XyLength { xs: usize, ys: usize },

    #[error("bad format of values: all axes must be of the same length (x={xs}, y={ys}, r={rs})")]
    XyrLength { xs: usize, ys: usize, rs: usize },
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown {kind} token: {token:?}")]
    UnknownToken { kind: &'static str, token: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
