use thiserror::Error;

/// Top-level error type for the wirecast renderer.
#[derive(Debug, Error)]
pub enum WirecastError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors raised while assembling a shape from vertices and edges.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("edge {edge} references vertex {vertex}, but the shape has {num_vertices} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        num_vertices: usize,
    },

    #[error("edge {edge} has zero length")]
    DegenerateEdge { edge: usize },

    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteVertex { vertex: usize },
}

/// Errors related to transforming a shape.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("rotation axis must be non-zero")]
    ZeroAxis,

    #[error("rotation axis and angle must be finite")]
    NonFinite,
}

/// Convenience type alias for results using [`WirecastError`].
pub type Result<T> = std::result::Result<T, WirecastError>;
