use thiserror::Error;

/// Top-level error type for polyloop.
#[derive(Debug, Error)]
pub enum PolyloopError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to the structure of a face loop.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("edge does not belong to this face")]
    EdgeNotInFace,

    #[error("edge is already linked into a loop")]
    EdgeAlreadyLinked,

    #[error("loop is not closed: shape {at} does not end where the next one starts")]
    LoopNotClosed { at: usize },

    #[error("corrupt loop: {0}")]
    CorruptLoop(String),
}

/// Errors raised while building a face from external input.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("malformed shape record: {0}")]
    MalformedRecord(String),

    #[error("invalid shape: {0}")]
    InvalidShape(String),
}

impl From<serde_json::Error> for ConstructionError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedRecord(err.to_string())
    }
}

impl From<serde_json::Error> for PolyloopError {
    fn from(err: serde_json::Error) -> Self {
        Self::Construction(err.into())
    }
}

/// Convenience type alias for results using [`PolyloopError`].
pub type Result<T> = std::result::Result<T, PolyloopError>;
