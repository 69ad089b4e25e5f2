use thiserror::Error;

/// Errors raised while building a graph or an engine.
///
/// The per-frame math never fails; everything here is caught when nodes,
/// edges, scenes or configurations are constructed.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("node '{name}' has invalid max speed {max_speed} (must be finite and > 0)")]
    InvalidMaxSpeed { name: String, max_speed: f32 },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("duplicate node name '{0}'")]
    DuplicateNode(String),

    #[error("edge {from} -> {to} must connect a person to a file")]
    EdgeKindMismatch { from: String, to: String },

    #[error("unknown physics engine '{0}'")]
    UnknownEngine(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwarmError>;
