//! Game error type

use asteroida_engine::assets::ObjError;
use asteroida_engine::config::ConfigError;
use asteroida_engine::render::RenderError;

/// Errors surfaced to the host. The simulation itself never fails; these
/// come from loading, validation and the render collaborator.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration could not be read or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration was read but violates an invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A model file could not be loaded
    #[error("Model loading failed: {0}")]
    Model(#[from] ObjError),

    /// The render backend rejected a call
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Collider dimensions need at least one vertex
    #[error("Asteroid mesh has no vertices")]
    EmptyMesh,
}
