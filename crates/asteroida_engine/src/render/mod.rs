//! Rendering collaborator
//!
//! The engine does not draw anything itself. It defines the
//! [`RenderBackend`] seam the game talks to, the opaque handles that cross
//! it, mesh data, and a [`HeadlessBackend`] for running without a window.

pub mod api;
pub mod backends;
pub mod primitives;

pub use api::{BackendResult, MaterialId, MeshHandle, NodeHandle, RenderBackend, TextColor};
pub use backends::{HeadlessBackend, NodeRecord, TextRecord};
pub use primitives::{Mesh, Vertex};

/// Errors reported by a render backend
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The node was never created or was already destroyed
    #[error("Unknown render node: {0:?}")]
    UnknownNode(NodeHandle),

    /// The material id is not registered with the backend
    #[error("Unknown material: {0:?}")]
    UnknownMaterial(MaterialId),

    /// The mesh handle is not registered with the backend
    #[error("Unknown mesh: {0:?}")]
    UnknownMesh(MeshHandle),

    /// A rendering operation failed during execution
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),
}
