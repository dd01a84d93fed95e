//! Public rendering API
//!
//! The render backend trait and the opaque handles that cross it.

pub mod render_backend;

pub use render_backend::{
    BackendResult, MaterialId, MeshHandle, NodeHandle, RenderBackend, TextColor,
};
