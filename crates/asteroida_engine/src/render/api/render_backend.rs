//! Backend abstraction traits for the rendering system
//!
//! The simulation treats rendering as a black box: it creates nodes for its
//! entities, keeps their transforms and materials current, asks for them to be
//! drawn, and renders HUD text. Everything behind these calls (shaders,
//! uniform upload, glyph atlases) belongs to the backend.

use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a mesh resource loaded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u64);

/// Opaque shading selection owned by the backend.
///
/// Passed by value; the simulation never inspects or mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

slotmap::new_key_type! {
    /// Handle to a renderable scene node
    pub struct NodeHandle;
}

/// RGB text color
pub type TextColor = Vec3;

/// Main rendering backend trait
pub trait RenderBackend {
    /// Create a renderable node drawing `mesh` with `material` at `transform`
    fn create_node(
        &mut self,
        transform: &Mat4,
        mesh: MeshHandle,
        material: MaterialId,
    ) -> BackendResult<NodeHandle>;

    /// Replace a node's world transform
    fn set_transform(&mut self, node: NodeHandle, transform: &Mat4) -> BackendResult<()>;

    /// Switch a node to another material
    fn set_material(&mut self, node: NodeHandle, material: MaterialId) -> BackendResult<()>;

    /// Record a draw of the node for the current frame
    fn draw_node(&mut self, node: NodeHandle) -> BackendResult<()>;

    /// Release a node that will never be drawn again
    fn destroy_node(&mut self, node: NodeHandle) -> BackendResult<()>;

    /// Render a text string at a screen position (pixels, origin bottom-left)
    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        scale: f32,
        color: TextColor,
    ) -> BackendResult<()>;
}
