//! Headless render backend
//!
//! Keeps every node in a slot map and records what was drawn each frame
//! instead of talking to a GPU. Used by the demo binary and by tests that
//! check what the simulation asked the renderer to do.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::foundation::math::{Mat4, Vec2};
use crate::render::api::{
    BackendResult, MaterialId, MeshHandle, NodeHandle, RenderBackend, TextColor,
};
use crate::render::{Mesh, RenderError};

/// State of one renderable node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    /// World transform last set on the node
    pub transform: Mat4,
    /// Mesh drawn by the node
    pub mesh: MeshHandle,
    /// Current material
    pub material: MaterialId,
}

/// One text draw call
#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    /// Rendered string
    pub text: String,
    /// Screen position in pixels
    pub position: Vec2,
    /// Glyph scale
    pub scale: f32,
    /// RGB color
    pub color: TextColor,
}

/// Render backend that renders nothing and remembers everything
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    nodes: SlotMap<NodeHandle, NodeRecord>,
    materials: HashMap<MaterialId, String>,
    mesh_vertex_counts: HashMap<MeshHandle, usize>,
    drawn: Vec<NodeHandle>,
    text: Vec<TextRecord>,
    frame_count: u64,
}

impl HeadlessBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named material and return its id
    pub fn register_material(&mut self, name: impl Into<String>) -> MaterialId {
        let id = MaterialId(u32::try_from(self.materials.len()).unwrap_or(u32::MAX));
        let name = name.into();
        log::debug!("Registered material {:?} as {}", id, name);
        self.materials.insert(id, name);
        id
    }

    /// Register a mesh and return its handle
    pub fn register_mesh(&mut self, mesh: &Mesh) -> MeshHandle {
        let handle = MeshHandle(self.mesh_vertex_counts.len() as u64);
        self.mesh_vertex_counts.insert(handle, mesh.vertices.len());
        log::debug!("Registered mesh {:?} with {} vertices", handle, mesh.vertices.len());
        handle
    }

    /// Clear the per-frame draw and text logs
    pub fn begin_frame(&mut self) {
        self.drawn.clear();
        self.text.clear();
        self.frame_count += 1;
    }

    /// Look up a live node
    pub fn node(&self, handle: NodeHandle) -> Option<&NodeRecord> {
        self.nodes.get(handle)
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes drawn since the last `begin_frame`, in draw order
    pub fn drawn_nodes(&self) -> &[NodeHandle] {
        &self.drawn
    }

    /// Text rendered since the last `begin_frame`
    pub fn text_lines(&self) -> &[TextRecord] {
        &self.text
    }

    /// Name a material was registered under
    pub fn material_name(&self, id: MaterialId) -> Option<&str> {
        self.materials.get(&id).map(String::as_str)
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn node_mut(&mut self, handle: NodeHandle) -> BackendResult<&mut NodeRecord> {
        self.nodes.get_mut(handle).ok_or(RenderError::UnknownNode(handle))
    }

    fn check_material(&self, material: MaterialId) -> BackendResult<()> {
        if self.materials.contains_key(&material) {
            Ok(())
        } else {
            Err(RenderError::UnknownMaterial(material))
        }
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_node(
        &mut self,
        transform: &Mat4,
        mesh: MeshHandle,
        material: MaterialId,
    ) -> BackendResult<NodeHandle> {
        self.check_material(material)?;
        if !self.mesh_vertex_counts.contains_key(&mesh) {
            return Err(RenderError::UnknownMesh(mesh));
        }
        Ok(self.nodes.insert(NodeRecord {
            transform: *transform,
            mesh,
            material,
        }))
    }

    fn set_transform(&mut self, node: NodeHandle, transform: &Mat4) -> BackendResult<()> {
        self.node_mut(node)?.transform = *transform;
        Ok(())
    }

    fn set_material(&mut self, node: NodeHandle, material: MaterialId) -> BackendResult<()> {
        self.check_material(material)?;
        self.node_mut(node)?.material = material;
        Ok(())
    }

    fn draw_node(&mut self, node: NodeHandle) -> BackendResult<()> {
        if !self.nodes.contains_key(node) {
            return Err(RenderError::UnknownNode(node));
        }
        self.drawn.push(node);
        Ok(())
    }

    fn destroy_node(&mut self, node: NodeHandle) -> BackendResult<()> {
        self.nodes
            .remove(node)
            .map(|_| ())
            .ok_or(RenderError::UnknownNode(node))
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Vec2,
        scale: f32,
        color: TextColor,
    ) -> BackendResult<()> {
        self.text.push(TextRecord {
            text: text.to_string(),
            position,
            scale,
            color,
        });
        Ok(())
    }
}
