//! Mesh representation for 3D models
//!
//! Pure geometry data: the simulation only ever reads vertex positions, once,
//! to size colliders. Upload and drawing are the render backend's business.

use crate::foundation::math::Vec3;
use crate::physics::Aabb;

/// 3D vertex data structure
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }

    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// 3D mesh containing vertices and indices
///
/// Loaded once by the host and shared read-only by every entity drawn with it.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Bounding box over all vertex positions, `None` for an empty mesh
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().map(Vertex::position))
    }

    /// Cube centered at the origin with vertices at `±half_extent`.
    ///
    /// Used as a stand-in model when no asset file is configured.
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent;
        let vertices = vec![
            // Front face
            Vertex::new([-h, -h, h], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([h, -h, h], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([h, h, h], [0.0, 0.0, 1.0], [1.0, 1.0]),
            Vertex::new([-h, h, h], [0.0, 0.0, 1.0], [0.0, 1.0]),
            // Back face
            Vertex::new([-h, -h, -h], [0.0, 0.0, -1.0], [1.0, 0.0]),
            Vertex::new([-h, h, -h], [0.0, 0.0, -1.0], [1.0, 1.0]),
            Vertex::new([h, h, -h], [0.0, 0.0, -1.0], [0.0, 1.0]),
            Vertex::new([h, -h, -h], [0.0, 0.0, -1.0], [0.0, 0.0]),
        ];

        let indices = vec![
            0, 1, 2, 2, 3, 0, // front
            4, 5, 6, 6, 7, 4, // back
            3, 2, 6, 6, 5, 3, // top
            0, 4, 7, 7, 1, 0, // bottom
            1, 7, 6, 6, 2, 1, // right
            0, 3, 5, 5, 4, 0, // left
        ];

        Self::new(vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_structure() {
        let cube = Mesh::cube(1.0);

        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.indices.len(), 36);
        for &idx in &cube.indices {
            assert!(idx < cube.vertices.len() as u32, "Index {} is out of bounds", idx);
        }
    }

    #[test]
    fn test_cube_bounding_box() {
        let bounds = Mesh::cube(250.0).bounding_box().unwrap();

        assert_eq!(bounds.min, Vec3::new(-250.0, -250.0, -250.0));
        assert_eq!(bounds.extent(), Vec3::new(500.0, 500.0, 500.0));
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        assert!(Mesh::new(Vec::new(), Vec::new()).bounding_box().is_none());
    }
}
