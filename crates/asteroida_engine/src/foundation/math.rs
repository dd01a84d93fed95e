//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the simulation, plus the
//! handful of affine helpers entities need to live inside a single 4x4
//! transform.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type (screen space)
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Extension trait for Mat4 with the affine operations entities rely on
pub trait Mat4Ext {
    /// Build a transform that scales uniformly by `scale` and places the
    /// origin at `position` in world space.
    ///
    /// The translation is applied in the scaled frame, so it is divided by
    /// `scale` first; the resulting world translation equals `position`.
    fn placement(position: Vec3, scale: f32) -> Mat4;

    /// Post-multiply a translation. `offset` is expressed in the local
    /// (already scaled) frame of the transform.
    fn translated_local(&self, offset: &Vec3) -> Mat4;

    /// World-space translation component (column 3).
    fn translation(&self) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn placement(position: Vec3, scale: f32) -> Mat4 {
        Mat4::new_scaling(scale) * Mat4::new_translation(&(position / scale))
    }

    fn translated_local(&self, offset: &Vec3) -> Mat4 {
        self * Mat4::new_translation(offset)
    }

    fn translation(&self) -> Vec3 {
        Vec3::new(self.m14, self.m24, self.m34)
    }
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Distance of a point from the world origin
    pub fn distance_from_origin(point: &Vec3) -> f32 {
        point.magnitude()
    }
}
