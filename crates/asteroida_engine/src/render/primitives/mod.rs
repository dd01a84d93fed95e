//! Rendering primitives

pub mod mesh;

pub use mesh::{Mesh, Vertex};
