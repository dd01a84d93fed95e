//! # Asteroida Engine
//!
//! The engine layer underneath the asteroid shooter: math and time
//! primitives, configuration loading, collision tests, the render
//! collaborator seam, model loading and input intents.
//!
//! ## Features
//!
//! - **Math**: `nalgebra` aliases and affine helpers for single-matrix transforms
//! - **Collision**: strict axis-aligned box containment tests
//! - **Render seam**: a [`render::RenderBackend`] trait plus a headless backend
//! - **Configuration**: TOML/RON loading for any `serde` settings type
//!
//! ## Quick Start
//!
//! ```rust
//! use asteroida_engine::prelude::*;
//!
//! let mut backend = HeadlessBackend::new();
//! let mesh = backend.register_mesh(&Mesh::cube(1.0));
//! let material = backend.register_material("default");
//! let transform = Mat4::placement(Vec3::new(0.5, 0.0, 0.0), 0.001);
//! let node = backend.create_node(&transform, mesh, material)?;
//! backend.draw_node(node)?;
//! # Ok::<(), RenderError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod render;
pub mod assets;
pub mod input;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{ObjError, ObjLoader},
        config::{Config, ConfigError},
        foundation::{
            math::{Mat4, Mat4Ext, Vec2, Vec3},
            time::{Cooldown, Stopwatch},
        },
        input::{InputIntent, IntentDebouncer},
        physics::{Aabb, BoxCollider},
        render::{
            BackendResult, HeadlessBackend, MaterialId, Mesh, MeshHandle, NodeHandle, RenderBackend,
            RenderError, TextColor,
        },
    };
}
