//! Asset loading
//!
//! Only model geometry is loaded here; textures, fonts and cubemaps are the
//! host's concern.

pub mod obj_loader;

pub use obj_loader::{ObjError, ObjLoader};
