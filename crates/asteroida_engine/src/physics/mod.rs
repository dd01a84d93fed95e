//! Physics module for collision detection
//!
//! Provides the box containment tests used between projectiles, the player
//! and asteroids.

pub mod collision;

pub use collision::{Aabb, BoxCollider};
