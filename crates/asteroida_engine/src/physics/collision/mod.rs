//! Collision detection primitives
//!
//! Narrow-phase containment tests only; the game has too few entities to
//! need a broad phase.
//!
//! - [`Aabb`] - axis-aligned bounds, also used for mesh extents
//! - [`BoxCollider`] - box re-centred on a moving entity per test

pub mod primitives;

pub use primitives::{Aabb, BoxCollider};
