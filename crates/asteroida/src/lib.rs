//! # Asteroida
//!
//! A 3D asteroid shooter built on `asteroida_engine`. Asteroids drift
//! outward from the origin and are recycled at the edge of the play radius;
//! the player shoots them for points until the field is clear or their lives
//! run out.
//!
//! The crate is the simulation core plus its state machine. Windowing,
//! input polling and drawing are reached through the engine's
//! [`RenderBackend`](asteroida_engine::render::RenderBackend) and
//! [`InputIntent`](asteroida_engine::input::InputIntent) seams.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod autopilot;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod hud;
pub mod menu;
pub mod scene;
pub mod spawner;

#[cfg(test)]
mod tests;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameState, PlayerPose};
pub use scene::{Scene, SceneAssets, TickReport};
