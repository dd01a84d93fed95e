//! Game configuration
//!
//! Loaded from `asteroida.toml` (or `.ron`) when present, otherwise the
//! built-in defaults reproduce the classic 20-asteroid field.

use std::path::{Path, PathBuf};

use asteroida_engine::config::{Config, ConfigError};
use asteroida_engine::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Number of cubemap faces a skybox needs
pub const SKYBOX_FACE_COUNT: usize = 6;

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Default log filter (`RUST_LOG` overrides it)
    pub log_level: String,

    /// Seed for asteroid sampling; entropy when absent
    pub seed: Option<u64>,

    /// Scene generation and gameplay tuning
    pub scene: SceneConfig,

    /// Cosmetic per-level settings, cycled when exhausted
    pub levels: Vec<LevelConfig>,

    /// HUD layout
    pub hud: HudConfig,

    /// Optional model files
    pub assets: AssetPaths,
}

/// Scene generation and gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Asteroids spawned at level start
    pub asteroid_count: usize,

    /// Lower corner of the spawn volume (world units)
    pub position_min: Vec3,

    /// Upper corner of the spawn volume (world units)
    pub position_max: Vec3,

    /// Minimum asteroid speed (model units per second)
    pub speed_min: f32,

    /// Maximum asteroid speed (model units per second)
    pub speed_max: f32,

    /// Distance from the origin beyond which entities are recycled
    pub play_radius: f32,

    /// Seconds between shots
    pub fire_cooldown: f32,

    /// Projectile speed (model units per second)
    pub projectile_speed: f32,

    /// Lives at the start of every scene
    pub starting_lives: u32,

    /// Uniform model scale of asteroids; also scales the collider
    pub asteroid_scale: f32,

    /// Uniform model scale of projectiles
    pub projectile_scale: f32,
}

/// Cosmetic settings of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Cubemap faces: right, left, top, bottom, front, back
    pub skybox_faces: Vec<String>,
}

/// HUD layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Window width in pixels
    pub window_width: f32,

    /// Window height in pixels
    pub window_height: f32,
}

/// Optional model files; a procedural cube is used when absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// OBJ model shared by every asteroid
    pub asteroid_model: Option<PathBuf>,

    /// OBJ model shared by every projectile
    pub projectile_model: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
            scene: SceneConfig::default(),
            levels: vec![
                LevelConfig::from_directory("res/textures/skybox"),
                LevelConfig::from_directory("res/textures/skybox2"),
            ],
            hud: HudConfig::default(),
            assets: AssetPaths::default(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 20,
            position_min: Vec3::new(-1.0, -1.0, -1.0),
            position_max: Vec3::new(1.0, 1.0, 1.0),
            speed_min: 150.0,
            speed_max: 180.0,
            play_radius: 2.0,
            fire_cooldown: 0.5,
            projectile_speed: 25000.0,
            starting_lives: 3,
            asteroid_scale: 0.001,
            projectile_scale: 0.0001,
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            window_width: 1000.0,
            window_height: 700.0,
        }
    }
}

impl LevelConfig {
    /// Skybox faces named `right.jpg`, `left.jpg`, ... inside `directory`
    pub fn from_directory(directory: &str) -> Self {
        let skybox_faces = ["right", "left", "top", "bottom", "front", "back"]
            .iter()
            .map(|face| format!("{directory}/{face}.jpg"))
            .collect();
        Self { skybox_faces }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration if the file exists.
    ///
    /// A missing file is `Ok(None)`; a present but malformed one is an error.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Cosmetic settings for a 1-based level number
    pub fn level(&self, level: u32) -> Option<&LevelConfig> {
        if self.levels.is_empty() {
            return None;
        }
        let index = (level.max(1) - 1) as usize % self.levels.len();
        self.levels.get(index)
    }

    /// Check invariants the simulation relies on
    pub fn validate(&self) -> Result<(), GameError> {
        let scene = &self.scene;
        let invalid = |message: &str| Err(GameError::InvalidConfig(message.to_string()));

        if scene.asteroid_count == 0 {
            return invalid("asteroid_count must be at least 1");
        }
        if (0..3).any(|axis| !finite_range(scene.position_min[axis], scene.position_max[axis])) {
            return invalid("position bounds and their widths must be finite");
        }
        if (0..3).any(|axis| scene.position_min[axis] > scene.position_max[axis]) {
            return invalid("position_min must not exceed position_max");
        }
        if !finite_range(scene.speed_min, scene.speed_max) {
            return invalid("speed bounds and their width must be finite");
        }
        if scene.speed_min > scene.speed_max {
            return invalid("speed_min must not exceed speed_max");
        }
        let scalars = [
            scene.play_radius,
            scene.fire_cooldown,
            scene.projectile_speed,
            scene.asteroid_scale,
            scene.projectile_scale,
        ];
        if scalars.iter().any(|value| !value.is_finite()) {
            return invalid("scene values must be finite");
        }
        if scene.play_radius <= 0.0 {
            return invalid("play_radius must be positive");
        }
        if scene.fire_cooldown <= 0.0 {
            return invalid("fire_cooldown must be positive");
        }
        if scene.asteroid_scale <= 0.0 || scene.projectile_scale <= 0.0 {
            return invalid("model scales must be positive");
        }
        if self.levels.is_empty() {
            return invalid("at least one level is required");
        }
        if self
            .levels
            .iter()
            .any(|level| level.skybox_faces.len() != SKYBOX_FACE_COUNT)
        {
            return invalid("every level needs exactly six skybox faces");
        }
        Ok(())
    }
}

/// Both bounds finite and their difference representable
fn finite_range(min: f32, max: f32) -> bool {
    min.is_finite() && max.is_finite() && (max - min).is_finite()
}
