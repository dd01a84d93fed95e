//! Cross-module gameplay tests driving [`Game`](crate::game::Game) end to end


use asteroida_engine::foundation::math::Vec3;
use asteroida_engine::render::{HeadlessBackend, Mesh};

use crate::config::{GameConfig, SceneConfig};
use crate::entity::SceneMaterials;
use crate::game::Game;
use crate::scene::SceneAssets;

/// Backend with the four scene materials and both meshes registered, plus
/// matching scene assets
fn headless_assets() -> (HeadlessBackend, SceneAssets) {
    let mut backend = HeadlessBackend::new();
    let materials = SceneMaterials {
        default: backend.register_material("default"),
        reflex: backend.register_material("reflex"),
        refract: backend.register_material("refract"),
        projectile: backend.register_material("projectile"),
    };
    let asteroid_model = Mesh::cube(250.0);
    let asteroid_mesh = backend.register_mesh(&asteroid_model);
    let projectile_mesh = backend.register_mesh(&Mesh::cube(50.0));
    let assets = SceneAssets::new(asteroid_mesh, &asteroid_model, projectile_mesh, materials)
        .expect("cube has vertices");
    (backend, assets)
}

/// A single motionless asteroid at `position`
fn single_asteroid_config(position: Vec3) -> GameConfig {
    GameConfig {
        seed: Some(99),
        scene: SceneConfig {
            asteroid_count: 1,
            position_min: position,
            position_max: position,
            speed_min: 0.0,
            speed_max: 0.0,
            ..SceneConfig::default()
        },
        ..GameConfig::default()
    }
}

fn game_with(config: GameConfig) -> (Game, HeadlessBackend) {
    let (backend, assets) = headless_assets();
    (Game::new(config, assets), backend)
}

fn far_away() -> Vec3 {
    Vec3::new(100.0, 100.0, 100.0)
}
