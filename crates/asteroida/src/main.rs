//! Headless Asteroida demo
//!
//! Runs the full game loop against the headless render backend with a
//! scripted autopilot in place of a human player:
//!
//! ```text
//! asteroida [config.toml|config.ron]
//! ```

use std::path::{Path, PathBuf};

use asteroida::autopilot::Autopilot;
use asteroida::entity::SceneMaterials;
use asteroida::{Game, GameConfig, GameError, GameState, PlayerPose, SceneAssets};
use asteroida_engine::assets::ObjLoader;
use asteroida_engine::foundation::logging;
use asteroida_engine::foundation::math::Vec3;
use asteroida_engine::foundation::time::Stopwatch;
use asteroida_engine::input::IntentDebouncer;
use asteroida_engine::render::{HeadlessBackend, Mesh};

const DEFAULT_CONFIG_PATH: &str = "asteroida.toml";
const FRAME_TIME: f32 = 1.0 / 60.0;
const MAX_FRAMES: u64 = 60 * 60 * 5;
const LEVELS_TO_CLEAR: u32 = 2;

/// Half extent of the fallback cube model, in model units
const FALLBACK_HALF_EXTENT: f32 = 250.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let loaded = GameConfig::load_optional(&config_path)?;
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    logging::init_with_level(&config.log_level);
    log::info!("Starting Asteroida headless demo");
    if found {
        log::info!("Loaded configuration from {}", config_path.display());
    } else {
        log::warn!("{} not found, using default configuration", config_path.display());
    }

    config.validate()?;

    let mut backend = HeadlessBackend::new();
    let assets = load_assets(&config, &mut backend)?;
    let mut game = Game::new(config, assets);

    run(&mut game, &mut backend)?;
    Ok(())
}

fn load_model(path: Option<&Path>) -> Result<Mesh, GameError> {
    match path {
        Some(path) => Ok(ObjLoader::load_obj(path)?),
        None => Ok(Mesh::cube(FALLBACK_HALF_EXTENT)),
    }
}

fn load_assets(
    config: &GameConfig,
    backend: &mut HeadlessBackend,
) -> Result<SceneAssets, GameError> {
    let asteroid_model = load_model(config.assets.asteroid_model.as_deref())?;
    let projectile_model = load_model(config.assets.projectile_model.as_deref())?;

    let materials = SceneMaterials {
        default: backend.register_material("asteroid_default"),
        reflex: backend.register_material("asteroid_reflex"),
        refract: backend.register_material("asteroid_refract"),
        projectile: backend.register_material("projectile"),
    };
    let asteroid_mesh = backend.register_mesh(&asteroid_model);
    let projectile_mesh = backend.register_mesh(&projectile_model);

    SceneAssets::new(asteroid_mesh, &asteroid_model, projectile_mesh, materials)
}

fn run(game: &mut Game, backend: &mut HeadlessBackend) -> Result<(), GameError> {
    let mut stopwatch = Stopwatch::start_new();
    let mut autopilot = Autopilot::new(LEVELS_TO_CLEAR);
    let mut debouncer = IntentDebouncer::default();
    let mut pose = PlayerPose::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
    let mut best_points = 0;
    let mut frames = 0;

    while game.state() != GameState::Closed {
        if frames >= MAX_FRAMES {
            log::warn!("Stopping after {} frames without reaching the exit", frames);
            break;
        }
        frames += 1;
        backend.begin_frame();
        debouncer.tick(FRAME_TIME);

        for intent in autopilot.intents(game, &mut pose) {
            if debouncer.filter(intent) {
                game.handle_intent(intent, &pose);
            }
        }

        let state = game.update(FRAME_TIME, &pose.position, backend)?;
        if let Some(scene) = game.scene() {
            best_points = best_points.max(scene.points());
        }
        log::trace!("Frame {}: {:?}, {} nodes drawn", frames, state, backend.drawn_nodes().len());
    }
    stopwatch.stop();

    log::info!(
        "Demo finished after {} frames ({:.1} ms wall time): level {}, best score {}",
        frames,
        stopwatch.elapsed_millis(),
        game.level(),
        best_points
    );
    Ok(())
}
