//! Game flow: menu, running level, pause, level clear and game over
//!
//! The game owns at most one [`Scene`]. A fresh scene is built for every new
//! run and every new level; the old one is discarded together with its render
//! nodes, which are destroyed on the next [`Game::update`].

use asteroida_engine::foundation::math::Vec3;
use asteroida_engine::input::InputIntent;
use asteroida_engine::render::{NodeHandle, RenderBackend};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::hud::Hud;
use crate::menu::{Menu, MenuOption};
use crate::scene::{Scene, SceneAssets, TickReport};

/// Top-level game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Main menu, nothing simulated
    Menu,
    /// Paused run with the menu shown on top
    MenuRunning,
    /// Simulation active
    Running,
    /// Game over screen
    Ended,
    /// Exit requested
    Closed,
    /// Level cleared screen
    NextLevel,
}

/// Where the player is and where they are looking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    /// Camera position in world units
    pub position: Vec3,
    /// View direction, used as the projectile direction
    pub direction: Vec3,
}

impl PlayerPose {
    /// Create a pose
    pub const fn new(position: Vec3, direction: Vec3) -> Self {
        Self { position, direction }
    }
}

/// State machine around the active scene
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    assets: SceneAssets,
    hud: Hud,
    menu: Menu,
    state: GameState,
    scene: Option<Scene>,
    level: u32,
    scenes_created: u64,
    discarded_nodes: Vec<NodeHandle>,
}

impl Game {
    /// Create a game sitting in the main menu
    pub fn new(config: GameConfig, assets: SceneAssets) -> Self {
        let hud = Hud::new(&config.hud);
        Self {
            config,
            assets,
            hud,
            menu: Menu::new(),
            state: GameState::Menu,
            scene: None,
            level: 1,
            scenes_created: 0,
            discarded_nodes: Vec::new(),
        }
    }

    /// Current state
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Current level, starting at 1
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Menu selection
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Active scene, if a run is in progress or just finished
    pub const fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Active scene, mutably
    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Configuration the game was built with
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Skybox faces of the current level
    pub fn skybox_faces(&self) -> &[String] {
        self.config
            .level(self.level)
            .map(|level| level.skybox_faces.as_slice())
            .unwrap_or_default()
    }

    /// Start a run from level 1
    pub fn start_new_game(&mut self) {
        self.level = 1;
        self.replace_scene();
        self.set_state(GameState::Running);
    }

    /// Build the next level's scene and resume play
    pub fn load_next_level(&mut self) {
        self.level = self.level.saturating_add(1);
        self.replace_scene();
        self.set_state(GameState::Running);
    }

    /// Move the menu highlight up
    pub fn change_menu_option_up(&mut self) {
        self.menu.up();
    }

    /// Move the menu highlight down
    pub fn change_menu_option_down(&mut self) {
        self.menu.down();
    }

    /// Act on the highlighted menu option
    pub fn select_menu_option(&mut self) {
        match self.menu.selected() {
            MenuOption::NewGame => self.start_new_game(),
            MenuOption::Exit => self.set_state(GameState::Closed),
        }
    }

    /// Pause or resume a run; leaves the game over screen
    pub fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => self.set_state(GameState::MenuRunning),
            GameState::MenuRunning => self.set_state(GameState::Running),
            GameState::Ended => self.return_to_menu(),
            GameState::Menu | GameState::NextLevel | GameState::Closed => {}
        }
    }

    /// Fire from the player pose. Returns the remaining cooldown, or `None`
    /// when no run is active.
    pub fn shoot(&mut self, pose: &PlayerPose) -> Option<f32> {
        if self.state != GameState::Running {
            return None;
        }
        let speed = self.config.scene.projectile_speed;
        self.scene
            .as_mut()
            .map(|scene| scene.shoot(pose.position, pose.direction, speed))
    }

    /// Apply one debounced input intent
    pub fn handle_intent(&mut self, intent: InputIntent, pose: &PlayerPose) -> GameState {
        match intent {
            InputIntent::Fire => {
                self.shoot(pose);
            }
            InputIntent::MenuUp if self.menu_visible() => self.change_menu_option_up(),
            InputIntent::MenuDown if self.menu_visible() => self.change_menu_option_down(),
            InputIntent::MenuUp | InputIntent::MenuDown => {}
            InputIntent::MenuSelect => match self.state {
                GameState::Ended => self.return_to_menu(),
                GameState::Menu | GameState::MenuRunning => self.select_menu_option(),
                GameState::NextLevel => self.load_next_level(),
                GameState::Running | GameState::Closed => {}
            },
            InputIntent::PauseToggle => self.toggle_pause(),
        }
        self.state
    }

    /// Advance the simulation without drawing
    pub fn advance(&mut self, delta_time: f32, player_position: &Vec3) -> GameState {
        self.tick_scene(delta_time, player_position);
        self.state
    }

    /// Advance the simulation and draw everything the current state shows
    pub fn update<B: RenderBackend + ?Sized>(
        &mut self,
        delta_time: f32,
        player_position: &Vec3,
        backend: &mut B,
    ) -> Result<GameState, GameError> {
        while let Some(node) = self.discarded_nodes.pop() {
            backend.destroy_node(node)?;
        }

        let points = self.scene.as_ref().map_or(0, Scene::points);
        match self.state {
            GameState::Menu | GameState::MenuRunning => self.hud.draw_menu(backend, &self.menu)?,
            GameState::Ended => self.hud.draw_banner(backend, "GAME OVER", points)?,
            GameState::NextLevel => self.hud.draw_banner(backend, "NEXT LEVEL", points)?,
            GameState::Running => {
                self.tick_scene(delta_time, player_position);
                if let Some(scene) = self.scene.as_mut() {
                    scene.draw(backend)?;
                    self.hud.draw_stats(backend, scene.points(), scene.lives())?;
                }
            }
            GameState::Closed => {}
        }
        Ok(self.state)
    }

    fn menu_visible(&self) -> bool {
        matches!(self.state, GameState::Menu | GameState::MenuRunning)
    }

    /// Step the scene when running and apply the resulting transitions
    fn tick_scene(&mut self, delta_time: f32, player_position: &Vec3) -> Option<TickReport> {
        if self.state != GameState::Running {
            return None;
        }
        let scene = self.scene.as_mut()?;
        let report = scene.step(delta_time, player_position);
        let (lives, points, remaining) = (scene.lives(), scene.points(), scene.asteroid_count());

        if !report.alive || (report.player_hit && lives == 0) {
            log::info!("Game over with {} points", points);
            self.set_state(GameState::Ended);
        }
        if remaining == 0 {
            log::info!("Level {} cleared with {} points", self.level, points);
            self.set_state(GameState::NextLevel);
        }
        Some(report)
    }

    fn return_to_menu(&mut self) {
        self.discard_scene();
        self.set_state(GameState::Menu);
    }

    fn replace_scene(&mut self) {
        self.discard_scene();
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self.scenes_created)),
            None => StdRng::from_entropy(),
        };
        self.scenes_created += 1;
        self.scene = Some(Scene::new(&self.config.scene, &self.assets, rng));
        log::info!("Level {} started", self.level);
    }

    fn discard_scene(&mut self) {
        if let Some(scene) = self.scene.take() {
            self.discarded_nodes.extend(scene.into_nodes());
        }
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            log::info!("Game state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}
