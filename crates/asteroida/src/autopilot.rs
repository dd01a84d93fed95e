//! Scripted player for the headless demo
//!
//! Starts a run, aims at the nearest asteroid and keeps firing, advances
//! through a fixed number of levels, then navigates the menu to exit.

use asteroida_engine::input::InputIntent;

use crate::entity::Movable;
use crate::game::{Game, GameState, PlayerPose};
use crate::menu::MenuOption;

/// Produces intents from the visible game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autopilot {
    levels_to_clear: u32,
    done: bool,
}

impl Autopilot {
    /// Play until `levels_to_clear` levels are cleared or the run is lost
    pub const fn new(levels_to_clear: u32) -> Self {
        Self {
            levels_to_clear,
            done: false,
        }
    }

    /// Whether the autopilot is heading for the exit
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Intents for this frame. Re-aims `pose` at the nearest asteroid while
    /// a run is active.
    pub fn intents(&mut self, game: &Game, pose: &mut PlayerPose) -> Vec<InputIntent> {
        match game.state() {
            GameState::Menu => match (self.done, game.menu().selected()) {
                (false, MenuOption::NewGame) | (true, MenuOption::Exit) => {
                    vec![InputIntent::MenuSelect]
                }
                (false, MenuOption::Exit) => vec![InputIntent::MenuUp],
                (true, MenuOption::NewGame) => vec![InputIntent::MenuDown],
            },
            GameState::MenuRunning => {
                self.done = true;
                vec![InputIntent::MenuDown, InputIntent::MenuSelect]
            }
            GameState::Running if self.done => vec![InputIntent::PauseToggle],
            GameState::Running => {
                if Self::aim(game, pose) {
                    vec![InputIntent::Fire]
                } else {
                    Vec::new()
                }
            }
            GameState::NextLevel => {
                if game.level() >= self.levels_to_clear {
                    log::info!("Autopilot cleared {} levels", game.level());
                    self.done = true;
                }
                vec![InputIntent::MenuSelect]
            }
            GameState::Ended => {
                self.done = true;
                vec![InputIntent::MenuSelect]
            }
            GameState::Closed => Vec::new(),
        }
    }

    /// Point the pose at the nearest asteroid. False when there is none.
    fn aim(game: &Game, pose: &mut PlayerPose) -> bool {
        let Some(scene) = game.scene() else {
            return false;
        };
        let nearest = scene
            .asteroids()
            .iter()
            .map(|asteroid| asteroid.position() - pose.position)
            .min_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));

        match nearest {
            Some(offset) => {
                pose.direction = offset;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asteroida_engine::foundation::math::Vec3;
    use asteroida_engine::render::{MaterialId, Mesh, MeshHandle};

    use crate::config::GameConfig;
    use crate::entity::SceneMaterials;
    use crate::scene::SceneAssets;

    fn game() -> Game {
        let materials = SceneMaterials {
            default: MaterialId(0),
            reflex: MaterialId(1),
            refract: MaterialId(2),
            projectile: MaterialId(3),
        };
        let assets =
            SceneAssets::new(MeshHandle(0), &Mesh::cube(250.0), MeshHandle(1), materials).unwrap();
        let config = GameConfig {
            seed: Some(4),
            ..GameConfig::default()
        };
        Game::new(config, assets)
    }

    #[test]
    fn test_starts_game_then_fires_at_nearest() {
        let mut game = game();
        let mut autopilot = Autopilot::new(1);
        let mut pose = PlayerPose::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(autopilot.intents(&game, &mut pose), vec![InputIntent::MenuSelect]);
        game.handle_intent(InputIntent::MenuSelect, &pose);

        assert_eq!(autopilot.intents(&game, &mut pose), vec![InputIntent::Fire]);
        let nearest = game
            .scene()
            .into_iter()
            .flat_map(|scene| scene.asteroids().iter().map(Movable::position))
            .map(|position| position.magnitude())
            .fold(f32::INFINITY, f32::min);
        assert!((pose.direction.magnitude() - nearest).abs() < 1e-6);
    }

    #[test]
    fn test_exits_through_pause_menu_when_done() {
        let mut game = game();
        let mut autopilot = Autopilot::new(1);
        let mut pose = PlayerPose::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        game.start_new_game();
        game.toggle_pause();

        for intent in autopilot.intents(&game, &mut pose) {
            game.handle_intent(intent, &pose);
        }

        assert!(autopilot.is_done());
        assert_eq!(game.state(), GameState::Closed);
    }
}
