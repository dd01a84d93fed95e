//! The playing field: live asteroids and projectiles, score and lives
//!
//! A tick is split in two. [`Scene::step`] is the pure simulation pass and
//! never touches the renderer; [`Scene::draw`] pushes the resulting state to
//! a [`RenderBackend`]. Entities removed during a step leave their render
//! nodes behind in a retirement list that the next draw destroys.

use asteroida_engine::foundation::math::{Mat4, Mat4Ext, Vec3};
use asteroida_engine::foundation::time::Cooldown;
use asteroida_engine::physics::Aabb;
use asteroida_engine::render::{BackendResult, Mesh, MeshHandle, NodeHandle, RenderBackend};
use rand::rngs::StdRng;

use crate::config::SceneConfig;
use crate::entity::{Asteroid, AsteroidCategory, Body, Movable, Projectile, SceneMaterials};
use crate::error::GameError;
use crate::spawner::{AsteroidSpawner, SpawnRanges};

/// Shared render resources of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAssets {
    asteroid_mesh: MeshHandle,
    asteroid_bounds: Aabb,
    projectile_mesh: MeshHandle,
    materials: SceneMaterials,
}

impl SceneAssets {
    /// Bundle the meshes and materials. The asteroid mesh's bounding box is
    /// measured here, once, and later sizes every asteroid collider.
    pub fn new(
        asteroid_mesh: MeshHandle,
        asteroid_model: &Mesh,
        projectile_mesh: MeshHandle,
        materials: SceneMaterials,
    ) -> Result<Self, GameError> {
        let asteroid_bounds = asteroid_model.bounding_box().ok_or(GameError::EmptyMesh)?;
        Ok(Self {
            asteroid_mesh,
            asteroid_bounds,
            projectile_mesh,
            materials,
        })
    }

    /// Bounding box of the asteroid model in model units
    pub const fn asteroid_bounds(&self) -> &Aabb {
        &self.asteroid_bounds
    }

    /// Materials handed to spawned entities
    pub const fn materials(&self) -> &SceneMaterials {
        &self.materials
    }
}

/// What happened during one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False once the player was hit with no lives left
    pub alive: bool,
    /// An asteroid contained the player position this step
    pub player_hit: bool,
    /// Asteroids removed by projectile hits
    pub asteroids_destroyed: usize,
    /// Asteroids that left the play radius and were replaced
    pub asteroids_recycled: usize,
    /// Projectiles that left the play radius
    pub projectiles_expired: usize,
    /// Points gained this step
    pub points_awarded: u32,
}

/// Live entities plus the counters of one level
#[derive(Debug)]
pub struct Scene {
    asteroids: Vec<Asteroid>,
    projectiles: Vec<Projectile>,
    points: u32,
    lives: u32,
    fire_cooldown: Cooldown,
    play_radius: f32,
    projectile_scale: f32,
    spawner: AsteroidSpawner,
    materials: SceneMaterials,
    asteroid_mesh: MeshHandle,
    projectile_mesh: MeshHandle,
    retired_nodes: Vec<NodeHandle>,
}

impl Scene {
    /// Build a scene and populate it with `config.asteroid_count` asteroids
    pub fn new(config: &SceneConfig, assets: &SceneAssets, rng: StdRng) -> Self {
        let collider_dimensions = assets.asteroid_bounds.extent() * config.asteroid_scale;
        let ranges = SpawnRanges::new(
            config.position_min,
            config.position_max,
            config.speed_min,
            config.speed_max,
        );

        let mut scene = Self {
            asteroids: Vec::with_capacity(config.asteroid_count),
            projectiles: Vec::new(),
            points: 0,
            lives: config.starting_lives,
            fire_cooldown: Cooldown::new(config.fire_cooldown),
            play_radius: config.play_radius,
            projectile_scale: config.projectile_scale,
            spawner: AsteroidSpawner::new(rng, ranges, collider_dimensions, config.asteroid_scale),
            materials: assets.materials,
            asteroid_mesh: assets.asteroid_mesh,
            projectile_mesh: assets.projectile_mesh,
            retired_nodes: Vec::new(),
        };

        scene.generate_asteroids(
            config.asteroid_count,
            config.position_min,
            config.position_max,
            config.speed_min,
            config.speed_max,
        );

        log::info!(
            "Scene created: {} asteroids, collider {:.4}x{:.4}x{:.4}, {} lives",
            scene.asteroids.len(),
            collider_dimensions.x,
            collider_dimensions.y,
            collider_dimensions.z,
            scene.lives
        );
        scene
    }

    /// Append `count` freshly sampled asteroids. The ranges are kept for
    /// later respawns.
    pub fn generate_asteroids(
        &mut self,
        count: usize,
        position_min: Vec3,
        position_max: Vec3,
        speed_min: f32,
        speed_max: f32,
    ) {
        self.spawner
            .set_ranges(SpawnRanges::new(position_min, position_max, speed_min, speed_max));
        for _ in 0..count {
            self.generate_asteroid();
        }
    }

    /// Append one asteroid sampled from the last configured ranges
    pub fn generate_asteroid(&mut self) {
        let asteroid = self.spawner.spawn(&self.materials);
        log::trace!(
            "Spawned {:?} asteroid at {:?}",
            asteroid.category(),
            asteroid.position()
        );
        self.asteroids.push(asteroid);
    }

    /// Append an asteroid with fully specified placement and motion
    pub fn spawn_asteroid(
        &mut self,
        position: Vec3,
        direction: Vec3,
        speed: f32,
        category: AsteroidCategory,
    ) {
        let asteroid = self
            .spawner
            .build(position, direction, speed, category, &self.materials);
        self.asteroids.push(asteroid);
    }

    /// Fire a projectile if the cooldown allows it.
    ///
    /// Returns the remaining cooldown, which equals the full duration right
    /// after a successful shot.
    pub fn shoot(&mut self, position: Vec3, direction: Vec3, speed: f32) -> f32 {
        if self.fire_cooldown.try_trigger() {
            let transform = Mat4::placement(position, self.projectile_scale);
            let body = Body::new(transform, direction, speed);
            self.projectiles
                .push(Projectile::new(body, self.materials.projectile));
            log::trace!("Projectile fired from {:?}", position);
        }
        self.fire_cooldown.remaining()
    }

    /// Run one simulation step without rendering
    pub fn step(&mut self, delta_time: f32, player_position: &Vec3) -> TickReport {
        let mut report = TickReport {
            alive: true,
            ..TickReport::default()
        };

        self.fire_cooldown.tick(delta_time);

        report.asteroids_recycled = self.move_asteroids(delta_time);
        report.projectiles_expired = self.move_projectiles(delta_time);

        let (destroyed, points) = self.resolve_projectile_hits();
        report.asteroids_destroyed = destroyed;
        report.points_awarded = points;
        self.points = self.points.saturating_add(points);

        report.player_hit = self
            .asteroids
            .iter_mut()
            .any(|asteroid| asteroid.is_colliding(player_position));

        if report.player_hit {
            if self.lives > 0 {
                self.lives -= 1;
                log::info!("Player hit, {} lives left", self.lives);
            } else {
                log::info!("Player hit with no lives left, game over");
                report.alive = false;
            }
        }

        report
    }

    /// Destroy retired render nodes, then draw projectiles followed by
    /// asteroids
    pub fn draw<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) -> BackendResult<()> {
        while let Some(node) = self.retired_nodes.pop() {
            backend.destroy_node(node)?;
        }

        for projectile in &mut self.projectiles {
            let transform = *projectile.body().transform();
            projectile
                .render_mut()
                .draw(backend, self.projectile_mesh, &transform)?;
        }
        for asteroid in &mut self.asteroids {
            let transform = *asteroid.body().transform();
            asteroid
                .render_mut()
                .draw(backend, self.asteroid_mesh, &transform)?;
        }
        Ok(())
    }

    /// Step and draw. Returns false when the player is out of lives.
    pub fn update<B: RenderBackend + ?Sized>(
        &mut self,
        delta_time: f32,
        player_position: &Vec3,
        backend: &mut B,
    ) -> BackendResult<bool> {
        let report = self.step(delta_time, player_position);
        self.draw(backend)?;
        Ok(report.alive)
    }

    /// Every render node this scene still owns, consuming the scene
    pub fn into_nodes(self) -> Vec<NodeHandle> {
        let mut nodes = self.retired_nodes;
        nodes.extend(self.projectiles.iter().filter_map(|p| p.render().node()));
        nodes.extend(self.asteroids.iter().filter_map(|a| a.render().node()));
        nodes
    }

    /// Cumulative score
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Remaining lives
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    /// Live asteroid count
    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Live projectile count
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Live asteroids in iteration order
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Live projectiles in iteration order
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Collider dimensions shared by every asteroid
    pub const fn collider_dimensions(&self) -> Vec3 {
        self.spawner.collider_dimensions()
    }

    /// Time until the next shot is allowed (may be negative)
    pub fn fire_cooldown_remaining(&self) -> f32 {
        self.fire_cooldown.remaining()
    }

    /// Play radius
    pub const fn play_radius(&self) -> f32 {
        self.play_radius
    }

    /// Recycle asteroids already outside the radius, move the rest.
    /// Returns the number recycled.
    fn move_asteroids(&mut self, delta_time: f32) -> usize {
        let radius = self.play_radius;
        let outside: Vec<bool> = self
            .asteroids
            .iter_mut()
            .map(|asteroid| {
                let outside = asteroid.is_too_far_from_center(radius);
                if !outside {
                    asteroid.advance(delta_time);
                }
                outside
            })
            .collect();

        let recycled = compact(&mut self.asteroids, &outside, &mut self.retired_nodes, |a| {
            a.render().node()
        });
        for _ in 0..recycled {
            self.generate_asteroid();
        }
        if recycled > 0 {
            log::trace!("Recycled {} asteroids", recycled);
        }
        recycled
    }

    /// Drop projectiles already outside the radius, move the rest.
    /// Returns the number dropped.
    fn move_projectiles(&mut self, delta_time: f32) -> usize {
        let radius = self.play_radius;
        let outside: Vec<bool> = self
            .projectiles
            .iter_mut()
            .map(|projectile| {
                let outside = projectile.is_too_far_from_center(radius);
                if !outside {
                    projectile.advance(delta_time);
                }
                outside
            })
            .collect();

        compact(&mut self.projectiles, &outside, &mut self.retired_nodes, |p| {
            p.render().node()
        })
    }

    /// Each projectile, in order, destroys the first live asteroid containing
    /// it. Returns the destroyed count and the points earned.
    fn resolve_projectile_hits(&mut self) -> (usize, u32) {
        let mut asteroid_hit = vec![false; self.asteroids.len()];
        let mut projectile_hit = vec![false; self.projectiles.len()];
        let mut points = 0;

        for (projectile, spent) in self.projectiles.iter().zip(projectile_hit.iter_mut()) {
            let position = projectile.position();
            for (asteroid, destroyed) in self.asteroids.iter_mut().zip(asteroid_hit.iter_mut()) {
                if !*destroyed && asteroid.is_colliding(&position) {
                    *destroyed = true;
                    *spent = true;
                    points += asteroid.points();
                    break;
                }
            }
        }

        let destroyed = compact(&mut self.asteroids, &asteroid_hit, &mut self.retired_nodes, |a| {
            a.render().node()
        });
        compact(&mut self.projectiles, &projectile_hit, &mut self.retired_nodes, |p| {
            p.render().node()
        });

        if destroyed > 0 {
            log::debug!(
                "{} asteroids destroyed for {} points, {} left",
                destroyed,
                points,
                self.asteroids.len()
            );
        }
        (destroyed, points)
    }
}

/// Remove every item whose flag is set, keeping the order of the rest, and
/// move the render nodes of removed items to `retired`. Returns the number
/// removed.
fn compact<T>(
    items: &mut Vec<T>,
    remove: &[bool],
    retired: &mut Vec<NodeHandle>,
    node: impl Fn(&T) -> Option<NodeHandle>,
) -> usize {
    let mut flags = remove.iter().copied();
    let mut removed = 0;
    items.retain(|item| {
        let drop = flags.next().unwrap_or(false);
        if drop {
            retired.extend(node(item));
            removed += 1;
        }
        !drop
    });
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use asteroida_engine::render::{HeadlessBackend, MaterialId};
    use rand::SeedableRng;

    fn materials() -> SceneMaterials {
        SceneMaterials {
            default: MaterialId(0),
            reflex: MaterialId(1),
            refract: MaterialId(2),
            projectile: MaterialId(3),
        }
    }

    fn assets() -> SceneAssets {
        SceneAssets::new(MeshHandle(0), &Mesh::cube(250.0), MeshHandle(1), materials()).unwrap()
    }

    fn empty_scene() -> Scene {
        let config = SceneConfig {
            asteroid_count: 0,
            ..SceneConfig::default()
        };
        Scene::new(&config, &assets(), StdRng::seed_from_u64(1))
    }

    fn far_away() -> Vec3 {
        Vec3::new(100.0, 100.0, 100.0)
    }

    #[test]
    fn test_new_scene_uses_config() {
        let scene = Scene::new(&SceneConfig::default(), &assets(), StdRng::seed_from_u64(9));

        assert_eq!(scene.asteroid_count(), 20);
        assert_eq!(scene.projectile_count(), 0);
        assert_eq!(scene.points(), 0);
        assert_eq!(scene.lives(), 3);
        // 500 model units at scale 0.001
        assert_relative_eq!(scene.collider_dimensions(), Vec3::new(0.5, 0.5, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_empty_mesh_is_rejected() {
        let empty = Mesh::new(Vec::new(), Vec::new());
        let result = SceneAssets::new(MeshHandle(0), &empty, MeshHandle(1), materials());
        assert!(matches!(result, Err(GameError::EmptyMesh)));
    }

    #[test]
    fn test_recycling_conserves_asteroid_count() {
        let mut scene = Scene::new(&SceneConfig::default(), &assets(), StdRng::seed_from_u64(5));
        let mut recycled = 0;

        for _ in 0..2000 {
            let report = scene.step(0.05, &far_away());
            recycled += report.asteroids_recycled;
            assert_eq!(scene.asteroid_count(), 20);
            assert!(scene
                .asteroids()
                .iter()
                .all(|a| a.position().magnitude() < scene.play_radius() + 0.1));
        }
        assert!(recycled > 0);
    }

    #[test]
    fn test_count_only_drops_by_destroyed() {
        let mut scene = Scene::new(&SceneConfig::default(), &assets(), StdRng::seed_from_u64(21));

        for _ in 0..400 {
            if let Some(target) = scene.asteroids().first().map(Movable::position) {
                scene.shoot(Vec3::zeros(), target, 25000.0);
            }
            let before = scene.asteroid_count();
            let report = scene.step(0.02, &far_away());
            assert_eq!(scene.asteroid_count(), before - report.asteroids_destroyed);
        }
    }

    #[test]
    fn test_recycle_waits_one_tick_past_radius() {
        let mut scene = empty_scene();
        // World speed 0.15 per second along x
        scene.spawn_asteroid(
            Vec3::new(1.95, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            150.0,
            AsteroidCategory::Default,
        );

        let report = scene.step(1.0, &far_away());
        assert_eq!(report.asteroids_recycled, 0);
        assert!(scene.asteroids()[0].position().x > 2.0);

        let report = scene.step(1.0, &far_away());
        assert_eq!(report.asteroids_recycled, 1);
        assert_eq!(scene.asteroid_count(), 1);
    }

    #[test]
    fn test_projectiles_expire_without_respawn() {
        let mut scene = empty_scene();
        scene.shoot(Vec3::new(1.9, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 25000.0);

        scene.step(0.1, &far_away());
        assert_eq!(scene.projectile_count(), 1);
        let report = scene.step(0.1, &far_away());
        assert_eq!(report.projectiles_expired, 1);
        assert_eq!(scene.projectile_count(), 0);
    }

    #[test]
    fn test_shots_respect_cooldown() {
        let mut scene = empty_scene();
        let mut shot_times = Vec::new();

        for tick in 0..16_u16 {
            let before = scene.projectile_count();
            scene.shoot(Vec3::zeros(), Vec3::zeros(), 0.0);
            if scene.projectile_count() > before {
                shot_times.push(f32::from(tick) * 0.25);
            }
            scene.step(0.25, &far_away());
        }

        assert_eq!(shot_times.len(), 8);
        for pair in shot_times.windows(2) {
            assert!(pair[1] - pair[0] >= 0.5 - 1e-6);
        }
    }

    #[test]
    fn test_shoot_reports_remaining_cooldown() {
        let mut scene = empty_scene();

        assert_relative_eq!(scene.shoot(Vec3::zeros(), Vec3::zeros(), 0.0), 0.5);
        scene.step(0.2, &far_away());
        assert_relative_eq!(scene.shoot(Vec3::zeros(), Vec3::zeros(), 0.0), 0.3, epsilon = 1e-6);
        assert_eq!(scene.projectile_count(), 1);
    }

    #[test]
    fn test_points_by_category() {
        let mut scene = empty_scene();
        let spots = [
            (Vec3::new(-1.0, 0.0, 0.0), AsteroidCategory::Default),
            (Vec3::new(0.0, 1.0, 0.0), AsteroidCategory::Reflex),
            (Vec3::new(1.0, 0.0, 0.0), AsteroidCategory::Refract),
        ];
        for (position, category) in spots {
            scene.spawn_asteroid(position, Vec3::zeros(), 0.0, category);
        }

        for (position, _) in spots {
            scene.shoot(position, Vec3::zeros(), 0.0);
            let report = scene.step(0.5, &far_away());
            assert_eq!(report.asteroids_destroyed, 1);
        }

        assert_eq!(scene.points(), 550);
        assert_eq!(scene.asteroid_count(), 0);
        assert_eq!(scene.projectile_count(), 0);
    }

    #[test]
    fn test_one_projectile_destroys_only_the_first_overlapping_asteroid() {
        let mut scene = empty_scene();
        scene.spawn_asteroid(Vec3::zeros(), Vec3::zeros(), 0.0, AsteroidCategory::Refract);
        scene.spawn_asteroid(Vec3::zeros(), Vec3::zeros(), 0.0, AsteroidCategory::Default);
        scene.shoot(Vec3::zeros(), Vec3::zeros(), 0.0);

        let report = scene.step(0.1, &far_away());

        assert_eq!(report.asteroids_destroyed, 1);
        assert_eq!(report.points_awarded, 250);
        assert_eq!(scene.asteroid_count(), 1);
        assert_eq!(scene.asteroids()[0].category(), AsteroidCategory::Default);
    }

    #[test]
    fn test_point_on_face_does_not_hit_player() {
        let mut scene = empty_scene();
        scene.spawn_asteroid(Vec3::zeros(), Vec3::zeros(), 0.0, AsteroidCategory::Default);
        let half = scene.collider_dimensions() / 2.0;

        assert!(!scene.step(0.1, &Vec3::new(half.x, 0.0, 0.0)).player_hit);
        assert!(!scene.step(0.1, &Vec3::new(0.0, -half.y, 0.1)).player_hit);
        assert!(scene.step(0.1, &Vec3::new(half.x - 0.001, 0.0, 0.0)).player_hit);
    }

    #[test]
    fn test_lives_run_out_then_game_over() {
        let mut scene = empty_scene();
        scene.spawn_asteroid(Vec3::zeros(), Vec3::zeros(), 0.0, AsteroidCategory::Default);

        for expected in [2, 1, 0] {
            let report = scene.step(0.1, &Vec3::zeros());
            assert!(report.alive);
            assert!(report.player_hit);
            assert_eq!(scene.lives(), expected);
        }

        let report = scene.step(0.1, &Vec3::zeros());
        assert!(!report.alive);
        assert_eq!(scene.lives(), 0);
    }

    #[test]
    fn test_projectile_travels_to_asteroid() {
        let mut scene = empty_scene();
        scene.spawn_asteroid(
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::zeros(),
            0.0,
            AsteroidCategory::Reflex,
        );
        scene.shoot(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), 25000.0);

        let mut recycled = 0;
        for _ in 0..100 {
            let report = scene.step(0.01, &far_away());
            recycled += report.asteroids_recycled;
            if scene.asteroid_count() == 0 {
                break;
            }
        }

        assert_eq!(scene.asteroid_count(), 0);
        assert_eq!(recycled, 0);
        assert_eq!(scene.points(), 200);
        assert_eq!(scene.projectile_count(), 0);
    }

    /// Backend with the scene's materials and meshes registered
    fn backend_with_assets() -> (HeadlessBackend, SceneAssets) {
        let mut backend = HeadlessBackend::new();
        for name in ["default", "reflex", "refract", "projectile"] {
            backend.register_material(name);
        }
        let asteroid_mesh = backend.register_mesh(&Mesh::cube(250.0));
        let projectile_mesh = backend.register_mesh(&Mesh::cube(10.0));
        let assets =
            SceneAssets::new(asteroid_mesh, &Mesh::cube(250.0), projectile_mesh, materials())
                .unwrap();
        (backend, assets)
    }

    #[test]
    fn test_recycled_asteroid_is_resampled_with_a_new_node() {
        let (mut backend, assets) = backend_with_assets();
        let config = SceneConfig {
            asteroid_count: 0,
            ..SceneConfig::default()
        };
        let mut scene = Scene::new(&config, &assets, StdRng::seed_from_u64(4));
        scene.spawn_asteroid(
            Vec3::new(1.95, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            150.0,
            AsteroidCategory::Default,
        );

        backend.begin_frame();
        scene.draw(&mut backend).unwrap();
        let old_node = scene.asteroids()[0].render().node().unwrap();

        scene.step(1.0, &far_away());
        let report = scene.step(1.0, &far_away());
        assert_eq!(report.asteroids_recycled, 1);
        assert_eq!(scene.asteroid_count(), 1);

        let replacement = &scene.asteroids()[0];
        let position = replacement.position();
        let eps = 1e-4;
        assert!(
            position.iter().all(|c| (-1.0 - eps..=1.0 + eps).contains(c)),
            "{position:?}"
        );
        let speed = replacement.body().speed();
        assert!((150.0..=180.0).contains(&speed));
        let direction = replacement.body().direction();
        assert!(direction.iter().all(|c| (-1.0..=1.0).contains(c)));
        assert!(direction != Vec3::new(1.0, 0.0, 0.0) || speed != 150.0);
        assert!(replacement.render().node().is_none());

        backend.begin_frame();
        scene.draw(&mut backend).unwrap();
        assert!(backend.node(old_node).is_none());
        let new_node = scene.asteroids()[0].render().node().unwrap();
        assert_ne!(new_node, old_node);
        assert!(backend.node(new_node).is_some());
        assert_eq!(backend.node_count(), 1);
        assert_eq!(backend.drawn_nodes(), &[new_node]);
    }

    #[test]
    fn test_draw_order_and_node_cleanup() {
        let (mut backend, assets) = backend_with_assets();
        let asteroid_mesh = assets.asteroid_mesh;
        let projectile_mesh = assets.projectile_mesh;
        let config = SceneConfig {
            asteroid_count: 0,
            ..SceneConfig::default()
        };
        let mut scene = Scene::new(&config, &assets, StdRng::seed_from_u64(2));

        scene.spawn_asteroid(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::zeros(),
            0.0,
            AsteroidCategory::Default,
        );
        scene.spawn_asteroid(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::zeros(),
            0.0,
            AsteroidCategory::Reflex,
        );
        scene.shoot(Vec3::new(0.0, 1.0, 0.0), Vec3::zeros(), 0.0);

        backend.begin_frame();
        assert!(scene.update(0.1, &far_away(), &mut backend).unwrap());
        assert_eq!(backend.node_count(), 3);
        let drawn = backend.drawn_nodes().to_vec();
        assert_eq!(drawn.len(), 3);
        assert_eq!(backend.node(drawn[0]).unwrap().mesh, projectile_mesh);
        assert_eq!(backend.node(drawn[2]).unwrap().material, MaterialId(1));

        // Second frame reuses the nodes
        backend.begin_frame();
        scene.update(0.6, &far_away(), &mut backend).unwrap();
        assert_eq!(backend.node_count(), 3);

        scene.shoot(Vec3::new(-1.0, 0.0, 0.0), Vec3::zeros(), 0.0);
        backend.begin_frame();
        scene.update(0.1, &far_away(), &mut backend).unwrap();
        assert_eq!(scene.asteroid_count(), 1);
        // Old projectile, one asteroid left
        assert_eq!(backend.node_count(), 2);
        assert_eq!(backend.drawn_nodes().len(), 2);

        let leftover = scene.into_nodes();
        assert_eq!(leftover.len(), 2);
    }
}
