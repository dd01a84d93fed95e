//! Asteroid spawn policy

use asteroida_engine::foundation::math::{Mat4, Mat4Ext, Vec3};
use rand::rngs::StdRng;
use rand::Rng;

use crate::entity::{Asteroid, AsteroidCategory, Body, SceneMaterials};

/// Ranges asteroids are sampled from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRanges {
    /// Lower corner of the spawn volume
    pub position_min: Vec3,
    /// Upper corner of the spawn volume
    pub position_max: Vec3,
    /// Minimum speed
    pub speed_min: f32,
    /// Maximum speed
    pub speed_max: f32,
}

impl SpawnRanges {
    /// Bundle the four range bounds
    pub const fn new(
        position_min: Vec3,
        position_max: Vec3,
        speed_min: f32,
        speed_max: f32,
    ) -> Self {
        Self {
            position_min,
            position_max,
            speed_min,
            speed_max,
        }
    }
}

/// Samples fresh asteroids.
///
/// Every asteroid shares the same model, so the collider dimensions are
/// fixed when the spawner is built and copied into each spawn.
#[derive(Debug, Clone)]
pub struct AsteroidSpawner {
    rng: StdRng,
    ranges: SpawnRanges,
    collider_dimensions: Vec3,
    model_scale: f32,
}

impl AsteroidSpawner {
    /// Create a spawner
    pub fn new(
        rng: StdRng,
        ranges: SpawnRanges,
        collider_dimensions: Vec3,
        model_scale: f32,
    ) -> Self {
        Self {
            rng,
            ranges,
            collider_dimensions,
            model_scale,
        }
    }

    /// Ranges used by [`AsteroidSpawner::spawn`]
    pub const fn ranges(&self) -> &SpawnRanges {
        &self.ranges
    }

    /// Replace the sampling ranges; later respawns reuse them
    pub fn set_ranges(&mut self, ranges: SpawnRanges) {
        self.ranges = ranges;
    }

    /// Box dimensions shared by every asteroid
    pub const fn collider_dimensions(&self) -> Vec3 {
        self.collider_dimensions
    }

    /// Model scale of every asteroid transform
    pub const fn model_scale(&self) -> f32 {
        self.model_scale
    }

    /// Sample a complete asteroid: position, direction, speed and category
    pub fn spawn(&mut self, materials: &SceneMaterials) -> Asteroid {
        let position = self.sample_position();
        let direction = self.sample_direction();
        let speed = sample_between(&mut self.rng, self.ranges.speed_min, self.ranges.speed_max);
        let category = AsteroidCategory::roll(&mut self.rng);
        self.build(position, direction, speed, category, materials)
    }

    /// Build an asteroid at a chosen position with chosen motion
    pub fn build(
        &self,
        position: Vec3,
        direction: Vec3,
        speed: f32,
        category: AsteroidCategory,
        materials: &SceneMaterials,
    ) -> Asteroid {
        let body = Body::new(Mat4::placement(position, self.model_scale), direction, speed);
        Asteroid::new(body, self.collider_dimensions, category, materials)
    }

    /// Uniform point inside the spawn volume, each axis on its own range
    fn sample_position(&mut self) -> Vec3 {
        let (min, max) = (self.ranges.position_min, self.ranges.position_max);
        Vec3::new(
            sample_between(&mut self.rng, min.x, max.x),
            sample_between(&mut self.rng, min.y, max.y),
            sample_between(&mut self.rng, min.z, max.z),
        )
    }

    /// Each component uniform in [-1, 1], deliberately not normalised
    fn sample_direction(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        )
    }
}

/// Uniform sample between two bounds given in either order.
///
/// Falls back to the lower bound when the width is not a finite number,
/// since the uniform sampler panics on such ranges.
fn sample_between(rng: &mut StdRng, a: f32, b: f32) -> f32 {
    let (low, high) = (a.min(b), a.max(b));
    if low == high || !(high - low).is_finite() {
        low
    } else {
        rng.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asteroida_engine::render::MaterialId;
    use rand::SeedableRng;

    use crate::entity::Movable;

    fn materials() -> SceneMaterials {
        SceneMaterials {
            default: MaterialId(0),
            reflex: MaterialId(1),
            refract: MaterialId(2),
            projectile: MaterialId(3),
        }
    }

    fn spawner(ranges: SpawnRanges) -> AsteroidSpawner {
        AsteroidSpawner::new(StdRng::seed_from_u64(3), ranges, Vec3::new(0.5, 0.5, 0.5), 0.001)
    }

    #[test]
    fn test_spawn_stays_in_ranges() {
        let ranges = SpawnRanges::new(
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(1.0, 0.5, 3.0),
            150.0,
            180.0,
        );
        let mut spawner = spawner(ranges);

        for _ in 0..200 {
            let asteroid = spawner.spawn(&materials());
            let position = asteroid.position();
            assert!((-1.0 - 1e-4..=1.0 + 1e-4).contains(&position.x), "{position:?}");
            assert!((0.0 - 1e-4..=0.5 + 1e-4).contains(&position.y), "{position:?}");
            assert!((2.0 - 1e-4..=3.0 + 1e-4).contains(&position.z), "{position:?}");

            let speed = asteroid.body().speed();
            assert!((150.0..=180.0).contains(&speed));

            let direction = asteroid.body().direction();
            assert!(direction.iter().all(|c| (-1.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_degenerate_ranges_are_exact() {
        let ranges = SpawnRanges::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.5, 0.5, 0.5), 0.0, 0.0);
        let mut spawner = spawner(ranges);
        let asteroid = spawner.spawn(&materials());

        assert_eq!(asteroid.body().speed(), 0.0);
        assert!((asteroid.position() - Vec3::new(0.5, 0.5, 0.5)).magnitude() < 1e-5);
    }

    #[test]
    fn test_unbounded_widths_fall_back_to_lower_bound() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(sample_between(&mut rng, -3.0e38, 3.0e38), -3.0e38);
        assert_eq!(sample_between(&mut rng, 0.0, f32::NEG_INFINITY), f32::NEG_INFINITY);

        let ranges = SpawnRanges::new(
            Vec3::new(-3.0e38, 0.0, 0.0),
            Vec3::new(3.0e38, 0.0, 0.0),
            f32::NEG_INFINITY,
            0.0,
        );
        let asteroid = spawner(ranges).spawn(&materials());
        assert_eq!(asteroid.body().speed(), f32::NEG_INFINITY);
    }

    #[test]
    fn test_every_spawn_shares_collider_dimensions() {
        let ranges =
            SpawnRanges::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0), 1.0, 2.0);
        let mut spawner = spawner(ranges);

        for _ in 0..10 {
            let asteroid = spawner.spawn(&materials());
            assert_eq!(asteroid.collider().dimensions(), Vec3::new(0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn test_build_uses_model_scale() {
        let spawner = spawner(SpawnRanges::new(Vec3::zeros(), Vec3::zeros(), 0.0, 0.0));
        let asteroid = spawner.build(
            Vec3::new(0.25, 0.0, 0.0),
            Vec3::zeros(),
            0.0,
            AsteroidCategory::Reflex,
            &materials(),
        );

        let transform = asteroid.body().transform();
        assert!((transform.m11 - 0.001).abs() < 1e-9);
        assert!((transform.translation().x - 0.25).abs() < 1e-6);
        assert_eq!(asteroid.render().material(), MaterialId(1));
    }
}
