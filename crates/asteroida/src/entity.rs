//! Game entities: asteroids and projectiles
//!
//! Each entity owns exactly one transform matrix; the render node only ever
//! receives copies of it when the scene is drawn.

use asteroida_engine::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use asteroida_engine::physics::BoxCollider;
use asteroida_engine::render::{BackendResult, MaterialId, MeshHandle, NodeHandle, RenderBackend};
use rand::Rng;

/// Asteroid category. Decides the rendered material and the score value,
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidCategory {
    /// Plain rock, 6 in 8 spawns
    Default,
    /// Mirror-like rock, 1 in 8 spawns
    Reflex,
    /// Glass-like rock, 1 in 8 spawns
    Refract,
}

impl AsteroidCategory {
    /// Points awarded for destroying an asteroid of this category
    pub const fn points(self) -> u32 {
        match self {
            Self::Default => 100,
            Self::Reflex => 200,
            Self::Refract => 250,
        }
    }

    /// Roll a category: 1-of-8 Reflex, 1-of-8 Refract, otherwise Default
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(1..=8) {
            1 => Self::Reflex,
            2 => Self::Refract,
            _ => Self::Default,
        }
    }
}

/// Materials the scene assigns to its entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneMaterials {
    /// Shading for default asteroids
    pub default: MaterialId,
    /// Shading for reflective asteroids
    pub reflex: MaterialId,
    /// Shading for refractive asteroids
    pub refract: MaterialId,
    /// Shading for projectiles
    pub projectile: MaterialId,
}

impl SceneMaterials {
    /// Material used to draw an asteroid category
    pub const fn for_category(&self, category: AsteroidCategory) -> MaterialId {
        match category {
            AsteroidCategory::Default => self.default,
            AsteroidCategory::Reflex => self.reflex,
            AsteroidCategory::Refract => self.refract,
        }
    }
}

/// Transform plus straight-line motion.
///
/// `direction` is used as given, without normalisation, so the real
/// displacement per tick scales with its length. `speed` is in the local
/// (scaled) units of the transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    transform: Mat4,
    direction: Vec3,
    speed: f32,
}

impl Body {
    /// Create a body
    pub fn new(transform: Mat4, direction: Vec3, speed: f32) -> Self {
        Self {
            transform,
            direction,
            speed,
        }
    }

    /// Current world transform
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Movement direction as sampled
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Scalar speed
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

/// Shared motion behaviour of asteroids and projectiles
pub trait Movable {
    /// The entity's body
    fn body(&self) -> &Body;

    /// The entity's body, mutably
    fn body_mut(&mut self) -> &mut Body;

    /// Translate along the movement direction by `speed * delta_time`
    fn advance(&mut self, delta_time: f32) {
        let body = self.body_mut();
        let offset = body.direction * (body.speed * delta_time);
        body.transform = body.transform.translated_local(&offset);
    }

    /// True iff the distance from the world origin exceeds `radius`
    fn is_too_far_from_center(&self, radius: f32) -> bool {
        utils::distance_from_origin(&self.position()) > radius
    }

    /// World position (translation of the transform)
    fn position(&self) -> Vec3 {
        self.body().transform.translation()
    }
}

/// Lazily created render node plus the material it is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSlot {
    node: Option<NodeHandle>,
    material: MaterialId,
}

impl RenderSlot {
    /// Slot without a node yet
    pub const fn new(material: MaterialId) -> Self {
        Self { node: None, material }
    }

    /// Material resolved at spawn time
    pub const fn material(&self) -> MaterialId {
        self.material
    }

    /// Node handle, once the entity has been drawn
    pub const fn node(&self) -> Option<NodeHandle> {
        self.node
    }

    /// Push the current transform to the backend and draw the node,
    /// creating it on first use
    pub fn draw<B: RenderBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        mesh: MeshHandle,
        transform: &Mat4,
    ) -> BackendResult<()> {
        let node = match self.node {
            Some(node) => {
                backend.set_transform(node, transform)?;
                node
            }
            None => {
                let node = backend.create_node(transform, mesh, self.material)?;
                self.node = Some(node);
                node
            }
        };
        backend.draw_node(node)
    }
}

/// An asteroid drifting away from the center
#[derive(Debug, Clone)]
pub struct Asteroid {
    body: Body,
    collider: BoxCollider,
    category: AsteroidCategory,
    render: RenderSlot,
}

impl Asteroid {
    /// Create an asteroid. The material is resolved from the category here
    /// and never again.
    pub fn new(
        body: Body,
        collider_dimensions: Vec3,
        category: AsteroidCategory,
        materials: &SceneMaterials,
    ) -> Self {
        Self {
            body,
            collider: BoxCollider::new(collider_dimensions),
            category,
            render: RenderSlot::new(materials.for_category(category)),
        }
    }

    /// Whether `point` is strictly inside this asteroid's box
    pub fn is_colliding(&mut self, point: &Vec3) -> bool {
        let center = self.position();
        self.collider.is_colliding(&center, point)
    }

    /// Category rolled at spawn
    pub const fn category(&self) -> AsteroidCategory {
        self.category
    }

    /// Points this asteroid is worth
    pub const fn points(&self) -> u32 {
        self.category.points()
    }

    /// Collider used for hit tests
    pub const fn collider(&self) -> &BoxCollider {
        &self.collider
    }

    /// Render state
    pub const fn render(&self) -> &RenderSlot {
        &self.render
    }

    pub(crate) fn render_mut(&mut self) -> &mut RenderSlot {
        &mut self.render
    }
}

impl Movable for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// A projectile. It has no collider; its position is tested as a point
/// against asteroid boxes.
#[derive(Debug, Clone)]
pub struct Projectile {
    body: Body,
    render: RenderSlot,
}

impl Projectile {
    /// Create a projectile
    pub fn new(body: Body, material: MaterialId) -> Self {
        Self {
            body,
            render: RenderSlot::new(material),
        }
    }

    /// Render state
    pub const fn render(&self) -> &RenderSlot {
        &self.render
    }

    pub(crate) fn render_mut(&mut self) -> &mut RenderSlot {
        &mut self.render
    }
}

impl Movable for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
