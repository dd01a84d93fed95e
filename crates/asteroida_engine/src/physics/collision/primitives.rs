//! Primitive collision shapes and containment tests
//!
//! Provides axis-aligned boxes: a plain [`Aabb`] for bounds queries and a
//! [`BoxCollider`] that is re-centred on a moving entity for every test.

use crate::foundation::math::Vec3;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates a box centered at `center` with the given full dimensions
    pub fn from_center(center: Vec3, dimensions: Vec3) -> Self {
        let half = dimensions * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box enclosing every point. `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bounds = points.fold(Self::new(first, first), |bounds, point| Self {
            min: bounds.min.inf(&point),
            max: bounds.max.sup(&point),
        });
        Some(bounds)
    }

    /// Size of the box along each axis
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// True iff `point` lies strictly inside on all three axes.
    /// A point on a face is outside.
    pub fn contains_strict(&self, point: &Vec3) -> bool {
        point.x > self.min.x
            && point.y > self.min.y
            && point.z > self.min.z
            && point.x < self.max.x
            && point.y < self.max.y
            && point.z < self.max.z
    }
}

/// Box collider attached to a moving entity.
///
/// The box is rebuilt around the entity position on every test because the
/// entity may have moved since the last one. The corners of the last test are
/// kept for debugging overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxCollider {
    dimensions: Vec3,
    minus_corner: Vec3,
    plus_corner: Vec3,
}

impl BoxCollider {
    /// Creates a collider with the given full box dimensions
    pub fn new(dimensions: Vec3) -> Self {
        Self {
            dimensions,
            minus_corner: Vec3::zeros(),
            plus_corner: Vec3::zeros(),
        }
    }

    /// Test whether `point` is strictly inside the box centered at `center`
    pub fn is_colliding(&mut self, center: &Vec3, point: &Vec3) -> bool {
        let bounds = Aabb::from_center(*center, self.dimensions);
        self.minus_corner = bounds.min;
        self.plus_corner = bounds.max;
        bounds.contains_strict(point)
    }

    /// Full box dimensions
    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    /// Minimum corner computed by the last test
    pub fn minus_corner(&self) -> Vec3 {
        self.minus_corner
    }

    /// Maximum corner computed by the last test
    pub fn plus_corner(&self) -> Vec3 {
        self.plus_corner
    }
}
