//! Math utilities and types
//!
//! Provides the 2D math types used by the simulation: points, vectors,
//! rigid transforms and the [`Pose`] every simulated entity carries.

pub use nalgebra::{Isometry2, Point2 as NPoint2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = NPoint2<f32>;

/// Rigid 2D transform (rotation followed by translation)
pub type Iso2 = Isometry2<f32>;

/// Speeds below this are snapped to zero by [`Pose::apply_friction`]
pub const SPEED_EPSILON: f32 = 0.01;

/// Position, facing and motion of an entity.
///
/// Heading (where the entity points) and direction (where it travels) are
/// independent: a ship can coast sideways while facing forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in field coordinates
    pub position: Point2,

    /// Facing, in radians
    pub heading: f32,

    /// Scalar speed in field units per tick
    pub speed: f32,

    /// Direction of travel, in radians
    pub direction: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
            heading: 0.0,
            speed: 0.0,
            direction: 0.0,
        }
    }
}

impl Pose {
    /// Create a stationary pose at the given position and heading
    pub fn at(x: f32, y: f32, heading: f32) -> Self {
        Self {
            position: Point2::new(x, y),
            heading,
            ..Self::default()
        }
    }

    /// Builder: set speed and direction of travel
    #[must_use]
    pub fn moving(mut self, speed: f32, direction: f32) -> Self {
        self.speed = speed;
        self.direction = direction;
        self
    }

    /// Velocity vector derived from speed and direction
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(
            self.speed * self.direction.cos(),
            self.speed * self.direction.sin(),
        )
    }

    /// Replace speed and direction from a velocity vector
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.speed = velocity.norm();
        self.direction = velocity.y.atan2(velocity.x);
    }

    /// Move by one tick of velocity
    pub fn translate(&mut self) {
        self.position += self.velocity();
    }

    /// Add `amount` of velocity along the current heading
    pub fn accelerate(&mut self, amount: f32) {
        let push = Vec2::new(amount * self.heading.cos(), amount * self.heading.sin());
        self.set_velocity(self.velocity() + push);
    }

    /// Turn the heading by `delta` radians, keeping it in `[0, 2π)`
    pub fn rotate(&mut self, delta: f32) {
        self.heading = (self.heading + delta).rem_euclid(std::f32::consts::TAU);
    }

    /// Multiplicative speed decay; residual drift below [`SPEED_EPSILON`] is dropped
    pub fn apply_friction(&mut self, factor: f32) {
        self.speed *= factor;
        if self.speed.abs() < SPEED_EPSILON {
            self.speed = 0.0;
        }
    }

    /// Local-to-world transform: rotate by heading, then translate to position
    pub fn isometry(&self) -> Iso2 {
        Iso2::new(self.position.coords, self.heading)
    }

    /// Transform a local-space point into world space
    pub fn transform_point(&self, local: &Point2) -> Point2 {
        self.isometry().transform_point(local)
    }
}

/// Rectangular playing field with toroidal topology
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Width of the field
    pub width: f32,

    /// Height of the field
    pub height: f32,
}

impl Field {
    /// Create a field of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square field
    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    /// Centre of the field
    pub fn center(&self) -> Point2 {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position that left `[0, width) x [0, height)` back in from the
    /// opposite edge. Velocity is not touched.
    pub fn wrap(&self, pose: &mut Pose) {
        pose.position.x = wrap_axis(pose.position.x, self.width);
        pose.position.y = wrap_axis(pose.position.y, self.height);
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if (0.0..extent).contains(&value) {
        value
    } else {
        // rem_euclid can round up to `extent` for tiny negatives
        let wrapped = value.rem_euclid(extent);
        if wrapped >= extent { 0.0 } else { wrapped }
    }
}
