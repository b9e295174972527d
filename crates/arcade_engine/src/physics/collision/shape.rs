//! High-level collision shape abstractions
//!
//! Outlines are stored in model space and transformed to world space
//! on demand: rotate by the entity's heading, then translate to its
//! position.

use std::f32::consts::TAU;

use super::primitives::{triangulate, Aabb, Triangle};
use crate::foundation::math::{Point2, Pose};

/// Vertices used to flatten an ellipse into a polygon
pub const ELLIPSE_SEGMENTS: usize = 16;

/// Collision outline (stored in MODEL SPACE)
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Closed simple polygon
    Polygon(Vec<Point2>),
    /// Axis-aligned ellipse in local space
    Ellipse {
        /// Local centre
        center: Point2,
        /// Half-width
        radius_x: f32,
        /// Half-height
        radius_y: f32,
    },
    /// Open polyline. Drawn but encloses no area, so it never collides.
    Path(Vec<Point2>),
}

impl Outline {
    /// Polygon from `(x, y)` pairs
    pub fn polygon(points: &[(f32, f32)]) -> Self {
        Self::Polygon(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Open path from `(x, y)` pairs
    pub fn path(points: &[(f32, f32)]) -> Self {
        Self::Path(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Circle centred on the local origin
    pub fn circle(radius: f32) -> Self {
        Self::Ellipse {
            center: Point2::origin(),
            radius_x: radius,
            radius_y: radius,
        }
    }

    /// Rectangle centred on the local origin
    pub fn rectangle(width: f32, height: f32) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::polygon(&[(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)])
    }

    /// Uniformly scale the outline about the local origin
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |points: &[Point2]| points.iter().map(|p| Point2::from(p.coords * factor)).collect();
        match self {
            Self::Polygon(points) => Self::Polygon(scale(points)),
            Self::Path(points) => Self::Path(scale(points)),
            Self::Ellipse { center, radius_x, radius_y } => Self::Ellipse {
                center: Point2::from(center.coords * factor),
                radius_x: radius_x * factor,
                radius_y: radius_y * factor,
            },
        }
    }

    /// Whether the outline encloses area
    pub fn is_closed(&self) -> bool {
        !matches!(self, Self::Path(_))
    }

    /// Local-space vertices (ellipses flattened)
    pub fn local_points(&self) -> Vec<Point2> {
        match self {
            Self::Polygon(points) | Self::Path(points) => points.clone(),
            Self::Ellipse { center, radius_x, radius_y } => (0..ELLIPSE_SEGMENTS)
                .map(|i| {
                    let t = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
                    Point2::new(center.x + radius_x * t.cos(), center.y + radius_y * t.sin())
                })
                .collect(),
        }
    }

    /// Transform this outline to world space for rendering and collision tests
    pub fn to_world_space(&self, pose: &Pose) -> WorldSpaceShape {
        let iso = pose.isometry();
        let points: Vec<Point2> = self
            .local_points()
            .iter()
            .map(|p| iso.transform_point(p))
            .collect();
        let triangles = if self.is_closed() {
            triangulate(&points)
        } else {
            Vec::new()
        };
        let bounds = Aabb::from_points(&points);
        WorldSpaceShape {
            points,
            closed: self.is_closed(),
            triangles,
            bounds,
        }
    }
}

/// World-space outline (temporary, for testing and drawing)
#[derive(Debug, Clone)]
pub struct WorldSpaceShape {
    /// Outline vertices in world space
    pub points: Vec<Point2>,
    /// Whether the last vertex joins back to the first
    pub closed: bool,
    triangles: Vec<Triangle>,
    bounds: Option<Aabb>,
}

impl WorldSpaceShape {
    /// Bounding box, `None` for an empty outline
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// Whether the shape encloses any area at all
    pub fn has_area(&self) -> bool {
        !self.triangles.is_empty()
    }

    /// Test if the two shapes share interior area. Boundary contact alone
    /// does not count.
    pub fn intersects(&self, other: &WorldSpaceShape) -> bool {
        let (Some(a), Some(b)) = (self.bounds, other.bounds) else {
            return false;
        };
        if !a.overlaps(&b) {
            return false;
        }
        self.triangles
            .iter()
            .any(|ta| other.triangles.iter().any(|tb| ta.overlaps(tb)))
    }
}
