//! Primitive collision shapes and intersection algorithms
//!
//! Provides the 2D building blocks used by outline collision: axis-aligned
//! boxes for the cheap reject, triangles with a separating-axis overlap test,
//! and ear-clipping triangulation of simple polygons.

use crate::foundation::math::{Point2, Vec2};

/// Tolerance for "touching is not overlapping"
const OVERLAP_EPSILON: f32 = 1e-4;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point2,
    /// Maximum corner
    pub max: Point2,
}

impl Aabb {
    /// Smallest box containing every point, or `None` for an empty slice
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    /// Whether the boxes share interior area (shared edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Triangle vertices in world space
    pub v0: Point2,
    /// Second vertex
    pub v1: Point2,
    /// Third vertex
    pub v2: Point2,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Point2, v1: Point2, v2: Point2) -> Self {
        Self { v0, v1, v2 }
    }

    fn vertices(&self) -> [Point2; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Twice the signed area (positive when counter-clockwise)
    pub fn signed_area2(&self) -> f32 {
        cross(self.v1 - self.v0, self.v2 - self.v0)
    }

    /// Separating-axis test. Triangles that only touch along an edge or at a
    /// vertex are reported as disjoint.
    pub fn overlaps(&self, other: &Triangle) -> bool {
        let a = self.vertices();
        let b = other.vertices();
        for tri in [&a, &b] {
            for i in 0..3 {
                let edge = tri[(i + 1) % 3] - tri[i];
                let axis = Vec2::new(-edge.y, edge.x);
                if axis.norm_squared() <= f32::EPSILON {
                    continue;
                }
                let (min_a, max_a) = project(&a, &axis);
                let (min_b, max_b) = project(&b, &axis);
                let scale = axis.norm();
                if max_a <= min_b + OVERLAP_EPSILON * scale || max_b <= min_a + OVERLAP_EPSILON * scale {
                    return false;
                }
            }
        }
        true
    }

    /// Whether `p` lies inside or on the boundary of a counter-clockwise triangle
    fn contains_ccw(&self, p: &Point2) -> bool {
        cross(self.v1 - self.v0, p - self.v0) >= 0.0
            && cross(self.v2 - self.v1, p - self.v1) >= 0.0
            && cross(self.v0 - self.v2, p - self.v2) >= 0.0
    }
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

fn project(points: &[Point2; 3], axis: &Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        let d = p.coords.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Twice the signed area of a closed polygon (positive when counter-clockwise)
pub fn signed_area2(points: &[Point2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Ear-clipping triangulation of a simple polygon.
///
/// Accepts either winding. Degenerate input (fewer than three distinct
/// corners, or zero area) yields no triangles.
pub fn triangulate(points: &[Point2]) -> Vec<Triangle> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if ring.last() != Some(p) {
            ring.push(*p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 || signed_area2(&ring).abs() <= f32::EPSILON {
        return Vec::new();
    }
    if signed_area2(&ring) < 0.0 {
        ring.reverse();
    }

    let mut triangles = Vec::with_capacity(ring.len() - 2);
    let mut idx: Vec<usize> = (0..ring.len()).collect();
    let mut guard = 0;

    while idx.len() > 3 {
        let n = idx.len();
        let mut clipped = false;
        for i in 0..n {
            let prev = ring[idx[(i + n - 1) % n]];
            let curr = ring[idx[i]];
            let next = ring[idx[(i + 1) % n]];
            let candidate = Triangle::new(prev, curr, next);
            let area = candidate.signed_area2();

            // Collinear corner: drop it without emitting a triangle
            if area.abs() <= f32::EPSILON {
                idx.remove(i);
                clipped = true;
                break;
            }
            if area < 0.0 {
                continue;
            }
            let blocked = idx.iter().any(|&j| {
                let p = ring[j];
                p != prev && p != curr && p != next && candidate.contains_ccw(&p)
            });
            if !blocked {
                triangles.push(candidate);
                idx.remove(i);
                clipped = true;
                break;
            }
        }

        guard += 1;
        if !clipped || guard > ring.len() * ring.len() {
            // Numerically awkward input: finish with a fan
            log::trace!("ear clipping stalled with {} corners left, using fan", idx.len());
            for k in 1..idx.len() - 1 {
                triangles.push(Triangle::new(ring[idx[0]], ring[idx[k]], ring[idx[k + 1]]));
            }
            return triangles;
        }
    }

    let last = Triangle::new(ring[idx[0]], ring[idx[1]], ring[idx[2]]);
    if last.signed_area2().abs() > f32::EPSILON {
        triangles.push(last);
    }
    triangles
}
