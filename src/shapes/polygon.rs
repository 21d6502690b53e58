use crate::common::color::Rgb;
use crate::math::vec2::Vec2;

/// A convex polygon defined by its vertices in counter-clockwise order,
/// carrying the kinematic state of the shape: a linear velocity, a rotation
/// speed, the cumulative rotation angle, and a display color.
///
/// The centroid is cached and maintained transactionally: `translate` and
/// `rotate` update the vertices and the cache together, so the cache never
/// diverges from the vertex positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    center: Vec2,
    velocity: Vec2,
    rotation_speed: f64,
    rotation: f64,
    color: Rgb,
}

impl Polygon {
    /// Creates a new polygon from a vertex list, taking ownership of it.
    /// The initial centroid is derived from the vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>, velocity: Vec2, rotation_speed: f64, color: Rgb) -> Self {
        assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices."
        );
        let center = centroid_of(&vertices);
        Polygon {
            vertices,
            center,
            velocity,
            rotation_speed,
            rotation: 0.0,
            color,
        }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Adds `delta` to every vertex and to the cached centroid.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.center += delta;
    }

    /// Rotates every vertex about `pivot` by `angle` (radians, counter-clockwise
    /// positive). The cached centroid is rotated along with the vertices.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        for v in &mut self.vertices {
            *v = (*v - pivot).rotate(angle) + pivot;
        }
        self.center = (self.center - pivot).rotate(angle) + pivot;
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    /// Always non-negative regardless of winding.
    pub fn area(&self) -> f64 {
        0.5 * signed_area_twice(&self.vertices).abs()
    }

    /// Re-derives the centroid from the current vertex positions using the
    /// shoelace-weighted formula. Falls back to the vertex average for
    /// degenerate (zero-area) polygons.
    pub fn centroid(&self) -> Vec2 {
        centroid_of(&self.vertices)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Overwrites the cached centroid. The caller is responsible for keeping
    /// the cache consistent with the vertex positions; prefer `translate`,
    /// which moves both together.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// The cumulative rotation angle, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotates the polygon to the absolute angle `angle` by applying only the
    /// delta from the current cumulative rotation, pivoting about the cached
    /// centroid. Repeated calls with the same target angle are no-ops.
    pub fn set_rotation(&mut self, angle: f64) {
        let delta = angle - self.rotation;
        self.rotate(delta, self.center);
        self.rotation = angle;
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn set_rotation_speed(&mut self, rotation_speed: f64) {
        self.rotation_speed = rotation_speed;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }
}

/// Twice the signed area of the polygon (positive for counter-clockwise winding).
fn signed_area_twice(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        sum += vertices[i].cross(vertices[(i + 1) % n]);
    }
    sum
}

/// Shoelace-weighted centroid; distinct from the arithmetic vertex mean for
/// irregular vertex spacing. Degenerate polygons fall back to the mean.
fn centroid_of(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let area_twice = signed_area_twice(vertices);
    if area_twice.abs() < 1e-10 {
        let mut avg = Vec2::ZERO;
        for v in vertices {
            avg += *v;
        }
        return avg / (n as f64);
    }

    let mut centroid = Vec2::ZERO;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        centroid += (v1 + v2) * v1.cross(v2);
    }
    centroid / (3.0 * area_twice)
}
