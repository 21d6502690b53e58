use crate::common::color::Rgb;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::info::BodyInfo;
use crate::shapes::polygon::Polygon;

/// A rigid body owning exactly one convex polygon.
///
/// Forces and impulses accumulate between ticks and are consumed by the next
/// `tick`; persistent forces such as gravity must be re-added every frame.
/// An infinite mass (`f64::INFINITY`) models an immovable body: its cached
/// inverse mass is exactly zero, so force and impulse contributions vanish
/// without going through an `inf * 0` evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    poly: Polygon,

    mass: f64,
    inv_mass: f64,

    // Accumulators, reset by every tick
    force: Vec2,
    impulse: Vec2,

    // Tombstone: excluded from handlers, pruned at the next scene tick boundary
    removed: bool,

    info: BodyInfo,
}

impl Body {
    /// Creates a body from a vertex list with no game info attached.
    ///
    /// Panics if `mass` is not positive (infinite mass is allowed) or if the
    /// shape has fewer than 3 vertices.
    pub fn new(shape: Vec<Vec2>, mass: f64, color: Rgb) -> Self {
        Self::new_with_info(shape, mass, color, BodyInfo::None)
    }

    /// Creates a body from a vertex list, taking ownership of the shape.
    ///
    /// Panics if `mass` is not positive (infinite mass is allowed) or if the
    /// shape has fewer than 3 vertices.
    pub fn new_with_info(shape: Vec<Vec2>, mass: f64, color: Rgb, info: BodyInfo) -> Self {
        assert!(mass > 0.0, "Body mass must be positive");
        let inv_mass = if mass.is_finite() { 1.0 / mass } else { 0.0 };
        Body {
            poly: Polygon::new(shape, Vec2::ZERO, 0.0, color),
            mass,
            inv_mass,
            force: Vec2::ZERO,
            impulse: Vec2::ZERO,
            removed: false,
            info,
        }
    }

    /// The current world-space vertex positions, for collision queries and
    /// renderers. Read-only.
    pub fn shape(&self) -> &[Vec2] {
        self.poly.vertices()
    }

    pub fn centroid(&self) -> Vec2 {
        self.poly.center()
    }

    /// Moves the body so its centroid lands on `pos`, translating the
    /// polygon's vertices and centroid cache together.
    pub fn set_centroid(&mut self, pos: Vec2) {
        let translation = pos - self.poly.center();
        self.poly.translate(translation);
    }

    pub fn velocity(&self) -> Vec2 {
        self.poly.velocity()
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.poly.set_velocity(velocity);
    }

    /// The cumulative rotation angle, in radians.
    pub fn rotation(&self) -> f64 {
        self.poly.rotation()
    }

    /// Rotates the polygon to the absolute angle `angle` about its centroid.
    pub fn set_rotation(&mut self, angle: f64) {
        self.poly.set_rotation(angle);
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// 1 / mass, or 0.0 for an infinite-mass body.
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn info(&self) -> &BodyInfo {
        &self.info
    }

    pub fn color(&self) -> Rgb {
        self.poly.color()
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.poly.set_color(color);
    }

    /// Accumulates a continuous force, applied over `dt` by the next tick.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Accumulates an instantaneous impulse, applied in full by the next tick.
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }

    pub(crate) fn force(&self) -> Vec2 {
        self.force
    }

    pub(crate) fn impulse(&self) -> Vec2 {
        self.impulse
    }

    pub(crate) fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
    }

    /// Advances the body by one simulation step, consuming the accumulated
    /// force and impulse. See `integration::integrator`.
    pub fn tick(&mut self, dt: f64) {
        integrator::integrate(self, dt);
    }

    /// Marks the body for removal. It stays in place until the owning scene
    /// prunes it at the next tick boundary.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Zeroes the pending force and impulse without integrating. Used to
    /// cancel accumulated gravity when a body rests on a surface.
    pub fn reset(&mut self) {
        self.clear_accumulators();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn square_at(center: Vec2, half: f64) -> Vec<Vec2> {
        vec![
            center + Vec2::new(-half, -half),
            center + Vec2::new(half, -half),
            center + Vec2::new(half, half),
            center + Vec2::new(-half, half),
        ]
    }

    #[test]
    fn test_body_new() {
        let body = Body::new(square_at(Vec2::new(2.0, 3.0), 0.5), 4.0, Rgb::default());
        assert_eq!(body.mass(), 4.0);
        assert!((body.inv_mass() - 0.25).abs() < EPSILON);
        assert!((body.centroid().x - 2.0).abs() < EPSILON);
        assert!((body.centroid().y - 3.0).abs() < EPSILON);
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert!(!body.is_removed());
        assert_eq!(*body.info(), BodyInfo::None);
    }

    #[test]
    fn test_body_infinite_mass() {
        let body = Body::new(square_at(Vec2::ZERO, 1.0), f64::INFINITY, Rgb::default());
        assert!(body.mass().is_infinite());
        assert_eq!(body.inv_mass(), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_body_new_zero_mass_panics() {
        Body::new(square_at(Vec2::ZERO, 1.0), 0.0, Rgb::default());
    }

    #[test]
    #[should_panic]
    fn test_body_new_negative_mass_panics() {
        Body::new(square_at(Vec2::ZERO, 1.0), -1.0, Rgb::default());
    }

    #[test]
    fn test_body_set_centroid_translates_vertices() {
        let mut body = Body::new(square_at(Vec2::ZERO, 0.5), 1.0, Rgb::default());
        body.set_centroid(Vec2::new(5.0, -1.0));
        assert!((body.centroid().x - 5.0).abs() < EPSILON);
        assert!((body.centroid().y - -1.0).abs() < EPSILON);
        // Vertices moved by the same translation
        assert!((body.shape()[0].x - 4.5).abs() < EPSILON);
        assert!((body.shape()[0].y - -1.5).abs() < EPSILON);
    }

    #[test]
    fn test_body_force_and_impulse_accumulate() {
        let mut body = Body::new(square_at(Vec2::ZERO, 0.5), 1.0, Rgb::default());
        body.add_force(Vec2::new(1.0, 0.0));
        body.add_force(Vec2::new(0.5, 2.0));
        body.add_impulse(Vec2::new(0.0, -1.0));
        body.add_impulse(Vec2::new(3.0, -1.0));
        assert_eq!(body.force(), Vec2::new(1.5, 2.0));
        assert_eq!(body.impulse(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_body_reset_clears_accumulators() {
        let mut body = Body::new(square_at(Vec2::ZERO, 0.5), 1.0, Rgb::default());
        body.add_force(Vec2::new(0.0, -98.0));
        body.add_impulse(Vec2::new(1.0, 0.0));
        body.reset();
        assert_eq!(body.force(), Vec2::ZERO);
        assert_eq!(body.impulse(), Vec2::ZERO);
        // Reset does not integrate
        assert_eq!(body.centroid(), Vec2::ZERO);
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_body_remove_is_a_tombstone() {
        let mut body = Body::new(square_at(Vec2::ZERO, 0.5), 1.0, Rgb::default());
        body.remove();
        assert!(body.is_removed());
        // Still usable until pruned
        assert_eq!(body.shape().len(), 4);
    }

    #[test]
    fn test_body_rotation_delegates_to_polygon() {
        let mut body = Body::new(square_at(Vec2::ZERO, 0.5), 1.0, Rgb::default());
        body.set_rotation(std::f64::consts::PI);
        assert!((body.rotation() - std::f64::consts::PI).abs() < EPSILON);
        // Centroid pivot keeps the centroid in place
        assert!(body.centroid().magnitude() < EPSILON);
    }
}
