use crate::objects::body::Body;

/// Integrates the body's state forward by `dt`, consuming its accumulated
/// impulse and force.
///
/// The displacement uses the average of the old and new velocity, so a
/// constant force produces the same displacement as exact integration over
/// the step (0.5 * a * dt^2 from rest), unlike naive Euler which is biased
/// by the order of the velocity and position updates.
///
/// Infinite-mass bodies have an inverse mass of exactly zero, so the force
/// and impulse terms vanish; the body still advances by its own velocity,
/// which lets kinematically driven bodies (moving platforms) work.
pub fn integrate(body: &mut Body, dt: f64) {
    let v_initial = body.velocity();

    // Velocity change from the impulse (applied in full) and from the force
    // (applied over dt).
    let v_impulse = body.impulse() * body.inv_mass();
    let v_force = body.force() * body.inv_mass() * dt;
    let v_new = v_initial + v_impulse + v_force;

    // Trapezoidal average for the displacement over this step.
    let v_avg = (v_initial + v_new) * 0.5;
    body.set_centroid(body.centroid() + v_avg * dt);

    body.set_velocity(v_new);
    body.clear_accumulators();
}
