use log::trace;

use crate::math::vec2::Vec2;
use crate::objects::body::Body;

use super::manifold::CollisionInfo;

// Edges shorter than this contribute no usable separating axis and are
// skipped rather than normalized.
const DEGENERATE_EDGE_EPSILON: f64 = 1e-12;

/// Projects every vertex of a shape onto a unit axis and returns the
/// (min, max) interval of the scalar projections.
fn project_onto_axis(shape: &[Vec2], unit_axis: Vec2) -> (f64, f64) {
    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;
    for vertex in shape {
        let projection = vertex.dot(unit_axis);
        min_proj = min_proj.min(projection);
        max_proj = max_proj.max(projection);
    }
    (min_proj, max_proj)
}

/// Runs one SAT pass using `shape1`'s edge perpendiculars as candidate axes.
///
/// Returns `None` as soon as a separating axis is found; otherwise returns
/// the smallest overlap across all candidate axes together with that axis.
/// Degenerate (zero-length) edges are skipped.
fn min_overlap_axis(shape1: &[Vec2], shape2: &[Vec2]) -> Option<(f64, Vec2)> {
    let n = shape1.len();
    let mut min_overlap = f64::INFINITY;
    let mut min_axis = Vec2::ZERO;

    for i in 0..n {
        let edge = shape1[i] - shape1[(i + 1) % n];
        let axis = edge.perpendicular();
        let length = axis.magnitude();
        if length < DEGENERATE_EDGE_EPSILON {
            continue;
        }
        let unit_axis = axis * (1.0 / length);

        let (min1, max1) = project_onto_axis(shape1, unit_axis);
        let (min2, max2) = project_onto_axis(shape2, unit_axis);

        let overlap = max1.min(max2) - min1.max(min2);
        if overlap < 0.0 {
            // A separating axis exists, the shapes cannot intersect.
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            min_axis = unit_axis;
        }
    }

    if min_overlap == f64::INFINITY {
        // Every edge was degenerate, no valid axis to report.
        return None;
    }
    Some((min_overlap, min_axis))
}

/// Separating-Axis-Theorem collision test between two bodies' convex
/// polygons.
///
/// Both shapes' edge perpendiculars are tried as candidate axes. If any axis
/// separates the projected intervals, the bodies do not collide. Otherwise
/// the reported axis is the axis of least penetration across both passes,
/// suitable for minimum-translation resolution.
///
/// O(edges * vertices) per pair with no broad-phase culling; callers with
/// more than a few dozen pairs need their own partitioning.
pub fn find_collision(body1: &Body, body2: &Body) -> CollisionInfo {
    let shape1 = body1.shape();
    let shape2 = body2.shape();

    let Some((overlap1, axis1)) = min_overlap_axis(shape1, shape2) else {
        return CollisionInfo::none();
    };
    let Some((overlap2, axis2)) = min_overlap_axis(shape2, shape1) else {
        return CollisionInfo::none();
    };

    let (overlap, axis) = if overlap1 < overlap2 {
        (overlap1, axis1)
    } else {
        (overlap2, axis2)
    };
    trace!("contact along {:?}, overlap {:.6}", axis, overlap);
    CollisionInfo {
        collided: true,
        axis,
    }
}
