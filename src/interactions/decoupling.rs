use log::trace;

use crate::interactions::{Collision, ContactGeometry, ContactSide};
use crate::models::{PhysicalObject, RigidBody};
use crate::utils::math_helpers::{
    dot_product, negate_vector, normalize_vector, project_vector, scale_vector, subtract_vectors, vector_magnitude,
};

/// Direction in which one side would back out of the contact: its negated contact velocity projected onto the MTV
fn resolution_direction(body: Option<&RigidBody>, side: &ContactSide, normal: (f64, f64, f64)) -> (f64, f64, f64) {
    let Some(body) = body else {
        return (0.0, 0.0, 0.0);
    };
    let velocity = if vector_magnitude(body.angular_velocity) > 0.0 {
        side.total_velocity(body)
    } else {
        body.velocity
    };
    project_vector(negate_vector(velocity), normal)
}

/// Share of the overlap each side absorbs.
///
/// Body-less and immovable sides, and sides with nothing to back out along, take none of it.
/// Otherwise side `i` takes `invMass_i / (invMass_1 + invMass_2)`, so the lighter object moves further.
pub fn decoupling_weights(
    body1: Option<&RigidBody>,
    body2: Option<&RigidBody>,
    resolution1: (f64, f64, f64),
    resolution2: (f64, f64, f64),
) -> (f64, f64) {
    let (Some(body1), Some(body2)) = (body1, body2) else {
        return if body1.is_none() { (0.0, 1.0) } else { (1.0, 0.0) };
    };
    if body1.inverse_mass == 0.0 || vector_magnitude(resolution1) == 0.0 {
        return (0.0, 1.0);
    }
    if body2.inverse_mass == 0.0 || vector_magnitude(resolution2) == 0.0 {
        return (1.0, 0.0);
    }
    let total = body1.inverse_mass + body2.inverse_mass;
    (body1.inverse_mass / total, body2.inverse_mass / total)
}

/// Pushes two penetrating objects apart along the MTV by the overlap, without touching velocities.
///
/// Each body's frame is translated directly. Returns the translations applied to object 1 and object 2.
pub fn decouple_collision(
    obj1: &mut PhysicalObject,
    obj2: &mut PhysicalObject,
    collision: &Collision,
    geometry: &ContactGeometry,
) -> ((f64, f64, f64), (f64, f64, f64)) {
    let normal = geometry.normal;
    let mut resolution1 = resolution_direction(obj1.body(), &geometry.side1, normal);
    let mut resolution2 = resolution_direction(obj2.body(), &geometry.side2, normal);

    let (weight1, weight2) = decoupling_weights(obj1.body(), obj2.body(), resolution1, resolution2);
    resolution1 = scale_vector(normalize_vector(resolution1), collision.overlap * weight1);
    resolution2 = scale_vector(normalize_vector(resolution2), collision.overlap * weight2);

    // Both pushed the same way: flip whichever one points into the other object
    if dot_product(resolution1, resolution2) > 0.0 {
        let displacement = subtract_vectors(collision.obj1_frame.position, collision.obj2_frame.position);
        if dot_product(resolution1, displacement) < 0.0 {
            resolution1 = negate_vector(resolution1);
        } else if dot_product(resolution2, displacement) > 0.0 {
            resolution2 = negate_vector(resolution2);
        }
    }

    if let Some(body) = obj1.body_mut() {
        body.frame.translate(resolution1);
    }
    if let Some(body) = obj2.body_mut() {
        body.frame.translate(resolution2);
    }

    trace!(
        "Decoupled objects {} and {}: {:?} / {:?}",
        collision.obj1, collision.obj2, resolution1, resolution2
    );
    (resolution1, resolution2)
}
