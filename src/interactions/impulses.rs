use log::{trace, warn};

use crate::interactions::{Collision, ContactGeometry};
use crate::models::{PhysicalObject, RigidBody};
use crate::utils::math_helpers::{add_vectors, cross_product, dot_product, scale_vector, subtract_vectors};
use crate::utils::SimulationConfig;

/// Velocity of a contact point: `v + ω × r`, or zero for a body-less object
pub fn calculate_point_velocity(body: Option<&RigidBody>, radius: (f64, f64, f64)) -> (f64, f64, f64) {
    match body {
        Some(body) => add_vectors(body.velocity, cross_product(body.angular_velocity, radius)),
        None => (0.0, 0.0, 0.0),
    }
}

/// Combined restitution: the product of both sides, with body-less objects counting as `absent_body_restitution`
pub fn combined_restitution(body1: Option<&RigidBody>, body2: Option<&RigidBody>, config: &SimulationConfig) -> f64 {
    let restitution = |body: Option<&RigidBody>| {
        body.map_or(config.absent_body_restitution, |b| b.coefficient_of_restitution)
    };
    restitution(body1) * restitution(body2)
}

/// Rotational share of the impulse denominator for one side: `n · ((I⁻¹ (r × n)) × r)`.
///
/// Uses the inertia tensor rotated into world space. Zero for body-less, immovable or
/// singular-inertia sides.
fn angular_impulse_term(body: Option<&RigidBody>, radius: (f64, f64, f64), normal: (f64, f64, f64)) -> (f64, f64, f64) {
    let Some(body) = body.filter(|b| b.is_movable()) else {
        return (0.0, 0.0, 0.0);
    };
    let Some(inverse_inertia) = body.moment_of_inertia_in_world_space().inverse() else {
        return (0.0, 0.0, 0.0);
    };
    let angular = inverse_inertia.transform_vector(cross_product(radius, normal));
    cross_product(angular, radius)
}

/// Computes the normal collision impulse and accumulates it on both bodies.
///
/// Impulse magnitude is `-(1 + e) (v_rel · n) / (Σ invMass + n · Σ (I⁻¹ (r × n)) × r)`, applied along `+n`
/// to object 1 and `-n` to object 2 at their contact radii. Immovable and body-less sides are skipped.
///
/// # Arguments
/// * `points` - World-space contact points on object 1 and object 2.
///
/// # Returns
/// The impulse magnitude (0 when the denominator vanishes).
pub fn apply_collision_impulses(
    obj1: &mut PhysicalObject,
    obj2: &mut PhysicalObject,
    collision: &Collision,
    geometry: &ContactGeometry,
    points: &[(f64, f64, f64); 2],
    config: &SimulationConfig,
) -> f64 {
    let normal = geometry.normal;
    let e = combined_restitution(obj1.body(), obj2.body(), config);

    let radius1 = subtract_vectors(points[0], collision.obj1_frame.position);
    let radius2 = subtract_vectors(points[1], collision.obj2_frame.position);

    let relative_velocity = subtract_vectors(
        calculate_point_velocity(obj1.body(), radius1),
        calculate_point_velocity(obj2.body(), radius2),
    );
    let numerator = -(1.0 + e) * dot_product(relative_velocity, normal);

    let inverse_mass_sum: f64 = [obj1.body(), obj2.body()]
        .iter()
        .flatten()
        .map(|body| body.inverse_mass)
        .sum();
    let angular = add_vectors(
        angular_impulse_term(obj1.body(), radius1, normal),
        angular_impulse_term(obj2.body(), radius2, normal),
    );
    let denominator = inverse_mass_sum + dot_product(angular, normal);

    if denominator == 0.0 {
        warn!(
            "Zero impulse denominator between objects {} and {}, skipping impulse",
            collision.obj1, collision.obj2
        );
        return 0.0;
    }
    let impulse = numerator / denominator;
    let impulse_vector = scale_vector(normal, impulse);

    if let Some(body) = obj1.body_mut().filter(|b| b.is_movable()) {
        body.apply_impulse(impulse_vector, radius1);
    }
    if let Some(body) = obj2.body_mut().filter(|b| b.is_movable()) {
        body.apply_impulse(scale_vector(impulse_vector, -1.0), radius2);
    }

    trace!(
        "Impulse between objects {} and {}: {} (e = {})",
        collision.obj1, collision.obj2, impulse, e
    );
    impulse
}
