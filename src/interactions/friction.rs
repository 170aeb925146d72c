use log::trace;

use crate::interactions::ContactGeometry;
use crate::models::{PhysicalObject, RigidBody};
use crate::utils::math_helpers::{
    add_vectors, dot_product, negate_vector, normalize_vector, project_vector, reject_vector, scale_vector,
    subtract_vectors, vector_magnitude,
};
use crate::utils::SimulationConfig;

/// Friction coefficients shared by the two surfaces of a contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionCoefficients {
    pub static_coefficient: f64,
    pub dynamic_coefficient: f64,
}

impl FrictionCoefficients {
    /// Averages both sides' coefficients, substituting `absent_body_friction` for body-less objects.
    pub fn combine(body1: Option<&RigidBody>, body2: Option<&RigidBody>, config: &SimulationConfig) -> Self {
        let average = |pick: fn(&RigidBody) -> f64| {
            let side = |body: Option<&RigidBody>| body.map_or(config.absent_body_friction, pick);
            (side(body1) + side(body2)) / 2.0
        };
        FrictionCoefficients {
            static_coefficient: average(|b| b.static_friction),
            dynamic_coefficient: average(|b| b.dynamic_friction),
        }
    }
}

fn velocity_of(body: Option<&RigidBody>) -> (f64, f64, f64) {
    body.map_or((0.0, 0.0, 0.0), |b| b.velocity)
}

fn angular_velocity_of(body: Option<&RigidBody>) -> (f64, f64, f64) {
    body.map_or((0.0, 0.0, 0.0), |b| b.angular_velocity)
}

/// Unit direction along the contact surface in which friction acts.
///
/// Taken from the relative velocity (object 2 minus object 1) with its normal component removed.
/// Without relative sliding it falls back to the tangential part of both bodies' previous net
/// force. Zero if neither gives a direction.
pub fn friction_tangent(body1: Option<&RigidBody>, body2: Option<&RigidBody>, normal: (f64, f64, f64)) -> (f64, f64, f64) {
    let relative_velocity = subtract_vectors(velocity_of(body2), velocity_of(body1));
    let tangent = normalize_vector(reject_vector(relative_velocity, normal));
    if vector_magnitude(tangent) > 0.0 {
        return tangent;
    }

    let previous_force = [body1, body2]
        .iter()
        .flatten()
        .fold((0.0, 0.0, 0.0), |sum, body| add_vectors(sum, body.previous_net_force));
    normalize_vector(reject_vector(previous_force, normal))
}

/// Applies Coulomb-style frictional impulses at each movable body's center.
///
/// The reaction is the normal part of the net impulse already accumulated on object 1, or on
/// object 2 when object 1 cannot translate. For each movable body, the impulse that fully cancels
/// the tangential relative velocity is applied if it stays within `static × reaction` (sticking).
/// Otherwise `dynamic × reaction` is applied along the tangent (sliding). Object 1 is pushed along
/// the tangent and object 2 against it.
///
/// # Returns
/// The frictional impulses applied to object 1 and object 2.
pub fn apply_linear_frictional_impulses(
    obj1: &mut PhysicalObject,
    obj2: &mut PhysicalObject,
    geometry: &ContactGeometry,
    coefficients: FrictionCoefficients,
) -> ((f64, f64, f64), (f64, f64, f64)) {
    let normal = geometry.normal;
    let tangent = friction_tangent(obj1.body(), obj2.body(), normal);
    let relative_velocity = subtract_vectors(velocity_of(obj2.body()), velocity_of(obj1.body()));

    let reaction_body = match obj1.body() {
        Some(body) if body.is_movable() && !body.freeze_translation => Some(body),
        _ => obj2.body(),
    };
    let reaction = reaction_body.map_or(0.0, |body| dot_product(body.net_impulse, normal).abs());
    let static_limit = coefficients.static_coefficient * reaction;
    let dynamic_limit = coefficients.dynamic_coefficient * reaction;

    let tangential_speed = dot_product(relative_velocity, tangent);
    let frictional_impulse = |body: &RigidBody| {
        let ideal = tangential_speed / body.inverse_mass;
        if ideal.abs() <= static_limit {
            scale_vector(tangent, ideal)
        } else {
            scale_vector(tangent, dynamic_limit)
        }
    };

    let mut applied = ((0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    if let Some(body) = obj1.body_mut().filter(|b| b.is_movable()) {
        applied.0 = frictional_impulse(&*body);
        body.apply_impulse(applied.0, (0.0, 0.0, 0.0));
    }
    if let Some(body) = obj2.body_mut().filter(|b| b.is_movable()) {
        applied.1 = negate_vector(frictional_impulse(&*body));
        body.apply_impulse(applied.1, (0.0, 0.0, 0.0));
    }

    trace!(
        "Linear friction: tangent {:?}, reaction {}, impulses {:?}",
        tangent, reaction, applied
    );
    applied
}

/// Frictional torque for one body spinning against the contact surface.
///
/// The reaction is the normal part of the body's angular momentum plus its pending
/// instantaneous torque. A body with no spin about the normal whose previous torque about the
/// normal stays within the static limit sticks. It receives the torque that matches the relative
/// spin about the normal. Otherwise a torque of `dynamic × reaction` opposes the body's own spin
/// about the normal, or its previous torque when it is not spinning.
///
/// # Arguments
/// * `sign` - `1.0` for object 1 and `-1.0` for object 2, so that sticking torques act in
///   opposite directions on the two bodies.
fn frictional_torque(
    body: &RigidBody,
    relative_angular_velocity: (f64, f64, f64),
    normal: (f64, f64, f64),
    coefficients: FrictionCoefficients,
    sign: f64,
) -> (f64, f64, f64) {
    let inertia = body.moment_of_inertia_in_world_space();
    let momentum = add_vectors(inertia.transform_vector(body.angular_velocity), body.net_instantaneous_torque);
    let reaction = dot_product(momentum, normal).abs();
    let static_limit = coefficients.static_coefficient * reaction;
    let dynamic_limit = coefficients.dynamic_coefficient * reaction;

    let spin_about_normal = dot_product(body.angular_velocity, normal);
    let torque_about_normal = dot_product(body.previous_net_torque, normal);

    if spin_about_normal == 0.0 && torque_about_normal.abs() <= static_limit {
        let matching = dot_product(inertia.transform_vector(relative_angular_velocity), normal);
        return scale_vector(normal, sign * matching);
    }

    let reference = if vector_magnitude(body.angular_velocity) > 0.0 {
        body.angular_velocity
    } else {
        body.previous_net_torque
    };
    let axis = normalize_vector(project_vector(reference, normal));
    scale_vector(axis, -dynamic_limit)
}

/// Applies rotational friction about the contact normal to every movable body of the pair.
///
/// # Returns
/// The instantaneous torques applied to object 1 and object 2.
pub fn apply_frictional_torques(
    obj1: &mut PhysicalObject,
    obj2: &mut PhysicalObject,
    geometry: &ContactGeometry,
    coefficients: FrictionCoefficients,
) -> ((f64, f64, f64), (f64, f64, f64)) {
    let normal = geometry.normal;
    let relative_angular_velocity = subtract_vectors(angular_velocity_of(obj2.body()), angular_velocity_of(obj1.body()));

    let mut applied = ((0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    if let Some(body) = obj1.body_mut().filter(|b| b.is_movable() && !b.freeze_rotation) {
        applied.0 = frictional_torque(body, relative_angular_velocity, normal, coefficients, 1.0);
        body.apply_instantaneous_torque(applied.0);
    }
    if let Some(body) = obj2.body_mut().filter(|b| b.is_movable() && !b.freeze_rotation) {
        applied.1 = frictional_torque(body, relative_angular_velocity, normal, coefficients, -1.0);
        body.apply_instantaneous_torque(applied.1);
    }

    trace!("Rotational friction torques {:?}", applied);
    applied
}
