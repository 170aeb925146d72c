//! Semi-implicit Euler integration of rigid bodies and the post-integration sync pass.

use log::trace;

use crate::dynamics::GlobalForces;
use crate::models::{PhysicalObject, RigidBody};
use crate::utils::math_helpers::{add_vectors, normalize_vector, scale_vector, vector_magnitude};

/// Advances position and velocity from the accumulated force and impulse.
///
/// The impulse is scaled by the inverse mass and added straight to the velocity.
/// Position uses the velocity from the start of the step:
/// `x += v·dt + ½·a·dt²`, then `v += a·dt + J/m`.
pub fn update_linear_physics(body: &mut RigidBody, dt: f64) {
    let acceleration = scale_vector(body.net_force, body.inverse_mass);
    let impulse_velocity = scale_vector(body.net_impulse, body.inverse_mass);

    let displacement = add_vectors(
        scale_vector(body.velocity, dt),
        scale_vector(acceleration, 0.5 * dt * dt),
    );
    body.frame.translate(displacement);

    body.velocity = add_vectors(
        body.velocity,
        add_vectors(scale_vector(acceleration, dt), impulse_velocity),
    );
    body.acceleration = acceleration;
}

/// Advances angular velocity and orientation from the accumulated torques.
///
/// `ω·dt` is applied as an axis-angle rotation. A zero angle leaves the orientation untouched.
pub fn update_rotational_physics(body: &mut RigidBody, dt: f64) {
    let angular_acceleration = body.inverse_inertia.transform_vector(body.net_torque);
    let instantaneous = body.inverse_inertia.transform_vector(body.net_instantaneous_torque);

    body.angular_velocity = add_vectors(
        body.angular_velocity,
        add_vectors(scale_vector(angular_acceleration, dt), instantaneous),
    );
    body.angular_acceleration = angular_acceleration;

    let rotation = scale_vector(body.angular_velocity, dt);
    let angle = vector_magnitude(rotation);
    if angle != 0.0 {
        body.frame.rotate(normalize_vector(rotation), angle);
    }
}

/// Applies the global fields and integrates one body. Immovable bodies are skipped entirely.
pub fn integrate_body(body: &mut RigidBody, global_forces: &GlobalForces, dt: f64) {
    if !body.is_movable() {
        return;
    }
    global_forces.apply_to(body);
    update_linear_physics(body, dt);
    update_rotational_physics(body, dt);
    trace!(
        "Integrated body: position {:?}, velocity {:?}, angular velocity {:?}",
        body.frame.position, body.velocity, body.angular_velocity
    );
}

/// Copies the body's position and rotation into the object's world frame and closes the step's accumulators.
///
/// The applied force and torque are cached as `previous_net_force = F·dt + J` and
/// `previous_net_torque = τ·dt + τ_inst` for friction to read, then every accumulator is zeroed.
/// The object's scale is its own and is left alone.
pub fn synchronize_object(object: &mut PhysicalObject, dt: f64) {
    let Some(body) = object.body.as_mut() else {
        return;
    };
    object.frame.position = body.frame.position;
    object.frame.rotation = body.frame.rotation;
    body.previous_net_force = add_vectors(scale_vector(body.net_force, dt), body.net_impulse);
    body.previous_net_torque = add_vectors(scale_vector(body.net_torque, dt), body.net_instantaneous_torque);
    body.acceleration = (0.0, 0.0, 0.0);
    body.reset_accumulators();
}
