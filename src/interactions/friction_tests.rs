use crate::colliders::Collider;
use crate::dynamics::update_rotational_physics;
use crate::interactions::{friction_tangent, resolve_collision, Collision, FrictionCoefficients};
use crate::models::{FrameOfReference, PhysicalObject, RigidBody};
use crate::utils::{SimulationConfig, DEFAULT_SIMULATION_CONFIG};
use crate::{assert_float_eq, assert_vector_eq};

/// A unit ball sunk 0.1 into a body-less ground box whose top face is at y = 0
fn sliding_ball(velocity: (f64, f64, f64), friction: (f64, f64)) -> Vec<PhysicalObject> {
    let mut ball = PhysicalObject::new_dynamic(
        Collider::new_sphere(1.0).unwrap(),
        FrameOfReference::new((0.0, 0.9, 0.0)),
        1.0,
        &DEFAULT_SIMULATION_CONFIG,
    )
    .unwrap();
    let body = ball.body_mut().unwrap();
    body.velocity = velocity;
    body.set_friction(friction.0, friction.1).unwrap();

    let ground = PhysicalObject::new_static(
        Collider::new_aabb(10.0, 2.0, 10.0).unwrap(),
        FrameOfReference::new((0.0, -1.0, 0.0)),
    );
    vec![ball, ground]
}

fn resolve(objects: &mut [PhysicalObject]) -> crate::interactions::ContactResolution {
    let collision = Collision::between(objects, 0, 1, (0.0, 1.0, 0.0), 0.1).unwrap();
    let (ball, ground) = objects.split_at_mut(1);
    resolve_collision(&mut ball[0], &mut ground[0], &collision, &DEFAULT_SIMULATION_CONFIG).unwrap()
}

#[test]
fn test_coefficients_average_with_absent_body_default() {
    let mut body = RigidBody::new(1.0, FrameOfReference::default()).unwrap();
    body.set_friction(0.2, 0.4).unwrap();

    let combined = FrictionCoefficients::combine(Some(&body), None, &DEFAULT_SIMULATION_CONFIG);
    assert_float_eq(combined.static_coefficient, 0.6, 1e-12, None);
    assert_float_eq(combined.dynamic_coefficient, 0.7, 1e-12, None);

    let slippery = SimulationConfig::new(None, None, None, None, None, Some(0.0));
    let combined = FrictionCoefficients::combine(Some(&body), None, &slippery);
    assert_float_eq(combined.static_coefficient, 0.1, 1e-12, None);
    assert_float_eq(combined.dynamic_coefficient, 0.2, 1e-12, None);
}

#[test]
fn test_tangent_follows_relative_sliding() {
    let mut body1 = RigidBody::new(1.0, FrameOfReference::default()).unwrap();
    body1.velocity = (3.0, -4.0, 0.0);

    let tangent = friction_tangent(Some(&body1), None, (0.0, 1.0, 0.0));
    assert_vector_eq(tangent, (-1.0, 0.0, 0.0), 1e-12, None);
}

#[test]
fn test_tangent_falls_back_to_previous_force() {
    let mut body1 = RigidBody::new(1.0, FrameOfReference::default()).unwrap();
    body1.previous_net_force = (0.0, -2.0, 3.0);
    let body2 = RigidBody::new(1.0, FrameOfReference::default()).unwrap();

    let tangent = friction_tangent(Some(&body1), Some(&body2), (0.0, 1.0, 0.0));
    assert_vector_eq(tangent, (0.0, 0.0, 1.0), 1e-12, None);
    assert_eq!(friction_tangent(Some(&body2), None, (0.0, 1.0, 0.0)), (0.0, 0.0, 0.0));
}

#[test]
fn test_sliding_friction_is_clamped_to_dynamic_limit() {
    let mut objects = sliding_ball((5.0, -1.0, 0.0), (0.2, 0.0));
    let resolution = resolve(&mut objects);

    // Reaction 2, static limit 0.6 * 2, dynamic limit 0.5 * 2
    assert_float_eq(resolution.impulse, 2.0, 1e-12, None);
    assert_vector_eq(resolution.frictional_impulses.0, (-1.0, 0.0, 0.0), 1e-12, None);
    assert_vector_eq(resolution.frictional_impulses.1, (0.0, 0.0, 0.0), 1e-12, Some("ground has no body"));

    let body = objects[0].body().unwrap();
    assert_vector_eq(body.net_impulse, (-1.0, 2.0, 0.0), 1e-12, None);
}

#[test]
fn test_slow_sliding_sticks() {
    let mut objects = sliding_ball((0.5, -1.0, 0.0), (1.0, 1.0));
    let resolution = resolve(&mut objects);

    assert_vector_eq(resolution.frictional_impulses.0, (-0.5, 0.0, 0.0), 1e-12, None);
    let body = objects[0].body().unwrap();
    assert_vector_eq(body.net_impulse, (-0.5, 2.0, 0.0), 1e-12, Some("tangential velocity is cancelled exactly"));
}

#[test]
fn test_no_sliding_means_no_linear_friction() {
    let mut objects = sliding_ball((0.0, -1.0, 0.0), (1.0, 1.0));
    let resolution = resolve(&mut objects);

    assert_vector_eq(resolution.frictional_impulses.0, (0.0, 0.0, 0.0), 1e-12, None);
    assert_vector_eq(resolution.frictional_torques.0, (0.0, 0.0, 0.0), 1e-12, None);
}

#[test]
fn test_spin_about_normal_is_opposed() {
    let mut objects = sliding_ball((0.0, -1.0, 0.0), (1.0, 1.0));
    objects[0].body_mut().unwrap().angular_velocity = (0.0, 3.0, 0.0);
    let resolution = resolve(&mut objects);

    // Solid unit sphere of unit mass: I = 0.4, so the reaction is 1.2
    assert_vector_eq(resolution.frictional_torques.0, (0.0, -1.2, 0.0), 1e-12, None);

    let body = objects[0].body_mut().unwrap();
    update_rotational_physics(body, 0.0);
    assert_vector_eq(body.angular_velocity, (0.0, 0.0, 0.0), 1e-9, Some("spin fully braked"));
}

#[test]
fn test_frozen_rotation_takes_no_frictional_torque() {
    let mut objects = sliding_ball((0.0, -1.0, 0.0), (1.0, 1.0));
    let body = objects[0].body_mut().unwrap();
    body.angular_velocity = (0.0, 3.0, 0.0);
    body.freeze_rotation = true;
    let resolution = resolve(&mut objects);

    assert_eq!(resolution.frictional_torques.0, (0.0, 0.0, 0.0));
    assert_eq!(objects[0].body().unwrap().net_instantaneous_torque, (0.0, 0.0, 0.0));
}
