use log::{debug, trace};

use crate::interactions::{
    apply_collision_impulses, apply_frictional_torques, apply_linear_frictional_impulses, decouple_collision,
    determine_collision_points, is_resolution_needed, Collision, ContactGeometry, FrictionCoefficients,
};
use crate::models::PhysicalObject;
use crate::utils::{PhysicsError, SimulationConfig};

/// What resolving a single collision did to the pair
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResolution {
    /// Positional corrections applied to object 1 and object 2
    pub translations: ((f64, f64, f64), (f64, f64, f64)),
    pub contact_points: [(f64, f64, f64); 2],
    /// Magnitude of the normal impulse along the MTV
    pub impulse: f64,
    pub frictional_impulses: ((f64, f64, f64), (f64, f64, f64)),
    pub frictional_torques: ((f64, f64, f64), (f64, f64, f64)),
}

/// Resolves one collision between two objects.
///
/// Runs the full pipeline on a single cached contact geometry: decision, positional decoupling,
/// contact points, normal impulse, linear friction and rotational friction. Impulses and torques are
/// accumulated on the bodies and take effect at the next integration.
///
/// # Returns
/// `None` if the collision did not need resolving.
pub fn resolve_collision(
    obj1: &mut PhysicalObject,
    obj2: &mut PhysicalObject,
    collision: &Collision,
    config: &SimulationConfig,
) -> Option<ContactResolution> {
    let geometry = ContactGeometry::compute(obj1, obj2, collision, config.furthest_point_tolerance);
    if !is_resolution_needed(obj1, obj2, collision, &geometry) {
        return None;
    }

    let translations = decouple_collision(obj1, obj2, collision, &geometry);
    let contact_points = determine_collision_points(obj1, obj2, collision, &geometry);
    let impulse = apply_collision_impulses(obj1, obj2, collision, &geometry, &contact_points, config);

    let coefficients = FrictionCoefficients::combine(obj1.body(), obj2.body(), config);
    let frictional_impulses = apply_linear_frictional_impulses(obj1, obj2, &geometry, coefficients);
    let frictional_torques = apply_frictional_torques(obj1, obj2, &geometry, coefficients);

    Some(ContactResolution {
        translations,
        contact_points,
        impulse,
        frictional_impulses,
        frictional_torques,
    })
}

/// Borrows two distinct objects mutably at once.
pub fn object_pair_mut(
    objects: &mut [PhysicalObject],
    obj1: usize,
    obj2: usize,
) -> Result<(&mut PhysicalObject, &mut PhysicalObject), PhysicsError> {
    let count = objects.len();
    for index in [obj1, obj2] {
        if index >= count {
            return Err(PhysicsError::InvalidObjectIndex { index, count });
        }
    }
    if obj1 == obj2 {
        return Err(PhysicsError::SelfCollision(obj1));
    }

    if obj1 < obj2 {
        let (head, tail) = objects.split_at_mut(obj2);
        Ok((&mut head[obj1], &mut tail[0]))
    } else {
        let (head, tail) = objects.split_at_mut(obj1);
        Ok((&mut tail[0], &mut head[obj2]))
    }
}

/// Resolves collisions sequentially in the order given.
///
/// Order matters: each resolution sees the state left by the ones before it.
///
/// # Returns
/// The number of collisions that needed resolving, or the first invalid record's error. Records
/// before the invalid one have already been applied.
pub fn resolve_collisions(
    objects: &mut [PhysicalObject],
    collisions: &[Collision],
    config: &SimulationConfig,
) -> Result<usize, PhysicsError> {
    let mut resolved = 0;
    for collision in collisions {
        let (obj1, obj2) = object_pair_mut(objects, collision.obj1, collision.obj2)?;
        if let Some(resolution) = resolve_collision(obj1, obj2, collision, config) {
            trace!(
                "Resolved objects {} and {}: {:?}",
                collision.obj1, collision.obj2, resolution
            );
            resolved += 1;
        }
    }
    debug!("Resolved {} of {} collisions", resolved, collisions.len());
    Ok(resolved)
}
