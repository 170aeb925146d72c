use log::trace;

use crate::interactions::{Collision, ContactGeometry};
use crate::models::PhysicalObject;
use crate::utils::math_helpers::{dot_product, normalize_vector, subtract_vectors};

/// Decides whether a collision still needs resolving.
///
/// Nothing is needed unless the objects overlap. When both objects own a body, the collision
/// is needed if their relative contact velocity (object 2 minus object 1) points along the MTV,
/// meaning they are still approaching. When only one owns a body, it is needed if that body
/// moves toward the other object. Separating or resting contacts are left alone, which keeps
/// stacked objects from jittering.
///
/// # Arguments
/// * `obj1` - Object the MTV points toward.
/// * `obj2` - The other object.
/// * `collision` - The collision record.
/// * `geometry` - Contact geometry cached for this collision.
pub fn is_resolution_needed(
    obj1: &PhysicalObject,
    obj2: &PhysicalObject,
    collision: &Collision,
    geometry: &ContactGeometry,
) -> bool {
    if !collision.is_penetrating() {
        return false;
    }
    let normal = geometry.normal;

    let needed = match (obj1.body(), obj2.body()) {
        (Some(body1), Some(body2)) => {
            let total1 = geometry.side1.total_velocity(body1);
            let total2 = geometry.side2.total_velocity(body2);
            let relative = normalize_vector(subtract_vectors(total2, total1));
            dot_product(relative, normal) > 0.0
        }
        (Some(body1), None) => dot_product(geometry.side1.total_velocity(body1), normal) < 0.0,
        (None, Some(body2)) => dot_product(geometry.side2.total_velocity(body2), normal) > 0.0,
        (None, None) => false,
    };

    trace!(
        "Resolution check for objects {} and {}: overlap {}, needed {}",
        collision.obj1, collision.obj2, collision.overlap, needed
    );
    needed
}
