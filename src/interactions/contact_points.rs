//! Contact point determination.
//!
//! Spheres and boxes are special-cased. Every other pairing is classified by how many
//! support points each side has along its direction toward the other: one point is a
//! vertex contact, two points on both sides an edge contact, anything else a face contact.

use log::{trace, warn};

use crate::colliders::{Collider, SphereCollider};
use crate::interactions::{Collision, ContactGeometry, ContactSide};
use crate::models::{FrameOfReference, PhysicalObject};
use crate::utils::math_helpers::{add_vectors, scale_vector, subtract_vectors, vector_component};

/// Point on a sphere's surface along its direction toward the other object
pub fn sphere_contact_point(
    sphere: &SphereCollider,
    frame: &FrameOfReference,
    direction: (f64, f64, f64),
) -> (f64, f64, f64) {
    add_vectors(frame.position, scale_vector(direction, sphere.scaled_radius(frame)))
}

/// A box never takes torque from a contact, so its contact point is always its center
pub fn aabb_contact_point(frame: &FrameOfReference) -> (f64, f64, f64) {
    frame.position
}

/// World-space contact points on object 1 and object 2.
///
/// Both entries are equal except when a box is involved, since a box reports its own center.
pub fn determine_collision_points(
    obj1: &PhysicalObject,
    obj2: &PhysicalObject,
    collision: &Collision,
    geometry: &ContactGeometry,
) -> [(f64, f64, f64); 2] {
    let mut point1 = None;
    let mut point2 = None;

    if let Collider::Sphere(sphere) = &obj2.collider {
        let point = sphere_contact_point(sphere, &collision.obj2_frame, geometry.side2.direction);
        point2 = Some(point);
        if !matches!(obj1.collider, Collider::Aabb(_)) {
            point1 = Some(point);
        }
    } else if let Collider::Sphere(sphere) = &obj1.collider {
        let point = sphere_contact_point(sphere, &collision.obj1_frame, geometry.side1.direction);
        point1 = Some(point);
        if !matches!(obj2.collider, Collider::Aabb(_)) {
            point2 = Some(point);
        }
    }

    if matches!(obj1.collider, Collider::Aabb(_)) && point1.is_none() {
        point1 = Some(aabb_contact_point(&collision.obj1_frame));
    }
    if matches!(obj2.collider, Collider::Aabb(_)) && point2.is_none() {
        point2 = Some(aabb_contact_point(&collision.obj2_frame));
    }

    let points = match (point1, point2) {
        (Some(p1), Some(p2)) => [p1, p2],
        // Hull against box: the hull side comes from the hull routine, the box joins as a degenerate hull
        (None, Some(p2)) => [hull_contact_point(&geometry.side1, &geometry.side2), p2],
        (Some(p1), None) => [p1, hull_contact_point(&geometry.side2, &geometry.side1)],
        (None, None) => {
            let shared = hull_contact_point(&geometry.side2, &geometry.side1);
            [shared, shared]
        }
    };

    trace!(
        "Contact points for {} {} and {} {}: {:?}",
        obj1.collider.name(),
        collision.obj1,
        obj2.collider.name(),
        collision.obj2,
        points
    );
    points
}

/// Contact point of a polyhedral side against another polyhedral side.
///
/// `side` supplies its support points along its direction toward `other`, and `other` along the
/// opposite direction.
pub fn hull_contact_point(side: &ContactSide, other: &ContactSide) -> (f64, f64, f64) {
    if let [vertex] = side.furthest_points.as_slice() {
        return vertex_contact_point(*vertex, &side.frame);
    }
    if let [vertex] = other.furthest_points.as_slice() {
        return vertex_contact_point(*vertex, &other.frame);
    }
    if let ([a1, b1], [a2, b2]) = (side.furthest_points.as_slice(), other.furthest_points.as_slice()) {
        return edge_contact_point((*a1, *b1), &side.frame, (*a2, *b2), &other.frame);
    }

    let to_world = |s: &ContactSide| -> Vec<(f64, f64, f64)> {
        s.furthest_points.iter().map(|p| add_vectors(*p, s.frame.position)).collect()
    };
    face_contact_point(&to_world(side), &to_world(other))
}

/// A lone support vertex, translated into world space
pub fn vertex_contact_point(vertex: (f64, f64, f64), frame: &FrameOfReference) -> (f64, f64, f64) {
    add_vectors(vertex, frame.position)
}

/// Intersection estimate of two support edges, given as model-oriented point pairs.
///
/// Each edge becomes a line `offset + t * direction`. The shared parameter `t` is solved from the
/// first axis on which the line directions differ, and the first line is evaluated there. The
/// other axes are not checked for consistency. If the directions are equal on every axis, `t`
/// stays 0 and the first edge's start point is returned.
pub fn edge_contact_point(
    edge1: ((f64, f64, f64), (f64, f64, f64)),
    frame1: &FrameOfReference,
    edge2: ((f64, f64, f64), (f64, f64, f64)),
    frame2: &FrameOfReference,
) -> (f64, f64, f64) {
    let direction1 = subtract_vectors(edge1.1, edge1.0);
    let direction2 = subtract_vectors(edge2.1, edge2.0);
    let offset1 = add_vectors(frame1.position, edge1.0);
    let offset2 = add_vectors(frame2.position, edge2.0);

    // offset1 - offset2 = t * (direction2 - direction1)
    let offset = subtract_vectors(offset1, offset2);
    let direction = subtract_vectors(direction2, direction1);

    let t = (0..3)
        .find(|&i| vector_component(direction, i) != 0.0)
        .map(|i| vector_component(offset, i) / vector_component(direction, i));
    let t = t.unwrap_or_else(|| {
        warn!("Edge contact with identical edge directions, using the first edge origin");
        0.0
    });

    add_vectors(offset1, scale_vector(direction1, t))
}

/// Approximate center of a face contact from two world-space support point sets.
///
/// For each axis independently, the pooled points are trimmed by repeatedly removing the
/// minimum and the maximum along that axis until at most two remain. Those survivors are
/// averaged on that axis.
pub fn face_contact_point(points1: &[(f64, f64, f64)], points2: &[(f64, f64, f64)]) -> (f64, f64, f64) {
    let mut center = [0.0; 3];
    for (axis, coordinate) in center.iter_mut().enumerate() {
        let mut pool: Vec<f64> = points1
            .iter()
            .chain(points2)
            .map(|p| vector_component(*p, axis))
            .collect();

        while pool.len() > 2 {
            let mut min_index = 0;
            let mut max_index = 0;
            for index in 1..pool.len() {
                if pool[index] <= pool[min_index] {
                    min_index = index;
                } else if pool[index] >= pool[max_index] {
                    max_index = index;
                }
            }
            if min_index == max_index {
                pool.remove(min_index);
            } else {
                pool.remove(min_index.max(max_index));
                pool.remove(min_index.min(max_index));
            }
        }

        if !pool.is_empty() {
            *coordinate = pool.iter().sum::<f64>() / pool.len() as f64;
        }
    }
    (center[0], center[1], center[2])
}
