use std::borrow::Cow;

use crate::colliders::{AabbCollider, ConvexHullCollider, SphereCollider};
use crate::models::FrameOfReference;
use crate::utils::PhysicsError;

/// The closed set of collision shapes the resolver understands
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    Sphere(SphereCollider),
    Aabb(AabbCollider),
    ConvexHull(ConvexHullCollider),
}

impl Collider {
    pub fn new_sphere(radius: f64) -> Result<Self, PhysicsError> {
        Ok(Collider::Sphere(SphereCollider::new(radius)?))
    }

    pub fn new_aabb(width: f64, height: f64, depth: f64) -> Result<Self, PhysicsError> {
        Ok(Collider::Aabb(AabbCollider::new(width, height, depth)?))
    }

    pub fn new_cube_hull(side: f64) -> Result<Self, PhysicsError> {
        Ok(Collider::ConvexHull(ConvexHullCollider::new_cube(side)?))
    }

    pub fn new_rectangular_hull(width: f64, height: f64, depth: f64) -> Result<Self, PhysicsError> {
        Ok(Collider::ConvexHull(ConvexHullCollider::new_rectangular(width, height, depth)?))
    }

    pub fn is_convex_hull(&self) -> bool {
        matches!(self, Collider::ConvexHull(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Collider::Sphere(_) => "sphere",
            Collider::Aabb(_) => "aabb",
            Collider::ConvexHull(_) => "convex hull",
        }
    }

    /// Polyhedral form of the shape: hulls as-is, boxes converted to an 8-vertex hull, spheres have none.
    pub fn as_convex_hull(&self) -> Option<Cow<'_, ConvexHullCollider>> {
        match self {
            Collider::Sphere(_) => None,
            Collider::Aabb(aabb) => Some(Cow::Owned(aabb.to_convex_hull())),
            Collider::ConvexHull(hull) => Some(Cow::Borrowed(hull)),
        }
    }

    /// Tightest world-space box around the shape, for broad-phase use.
    ///
    /// The box is already placed in world space: query it with
    /// `FrameOfReference::default()` rather than the shape's own frame.
    pub fn generate_minimum_aabb(&self, frame: &FrameOfReference) -> AabbCollider {
        match self {
            Collider::Sphere(sphere) => sphere.generate_minimum_aabb(frame),
            Collider::Aabb(aabb) => {
                let (min, max) = aabb.world_bounds(frame);
                AabbCollider {
                    half_extents: ((max.0 - min.0) / 2.0, (max.1 - min.1) / 2.0, (max.2 - min.2) / 2.0),
                    centroid: ((max.0 + min.0) / 2.0, (max.1 + min.1) / 2.0, (max.2 + min.2) / 2.0),
                }
            }
            Collider::ConvexHull(hull) => hull.generate_minimum_aabb(frame),
        }
    }
}
