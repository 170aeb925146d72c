use crate::colliders::{Collider, ConvexHullCollider};
use crate::interactions::Collision;
use crate::models::{FrameOfReference, PhysicalObject, RigidBody};
use crate::utils::math_helpers::negate_vector;

/// One object's view of a contact: its direction toward the other object and its support points.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSide {
    /// Unit direction from this object toward the other one (`-MTV` for object 1, `+MTV` for object 2)
    pub direction: (f64, f64, f64),
    pub frame: FrameOfReference,
    /// Vertices of the polyhedral form, oriented but not translated. Empty for spheres.
    pub model_points: Vec<(f64, f64, f64)>,
    /// The subset of `model_points` furthest along `direction`
    pub furthest_points: Vec<(f64, f64, f64)>,
    /// Only true hulls add spin-induced velocity to their contact velocity
    pub is_convex_hull: bool,
}

impl ContactSide {
    fn compute(collider: &Collider, frame: FrameOfReference, direction: (f64, f64, f64), tolerance: f64) -> Self {
        let model_points = collider
            .as_convex_hull()
            .map(|hull| hull.oriented_model_points(&frame))
            .unwrap_or_default();
        let furthest_points = ConvexHullCollider::furthest_points_with_tolerance(&model_points, direction, tolerance);

        ContactSide {
            direction,
            frame,
            model_points,
            furthest_points,
            is_convex_hull: collider.is_convex_hull(),
        }
    }

    /// The body's velocity plus the largest spin-induced velocity among the support points
    pub fn total_velocity(&self, body: &RigidBody) -> (f64, f64, f64) {
        let (vx, vy, vz) = body.velocity;
        let (ax, ay, az) = self.angular_contribution(body);
        (vx + ax, vy + ay, vz + az)
    }

    /// Largest spin-induced velocity of a support point along `direction` (hulls only)
    pub fn angular_contribution(&self, body: &RigidBody) -> (f64, f64, f64) {
        if !self.is_convex_hull {
            return (0.0, 0.0, 0.0);
        }
        body.calculate_max_local_linear_velocity(&self.furthest_points, self.direction)
    }
}

/// Geometry of a single collision, computed once and shared by every resolution stage.
///
/// Everything here depends only on the collision record's frames and MTV, so positional
/// decoupling does not invalidate it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactGeometry {
    /// Unit minimum translation vector, pointing toward object 1
    pub normal: (f64, f64, f64),
    pub side1: ContactSide,
    pub side2: ContactSide,
}

impl ContactGeometry {
    pub fn compute(obj1: &PhysicalObject, obj2: &PhysicalObject, collision: &Collision, tolerance: f64) -> Self {
        let normal = collision.normalized_mtv();
        ContactGeometry {
            normal,
            side1: ContactSide::compute(&obj1.collider, collision.obj1_frame, negate_vector(normal), tolerance),
            side2: ContactSide::compute(&obj2.collider, collision.obj2_frame, normal, tolerance),
        }
    }
}
