use crate::colliders::AabbCollider;
use crate::models::FrameOfReference;
use crate::utils::PhysicsError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    pub radius: f64,
}

impl SphereCollider {
    pub fn new(radius: f64) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidDimension);
        }
        Ok(SphereCollider { radius })
    }

    /// Radius after the frame's scale, using the largest scale factor so the sphere stays round
    pub fn scaled_radius(&self, frame: &FrameOfReference) -> f64 {
        self.radius * frame.max_scale()
    }

    /// World-space box tightly enclosing the scaled sphere. Its `centroid` is
    /// the world-space center, not a frame offset.
    pub fn generate_minimum_aabb(&self, frame: &FrameOfReference) -> AabbCollider {
        let r = self.scaled_radius(frame);
        AabbCollider {
            half_extents: (r, r, r),
            centroid: frame.position,
        }
    }
}
