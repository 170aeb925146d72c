use crate::colliders::ConvexHullCollider;
use crate::models::FrameOfReference;
use crate::utils::math_helpers::{add_vectors, subtract_vectors};
use crate::utils::PhysicsError;

/// Axis-aligned box. It never rotates with its frame, only scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbCollider {
    pub half_extents: (f64, f64, f64),
    /// Offset of the box center from the frame position. Boxes produced by
    /// `generate_minimum_aabb` carry their world-space center here instead,
    /// so place them with `FrameOfReference::default()`.
    pub centroid: (f64, f64, f64),
}

impl AabbCollider {
    /// Creates a box centered on its frame from full side lengths.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, PhysicsError> {
        Self::with_centroid(width, height, depth, (0.0, 0.0, 0.0))
    }

    pub fn with_centroid(width: f64, height: f64, depth: f64, centroid: (f64, f64, f64)) -> Result<Self, PhysicsError> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(width) || !valid(height) || !valid(depth) {
            return Err(PhysicsError::InvalidDimension);
        }
        Ok(AabbCollider {
            half_extents: (width / 2.0, height / 2.0, depth / 2.0),
            centroid,
        })
    }

    pub fn width(&self) -> f64 {
        self.half_extents.0 * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_extents.1 * 2.0
    }

    pub fn depth(&self) -> f64 {
        self.half_extents.2 * 2.0
    }

    pub fn scaled_half_extents(&self, frame: &FrameOfReference) -> (f64, f64, f64) {
        let (sx, sy, sz) = frame.scale.diagonal();
        (
            self.half_extents.0 * sx.abs(),
            self.half_extents.1 * sy.abs(),
            self.half_extents.2 * sz.abs(),
        )
    }

    /// World-space `(min, max)` corners
    pub fn world_bounds(&self, frame: &FrameOfReference) -> ((f64, f64, f64), (f64, f64, f64)) {
        let center = add_vectors(frame.position, self.centroid);
        let half = self.scaled_half_extents(frame);
        (subtract_vectors(center, half), add_vectors(center, half))
    }

    /// Whether two boxes intersect, each placed by its own frame
    pub fn overlaps(&self, frame: &FrameOfReference, other: &AabbCollider, other_frame: &FrameOfReference) -> bool {
        let (min_a, max_a) = self.world_bounds(frame);
        let (min_b, max_b) = other.world_bounds(other_frame);
        min_a.0 <= max_b.0 && max_a.0 >= min_b.0
            && min_a.1 <= max_b.1 && max_a.1 >= min_b.1
            && min_a.2 <= max_b.2 && max_a.2 >= min_b.2
    }

    /// Re-expresses the box as a hull: 8 corners, the 3 principal face axes and the 3 principal edges.
    ///
    /// Lets hull-versus-box contacts reuse the hull contact classification.
    pub fn to_convex_hull(&self) -> ConvexHullCollider {
        let (hx, hy, hz) = self.half_extents;
        let mut points = Vec::with_capacity(8);
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    points.push(add_vectors(self.centroid, (sx * hx, sy * hy, sz * hz)));
                }
            }
        }
        ConvexHullCollider::from_trusted_parts(points, principal_axes(), principal_axes())
    }
}

pub(crate) fn principal_axes() -> Vec<(f64, f64, f64)> {
    vec![(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (0.0, 0.0, 1.0)]
}
