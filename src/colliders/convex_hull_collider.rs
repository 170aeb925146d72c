use crate::colliders::AabbCollider;
use crate::models::FrameOfReference;
use crate::utils::math_helpers::{add_vectors, dot_product, scale_vector, subtract_vectors};
use crate::utils::{PhysicsError, FURTHEST_POINT_TOLERANCE};

/// Convex polyhedron described by model-space vertices, face normals and edge directions.
///
/// The sets are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexHullCollider {
    points: Vec<(f64, f64, f64)>,
    axes: Vec<(f64, f64, f64)>,
    edges: Vec<(f64, f64, f64)>,
}

impl ConvexHullCollider {
    /// Creates a hull from its vertex, face-axis and edge-direction sets.
    ///
    /// # Returns
    /// `PhysicsError::InvalidDimension` if no vertices are supplied or any vector is not finite.
    pub fn new(
        points: Vec<(f64, f64, f64)>,
        axes: Vec<(f64, f64, f64)>,
        edges: Vec<(f64, f64, f64)>,
    ) -> Result<Self, PhysicsError> {
        let finite = |v: &(f64, f64, f64)| v.0.is_finite() && v.1.is_finite() && v.2.is_finite();
        if points.is_empty() || !points.iter().chain(&axes).chain(&edges).all(finite) {
            return Err(PhysicsError::InvalidDimension);
        }
        Ok(Self::from_trusted_parts(points, axes, edges))
    }

    pub(crate) fn from_trusted_parts(
        points: Vec<(f64, f64, f64)>,
        axes: Vec<(f64, f64, f64)>,
        edges: Vec<(f64, f64, f64)>,
    ) -> Self {
        ConvexHullCollider { points, axes, edges }
    }

    /// Cube with the given side length, centered on the origin.
    ///
    /// # Example
    /// ```
    /// use rs_rigid_dynamics::colliders::ConvexHullCollider;
    ///
    /// let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    /// assert_eq!(cube.points().len(), 8);
    /// assert!(cube.points().contains(&(1.0, 1.0, 1.0)));
    /// ```
    pub fn new_cube(side: f64) -> Result<Self, PhysicsError> {
        Self::new_rectangular(side, side, side)
    }

    /// Cuboid with the given full side lengths, centered on the origin.
    pub fn new_rectangular(width: f64, height: f64, depth: f64) -> Result<Self, PhysicsError> {
        Ok(AabbCollider::new(width, height, depth)?.to_convex_hull())
    }

    pub fn points(&self) -> &[(f64, f64, f64)] {
        &self.points
    }

    pub fn axes(&self) -> &[(f64, f64, f64)] {
        &self.axes
    }

    pub fn edges(&self) -> &[(f64, f64, f64)] {
        &self.edges
    }

    /// Vertices rotated, scaled and translated into world space
    pub fn oriented_world_points(&self, frame: &FrameOfReference) -> Vec<(f64, f64, f64)> {
        self.points.iter().map(|p| frame.orient_world_point(*p)).collect()
    }

    /// Vertices rotated and scaled but left relative to the frame position
    pub fn oriented_model_points(&self, frame: &FrameOfReference) -> Vec<(f64, f64, f64)> {
        self.points.iter().map(|p| frame.orient_model_point(*p)).collect()
    }

    pub fn oriented_axes(&self, frame: &FrameOfReference) -> Vec<(f64, f64, f64)> {
        self.axes.iter().map(|a| frame.orient_direction(*a)).collect()
    }

    pub fn oriented_edges(&self, frame: &FrameOfReference) -> Vec<(f64, f64, f64)> {
        self.edges.iter().map(|e| frame.orient_direction(*e)).collect()
    }

    /// Subset of `points` furthest along `direction`, ties included.
    ///
    /// Every point whose projection lies within `FURTHEST_POINT_TOLERANCE` of the maximum is kept,
    /// in input order. The result size classifies a contact: 1 is a vertex, 2 an edge, more a face.
    ///
    /// # Example
    /// ```
    /// use rs_rigid_dynamics::colliders::ConvexHullCollider;
    ///
    /// let cube = ConvexHullCollider::new_cube(2.0).unwrap();
    /// let top = ConvexHullCollider::furthest_points(cube.points(), (0.0, 1.0, 0.0));
    /// assert_eq!(top.len(), 4);
    /// ```
    pub fn furthest_points(points: &[(f64, f64, f64)], direction: (f64, f64, f64)) -> Vec<(f64, f64, f64)> {
        Self::furthest_points_with_tolerance(points, direction, FURTHEST_POINT_TOLERANCE)
    }

    pub fn furthest_points_with_tolerance(
        points: &[(f64, f64, f64)],
        direction: (f64, f64, f64),
        tolerance: f64,
    ) -> Vec<(f64, f64, f64)> {
        let max_projection = points
            .iter()
            .map(|p| dot_product(*p, direction))
            .fold(f64::NEG_INFINITY, f64::max);

        points
            .iter()
            .filter(|p| dot_product(**p, direction) >= max_projection - tolerance)
            .copied()
            .collect()
    }

    /// Tightest world-space box around the hull in the given frame.
    ///
    /// The returned box's `centroid` is its world-space center.
    pub fn generate_minimum_aabb(&self, frame: &FrameOfReference) -> AabbCollider {
        let world = self.oriented_world_points(frame);
        let mut min = (f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &world {
            min = (min.0.min(p.0), min.1.min(p.1), min.2.min(p.2));
            max = (max.0.max(p.0), max.1.max(p.1), max.2.max(p.2));
        }
        AabbCollider {
            half_extents: scale_vector(subtract_vectors(max, min), 0.5),
            centroid: scale_vector(add_vectors(max, min), 0.5),
        }
    }
}
