use crate::models::Matrix3;
use crate::utils::math_helpers::add_vectors;

/// Position, rotation and scale of an object in world space.
///
/// Model-space data is mapped into world space as `position + rotation * scale * p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOfReference {
    pub position: (f64, f64, f64),
    pub rotation: Matrix3,
    pub scale: Matrix3,
}

impl Default for FrameOfReference {
    fn default() -> Self {
        FrameOfReference::new((0.0, 0.0, 0.0))
    }
}

impl FrameOfReference {
    /// Creates an unrotated, unit-scale frame at `position`
    pub fn new(position: (f64, f64, f64)) -> Self {
        FrameOfReference {
            position,
            rotation: Matrix3::identity(),
            scale: Matrix3::identity(),
        }
    }

    /// Builder-style helper setting a non-uniform scale
    pub fn with_scale(mut self, scale: (f64, f64, f64)) -> Self {
        self.scale = Matrix3::from_diagonal(scale);
        self
    }

    /// Builder-style helper applying an initial rotation
    pub fn with_rotation(mut self, axis: (f64, f64, f64), angle: f64) -> Self {
        self.rotate(axis, angle);
        self
    }

    pub fn translate(&mut self, translation: (f64, f64, f64)) {
        self.position = add_vectors(self.position, translation);
    }

    /// Rotates the frame by `angle` radians about a world-space `axis`.
    ///
    /// The new rotation is applied on top of the current one. A zero axis or angle leaves the frame untouched.
    pub fn rotate(&mut self, axis: (f64, f64, f64), angle: f64) {
        if angle == 0.0 {
            return;
        }
        let delta = Matrix3::from_axis_angle(axis, angle);
        self.rotation = delta.multiply(&self.rotation);
    }

    /// Rotation and scale applied to a model-space point, without translation
    pub fn orient_model_point(&self, point: (f64, f64, f64)) -> (f64, f64, f64) {
        self.rotation.transform_vector(self.scale.transform_vector(point))
    }

    pub fn orient_world_point(&self, point: (f64, f64, f64)) -> (f64, f64, f64) {
        add_vectors(self.position, self.orient_model_point(point))
    }

    /// Rotates a direction. Directions ignore scale and translation.
    pub fn orient_direction(&self, direction: (f64, f64, f64)) -> (f64, f64, f64) {
        self.rotation.transform_vector(direction)
    }

    /// The largest scale factor on any axis
    pub fn max_scale(&self) -> f64 {
        self.scale.max_diagonal()
    }
}
