use crate::models::{FrameOfReference, PhysicalObject};
use crate::utils::math_helpers::normalize_vector;
use crate::utils::PhysicsError;

/// A candidate contact between two objects, produced fresh each frame by the narrow phase.
///
/// `obj1` and `obj2` index into the simulation's object list. The minimum translation vector
/// points toward `obj1` by convention and need not be unit length. A positive `overlap` means
/// the objects are currently penetrating.
#[derive(Debug, Clone, PartialEq)]
pub struct Collision {
    pub obj1: usize,
    pub obj2: usize,
    pub obj1_frame: FrameOfReference,
    pub obj2_frame: FrameOfReference,
    pub minimum_translation_vector: (f64, f64, f64),
    pub overlap: f64,
}

impl Collision {
    pub fn new(
        obj1: usize,
        obj2: usize,
        obj1_frame: FrameOfReference,
        obj2_frame: FrameOfReference,
        minimum_translation_vector: (f64, f64, f64),
        overlap: f64,
    ) -> Self {
        Collision {
            obj1,
            obj2,
            obj1_frame,
            obj2_frame,
            minimum_translation_vector,
            overlap,
        }
    }

    /// Builds a record between two objects of `objects`, snapshotting their current world frames.
    ///
    /// # Returns
    /// An error if either index is out of range or both indices name the same object.
    pub fn between(
        objects: &[PhysicalObject],
        obj1: usize,
        obj2: usize,
        minimum_translation_vector: (f64, f64, f64),
        overlap: f64,
    ) -> Result<Self, PhysicsError> {
        if obj1 == obj2 {
            return Err(PhysicsError::SelfCollision(obj1));
        }
        let frame_of = |index: usize| {
            objects
                .get(index)
                .map(|object| object.frame)
                .ok_or(PhysicsError::InvalidObjectIndex { index, count: objects.len() })
        };
        Ok(Collision::new(obj1, obj2, frame_of(obj1)?, frame_of(obj2)?, minimum_translation_vector, overlap))
    }

    /// The minimum translation vector as a unit direction (zero if degenerate)
    pub fn normalized_mtv(&self) -> (f64, f64, f64) {
        normalize_vector(self.minimum_translation_vector)
    }

    pub fn is_penetrating(&self) -> bool {
        self.overlap > 0.0
    }
}
