use crate::colliders::Collider;
use crate::models::{FrameOfReference, RigidBody};
use crate::utils::{PhysicsError, SimulationConfig};

/// A simulated entity: its world frame, its collision shape and, optionally, a rigid body.
///
/// An object without a body is static. The resolver treats it as an immovable,
/// infinite-mass participant.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalObject {
    pub frame: FrameOfReference,
    pub collider: Collider,
    pub body: Option<RigidBody>,
}

impl PhysicalObject {
    /// Creates a body-less (static) object.
    pub fn new_static(collider: Collider, frame: FrameOfReference) -> Self {
        PhysicalObject {
            frame,
            collider,
            body: None,
        }
    }

    /// Creates an object owning a rigid body of the given mass, with inertia fitted to its collider.
    ///
    /// # Example
    /// ```
    /// use rs_rigid_dynamics::colliders::Collider;
    /// use rs_rigid_dynamics::models::{FrameOfReference, PhysicalObject};
    /// use rs_rigid_dynamics::utils::DEFAULT_SIMULATION_CONFIG;
    ///
    /// let ball = PhysicalObject::new_dynamic(
    ///     Collider::new_sphere(0.5).unwrap(),
    ///     FrameOfReference::new((0.0, 5.0, 0.0)),
    ///     2.0,
    ///     &DEFAULT_SIMULATION_CONFIG,
    /// ).unwrap();
    /// assert_eq!(ball.body.as_ref().unwrap().frame.position, (0.0, 5.0, 0.0));
    /// ```
    pub fn new_dynamic(
        collider: Collider,
        frame: FrameOfReference,
        mass: f64,
        config: &SimulationConfig,
    ) -> Result<Self, PhysicsError> {
        let mut body = RigidBody::with_config(mass, frame, config)?;
        match &collider {
            Collider::Sphere(sphere) => body.set_inertia_of_sphere(sphere.scaled_radius(&frame)),
            Collider::Aabb(_) | Collider::ConvexHull(_) => {
                let bounds = collider.generate_minimum_aabb(&frame);
                body.set_inertia_of_cuboid_dimensions(bounds.width(), bounds.height(), bounds.depth());
            }
        }
        Ok(PhysicalObject {
            frame,
            collider,
            body: Some(body),
        })
    }

    pub fn body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }

    /// Whether the object owns a body that forces and impulses can move
    pub fn is_dynamic(&self) -> bool {
        self.body.as_ref().is_some_and(RigidBody::is_movable)
    }
}
