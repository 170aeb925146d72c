use crate::models::{FrameOfReference, Matrix3};
use crate::utils::math_helpers::{add_vectors, cross_product, dot_product};
use crate::utils::{PhysicsError, SimulationConfig, DEFAULT_SIMULATION_CONFIG};

/// Mass properties, per-step accumulators and velocity state of a simulated entity.
///
/// The body owns its own frame. The integrator advances it, and the synchronization pass
/// copies it back into the owning object's world frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub frame: FrameOfReference,
    pub velocity: (f64, f64, f64),
    pub angular_velocity: (f64, f64, f64),
    pub acceleration: (f64, f64, f64),
    pub angular_acceleration: (f64, f64, f64),

    pub net_force: (f64, f64, f64),
    pub net_impulse: (f64, f64, f64),
    pub net_torque: (f64, f64, f64),
    pub net_instantaneous_torque: (f64, f64, f64),

    /// Force applied over the last step (`net_force * dt + net_impulse`), read by friction
    pub previous_net_force: (f64, f64, f64),
    /// Torque applied over the last step (`net_torque * dt + net_instantaneous_torque`)
    pub previous_net_torque: (f64, f64, f64),

    /// Zero means infinite mass: the body never moves under forces or impulses
    pub inverse_mass: f64,
    /// Body-local inertia tensor
    pub inertia: Matrix3,
    pub inverse_inertia: Matrix3,

    pub coefficient_of_restitution: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,

    pub freeze_translation: bool,
    pub freeze_rotation: bool,
}

impl RigidBody {
    /// Creates a body at rest using the default coefficients.
    ///
    /// # Arguments
    /// * `mass` - Mass in kilograms. Zero creates an immovable body.
    /// * `frame` - Starting frame of the body.
    ///
    /// # Returns
    /// The new body, or `PhysicsError::InvalidMass` for a negative or non-finite mass.
    ///
    /// # Example
    /// ```
    /// use rs_rigid_dynamics::models::{FrameOfReference, RigidBody};
    ///
    /// let body = RigidBody::new(2.0, FrameOfReference::default()).unwrap();
    /// assert_eq!(body.inverse_mass, 0.5);
    ///
    /// let ground = RigidBody::new(0.0, FrameOfReference::default()).unwrap();
    /// assert!(!ground.is_movable());
    /// ```
    pub fn new(mass: f64, frame: FrameOfReference) -> Result<Self, PhysicsError> {
        Self::with_config(mass, frame, &DEFAULT_SIMULATION_CONFIG)
    }

    /// Creates a body at rest taking its restitution and friction from `config`.
    ///
    /// # Returns
    /// `PhysicsError::InvalidMass` for a bad mass, or the error from `SimulationConfig::validate`.
    pub fn with_config(mass: f64, frame: FrameOfReference, config: &SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::InvalidMass);
        }
        let inverse_mass = if mass == 0.0 { 0.0 } else { 1.0 / mass };
        let inverse_inertia = if inverse_mass == 0.0 { Matrix3::zero() } else { Matrix3::identity() };

        Ok(RigidBody {
            frame,
            velocity: (0.0, 0.0, 0.0),
            angular_velocity: (0.0, 0.0, 0.0),
            acceleration: (0.0, 0.0, 0.0),
            angular_acceleration: (0.0, 0.0, 0.0),
            net_force: (0.0, 0.0, 0.0),
            net_impulse: (0.0, 0.0, 0.0),
            net_torque: (0.0, 0.0, 0.0),
            net_instantaneous_torque: (0.0, 0.0, 0.0),
            previous_net_force: (0.0, 0.0, 0.0),
            previous_net_torque: (0.0, 0.0, 0.0),
            inverse_mass,
            inertia: Matrix3::identity(),
            inverse_inertia,
            coefficient_of_restitution: config.default_restitution,
            static_friction: config.default_static_friction,
            dynamic_friction: config.default_dynamic_friction,
            freeze_translation: false,
            freeze_rotation: false,
        })
    }

    /// Returns the mass, or `None` for an immovable body
    pub fn mass(&self) -> Option<f64> {
        if self.inverse_mass == 0.0 {
            None
        } else {
            Some(1.0 / self.inverse_mass)
        }
    }

    /// Whether forces, impulses and integration affect this body at all
    pub fn is_movable(&self) -> bool {
        self.inverse_mass != 0.0
    }

    pub fn set_restitution(&mut self, restitution: f64) -> Result<(), PhysicsError> {
        if !restitution.is_finite() || restitution < 0.0 {
            return Err(PhysicsError::InvalidCoefficient);
        }
        self.coefficient_of_restitution = restitution;
        Ok(())
    }

    pub fn set_friction(&mut self, static_friction: f64, dynamic_friction: f64) -> Result<(), PhysicsError> {
        let valid = |c: f64| c.is_finite() && c >= 0.0;
        if !valid(static_friction) || !valid(dynamic_friction) {
            return Err(PhysicsError::InvalidCoefficient);
        }
        self.static_friction = static_friction;
        self.dynamic_friction = dynamic_friction;
        Ok(())
    }

    /// Accumulates a force applied at `radius` from the center of mass.
    ///
    /// The force itself is skipped when translation is frozen. The induced torque `radius × force`
    /// is skipped when rotation is frozen. A zero radius induces no rotation.
    pub fn apply_force(&mut self, force: (f64, f64, f64), radius: (f64, f64, f64)) {
        if !self.freeze_translation {
            self.net_force = add_vectors(self.net_force, force);
        }
        if !self.freeze_rotation {
            self.net_torque = add_vectors(self.net_torque, cross_product(radius, force));
        }
    }

    /// Accumulates an impulse applied at `radius`. Folded into velocity at the next integration.
    pub fn apply_impulse(&mut self, impulse: (f64, f64, f64), radius: (f64, f64, f64)) {
        if !self.freeze_translation {
            self.net_impulse = add_vectors(self.net_impulse, impulse);
        }
        if !self.freeze_rotation {
            self.net_instantaneous_torque = add_vectors(self.net_instantaneous_torque, cross_product(radius, impulse));
        }
    }

    pub fn apply_torque(&mut self, torque: (f64, f64, f64)) {
        if !self.freeze_rotation {
            self.net_torque = add_vectors(self.net_torque, torque);
        }
    }

    pub fn apply_instantaneous_torque(&mut self, torque: (f64, f64, f64)) {
        if !self.freeze_rotation {
            self.net_instantaneous_torque = add_vectors(self.net_instantaneous_torque, torque);
        }
    }

    /// Linear velocity of a point (relative to the center of mass) induced by the body's spin alone.
    pub fn calculate_local_linear_velocity(&self, point: (f64, f64, f64)) -> (f64, f64, f64) {
        cross_product(self.angular_velocity, point)
    }

    /// Largest spin-induced velocity among `points` along `direction`.
    ///
    /// Only velocities with a positive component along `direction` are considered. Returns the zero
    /// vector when none qualifies.
    pub fn calculate_max_local_linear_velocity(
        &self,
        points: &[(f64, f64, f64)],
        direction: (f64, f64, f64),
    ) -> (f64, f64, f64) {
        let mut max_dot = 0.0;
        let mut max_velocity = (0.0, 0.0, 0.0);
        for point in points {
            let local = self.calculate_local_linear_velocity(*point);
            let along = dot_product(local, direction);
            if along > max_dot {
                max_dot = along;
                max_velocity = local;
            }
        }
        max_velocity
    }

    /// Inertia tensor expressed in world axes (`R * I * Rᵀ`)
    pub fn moment_of_inertia_in_world_space(&self) -> Matrix3 {
        self.inertia.rotated_by(&self.frame.rotation)
    }

    /// Inverse inertia tensor expressed in world axes (`R * I⁻¹ * Rᵀ`)
    pub fn inverse_inertia_in_world_space(&self) -> Matrix3 {
        self.inverse_inertia.rotated_by(&self.frame.rotation)
    }

    /// Fits the inertia tensor to a solid cuboid spanning the body's scaled ±1 cube.
    ///
    /// Uses `I_x = m (h² + d²) / 12` and its permutations, with each side `2 * scale`.
    /// Immovable bodies are left untouched.
    pub fn set_inertia_of_cuboid(&mut self) {
        let (sx, sy, sz) = self.frame.scale.diagonal();
        self.set_inertia_of_cuboid_dimensions(2.0 * sx, 2.0 * sy, 2.0 * sz);
    }

    /// Fits the inertia tensor to a solid cuboid with the given full side lengths.
    pub fn set_inertia_of_cuboid_dimensions(&mut self, width: f64, height: f64, depth: f64) {
        let Some(mass) = self.mass() else {
            return;
        };
        let ix = mass * (height * height + depth * depth) / 12.0;
        let iy = mass * (width * width + depth * depth) / 12.0;
        let iz = mass * (width * width + height * height) / 12.0;
        self.set_principal_inertia((ix, iy, iz));
    }

    /// Fits the inertia tensor to a solid sphere, `I = 2/5 m r²` on every axis.
    pub fn set_inertia_of_sphere(&mut self, radius: f64) {
        let Some(mass) = self.mass() else {
            return;
        };
        let moment = 0.4 * mass * radius * radius;
        self.set_principal_inertia((moment, moment, moment));
    }

    fn set_principal_inertia(&mut self, moments: (f64, f64, f64)) {
        let invert = |i: f64| if i == 0.0 { 0.0 } else { 1.0 / i };
        self.inertia = Matrix3::from_diagonal(moments);
        self.inverse_inertia = Matrix3::from_diagonal((invert(moments.0), invert(moments.1), invert(moments.2)));
    }

    /// Zeroes every per-step accumulator
    pub fn reset_accumulators(&mut self) {
        self.net_force = (0.0, 0.0, 0.0);
        self.net_impulse = (0.0, 0.0, 0.0);
        self.net_torque = (0.0, 0.0, 0.0);
        self.net_instantaneous_torque = (0.0, 0.0, 0.0);
    }
}
