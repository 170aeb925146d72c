use crate::models::RigidBody;
use crate::utils::math_helpers::scale_vector;

/// World-space force and acceleration fields applied uniformly to every dynamic body each step.
///
/// Accelerations (gravity, for instance) are scaled by each body's mass before being
/// accumulated, so every body experiences the same acceleration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalForces {
    pub forces: Vec<(f64, f64, f64)>,
    pub accelerations: Vec<(f64, f64, f64)>,
}

impl GlobalForces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: (f64, f64, f64)) {
        self.forces.push(force);
    }

    pub fn add_acceleration(&mut self, acceleration: (f64, f64, f64)) {
        self.accelerations.push(acceleration);
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty() && self.accelerations.is_empty()
    }

    /// Accumulates every global force and mass-scaled acceleration onto `body` at its center.
    ///
    /// Immovable bodies receive nothing.
    pub fn apply_to(&self, body: &mut RigidBody) {
        let Some(mass) = body.mass() else {
            return;
        };
        for force in &self.forces {
            body.apply_force(*force, (0.0, 0.0, 0.0));
        }
        for acceleration in &self.accelerations {
            body.apply_force(scale_vector(*acceleration, mass), (0.0, 0.0, 0.0));
        }
    }
}
