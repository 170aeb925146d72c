// src/utils/config.rs
use crate::utils::{DEFAULT_SIMULATION_CONFIG, PhysicsError};

/// Tunables shared by the integrator, the shape queries and the collision resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Dot-product slack within which two points count as equally far along a direction.
    pub furthest_point_tolerance: f64,
    pub default_restitution: f64,
    pub default_static_friction: f64,
    pub default_dynamic_friction: f64,
    /// Restitution substituted for an object that has no rigid body.
    pub absent_body_restitution: f64,
    /// Friction coefficient substituted for an object that has no rigid body.
    pub absent_body_friction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    /// Creates a configuration, falling back to `DEFAULT_SIMULATION_CONFIG` for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_rigid_dynamics::utils::SimulationConfig;
    ///
    /// let config = SimulationConfig::new(Some(1e-5), None, None, None, None, None);
    /// assert_eq!(config.furthest_point_tolerance, 1e-5);
    /// assert_eq!(config.default_restitution, 1.0);
    /// ```
    pub fn new(
        furthest_point_tolerance: Option<f64>,
        default_restitution: Option<f64>,
        default_static_friction: Option<f64>,
        default_dynamic_friction: Option<f64>,
        absent_body_restitution: Option<f64>,
        absent_body_friction: Option<f64>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            furthest_point_tolerance: furthest_point_tolerance.unwrap_or(default.furthest_point_tolerance),
            default_restitution: default_restitution.unwrap_or(default.default_restitution),
            default_static_friction: default_static_friction.unwrap_or(default.default_static_friction),
            default_dynamic_friction: default_dynamic_friction.unwrap_or(default.default_dynamic_friction),
            absent_body_restitution: absent_body_restitution.unwrap_or(default.absent_body_restitution),
            absent_body_friction: absent_body_friction.unwrap_or(default.absent_body_friction),
        }
    }

    /// Checks that every field is finite and non-negative.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let coefficients = [
            self.default_restitution,
            self.default_static_friction,
            self.default_dynamic_friction,
            self.absent_body_restitution,
            self.absent_body_friction,
        ];
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(PhysicsError::InvalidCoefficient);
        }
        if !self.furthest_point_tolerance.is_finite() || self.furthest_point_tolerance < 0.0 {
            return Err(PhysicsError::CalculationError(
                "Furthest point tolerance must be a non-negative finite value".to_string(),
            ));
        }
        Ok(())
    }
}
