use crate::utils;

/// Slack used when collecting tied support points along a unit direction.
pub const FURTHEST_POINT_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_SIMULATION_CONFIG: utils::SimulationConfig = utils::SimulationConfig {
    furthest_point_tolerance: FURTHEST_POINT_TOLERANCE,
    default_restitution: 1.0,
    default_static_friction: 1.0,
    default_dynamic_friction: 1.0,
    absent_body_restitution: 1.0,
    absent_body_friction: 1.0,
};

/// Standard gravitational acceleration in m/s²
pub const STANDARD_GRAVITY: f64 = 9.80665;
