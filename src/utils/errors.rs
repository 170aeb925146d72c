use std::fmt;
use std::error::Error;

/// Represents errors raised while building or driving a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates an invalid mass value (negative or not finite).
    InvalidMass,
    /// Indicates an invalid coefficient (negative or not finite restitution or friction).
    InvalidCoefficient,
    /// Indicates an invalid time step (negative or not finite).
    InvalidTimeStep,
    /// Indicates a non-positive or non-finite collider dimension.
    InvalidDimension,
    /// A collision record referenced an object that does not exist.
    InvalidObjectIndex { index: usize, count: usize },
    /// A collision record paired an object with itself.
    SelfCollision(usize),
    /// A general error for calculations that produce invalid results.
    CalculationError(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "Invalid mass value"),
            PhysicsError::InvalidCoefficient => write!(f, "Invalid coefficient value"),
            PhysicsError::InvalidTimeStep => write!(f, "Invalid time step"),
            PhysicsError::InvalidDimension => write!(f, "Invalid collider dimension"),
            PhysicsError::InvalidObjectIndex { index, count } => {
                write!(f, "Object index {} out of range for {} objects", index, count)
            }
            PhysicsError::SelfCollision(index) => write!(f, "Object {} cannot collide with itself", index),
            PhysicsError::CalculationError(msg) => write!(f, "Calculation error: {}", msg),
        }
    }
}

impl Error for PhysicsError {}
