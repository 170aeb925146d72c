// src/dynamics/physics_system.rs

use log::{debug, warn};

use crate::dynamics::{integrate_body, synchronize_object, DeltaTimeSource, GlobalForces};
use crate::interactions::{resolve_collisions, Collision};
use crate::models::PhysicalObject;
use crate::utils::{PhysicsError, SimulationConfig, STANDARD_GRAVITY};

/// A self-contained simulation: the objects, the global force fields and the tunables.
///
/// Nothing is process-wide, so any number of independent systems can run side by side.
#[derive(Debug, Clone, Default)]
pub struct PhysicsSystem {
    pub objects: Vec<PhysicalObject>,
    pub global_forces: GlobalForces,
    pub config: SimulationConfig,
}

impl PhysicsSystem {
    /// Creates an empty `PhysicsSystem` with the given configuration.
    ///
    /// # Returns
    /// The new system, or the error from `SimulationConfig::validate`.
    ///
    /// # Example
    /// ```
    /// use rs_rigid_dynamics::dynamics::PhysicsSystem;
    /// use rs_rigid_dynamics::utils::{SimulationConfig, DEFAULT_SIMULATION_CONFIG};
    ///
    /// let system = PhysicsSystem::new(DEFAULT_SIMULATION_CONFIG).unwrap();
    /// assert!(system.objects.is_empty());
    ///
    /// let sticky = SimulationConfig::new(None, None, Some(-1.0), None, None, None);
    /// assert!(PhysicsSystem::new(sticky).is_err());
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(PhysicsSystem {
            objects: Vec::new(),
            global_forces: GlobalForces::new(),
            config,
        })
    }

    /// Adds an object and returns its index, which collision records refer to.
    pub fn add_object(&mut self, object: PhysicalObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn object(&self, index: usize) -> Option<&PhysicalObject> {
        self.objects.get(index)
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut PhysicalObject> {
        self.objects.get_mut(index)
    }

    pub fn add_global_force(&mut self, force: (f64, f64, f64)) {
        self.global_forces.add_force(force);
    }

    pub fn add_global_acceleration(&mut self, acceleration: (f64, f64, f64)) {
        self.global_forces.add_acceleration(acceleration);
    }

    /// Adds standard gravity along -y as a global acceleration.
    ///
    /// # Example
    /// ```
    /// let mut system = rs_rigid_dynamics::dynamics::PhysicsSystem::default();
    /// system.apply_gravity();
    /// assert_eq!(system.global_forces.accelerations, vec![(0.0, -9.80665, 0.0)]);
    /// ```
    pub fn apply_gravity(&mut self) {
        self.add_global_acceleration((0.0, -STANDARD_GRAVITY, 0.0));
    }

    pub fn clear_global_forces(&mut self) {
        self.global_forces = GlobalForces::new();
    }

    /// Applies global forces and integrates every body, in object order.
    pub fn integrate(&mut self, dt: f64) -> Result<(), PhysicsError> {
        validate_time_step(dt)?;
        for object in &mut self.objects {
            if let Some(body) = object.body.as_mut() {
                integrate_body(body, &self.global_forces, dt);
            }
        }
        Ok(())
    }

    /// Copies body frames into object frames and resets every body's accumulators.
    pub fn synchronize(&mut self, dt: f64) -> Result<(), PhysicsError> {
        validate_time_step(dt)?;
        for object in &mut self.objects {
            synchronize_object(object, dt);
        }
        Ok(())
    }

    /// Integrates and then synchronizes all bodies.
    pub fn update(&mut self, dt: f64) -> Result<(), PhysicsError> {
        self.integrate(dt)?;
        self.synchronize(dt)
    }

    /// Resolves collision records in the order given.
    ///
    /// # Returns
    /// The number of collisions that needed resolving.
    pub fn resolve_collisions(&mut self, collisions: &[Collision]) -> Result<usize, PhysicsError> {
        resolve_collisions(&mut self.objects, collisions, &self.config)
    }

    /// Runs one frame: update all bodies, ask `detector` for this frame's collisions, resolve them.
    ///
    /// # Arguments
    /// * `dt` - The time step duration in seconds.
    /// * `detector` - The broad and narrow phase. It receives the synchronized objects and returns collision records.
    ///
    /// # Returns
    /// The number of collisions that needed resolving.
    pub fn step<D>(&mut self, dt: f64, detector: D) -> Result<usize, PhysicsError>
    where
        D: FnOnce(&[PhysicalObject]) -> Vec<Collision>,
    {
        self.update(dt)?;
        let collisions = detector(&self.objects);
        let resolved = self.resolve_collisions(&collisions)?;
        debug!(
            "Step of {}s: {} objects, {} collisions, {} resolved",
            dt,
            self.objects.len(),
            collisions.len(),
            resolved
        );
        Ok(resolved)
    }

    /// Runs one frame using a step size taken from `time_source`.
    pub fn step_with<S, D>(&mut self, time_source: &mut S, detector: D) -> Result<usize, PhysicsError>
    where
        S: DeltaTimeSource,
        D: FnOnce(&[PhysicalObject]) -> Vec<Collision>,
    {
        let dt = time_source.delta_seconds();
        self.step(dt, detector)
    }
}

fn validate_time_step(dt: f64) -> Result<(), PhysicsError> {
    if !dt.is_finite() || dt < 0.0 {
        warn!("Rejected time step {}", dt);
        return Err(PhysicsError::InvalidTimeStep);
    }
    Ok(())
}
