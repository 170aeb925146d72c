/// Supplies the simulation step size, once per frame
pub trait DeltaTimeSource {
    fn delta_seconds(&mut self) -> f64;
}

/// A constant step size, for deterministic simulations and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimeStep {
    pub dt: f64,
}

impl FixedTimeStep {
    pub fn new(dt: f64) -> Self {
        FixedTimeStep { dt }
    }
}

impl DeltaTimeSource for FixedTimeStep {
    fn delta_seconds(&mut self) -> f64 {
        self.dt
    }
}

impl<F: FnMut() -> f64> DeltaTimeSource for F {
    fn delta_seconds(&mut self) -> f64 {
        self()
    }
}
