mod global_forces;
mod integrator;
mod physics_system;
mod time_step;

pub use global_forces::*;
pub use integrator::*;
pub use physics_system::*;
pub use time_step::*;
