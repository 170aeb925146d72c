mod collision;
mod contact_geometry;
mod contact_points;
mod decoupling;
mod friction;
mod impulses;
mod resolution_check;
mod resolver;

pub use collision::*;
pub use contact_geometry::*;
pub use contact_points::*;
pub use decoupling::*;
pub use friction::*;
pub use impulses::*;
pub use resolution_check::*;
pub use resolver::*;

#[cfg(test)]
mod contact_points_tests;
#[cfg(test)]
mod friction_tests;
