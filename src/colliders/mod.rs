mod aabb_collider;
mod collider;
mod convex_hull_collider;
mod sphere_collider;

pub use aabb_collider::*;
pub use collider::*;
pub use convex_hull_collider::*;
pub use sphere_collider::*;

#[cfg(test)]
mod colliders_tests;
