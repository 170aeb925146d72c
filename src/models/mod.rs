mod frame_of_reference;
mod matrix3;
mod physical_object;
mod rigid_body;

pub use frame_of_reference::*;
pub use matrix3::*;
pub use physical_object::*;
pub use rigid_body::*;
