mod config;
mod constants;
mod errors;
pub mod math_helpers;

pub use config::*;
pub use constants::*;
pub use errors::*;

#[cfg(test)]
mod math_helpers_tests;
