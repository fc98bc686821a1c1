//! Combination module split into submodules for clarity

mod display;
mod group;
mod types;

pub use group::Group;
pub use types::{Combination, Enumeration};

#[cfg(test)]
mod tests;
