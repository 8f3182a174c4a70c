// src/math/geometry/polygon/operations/mod.rs
pub mod clipping;
pub mod minkowski_difference;
pub mod minkowski_sum;
pub mod primitives;

pub use minkowski_difference::minkowski_difference;
pub use minkowski_sum::minkowski_sum;
