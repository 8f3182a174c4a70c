// src/math/optimization/mod.rs

pub mod bounded_scalar;
pub mod config;
pub mod nelder_mead;
pub mod similarity;

pub use bounded_scalar::ScalarMinimum;
pub use config::{RadiusSearchConfig, ScalarSearchConfig, SimplexConfig};
pub use nelder_mead::{BoxBounds, VectorMinimum};
pub use similarity::{
    RadiiFit, ScaleFit, best_fit, optimize_radii, optimize_scale, scale_search_bounds,
    sweep_vertex_counts,
};
