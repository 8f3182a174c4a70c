// src/math/optimization/config.rs
use crate::math::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};

/// Beschränkte 1-D Suche (Brent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalarSearchConfig {
    /// Absolute Toleranz in x
    pub tolerance: f64,
    /// Obergrenze für Funktionsauswertungen
    pub max_evaluations: usize,
    /// Intervall, falls die Flächenverhältnisse keine Schranken liefern
    pub fallback_bounds: (f64, f64),
}

impl Default for ScalarSearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_evaluations: 500,
            fallback_bounds: (0.0, 2.0),
        }
    }
}

impl ScalarSearchConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_evaluations(mut self, evaluations: usize) -> Self {
        self.max_evaluations = evaluations;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance > 0.0) {
            return Err(MathError::invalid_configuration(
                "Scalar search tolerance must be greater than 0",
            ));
        }
        if self.max_evaluations == 0 {
            return Err(MathError::invalid_configuration(
                "Scalar search needs at least one evaluation",
            ));
        }
        validate_bounds("fallback_bounds", self.fallback_bounds)
    }
}

/// Nelder-Mead Simplex mit Box-Schranken
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplexConfig {
    /// Iterationen pro Dimension
    pub max_iterations_per_dimension: usize,
    pub x_tolerance: f64,
    pub f_tolerance: f64,
    /// Relative Kantenlänge des Start-Simplex
    pub initial_step: f64,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iterations_per_dimension: 200,
            x_tolerance: 1e-4,
            f_tolerance: 1e-4,
            initial_step: 0.05,
        }
    }
}

impl SimplexConfig {
    pub fn with_max_iterations_per_dimension(mut self, iterations: usize) -> Self {
        self.max_iterations_per_dimension = iterations;
        self
    }

    pub fn max_iterations(&self, dimension: usize) -> usize {
        self.max_iterations_per_dimension * dimension.max(1)
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.max_iterations_per_dimension == 0 {
            return Err(MathError::invalid_configuration(
                "Simplex iteration cap must be greater than 0",
            ));
        }
        if !(self.x_tolerance > 0.0 && self.f_tolerance > 0.0) {
            return Err(MathError::invalid_configuration(
                "Simplex tolerances must be greater than 0",
            ));
        }
        if !(self.initial_step > 0.0) {
            return Err(MathError::invalid_configuration(
                "Simplex initial step must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Suche über sternförmige Polygone mit m Vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusSearchConfig {
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Startradius für jeden Vertex
    pub initial_radius: f64,
    /// Feste positive Schranken je Radius
    pub radius_bounds: (f64, f64),
    pub simplex: SimplexConfig,
}

impl Default for RadiusSearchConfig {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            max_vertices: 8,
            initial_radius: 0.5,
            radius_bounds: (0.05, 2.0),
            simplex: SimplexConfig::default(),
        }
    }
}

impl RadiusSearchConfig {
    pub fn with_vertex_range(mut self, min: usize, max: usize) -> Self {
        self.min_vertices = min;
        self.max_vertices = max;
        self
    }

    pub fn with_initial_radius(mut self, radius: f64) -> Self {
        self.initial_radius = radius;
        self
    }

    pub fn with_radius_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.radius_bounds = (lower, upper);
        self
    }

    pub fn with_simplex(mut self, simplex: SimplexConfig) -> Self {
        self.simplex = simplex;
        self
    }

    pub fn vertex_counts(&self) -> std::ops::RangeInclusive<usize> {
        self.min_vertices..=self.max_vertices
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.min_vertices < 3 {
            return Err(MathError::invalid_configuration(
                "Star polygons need at least 3 vertices",
            ));
        }
        if self.min_vertices > self.max_vertices {
            return Err(MathError::invalid_configuration(format!(
                "Vertex range {}..={} is empty",
                self.min_vertices, self.max_vertices
            )));
        }
        validate_bounds("radius_bounds", self.radius_bounds)?;
        if self.radius_bounds.0 <= 0.0 {
            return Err(MathError::invalid_configuration(
                "Radius bounds must be strictly positive",
            ));
        }
        if !(self.radius_bounds.0..=self.radius_bounds.1).contains(&self.initial_radius) {
            return Err(MathError::invalid_configuration(
                "Initial radius must lie inside the radius bounds",
            ));
        }
        self.simplex.validate()
    }
}

/// Intervall-Prüfung für Suchschranken
pub fn validate_bounds(name: &str, (lower, upper): (f64, f64)) -> MathResult<()> {
    if !(lower.is_finite() && upper.is_finite()) || lower > upper {
        return Err(MathError::invalid_parameter(
            name,
            format!("invalid interval [{lower}, {upper}]"),
        ));
    }
    Ok(())
}
