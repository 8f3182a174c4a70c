// src/analysis/config.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::{DifferenceConfig, InscribedCircleConfig, Polygon},
    optimization::{RadiusSearchConfig, ScalarSearchConfig},
    types::Point2D,
    utils::constants::DEFAULT_CIRCLE_SEGMENTS,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Gesamtkonfiguration eines Analyse-Laufs.
///
/// Fehlende Felder in einer JSON-Datei fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub difference: DifferenceConfig,
    pub inscribed_circle: InscribedCircleConfig,
    pub scale_search: ScalarSearchConfig,
    pub radius_search: RadiusSearchConfig,
    /// Segmente beim Polygonisieren von Kreisen (B_in, B_out, Referenzkreis)
    pub circle_segments: usize,
    /// Zielpfad für einen SVG-Export, falls gesetzt
    pub svg_output: Option<PathBuf>,
    /// Vertex-Listen von A und B; ohne Angabe wird das Referenzszenario verwendet
    pub shape_a: Option<Vec<Point2D>>,
    pub shape_b: Option<Vec<Point2D>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            difference: DifferenceConfig::default(),
            inscribed_circle: InscribedCircleConfig::default(),
            scale_search: ScalarSearchConfig::default(),
            radius_search: RadiusSearchConfig::default(),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            svg_output: None,
            shape_a: None,
            shape_b: None,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lädt und validiert eine Konfiguration aus einer JSON-Datei.
    pub fn from_json_file(path: impl AsRef<Path>) -> MathResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!("Loaded analysis config from {}", path.display());
        Ok(config)
    }

    pub fn with_difference(mut self, difference: DifferenceConfig) -> Self {
        self.difference = difference;
        self
    }

    pub fn with_inscribed_circle(mut self, inscribed_circle: InscribedCircleConfig) -> Self {
        self.inscribed_circle = inscribed_circle;
        self
    }

    pub fn with_scale_search(mut self, scale_search: ScalarSearchConfig) -> Self {
        self.scale_search = scale_search;
        self
    }

    pub fn with_radius_search(mut self, radius_search: RadiusSearchConfig) -> Self {
        self.radius_search = radius_search;
        self
    }

    pub fn with_circle_segments(mut self, segments: usize) -> Self {
        self.circle_segments = segments;
        self
    }

    pub fn with_svg_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.svg_output = Some(path.into());
        self
    }

    pub fn with_shapes(mut self, a: &Polygon, b: &Polygon) -> Self {
        self.shape_a = Some(a.vertices().to_vec());
        self.shape_b = Some(b.vertices().to_vec());
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        self.difference.validate()?;
        self.inscribed_circle.validate()?;
        self.scale_search.validate()?;
        self.radius_search.validate()?;

        if self.circle_segments < 3 {
            return Err(MathError::invalid_configuration(format!(
                "circle_segments must be at least 3, got {}",
                self.circle_segments
            )));
        }

        for (name, shape) in [("shape_a", &self.shape_a), ("shape_b", &self.shape_b)] {
            if let Some(vertices) = shape {
                if vertices.len() < 3 {
                    return Err(MathError::invalid_parameter(
                        name,
                        format!("needs at least 3 vertices, got {}", vertices.len()),
                    ));
                }
            }
        }

        Ok(())
    }
}
