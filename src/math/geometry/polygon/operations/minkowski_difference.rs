// src/math/geometry/polygon/operations/minkowski_difference.rs

use super::super::{GeometryResult, Polygon};
use super::clipping::{ClipStrategy, HalfPlane, PolygonClipper};
use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point2D},
    utils::{angles, constants},
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Parameter der Minkowski-Differenz über abgetastete Stützfunktionen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceConfig {
    /// Anzahl gleichmäßig verteilter Richtungen über [0, 2π)
    pub direction_count: usize,
    /// Endliche Schranke, die unbeschränkte Halbebenen ersetzt
    pub practical_infinity: f64,
    pub clip_strategy: ClipStrategy,
}

impl Default for DifferenceConfig {
    fn default() -> Self {
        Self {
            direction_count: constants::DEFAULT_DIRECTION_COUNT,
            practical_infinity: constants::DEFAULT_PRACTICAL_INFINITY,
            clip_strategy: ClipStrategy::default(),
        }
    }
}

impl DifferenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction_count(mut self, count: usize) -> Self {
        self.direction_count = count;
        self
    }

    pub fn with_practical_infinity(mut self, bound: f64) -> Self {
        self.practical_infinity = bound;
        self
    }

    pub fn with_clip_strategy(mut self, strategy: ClipStrategy) -> Self {
        self.clip_strategy = strategy;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.direction_count == 0 {
            return Err(MathError::invalid_parameter(
                "direction_count",
                "must be greater than 0",
            ));
        }

        if !(self.practical_infinity > 0.0 && self.practical_infinity.is_finite()) {
            return Err(MathError::invalid_parameter(
                "practical_infinity",
                "must be positive and finite",
            ));
        }

        Ok(())
    }
}

/// Approximiert A ⊖ B = {x : x + B ⊆ A} durch den Schnitt abgetasteter Halbebenen.
///
/// Für jede Richtung u wird `{x : x·u ≤ max(0, h_A(u) - h_B(u))}` mit der
/// Arbeitsregion geschnitten. Wird die Region leer, endet die Schleife früh
/// (in Winkelreihenfolge) und das Ergebnis ist `GeometryResult::Empty`.
pub fn minkowski_difference(
    a: &Polygon,
    b: &Polygon,
    config: &DifferenceConfig,
) -> MathResult<GeometryResult> {
    config.validate()?;

    if a.is_degenerate() || b.is_degenerate() {
        return Ok(GeometryResult::Empty);
    }

    if let Some(extent) = a.bounds().map(|bounds| bounds.max_abs_coordinate()) {
        if extent * 10.0 > config.practical_infinity {
            debug!(
                "minkowski_difference: practical infinity {} is small relative to input extent {}",
                config.practical_infinity, extent
            );
        }
    }

    let clipper = PolygonClipper::new();
    let mut region =
        GeometryResult::Single(Polygon::new(
            Bounds2D::square(Point2D::ZERO, config.practical_infinity)
                .corners()
                .to_vec(),
        ));

    for (index, u) in angles::unit_directions(config.direction_count)
        .into_iter()
        .enumerate()
    {
        // Beide Polygone sind nicht entartet, die Stützwerte existieren
        let (Some(h_a), Some(h_b)) = (a.support(u), b.support(u)) else {
            return Ok(GeometryResult::Empty);
        };
        let dist = (h_a - h_b).max(0.0);
        let half_plane = HalfPlane::new(u, dist);

        region = clip_region(&clipper, region, &half_plane, config);

        if region.is_empty() {
            debug!(
                "minkowski_difference: region became empty at direction {} of {}",
                index, config.direction_count
            );
            return Ok(GeometryResult::Empty);
        }
    }

    trace!("minkowski_difference: area {:.6}", region.area());
    Ok(region)
}

/// Schneidet jede Komponente der Region mit der Halbebene.
fn clip_region(
    clipper: &PolygonClipper,
    region: GeometryResult,
    half_plane: &HalfPlane,
    config: &DifferenceConfig,
) -> GeometryResult {
    match region {
        GeometryResult::Empty => GeometryResult::Empty,
        GeometryResult::Single(polygon) => clipper.clip_half_plane(
            &polygon,
            half_plane,
            config.practical_infinity,
            config.clip_strategy,
        ),
        GeometryResult::Multi(parts) => {
            let clipped = parts
                .iter()
                .flat_map(|part| {
                    clipper
                        .clip_half_plane(
                            part,
                            half_plane,
                            config.practical_infinity,
                            config.clip_strategy,
                        )
                        .polygons()
                        .into_iter()
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .collect();
            GeometryResult::from_polygons(clipped)
        }
    }
}
