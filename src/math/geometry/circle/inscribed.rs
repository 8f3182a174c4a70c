// src/math/geometry/circle/inscribed.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{GeometryResult, Polygon, operations::primitives},
    types::Circle,
    utils::constants,
};
use log::trace;
use serde::{Deserialize, Serialize};

/// Parameter der Rastersuche für den größten Inkreis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InscribedCircleConfig {
    /// Punkte pro Achse über der Bounding Box
    pub grid_resolution: usize,
}

impl Default for InscribedCircleConfig {
    fn default() -> Self {
        Self {
            grid_resolution: constants::DEFAULT_GRID_RESOLUTION,
        }
    }
}

impl InscribedCircleConfig {
    pub fn with_grid_resolution(mut self, resolution: usize) -> Self {
        self.grid_resolution = resolution;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.grid_resolution < 2 {
            return Err(MathError::invalid_parameter(
                "grid_resolution",
                "need at least 2 grid points per axis",
            ));
        }
        Ok(())
    }
}

/// Größter Inkreis per Rastersuche.
///
/// Tastet ein `grid_resolution × grid_resolution` Raster über der Bounding Box
/// ab, behält nur Punkte strikt im Inneren und wählt den Punkt mit dem größten
/// Randabstand. `None`, wenn kein Rasterpunkt im Inneren liegt.
/// Der Fehler skaliert mit dem Rasterabstand.
pub fn largest_inscribed_circle(
    polygon: &Polygon,
    config: &InscribedCircleConfig,
) -> MathResult<Option<Circle>> {
    config.validate()?;

    let Some(bounds) = polygon.bounds() else {
        return Ok(None);
    };
    if polygon.is_degenerate() {
        return Ok(None);
    }

    let best = bounds
        .grid_points(config.grid_resolution)
        .filter(|&p| primitives::contains(polygon, p))
        .map(|p| (p, primitives::boundary_distance(polygon, p)))
        .fold(None, |best: Option<(_, f64)>, candidate| match best {
            Some(b) if b.1 >= candidate.1 => Some(b),
            _ => Some(candidate),
        });

    let circle = best
        .map(|(center, radius)| Circle::new(center, radius))
        .filter(|c| !c.is_degenerate());

    trace!("largest_inscribed_circle: {:?}", circle);
    Ok(circle)
}

/// Größter Inkreis über alle Komponenten eines Geometrie-Ergebnisses.
pub fn largest_inscribed_circle_of(
    result: &GeometryResult,
    config: &InscribedCircleConfig,
) -> MathResult<Option<Circle>> {
    match result {
        GeometryResult::Empty => {
            config.validate()?;
            Ok(None)
        }
        GeometryResult::Single(polygon) => largest_inscribed_circle(polygon, config),
        GeometryResult::Multi(parts) => {
            let mut best: Option<Circle> = None;
            for part in parts {
                if let Some(circle) = largest_inscribed_circle(part, config)? {
                    if best.is_none_or(|b| circle.radius > b.radius) {
                        best = Some(circle);
                    }
                }
            }
            Ok(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::polygon::ShapeGenerators, types::Point2D};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_square_inscribed_circle() {
        let square = ShapeGenerators::square(2.0, Point2D::ZERO);
        // Ungerade Auflösung trifft das Zentrum exakt
        let config = InscribedCircleConfig::default().with_grid_resolution(101);
        let circle = largest_inscribed_circle(&square, &config).unwrap().unwrap();

        assert_abs_diff_eq!(circle.center.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.center.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.radius, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_stays_inside_polygon() {
        let pentagon =
            Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (6.0, 2.0), (3.0, 4.0), (1.0, 2.0)]);
        let config = InscribedCircleConfig::default().with_grid_resolution(200);
        let circle = largest_inscribed_circle(&pentagon, &config)
            .unwrap()
            .unwrap();

        let boundary = ShapeGenerators::from_circle(&circle, 128);
        for &p in boundary.vertices() {
            assert!(
                primitives::contains(&pentagon, p)
                    || primitives::boundary_distance(&pentagon, p) < 1e-6
            );
        }
    }

    #[test]
    fn test_empty_and_thin_polygons() {
        let config = InscribedCircleConfig::default();
        assert!(
            largest_inscribed_circle(&Polygon::empty(), &config)
                .unwrap()
                .is_none()
        );

        let line = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!(largest_inscribed_circle(&line, &config).unwrap().is_none());
        assert!(
            largest_inscribed_circle_of(&GeometryResult::Empty, &config)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_multi_picks_largest_component() {
        let small = ShapeGenerators::square(1.0, Point2D::ZERO);
        let large = ShapeGenerators::square(3.0, Point2D::new(10.0, 0.0));
        let result = GeometryResult::Multi(vec![small, large]);
        let config = InscribedCircleConfig::default().with_grid_resolution(51);

        let circle = largest_inscribed_circle_of(&result, &config)
            .unwrap()
            .unwrap();
        assert!(circle.center.x > 5.0);
        assert_abs_diff_eq!(circle.radius, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_resolution() {
        let square = ShapeGenerators::square(2.0, Point2D::ZERO);
        let config = InscribedCircleConfig::default().with_grid_resolution(1);
        assert!(largest_inscribed_circle(&square, &config).is_err());
    }
}
