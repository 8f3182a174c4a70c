// src/math/optimization/similarity.rs

//! Hausdorff-basierte Anpassung von Minkowski-Summen.
//!
//! Beide Varianten reduzieren sich auf eine reine Zielfunktion
//! `Parameter -> Abstand`, die an einen beschränkten Minimierer übergeben wird.

use super::{
    bounded_scalar,
    config::{RadiusSearchConfig, ScalarSearchConfig, SimplexConfig, validate_bounds},
    nelder_mead::{self, BoxBounds},
};
use crate::math::{
    error::{MathError, MathResult},
    geometry::polygon::{
        AffineTransformable, Polygon, PolygonProperties, minkowski_sum, operations::primitives,
        star_polygon,
    },
    types::Circle,
};
use log::{debug, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Optimaler Skalierungsfaktor für `fixed ⊕ s·variable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleFit {
    pub scale: f64,
    pub distance: f64,
    /// Suchintervall, das tatsächlich verwendet wurde
    pub bounds: (f64, f64),
    /// Abstand bei `s = 1`
    pub baseline_distance: f64,
    pub improved_on_baseline: bool,
    pub converged: bool,
    /// `fixed ⊕ s·variable` beim optimalen `s`
    pub shape: Polygon,
}

/// Optimale Radien eines Sternpolygons für `fixed ⊕ star(radii)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiiFit {
    pub vertex_count: usize,
    pub radii: Vec<f64>,
    pub distance: f64,
    /// Abstand mit den Startradien
    pub baseline_distance: f64,
    pub improved_on_baseline: bool,
    pub converged: bool,
    pub iterations: usize,
    pub shape: Polygon,
}

/// `hausdorff(target, fixed ⊕ scale(variable, s))`; `s ≤ 0` ergibt `+∞`.
pub fn scale_objective(target: &Polygon, fixed: &Polygon, variable: &Polygon, scale: f64) -> f64 {
    match scaled_sum(fixed, variable, scale) {
        Some(candidate) => primitives::hausdorff(target, &candidate),
        None => f64::INFINITY,
    }
}

fn scaled_sum(fixed: &Polygon, variable: &Polygon, scale: f64) -> Option<Polygon> {
    if !(scale > 0.0) {
        return None;
    }
    let scaled = variable.scale_about_centroid(scale).ok()?;
    Some(minkowski_sum(fixed, &scaled))
}

/// Suchintervall aus Flächenverhältnissen:
/// `[sqrt(A_in / A_X), sqrt(A_out / A_X)]`.
///
/// Fehlende Kreise oder nicht-positive Flächen führen auf `fallback`.
pub fn scale_search_bounds(
    variable: &Polygon,
    inscribed: Option<&Circle>,
    enclosing: Option<&Circle>,
    fallback: (f64, f64),
) -> (f64, f64) {
    let shape_area = variable.area();
    let inscribed_area = inscribed.map_or(0.0, Circle::area);
    let enclosing_area = enclosing.map_or(0.0, Circle::area);

    if shape_area <= 0.0 || inscribed_area <= 0.0 || enclosing_area <= 0.0 {
        debug!("scale_search_bounds: non-positive area, using fallback {fallback:?}");
        return fallback;
    }

    let lower = (inscribed_area / shape_area).sqrt();
    let upper = (enclosing_area / shape_area).sqrt();
    if !(lower.is_finite() && upper.is_finite()) || lower > upper {
        return fallback;
    }
    (lower, upper)
}

/// Sucht `s ∈ bounds`, das `hausdorff(target, fixed ⊕ s·variable)` minimiert.
pub fn optimize_scale(
    target: &Polygon,
    fixed: &Polygon,
    variable: &Polygon,
    bounds: (f64, f64),
    config: &ScalarSearchConfig,
) -> MathResult<ScaleFit> {
    validate_bounds("bounds", bounds)?;

    let minimum = bounded_scalar::minimize_bounded(
        |s| scale_objective(target, fixed, variable, s),
        bounds,
        config,
    )?;

    let baseline_distance = scale_objective(target, fixed, variable, 1.0);
    let improved_on_baseline = minimum.value < baseline_distance;
    let shape = scaled_sum(fixed, variable, minimum.x).unwrap_or_else(Polygon::empty);

    // Kein endlicher Wert im Intervall: kein Optimum gefunden
    let converged = minimum.converged && minimum.value.is_finite();
    if !minimum.value.is_finite() {
        warn!(
            "optimize_scale: no finite distance in {bounds:?} (variable shape has {} vertices)",
            variable.len()
        );
    } else if !minimum.converged {
        warn!(
            "optimize_scale: evaluation limit reached after {} evaluations, best s = {}",
            minimum.evaluations, minimum.x
        );
    }
    if !improved_on_baseline {
        warn!(
            "optimize_scale: distance {} does not improve on unscaled baseline {}",
            minimum.value, baseline_distance
        );
    }
    debug!(
        "optimize_scale: s = {} in {:?}, distance = {}",
        minimum.x, bounds, minimum.value
    );

    Ok(ScaleFit {
        scale: minimum.x,
        distance: minimum.value,
        bounds,
        baseline_distance,
        improved_on_baseline,
        converged,
        shape,
    })
}

/// `hausdorff(target, fixed ⊕ star(radii))`; unbrauchbare Sterne ergeben `+∞`.
pub fn radii_objective(target: &Polygon, fixed: &Polygon, radii: &[f64]) -> f64 {
    match star_sum(fixed, radii) {
        Some(candidate) => primitives::hausdorff(target, &candidate),
        None => f64::INFINITY,
    }
}

fn star_sum(fixed: &Polygon, radii: &[f64]) -> Option<Polygon> {
    let star = star_polygon(radii, radii.len()).ok()?;
    Some(minkowski_sum(fixed, &star))
}

/// Optimiert die Radien eines Sternpolygons mit `vertex_count` Vertices.
///
/// Nicht-Konvergenz ist kein Fehler: das beste gefundene Ergebnis wird mit
/// `converged = false` zurückgegeben.
pub fn optimize_radii(
    target: &Polygon,
    fixed: &Polygon,
    vertex_count: usize,
    initial_radii: &[f64],
    radius_bounds: (f64, f64),
    config: &SimplexConfig,
) -> MathResult<RadiiFit> {
    if vertex_count < 3 {
        return Err(MathError::InsufficientPoints {
            expected: 3,
            actual: vertex_count,
        });
    }
    if initial_radii.len() != vertex_count {
        return Err(MathError::DimensionMismatch {
            expected: vertex_count,
            actual: initial_radii.len(),
        });
    }
    validate_bounds("radius_bounds", radius_bounds)?;
    if radius_bounds.0 <= 0.0 {
        return Err(MathError::invalid_parameter(
            "radius_bounds",
            "radii must be bounded away from zero",
        ));
    }

    let bounds = BoxBounds::uniform(vertex_count, radius_bounds)?;
    let start = DVector::from_column_slice(initial_radii);

    let minimum = nelder_mead::minimize_bounded(
        |r| radii_objective(target, fixed, r.as_slice()),
        &start,
        &bounds,
        config,
    )?;

    let baseline_distance = radii_objective(target, fixed, bounds.clamp(&start).as_slice());
    let improved_on_baseline = minimum.value < baseline_distance;
    let radii: Vec<f64> = minimum.x.iter().copied().collect();
    let shape = star_sum(fixed, &radii).unwrap_or_else(Polygon::empty);

    let converged = minimum.converged && minimum.value.is_finite();
    if !minimum.value.is_finite() {
        warn!("optimize_radii(m = {vertex_count}): no finite distance inside the radius bounds");
    } else if !minimum.converged {
        warn!(
            "optimize_radii(m = {vertex_count}): no convergence after {} iterations, reporting best found distance {}",
            minimum.iterations, minimum.value
        );
    }
    if !improved_on_baseline {
        warn!(
            "optimize_radii(m = {vertex_count}): distance {} does not improve on initial radii baseline {}",
            minimum.value, baseline_distance
        );
    }

    Ok(RadiiFit {
        vertex_count,
        radii,
        distance: minimum.value,
        baseline_distance,
        improved_on_baseline,
        converged,
        iterations: minimum.iterations,
        shape,
    })
}

/// Führt `optimize_radii` für jedes `m` im konfigurierten Bereich aus.
pub fn sweep_vertex_counts(
    target: &Polygon,
    fixed: &Polygon,
    config: &RadiusSearchConfig,
) -> MathResult<Vec<RadiiFit>> {
    config.validate()?;

    config
        .vertex_counts()
        .map(|m| {
            let initial = vec![config.initial_radius; m];
            let fit = optimize_radii(
                target,
                fixed,
                m,
                &initial,
                config.radius_bounds,
                &config.simplex,
            )?;
            debug!(
                "sweep_vertex_counts: m = {m}, distance = {}, converged = {}",
                fit.distance, fit.converged
            );
            Ok(fit)
        })
        .collect()
}

/// Bestes Ergebnis eines Sweeps (kleinster Abstand).
pub fn best_fit(fits: &[RadiiFit]) -> Option<&RadiiFit> {
    fits.iter()
        .filter(|f| f.distance.is_finite())
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::polygon::ShapeGenerators, types::Point2D};
    use approx::assert_abs_diff_eq;

    fn unit_square() -> Polygon {
        ShapeGenerators::square(1.0, Point2D::ZERO)
    }

    #[test]
    fn test_scale_objective_rejects_non_positive_scale() {
        let a = ShapeGenerators::square(3.0, Point2D::ZERO);
        let b = unit_square();
        assert_eq!(scale_objective(&a, &b, &b, 0.0), f64::INFINITY);
        assert_eq!(scale_objective(&a, &b, &b, -1.0), f64::INFINITY);
        assert_eq!(scale_objective(&a, &b, &b, f64::NAN), f64::INFINITY);
        assert!(scale_objective(&a, &b, &b, 1.0).is_finite());
    }

    #[test]
    fn test_optimize_scale_recovers_known_factor() {
        // A = B ⊕ 2X mit X = Einheitsquadrat: optimales s = 2
        let target = ShapeGenerators::square(3.0, Point2D::ZERO);
        let fixed = unit_square();
        let variable = unit_square();

        let fit = optimize_scale(
            &target,
            &fixed,
            &variable,
            (0.5, 3.0),
            &ScalarSearchConfig::default(),
        )
        .unwrap();

        assert!(fit.converged);
        assert_abs_diff_eq!(fit.scale, 2.0, epsilon = 1e-3);
        assert!(fit.distance < 1e-3);
        assert!(fit.improved_on_baseline);
        assert_abs_diff_eq!(fit.baseline_distance, 0.5_f64.hypot(0.5), epsilon = 1e-9);
    }

    #[test]
    fn test_optimize_scale_fallback_bracket() {
        let target = ShapeGenerators::circle(1.0, Point2D::ZERO, 64);
        let fixed = ShapeGenerators::square(1.5, Point2D::ZERO);
        let variable = Polygon::empty();

        let bounds = scale_search_bounds(&variable, None, None, (0.0, 2.0));
        assert_eq!(bounds, (0.0, 2.0));

        let fit = optimize_scale(
            &target,
            &fixed,
            &variable,
            bounds,
            &ScalarSearchConfig::default(),
        )
        .unwrap();
        assert!((0.0..=2.0).contains(&fit.scale));
        assert!(!fit.improved_on_baseline);
        assert!(fit.distance.is_infinite());
        assert!(!fit.converged);
        assert!(fit.shape.is_empty());
    }

    #[test]
    fn test_optimize_scale_with_resampled_target() {
        // A = B ⊕ 2X als 8-Eck (Ecken plus Kantenmittelpunkte)
        let target = Polygon::from_xy(&[
            (-1.5, -1.5),
            (0.0, -1.5),
            (1.5, -1.5),
            (1.5, 0.0),
            (1.5, 1.5),
            (0.0, 1.5),
            (-1.5, 1.5),
            (-1.5, 0.0),
        ]);
        let fixed = unit_square();
        let variable = unit_square();

        assert_abs_diff_eq!(scale_objective(&target, &fixed, &variable, 2.0), 0.0, epsilon = 1e-12);

        let fit = optimize_scale(
            &target,
            &fixed,
            &variable,
            (0.5, 3.0),
            &ScalarSearchConfig::default(),
        )
        .unwrap();

        assert!(fit.converged);
        assert_abs_diff_eq!(fit.scale, 2.0, epsilon = 1e-3);
        assert!(fit.distance < 1e-3);
    }

    #[test]
    fn test_scale_objective_against_circle_target() {
        // Kreis mit Radius 2 gegen wachsende Quadrate: Minimum zwischen
        // eingeschriebenem und umschriebenem Quadrat
        let target = ShapeGenerators::circle(2.0, Point2D::ZERO, 256);
        let fixed = unit_square();
        let variable = unit_square();

        let inscribed = scale_objective(&target, &fixed, &variable, 2.0_f64.sqrt() * 2.0 - 1.0);
        let circumscribed = scale_objective(&target, &fixed, &variable, 3.0);
        let fit = optimize_scale(
            &target,
            &fixed,
            &variable,
            (1.0, 3.0),
            &ScalarSearchConfig::default(),
        )
        .unwrap();

        assert!(fit.converged);
        assert!(fit.distance < inscribed.min(circumscribed));
        assert!(fit.scale > 2.0_f64.sqrt() * 2.0 - 1.0 && fit.scale < 3.0);
    }

    #[test]
    fn test_scale_search_bounds_bracket_one() {
        let x = unit_square();
        let inscribed = Circle::new(Point2D::ZERO, 0.5);
        let enclosing = Circle::new(Point2D::ZERO, 0.5_f64.sqrt());

        let (lower, upper) =
            scale_search_bounds(&x, Some(&inscribed), Some(&enclosing), (0.0, 2.0));

        assert_abs_diff_eq!(lower, (std::f64::consts::PI / 4.0).sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(upper, (std::f64::consts::PI / 2.0).sqrt(), epsilon = 1e-12);
        assert!(lower < 1.0 && upper > 1.0);
    }

    #[test]
    fn test_optimize_radii_improves_on_start() {
        let target = ShapeGenerators::regular_polygon(4, 1.5, Point2D::ZERO, 0.0);
        let fixed = ShapeGenerators::regular_polygon(4, 0.5, Point2D::ZERO, 0.0);

        let fit = optimize_radii(
            &target,
            &fixed,
            4,
            &[0.5; 4],
            (0.05, 2.0),
            &SimplexConfig::default(),
        )
        .unwrap();

        assert_eq!(fit.radii.len(), 4);
        assert!(fit.radii.iter().all(|r| (0.05..=2.0).contains(r)));
        assert!(fit.distance <= fit.baseline_distance);
        // Exakte Lösung: alle Radien 1.0
        assert!(fit.distance < 0.05);
    }

    #[test]
    fn test_optimize_radii_argument_errors() {
        let square = unit_square();
        let config = SimplexConfig::default();

        assert!(matches!(
            optimize_radii(&square, &square, 4, &[0.5; 3], (0.05, 2.0), &config),
            Err(MathError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(optimize_radii(&square, &square, 2, &[0.5; 2], (0.05, 2.0), &config).is_err());
        assert!(optimize_radii(&square, &square, 3, &[0.5; 3], (0.0, 2.0), &config).is_err());
        assert!(optimize_radii(&square, &square, 3, &[0.5; 3], (2.0, 1.0), &config).is_err());
    }

    #[test]
    fn test_non_convergence_is_reported() {
        let target = ShapeGenerators::circle(1.0, Point2D::ZERO, 64);
        let fixed = unit_square();
        let config = SimplexConfig::default().with_max_iterations_per_dimension(1);

        let fit = optimize_radii(&target, &fixed, 6, &[0.5; 6], (0.05, 2.0), &config).unwrap();
        assert!(!fit.converged);
        assert!(fit.distance.is_finite());
    }

    #[test]
    fn test_sweep_and_best_fit() {
        let target = ShapeGenerators::circle(1.0, Point2D::ZERO, 64);
        let fixed = ShapeGenerators::square(1.0, Point2D::ZERO);
        let config = RadiusSearchConfig::default().with_vertex_range(3, 5);

        let fits = sweep_vertex_counts(&target, &fixed, &config).unwrap();
        assert_eq!(
            fits.iter().map(|f| f.vertex_count).collect::<Vec<_>>(),
            vec![3, 4, 5]
        );

        let best = best_fit(&fits).unwrap();
        assert!(fits.iter().all(|f| best.distance <= f.distance));
        assert!(best_fit(&[]).is_none());
    }
}
