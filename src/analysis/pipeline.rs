// src/analysis/pipeline.rs

use super::{
    config::AnalysisConfig,
    report::{AnalysisReport, BaselineCheck, CircleFit, ShapeDistance},
};
use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        GeometryResult, Polygon, ShapeGenerators, largest_inscribed_circle_of,
        minkowski_difference, minkowski_sum, primitives, smallest_enclosing_circle_of,
    },
    optimization::{best_fit, optimize_scale, scale_search_bounds, sweep_vertex_counts},
    types::{Circle, Point2D},
};
use log::{debug, info, warn};

/// Radius des Referenzkreises A
pub const REFERENCE_CIRCLE_RADIUS: f64 = 1.0;
/// Kantenlänge des Referenzquadrats B
pub const REFERENCE_SQUARE_SIDE: f64 = 1.5;

/// Ein Analyse-Lauf für ein festes Formenpaar (A, B).
#[derive(Debug, Clone)]
pub struct ShapeAnalysis {
    a: Polygon,
    b: Polygon,
    config: AnalysisConfig,
}

impl ShapeAnalysis {
    pub fn new(a: Polygon, b: Polygon, config: AnalysisConfig) -> MathResult<Self> {
        config.validate()?;

        for shape in [&a, &b] {
            if shape.len() < 3 {
                return Err(MathError::InsufficientPoints {
                    expected: 3,
                    actual: shape.len(),
                });
            }
        }

        Ok(Self { a, b, config })
    }

    /// Formen aus der Konfiguration, sonst das Referenzszenario
    /// (Kreis mit Radius 1, Quadrat mit Kantenlänge 1.5).
    pub fn from_config(config: AnalysisConfig) -> MathResult<Self> {
        let (reference_a, reference_b) = reference_shapes(config.circle_segments);

        let a = config
            .shape_a
            .clone()
            .map_or(reference_a, Polygon::new);
        let b = config
            .shape_b
            .clone()
            .map_or(reference_b, Polygon::new);

        Self::new(a, b, config)
    }

    pub fn shape_a(&self) -> &Polygon {
        &self.a
    }

    pub fn shape_b(&self) -> &Polygon {
        &self.b
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self) -> MathResult<AnalysisReport> {
        let (a, b) = (&self.a, &self.b);
        let config = &self.config;

        let baseline_distance = primitives::hausdorff(a, b);
        info!("Baseline hausdorff(A, B) = {baseline_distance:.6}");

        let difference = minkowski_difference(a, b, &config.difference)?;
        let difference_area = difference.area();
        match &difference {
            GeometryResult::Empty => warn!("A ⊖ B is empty, B does not fit inside A"),
            GeometryResult::Single(x) => {
                info!("A ⊖ B: {} vertices, area {difference_area:.6}", x.len())
            }
            GeometryResult::Multi(parts) => {
                info!("A ⊖ B: {} components, area {difference_area:.6}", parts.len())
            }
        }

        let x = convex_outline(&difference);

        let inscribed_circle = largest_inscribed_circle_of(&difference, &config.inscribed_circle)?;
        let enclosing_circle =
            smallest_enclosing_circle_of(&difference).filter(|c| !c.is_degenerate());

        let inscribed = inscribed_circle.map(|c| self.circle_fit(c));
        let enclosing = enclosing_circle.map(|c| self.circle_fit(c));

        let difference_sum = {
            let shape = minkowski_sum(b, &x);
            let distance = primitives::hausdorff(a, &shape);
            ShapeDistance { shape, distance }
        };
        debug!("hausdorff(A, B ⊕ X) = {:.6}", difference_sum.distance);

        let bounds = scale_search_bounds(
            &x,
            inscribed_circle.as_ref(),
            enclosing_circle.as_ref(),
            config.scale_search.fallback_bounds,
        );
        let scale_fit = optimize_scale(a, b, &x, bounds, &config.scale_search)?;
        info!(
            "Optimal scale s = {:.6} in [{:.4}, {:.4}], hausdorff(A, B ⊕ sX) = {:.6}",
            scale_fit.scale, bounds.0, bounds.1, scale_fit.distance
        );

        let radius_fits = sweep_vertex_counts(a, b, &config.radius_search)?;
        let best_vertex_count = best_fit(&radius_fits).map(|f| f.vertex_count);
        if let Some(best) = best_fit(&radius_fits) {
            info!(
                "Best star polygon: m = {}, hausdorff = {:.6}, converged = {}",
                best.vertex_count, best.distance, best.converged
            );
        }

        let mut baseline_checks = Vec::new();
        if let Some(fit) = &inscribed {
            baseline_checks.push(BaselineCheck::new("inscribed_sum", fit.distance, baseline_distance));
        }
        if let Some(fit) = &enclosing {
            baseline_checks.push(BaselineCheck::new("enclosing_sum", fit.distance, baseline_distance));
        }
        baseline_checks.push(BaselineCheck::new(
            "difference_sum",
            difference_sum.distance,
            baseline_distance,
        ));
        baseline_checks.push(BaselineCheck::new(
            "scaled_sum",
            scale_fit.distance,
            baseline_distance,
        ));
        if let Some(best) = best_fit(&radius_fits) {
            baseline_checks.push(BaselineCheck::new("star_sum", best.distance, baseline_distance));
        }

        for check in baseline_checks.iter().filter(|c| !c.improved) {
            warn!(
                "{}: hausdorff {:.6} does not improve on baseline {:.6}",
                check.label, check.distance, baseline_distance
            );
        }

        Ok(AnalysisReport {
            shape_a: a.clone(),
            shape_b: b.clone(),
            baseline_distance,
            difference,
            difference_area,
            inscribed,
            enclosing,
            difference_sum,
            scale_fit,
            radius_fits,
            best_vertex_count,
            baseline_checks,
        })
    }

    fn circle_fit(&self, circle: Circle) -> CircleFit {
        let polygon = ShapeGenerators::from_circle(&circle, self.config.circle_segments);
        let sum = minkowski_sum(&self.b, &polygon);
        let distance = primitives::hausdorff(&self.a, &sum);
        debug!(
            "circle r = {:.6} at ({:.4}, {:.4}): hausdorff(A, B ⊕ circle) = {distance:.6}",
            circle.radius, circle.center.x, circle.center.y
        );
        CircleFit {
            circle,
            polygon,
            sum,
            distance,
        }
    }
}

/// Referenzszenario: A = Kreis (Radius 1), B = Quadrat (Kantenlänge 1.5), beide im Ursprung.
pub fn reference_shapes(circle_segments: usize) -> (Polygon, Polygon) {
    (
        ShapeGenerators::circle(REFERENCE_CIRCLE_RADIUS, Point2D::ZERO, circle_segments),
        ShapeGenerators::square(REFERENCE_SQUARE_SIDE, Point2D::ZERO),
    )
}

/// Konvexe Hülle aller Komponenten; leer für `Empty`.
fn convex_outline(result: &GeometryResult) -> Polygon {
    match result {
        GeometryResult::Empty => Polygon::empty(),
        GeometryResult::Single(polygon) => polygon.clone(),
        GeometryResult::Multi(parts) => {
            let points: Vec<Point2D> = parts
                .iter()
                .flat_map(|p| p.vertices().iter().copied())
                .collect();
            primitives::convex_hull(&points)
        }
    }
}
