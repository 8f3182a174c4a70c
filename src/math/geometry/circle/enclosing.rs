// src/math/geometry/circle/enclosing.rs

use crate::math::{
    geometry::polygon::{GeometryResult, Polygon},
    types::{Circle, Point2D},
};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Fester Seed für die Permutation, damit gleiche Eingaben gleiche Ergebnisse liefern.
const SHUFFLE_SEED: u64 = 0x5eed_c1ec;

/// Relative Toleranz für den Enthaltensein-Test
const CONTAINMENT_TOLERANCE: f64 = 1e-12;

/// Kleinster umschließender Kreis der Polygon-Vertices (Welzl, erwartet O(n)).
/// `None` nur für Polygone ohne Vertices.
pub fn smallest_enclosing_circle(polygon: &Polygon) -> Option<Circle> {
    smallest_enclosing_circle_of_points(polygon.vertices())
}

/// Kleinster umschließender Kreis über alle Komponenten eines Geometrie-Ergebnisses.
pub fn smallest_enclosing_circle_of(result: &GeometryResult) -> Option<Circle> {
    match result {
        GeometryResult::Empty => None,
        GeometryResult::Single(polygon) => smallest_enclosing_circle(polygon),
        GeometryResult::Multi(parts) => {
            let points: Vec<Point2D> = parts
                .iter()
                .flat_map(|p| p.vertices().iter().copied())
                .collect();
            smallest_enclosing_circle_of_points(&points)
        }
    }
}

/// Welzl in der iterativen Form mit zwei Randpunkten.
pub fn smallest_enclosing_circle_of_points(points: &[Point2D]) -> Option<Circle> {
    let first = *points.first()?;

    let mut shuffled = points.to_vec();
    shuffled.shuffle(&mut StdRng::seed_from_u64(SHUFFLE_SEED));

    let mut circle = Circle::new(first, 0.0);
    for i in 0..shuffled.len() {
        let p = shuffled[i];
        if !encloses(&circle, p) {
            circle = with_one_boundary_point(&shuffled[..i], p);
        }
    }

    Some(circle)
}

fn with_one_boundary_point(points: &[Point2D], b1: Point2D) -> Circle {
    let mut circle = Circle::new(b1, 0.0);

    for (j, &p) in points.iter().enumerate() {
        if !encloses(&circle, p) {
            circle = with_two_boundary_points(&points[..j], b1, p);
        }
    }

    circle
}

fn with_two_boundary_points(points: &[Point2D], b1: Point2D, b2: Point2D) -> Circle {
    let mut circle = Circle::from_diameter(b1, b2);

    for &p in points {
        if !encloses(&circle, p) {
            circle = Circle::circumscribed(b1, b2, p).unwrap_or_else(|| widest_pair(b1, b2, p));
        }
    }

    circle
}

/// Kollineare Punkte: Kreis über dem am weitesten entfernten Paar
fn widest_pair(a: Point2D, b: Point2D, c: Point2D) -> Circle {
    [(a, b), (b, c), (a, c)]
        .into_iter()
        .map(|(p, q)| Circle::from_diameter(p, q))
        .max_by(|x, y| x.radius.total_cmp(&y.radius))
        .unwrap_or_else(|| Circle::from_diameter(a, b))
}

fn encloses(circle: &Circle, p: Point2D) -> bool {
    circle.contains_point(p, CONTAINMENT_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::Rng;

    #[test]
    fn test_single_point() {
        let c = smallest_enclosing_circle_of_points(&[Point2D::new(1.0, 2.0)]).unwrap();
        assert_eq!(c.center, Point2D::new(1.0, 2.0));
        assert_eq!(c.radius, 0.0);
        assert!(smallest_enclosing_circle(&Polygon::empty()).is_none());
    }

    #[test]
    fn test_square() {
        let square = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let c = smallest_enclosing_circle(&square).unwrap();
        assert_abs_diff_eq!(c.center.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.center.y, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.radius, 0.5_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_points() {
        let c = smallest_enclosing_circle_of_points(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(4.0, 0.0),
        ])
        .unwrap();
        assert_abs_diff_eq!(c.center.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.radius, 2.0, epsilon = 1e-12);
    }

    /// O(n³) Referenz: alle Kreise durch 2 oder 3 Punkte, der kleinste umschließende gewinnt.
    fn brute_force(points: &[Point2D]) -> f64 {
        let mut candidates = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                candidates.push(Circle::from_diameter(points[i], points[j]));
                for k in (j + 1)..points.len() {
                    if let Some(c) = Circle::circumscribed(points[i], points[j], points[k]) {
                        candidates.push(c);
                    }
                }
            }
        }

        candidates
            .into_iter()
            .filter(|c| points.iter().all(|&p| c.center.distance(p) <= c.radius + 1e-9))
            .map(|c| c.radius)
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn test_matches_brute_force_on_random_polygons() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let n = rng.random_range(3..=12);
            let points: Vec<Point2D> = (0..n)
                .map(|_| {
                    Point2D::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0))
                })
                .collect();

            let polygon = crate::math::geometry::polygon::operations::primitives::convex_hull(&points);
            if polygon.len() < 2 {
                continue;
            }

            let circle = smallest_enclosing_circle(&polygon).unwrap();
            let expected = brute_force(polygon.vertices());

            assert_abs_diff_eq!(circle.radius, expected, epsilon = 1e-7);
            for &p in polygon.vertices() {
                assert!(circle.center.distance(p) <= circle.radius + 1e-9);
            }
        }
    }

    #[test]
    fn test_multi_result_encloses_all_parts() {
        let a = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let b = a.translated(Point2D::new(10.0, 0.0));
        let c = smallest_enclosing_circle_of(&GeometryResult::Multi(vec![a, b])).unwrap();
        assert!(c.radius >= 5.0);
        assert!(smallest_enclosing_circle_of(&GeometryResult::Empty).is_none());
    }
}
