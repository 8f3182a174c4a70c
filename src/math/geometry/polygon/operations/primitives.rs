// src/math/geometry/polygon/operations/primitives.rs

//! Dünner Adapter über `geo`: konvexe Hülle, Enthaltensein, Randabstand,
//! Schnitt, Fläche, Schwerpunkt und Hausdorff-Abstand.
//!
//! Alle Funktionen sind total: entartete Eingaben liefern leere bzw.
//! neutrale Ergebnisse statt Fehlern.

use super::super::{GeometryResult, Polygon};
use crate::math::{types::Point2D, utils::constants::EPSILON};
use geo::{
    Area, BooleanOps, Centroid, Closest, ClosestPoint, Contains, ConvexHull, MultiPoint, Point,
};

/// Konvexe Hülle einer Punktmenge (gegen den Uhrzeigersinn), ohne
/// kollineare Randpunkte. Für weniger als drei verschiedene Punkte entsteht
/// ein entartetes Polygon.
pub fn convex_hull(points: &[Point2D]) -> Polygon {
    if points.len() < 3 {
        return Polygon::new(points.to_vec());
    }

    let multi_point: MultiPoint<f64> = points.iter().map(|p| Point::new(p.x, p.y)).collect();
    let hull = Polygon::from_geo(&multi_point.convex_hull());
    Polygon::new(drop_collinear(hull.into_vertices()))
}

/// Entfernt Vertices, die auf der Strecke zwischen ihren Nachbarn liegen.
fn drop_collinear(vertices: Vec<Point2D>) -> Vec<Point2D> {
    let n = vertices.len();
    if n < 3 {
        return vertices;
    }

    let mut kept: Vec<Point2D> = Vec::with_capacity(n);
    for i in 0..n {
        let prev = kept.last().copied().unwrap_or(vertices[n - 1]);
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];
        let (incoming, outgoing) = (curr - prev, next - curr);
        if incoming.perp_dot(outgoing).abs() > EPSILON * incoming.length() * outgoing.length() {
            kept.push(curr);
        }
    }

    if kept.len() < 3 { vertices } else { kept }
}

/// Liegt `point` strikt im Inneren von `polygon`? (Rand zählt nicht.)
pub fn contains(polygon: &Polygon, point: Point2D) -> bool {
    if polygon.is_degenerate() {
        return false;
    }
    polygon.to_geo().contains(&Point::new(point.x, point.y))
}

/// Euklidischer Abstand von `point` zum Rand von `polygon`.
/// `f64::INFINITY` für leere Polygone.
pub fn boundary_distance(polygon: &Polygon, point: Point2D) -> f64 {
    if polygon.is_empty() {
        return f64::INFINITY;
    }

    let geo_polygon = polygon.to_geo();
    let query = Point::new(point.x, point.y);
    match geo_polygon.exterior().closest_point(&query) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => {
            point.distance(Point2D::new(p.x(), p.y()))
        }
        // Sollte für nicht-leere Ringe nicht auftreten, Fallback über die Kanten
        Closest::Indeterminate => polygon
            .edges()
            .map(|(a, b)| point_segment_distance(point, a, b))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Schnitt zweier Polygone. Kann mehrere Komponenten liefern.
pub fn intersection(a: &Polygon, b: &Polygon) -> GeometryResult {
    if a.is_degenerate() || b.is_degenerate() {
        return GeometryResult::Empty;
    }

    let multi = a.to_geo().intersection(&b.to_geo());
    GeometryResult::from_polygons(multi.iter().map(Polygon::from_geo).collect())
}

/// Vorzeichenlose Fläche.
pub fn area(polygon: &Polygon) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    polygon.to_geo().unsigned_area()
}

/// Flächenschwerpunkt. Fällt für entartete Polygone auf den Vertex-Mittelpunkt zurück.
pub fn centroid(polygon: &Polygon) -> Option<Point2D> {
    if polygon.is_degenerate() {
        return polygon.vertex_centroid();
    }
    polygon
        .to_geo()
        .centroid()
        .map(|p| Point2D::new(p.x(), p.y()))
}

/// Symmetrischer Hausdorff-Abstand der Flächen von `a` und `b`.
///
/// Für konvexe Polygone ist der Abstand zur anderen Fläche konvex, das
/// Maximum wird also an einem Vertex angenommen.
/// `f64::INFINITY`, wenn eines der Polygone leer ist.
pub fn hausdorff(a: &Polygon, b: &Polygon) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }
    directed_hausdorff(a, b).max(directed_hausdorff(b, a))
}

/// `max_{v ∈ from} dist(v, to)`
fn directed_hausdorff(from: &Polygon, to: &Polygon) -> f64 {
    from.vertices()
        .iter()
        .map(|&v| distance_to_region(to, v))
        .fold(0.0, f64::max)
}

/// Abstand von `point` zur Fläche von `polygon`; 0 im Inneren und auf dem Rand.
pub fn distance_to_region(polygon: &Polygon, point: Point2D) -> f64 {
    if contains(polygon, point) {
        0.0
    } else {
        boundary_distance(polygon, point)
    }
}

/// Abstand Punkt–Strecke
pub fn point_segment_distance(point: Point2D, a: Point2D, b: Point2D) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::ShapeGenerators;
    use approx::assert_abs_diff_eq;

    fn square(side: f64) -> Polygon {
        let h = side / 2.0;
        Polygon::from_xy(&[(-h, -h), (h, -h), (h, h), (-h, h)])
    }

    #[test]
    fn test_convex_hull_drops_interior_points() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(0.5, 0.5), // Interior point
        ];

        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert_abs_diff_eq!(area(&hull), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convex_hull_drops_collinear_points() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
            Point2D::new(0.0, 1.0),
        ];

        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.vertices().contains(&Point2D::new(1.0, 0.0)));
        assert!(!hull.vertices().contains(&Point2D::new(0.0, 1.0)));
    }

    #[test]
    fn test_convex_hull_of_few_points_is_degenerate() {
        let hull = convex_hull(&[Point2D::ZERO, Point2D::X]);
        assert!(hull.is_degenerate());
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn test_contains_is_strict() {
        let sq = square(2.0);
        assert!(contains(&sq, Point2D::ZERO));
        assert!(!contains(&sq, Point2D::new(1.0, 0.0))); // Rand
        assert!(!contains(&sq, Point2D::new(2.0, 0.0)));
        assert!(!contains(&Polygon::empty(), Point2D::ZERO));
    }

    #[test]
    fn test_boundary_distance() {
        let sq = square(2.0);
        assert_abs_diff_eq!(boundary_distance(&sq, Point2D::ZERO), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            boundary_distance(&sq, Point2D::new(0.5, 0.25)),
            0.5,
            epsilon = 1e-12
        );
        assert!(boundary_distance(&Polygon::empty(), Point2D::ZERO).is_infinite());
    }

    #[test]
    fn test_intersection_of_overlapping_squares() {
        let a = square(2.0);
        let b = square(2.0).translated(Point2D::new(1.0, 0.0));
        let result = intersection(&a, &b);
        assert_abs_diff_eq!(result.area(), 2.0, epsilon = 1e-6);

        let far = square(1.0).translated(Point2D::new(10.0, 0.0));
        assert!(intersection(&a, &far).is_empty());
    }

    #[test]
    fn test_centroid_and_area() {
        let sq = square(2.0).translated(Point2D::new(3.0, -1.0));
        let c = centroid(&sq).unwrap();
        assert_abs_diff_eq!(c.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(area(&sq), 4.0, epsilon = 1e-12);
        assert_eq!(area(&Polygon::empty()), 0.0);
    }

    #[test]
    fn test_hausdorff() {
        let a = square(2.0);
        assert_abs_diff_eq!(hausdorff(&a, &a), 0.0);

        let b = a.translated(Point2D::new(0.5, 0.0));
        assert_abs_diff_eq!(hausdorff(&a, &b), 0.5, epsilon = 1e-12);
        assert!(hausdorff(&a, &Polygon::empty()).is_infinite());
    }

    #[test]
    fn test_hausdorff_ignores_vertex_sampling() {
        // Gleiche Fläche, zusätzliche Kantenmittelpunkte
        let a = square(3.0);
        let with_midpoints = Polygon::from_xy(&[
            (-1.5, -1.5),
            (0.0, -1.5),
            (1.5, -1.5),
            (1.5, 0.0),
            (1.5, 1.5),
            (0.0, 1.5),
            (-1.5, 1.5),
            (-1.5, 0.0),
        ]);
        assert_eq!(with_midpoints.len(), 8);
        assert_abs_diff_eq!(hausdorff(&a, &with_midpoints), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hausdorff(&with_midpoints, &a), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hausdorff_circle_and_circumscribed_square() {
        // Alle Kreis-Vertices liegen im Quadrat, nur die Ecken zählen
        let circle = ShapeGenerators::circle(1.0, Point2D::ZERO, 64);
        let sq = square(2.0);

        let expected = 2.0_f64.sqrt() - 1.0;
        assert_abs_diff_eq!(hausdorff(&circle, &sq), expected, epsilon = 1e-9);
        assert_abs_diff_eq!(hausdorff(&sq, &circle), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_hausdorff_inner_shape_with_few_vertices() {
        // Dreieck im Inneren eines 256-Ecks: Abstand vom Kreisrand zum Dreieck
        let circle = ShapeGenerators::circle(1.0, Point2D::ZERO, 256);
        let triangle = ShapeGenerators::regular_polygon(3, 1.0, Point2D::ZERO, 0.0);

        // Der Kreispunkt gegenüber einer Ecke liegt 1 - 0.5 vom Dreieck entfernt
        assert_abs_diff_eq!(hausdorff(&circle, &triangle), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_to_region() {
        let sq = square(2.0);
        assert_eq!(distance_to_region(&sq, Point2D::ZERO), 0.0);
        assert_abs_diff_eq!(distance_to_region(&sq, Point2D::new(1.0, 0.5)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance_to_region(&sq, Point2D::new(3.0, 0.0)), 2.0, epsilon = 1e-12);
    }
}
