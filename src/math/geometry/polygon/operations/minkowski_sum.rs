// src/math/geometry/polygon/operations/minkowski_sum.rs

use super::super::Polygon;
use super::primitives;
use crate::math::types::Point2D;
use log::trace;

/// Minkowski-Summe P ⊕ Q zweier konvexer Polygone.
///
/// Bildet alle paarweisen Vertex-Summen (O(n·m)) und nimmt deren konvexe
/// Hülle. Ist eine Eingabe leer oder entartet, ist das Ergebnis leer.
pub fn minkowski_sum(p: &Polygon, q: &Polygon) -> Polygon {
    if p.is_degenerate() || q.is_degenerate() {
        return Polygon::empty();
    }

    let sums: Vec<Point2D> = p
        .vertices()
        .iter()
        .flat_map(|&a| q.vertices().iter().map(move |&b| a + b))
        .collect();

    trace!(
        "minkowski_sum: {} x {} vertices -> {} candidate points",
        p.len(),
        q.len(),
        sums.len()
    );

    let hull = primitives::convex_hull(&sums);
    if hull.is_degenerate() {
        return Polygon::empty();
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::polygon::{PolygonProperties, ShapeGenerators};
    use approx::assert_abs_diff_eq;

    fn pentagon() -> Polygon {
        Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (6.0, 2.0), (3.0, 4.0), (1.0, 2.0)])
    }

    #[test]
    fn test_sum_of_squares() {
        let a = ShapeGenerators::square(1.0, Point2D::ZERO);
        let b = ShapeGenerators::square(2.0, Point2D::new(1.0, 1.0));
        let sum = minkowski_sum(&a, &b);

        assert_eq!(sum.len(), 4);
        assert_abs_diff_eq!(sum.area(), 9.0, epsilon = 1e-9);
        let c = sum.geometric_centroid().unwrap();
        assert_abs_diff_eq!(c.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sum_is_convex_and_commutative() {
        let a = pentagon();
        let b = ShapeGenerators::regular_polygon(6, 0.75, Point2D::new(0.3, -0.2), 0.1);

        let ab = minkowski_sum(&a, &b);
        let ba = minkowski_sum(&b, &a);

        assert!(ab.is_convex());
        assert!(ab.area() >= a.area().max(b.area()));
        assert_abs_diff_eq!(ab.area(), ba.area(), epsilon = 1e-9);
        assert_abs_diff_eq!(primitives::hausdorff(&ab, &ba), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sum_contains_translated_operands() {
        let a = pentagon();
        let b = ShapeGenerators::square(1.0, Point2D::ZERO);
        let sum = minkowski_sum(&a, &b);

        // a + b_i für jeden Vertex b_i liegt in der Summe
        for &offset in b.vertices() {
            let translated = a.translated(offset);
            for &v in translated.vertices() {
                assert!(
                    primitives::contains(&sum, v) || primitives::boundary_distance(&sum, v) < 1e-9
                );
            }
        }
    }

    #[test]
    fn test_degenerate_input_gives_empty() {
        let a = pentagon();
        let line = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(minkowski_sum(&a, &line).is_empty());
        assert!(minkowski_sum(&Polygon::empty(), &a).is_empty());
    }
}
