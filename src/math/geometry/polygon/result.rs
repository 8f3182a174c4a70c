// src/math/geometry/polygon/result.rs

use super::{Polygon, operations::primitives};
use serde::{Deserialize, Serialize};

/// Ergebnis einer Geometrie-Operation, deren Form nicht vorab feststeht.
///
/// Jede konsumierende Engine behandelt alle drei Fälle explizit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum GeometryResult {
    #[default]
    Empty,
    Single(Polygon),
    Multi(Vec<Polygon>),
}

impl GeometryResult {
    /// Normalisiert eine Liste von Komponenten: entartete Teile werden verworfen.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut parts: Vec<Polygon> = polygons
            .into_iter()
            .filter(|p| !p.is_degenerate())
            .collect();

        match parts.len() {
            0 => Self::Empty,
            1 => Self::Single(parts.remove(0)),
            _ => Self::Multi(parts),
        }
    }

    /// Ein einzelnes Polygon; entartete Polygone werden zu `Empty`.
    pub fn from_polygon(polygon: Polygon) -> Self {
        if polygon.is_degenerate() {
            Self::Empty
        } else {
            Self::Single(polygon)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(p) => p.is_degenerate(),
            Self::Multi(parts) => parts.iter().all(Polygon::is_degenerate),
        }
    }

    /// Alle Komponenten als Slice-ähnliche Liste.
    pub fn polygons(&self) -> Vec<&Polygon> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(p) => vec![p],
            Self::Multi(parts) => parts.iter().collect(),
        }
    }

    /// Gesamtfläche aller Komponenten.
    pub fn area(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Single(p) => primitives::area(p),
            Self::Multi(parts) => parts.iter().map(primitives::area).sum(),
        }
    }

    /// Komponente mit der größten Fläche.
    pub fn largest(&self) -> Option<&Polygon> {
        match self {
            Self::Empty => None,
            Self::Single(p) => Some(p),
            Self::Multi(parts) => parts
                .iter()
                .max_by(|a, b| primitives::area(a).total_cmp(&primitives::area(b))),
        }
    }

    /// Reduziert auf ein einzelnes Polygon: größte Komponente, sonst leeres Polygon.
    pub fn into_polygon(self) -> Polygon {
        match self {
            Self::Empty => Polygon::empty(),
            Self::Single(p) => p,
            Self::Multi(parts) => parts
                .into_iter()
                .max_by(|a, b| primitives::area(a).total_cmp(&primitives::area(b)))
                .unwrap_or_default(),
        }
    }
}

impl From<Polygon> for GeometryResult {
    fn from(polygon: Polygon) -> Self {
        Self::from_polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point2D;

    fn square_at(x: f64, side: f64) -> Polygon {
        Polygon::from_xy(&[(x, 0.0), (x + side, 0.0), (x + side, side), (x, side)])
    }

    #[test]
    fn test_from_polygons_normalizes() {
        assert_eq!(GeometryResult::from_polygons(vec![]), GeometryResult::Empty);

        let degenerate = Polygon::new(vec![Point2D::ZERO, Point2D::X]);
        assert_eq!(
            GeometryResult::from_polygons(vec![degenerate]),
            GeometryResult::Empty
        );

        let single = GeometryResult::from_polygons(vec![square_at(0.0, 1.0)]);
        assert!(matches!(single, GeometryResult::Single(_)));

        let multi = GeometryResult::from_polygons(vec![square_at(0.0, 1.0), square_at(5.0, 2.0)]);
        assert!(matches!(multi, GeometryResult::Multi(ref parts) if parts.len() == 2));
    }

    #[test]
    fn test_largest_component() {
        let multi = GeometryResult::from_polygons(vec![square_at(0.0, 1.0), square_at(5.0, 2.0)]);
        let largest = multi.largest().unwrap();
        assert_eq!(largest, &square_at(5.0, 2.0));
        assert!((multi.area() - 5.0).abs() < 1e-12);
        assert_eq!(multi.into_polygon(), square_at(5.0, 2.0));
        assert!(GeometryResult::Empty.into_polygon().is_empty());
    }
}
