// src/math/geometry/polygon/builder.rs

use super::Polygon;
use crate::math::{
    error::{MathError, MathResult},
    types::{Circle, Point2D},
    utils::constants::TAU,
};

/// Generatoren für einfache Formen
pub struct ShapeGenerators;

impl ShapeGenerators {
    /// Regelmäßiges n-Eck mit Umkreisradius `radius`, erster Vertex bei `rotation`.
    pub fn regular_polygon(sides: usize, radius: f64, center: Point2D, rotation: f64) -> Polygon {
        Polygon::new(create_circle_vertices(center, radius, sides, rotation))
    }

    /// Kreis als hochaufgelöstes Polygon.
    pub fn circle(radius: f64, center: Point2D, segments: usize) -> Polygon {
        Self::regular_polygon(segments, radius, center, 0.0)
    }

    /// Diskretisiert einen Kreis-Deskriptor; entartete Kreise ergeben ein leeres Polygon.
    pub fn from_circle(circle: &Circle, segments: usize) -> Polygon {
        if circle.is_degenerate() {
            return Polygon::empty();
        }
        Self::circle(circle.radius, circle.center, segments)
    }

    /// Achsenparalleles Quadrat mit Kantenlänge `side`.
    pub fn square(side: f64, center: Point2D) -> Polygon {
        let h = side.abs() / 2.0;
        Polygon::new(vec![
            center + Point2D::new(-h, -h),
            center + Point2D::new(h, -h),
            center + Point2D::new(h, h),
            center + Point2D::new(-h, h),
        ])
    }
}

/// Sternförmiges Polygon: Vertex `i` liegt bei Winkel `2π·i/vertex_count`
/// im Abstand `radii[i]` vom Ursprung.
///
/// Konvexität oder Einfachheit wird nicht garantiert; Aufrufer begrenzen die
/// Radien auf einen vernünftigen Bereich.
pub fn star_polygon(radii: &[f64], vertex_count: usize) -> MathResult<Polygon> {
    if vertex_count < 3 {
        return Err(MathError::InsufficientPoints {
            expected: 3,
            actual: vertex_count,
        });
    }

    if radii.len() != vertex_count {
        return Err(MathError::DimensionMismatch {
            expected: vertex_count,
            actual: radii.len(),
        });
    }

    let vertices = radii
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            let angle = TAU * i as f64 / vertex_count as f64;
            Point2D::new(r * angle.cos(), r * angle.sin())
        })
        .collect();

    Ok(Polygon::new(vertices))
}

/// Punkte auf einem Kreis, gegen den Uhrzeigersinn.
pub fn create_circle_vertices(
    center: Point2D,
    radius: f64,
    segments: usize,
    rotation: f64,
) -> Vec<Point2D> {
    (0..segments)
        .map(|i| {
            let angle = rotation + TAU * i as f64 / segments as f64;
            center + Point2D::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
