// src/math/types/bounds.rs

use crate::math::types::*;
use serde::{Deserialize, Serialize};

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min = min.min(point);
            max = max.max(point);
        }

        Some(Self { min, max })
    }

    /// Achsenparalleles Quadrat mit halber Kantenlänge `half_extent` um `center`.
    pub fn square(center: Point2D, half_extent: f64) -> Self {
        let half = Point2D::splat(half_extent.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Größte Ausdehnung eines Eckpunkts vom Ursprung (für die Wahl der praktischen Unendlichkeit).
    pub fn max_abs_coordinate(&self) -> f64 {
        self.min.abs().max(self.max.abs()).max_element()
    }

    /// Vergrößert die Box um `margin` in alle Richtungen
    pub fn expand(&self, margin: f64) -> Self {
        let m = Point2D::splat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Eckpunkte gegen den Uhrzeigersinn, beginnend unten links
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }

    /// Regelmäßiges `resolution × resolution` Raster über der Box (inklusive Rand).
    pub fn grid_points(&self, resolution: usize) -> impl Iterator<Item = Point2D> + '_ {
        let steps = resolution.saturating_sub(1).max(1) as f64;
        let dx = self.width() / steps;
        let dy = self.height() / steps;
        (0..resolution).flat_map(move |j| {
            (0..resolution)
                .map(move |i| Point2D::new(self.min.x + i as f64 * dx, self.min.y + j as f64 * dy))
        })
    }
}
