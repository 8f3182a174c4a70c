// src/math/geometry/polygon/properties.rs

use super::{Polygon, operations::primitives};
use crate::math::{types::Point2D, utils::constants};

/// Trait für geometrische Eigenschaften von Polygonen.
pub trait PolygonProperties {
    /// Vorzeichenlose Fläche.
    fn area(&self) -> f64;

    /// Vorzeichenbehaftete Fläche (positiv gegen den Uhrzeigersinn).
    fn signed_area(&self) -> f64;

    /// Bestimmt die Orientierung des Polygons.
    /// Basiert auf dem Vorzeichen der Fläche.
    fn orientation(&self) -> Orientation;

    /// Prüft, ob das Polygon konvex ist.
    /// Kollineare Vertices sind erlaubt, entartete Polygone sind nicht konvex.
    fn is_convex(&self) -> bool;

    /// Flächenschwerpunkt. `None` nur für leere Polygone.
    fn geometric_centroid(&self) -> Option<Point2D>;

    /// Kopie mit Vertex-Reihenfolge gegen den Uhrzeigersinn.
    fn to_counter_clockwise(&self) -> Self
    where
        Self: Sized;
}

/// Gibt die Orientierung eines Polygons an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear, // Alle Punkte liegen auf einer Linie
}

impl PolygonProperties for Polygon {
    fn area(&self) -> f64 {
        primitives::area(self)
    }

    fn signed_area(&self) -> f64 {
        if self.len() < 3 {
            return 0.0;
        }
        self.signed_area_raw()
    }

    fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area.abs() < constants::EPSILON_SQUARED {
            Orientation::Collinear
        } else if area > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    fn is_convex(&self) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();

        if n < 3 || self.is_degenerate() {
            return false;
        }

        let mut sign = None;

        for i in 0..n {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            let p3 = vertices[(i + 2) % n];

            let cross = (p2 - p1).perp_dot(p3 - p2);

            if cross.abs() > constants::EPSILON {
                let current_sign = cross > 0.0;

                match sign {
                    None => sign = Some(current_sign),
                    Some(s) if s != current_sign => return false,
                    _ => {}
                }
            }
        }

        true
    }

    fn geometric_centroid(&self) -> Option<Point2D> {
        primitives::centroid(self)
    }

    fn to_counter_clockwise(&self) -> Self {
        match self.orientation() {
            Orientation::Clockwise => self.reversed(),
            _ => self.clone(),
        }
    }
}
