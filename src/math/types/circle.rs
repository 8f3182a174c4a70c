// src/math/types/circle.rs

use crate::math::types::Point2D;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Kreis mit Mittelpunkt und nicht-negativem Radius.
///
/// Ein "kein Kreis gefunden"-Ergebnis wird nicht als Kreis mit Radius 0
/// transportiert, sondern als `Option::None` an der Engine-Grenze.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Entarteter Kreis (Radius 0 oder nicht-endliche Werte).
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0 || !self.radius.is_finite() || !self.center.is_finite()
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Prüft ob ein Punkt innerhalb liegt, mit relativer Toleranz.
    pub fn contains_point(&self, point: Point2D, tolerance: f64) -> bool {
        self.center.distance(point) <= self.radius * (1.0 + tolerance) + tolerance
    }

    /// Kreis durch zwei Punkte als Durchmesser
    pub fn from_diameter(a: Point2D, b: Point2D) -> Self {
        let center = (a + b) * 0.5;
        Self::new(center, center.distance(a))
    }

    /// Umkreis eines Dreiecks. `None` bei kollinearen Punkten.
    pub fn circumscribed(a: Point2D, b: Point2D, c: Point2D) -> Option<Self> {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * ab.perp_dot(ac);

        if d.abs() < 1e-12 {
            return None;
        }

        let ab_sq = ab.length_squared();
        let ac_sq = ac.length_squared();
        let offset = Point2D::new(
            ac.y * ab_sq - ab.y * ac_sq,
            ab.x * ac_sq - ac.x * ab_sq,
        ) / d;

        let center = a + offset;
        Some(Self::new(center, offset.length()))
    }
}
