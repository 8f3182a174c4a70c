// src/math/geometry/polygon/operations/clipping.rs

use super::super::{GeometryResult, Polygon, PolygonProperties};
use super::primitives;
use crate::math::{types::*, utils::constants};
use serde::{Deserialize, Serialize};

/// Verfahren für den Schnitt der Arbeitsregion mit einer Halbebene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipStrategy {
    /// Sutherland-Hodgman gegen das (konvexe) Halbebenen-Viereck. Ergebnis bleibt konvex.
    #[default]
    ConvexClip,
    /// Allgemeiner Polygonschnitt über `geo`. Kann mehrere Komponenten liefern.
    Boolean,
}

/// Geschlossene Halbebene `{x : x·normal ≤ offset}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub normal: Point2D,
    pub offset: f64,
}

impl HalfPlane {
    pub fn new(normal: Point2D, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Endliche Darstellung als großes Viereck (gegen den Uhrzeigersinn).
    ///
    /// Die Kante liegt bei `offset` entlang der Normalen, die Seiten reichen
    /// `2·infinity` entlang der Tangente, die Tiefe `|offset| + 2·infinity`.
    pub fn to_polygon(&self, practical_infinity: f64) -> Polygon {
        let u = self.normal.normalize_or_zero();
        let t = u.perp();
        let base = u * self.offset;
        let half_width = 2.0 * practical_infinity;
        let depth = self.offset.abs() + 2.0 * practical_infinity;

        Polygon::new(vec![
            base - t * half_width,
            base + t * half_width,
            base + t * half_width - u * depth,
            base - t * half_width - u * depth,
        ])
    }
}

/// Clipping-Engine für konvexe Clip-Polygone
#[derive(Debug, Clone, Copy)]
pub struct PolygonClipper {
    tolerance: f64,
}

impl Default for PolygonClipper {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonClipper {
    /// Erstellt einen neuen Clipper
    pub fn new() -> Self {
        Self {
            tolerance: constants::EPSILON,
        }
    }

    /// Schneidet `subject` mit einer Halbebene nach der gewählten Strategie.
    pub fn clip_half_plane(
        &self,
        subject: &Polygon,
        half_plane: &HalfPlane,
        practical_infinity: f64,
        strategy: ClipStrategy,
    ) -> GeometryResult {
        let clip_region = half_plane.to_polygon(practical_infinity);
        match strategy {
            ClipStrategy::ConvexClip => {
                GeometryResult::from_polygon(self.clip_polygon(subject, &clip_region))
            }
            ClipStrategy::Boolean => primitives::intersection(subject, &clip_region),
        }
    }

    // === Sutherland-Hodgman Algorithmus ===

    /// Clippt `subject` gegen ein konvexes Clipping-Polygon.
    /// Das Ergebnis kann entartet sein (leeres Polygon).
    pub fn clip_polygon(&self, subject: &Polygon, clipper: &Polygon) -> Polygon {
        let clipper = clipper.to_counter_clockwise();
        let clipper_vertices = clipper.vertices();
        let n_clipper = clipper_vertices.len();

        if n_clipper < 3 {
            return Polygon::empty();
        }

        let mut output_vertices = subject.vertices().to_vec();

        // Für jede Kante des Clipping-Polygons
        for i in 0..n_clipper {
            if output_vertices.is_empty() {
                break;
            }

            let clip_vertex1 = clipper_vertices[i];
            let clip_vertex2 = clipper_vertices[(i + 1) % n_clipper];

            let input_vertices = std::mem::take(&mut output_vertices);
            let mut s = input_vertices[input_vertices.len() - 1];

            for &e in &input_vertices {
                let e_inside = self.is_inside(e, clip_vertex1, clip_vertex2);
                let s_inside = self.is_inside(s, clip_vertex1, clip_vertex2);

                if e_inside {
                    if !s_inside {
                        // Entering
                        if let Some(intersection) =
                            Self::line_intersection(s, e, clip_vertex1, clip_vertex2)
                        {
                            output_vertices.push(intersection);
                        }
                    }
                    output_vertices.push(e);
                } else if s_inside {
                    // Leaving
                    if let Some(intersection) =
                        Self::line_intersection(s, e, clip_vertex1, clip_vertex2)
                    {
                        output_vertices.push(intersection);
                    }
                }
                s = e;
            }
        }

        Polygon::new(output_vertices)
    }

    /// Links von (oder auf) der gerichteten Kante a→b
    fn is_inside(&self, point: Point2D, a: Point2D, b: Point2D) -> bool {
        (b - a).perp_dot(point - a) >= -self.tolerance
    }

    /// Schnittpunkt der Strecke s→e mit der Geraden durch a, b
    fn line_intersection(s: Point2D, e: Point2D, a: Point2D, b: Point2D) -> Option<Point2D> {
        let r = e - s;
        let q = b - a;
        let denom = r.perp_dot(q);

        if denom.abs() < f64::EPSILON {
            return None; // Parallel
        }

        let t = (a - s).perp_dot(q) / denom;
        Some(s + r * t)
    }
}
