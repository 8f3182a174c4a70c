// src/math/geometry/polygon/core.rs

use crate::math::{
    types::{Bounds2D, Point2D},
    utils::constants::EPSILON_SQUARED,
};
use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polygon-Struktur, die eine Sequenz von 2D-Punkten (Vertices) darstellt.
///
/// Die Vertices werden immer *offen* gespeichert: ein expliziter Schlusspunkt
/// (erster == letzter) wird beim Erstellen entfernt. Polygone mit weniger als
/// drei verschiedenen Vertices sind gültige, entartete Ergebnisträger.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Erstellt ein Polygon aus einer Liste von Vertices.
    /// Ein duplizierter Schlusspunkt wird entfernt, aufeinanderfolgende Duplikate ebenso.
    pub fn new(vertices: Vec<Point2D>) -> Self {
        let mut vertices = vertices;
        vertices.dedup_by(|a, b| a.distance_squared(*b) < EPSILON_SQUARED);

        if vertices.len() > 1 {
            if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
                if first.distance_squared(last) < EPSILON_SQUARED {
                    vertices.pop();
                }
            }
        }

        Self { vertices }
    }

    /// Erstellt ein Polygon aus `(x, y)`-Tupeln.
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Point2D::new(x, y)).collect())
    }

    /// Leeres Polygon (Ergebnis "keine Fläche").
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Gibt einen Slice der Vertices zurück.
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point2D> {
        self.vertices
    }

    /// Anzahl der Vertices (ohne Schlusspunkt).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Prüft, ob das Polygon keine Vertices hat.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Weniger als drei Vertices oder (nahezu) keine Fläche.
    pub fn is_degenerate(&self) -> bool {
        if self.vertices.len() < 3 {
            return true;
        }
        self.signed_area_raw().abs() < EPSILON_SQUARED
    }

    /// Kanten als Paare (Start, Ende), inklusive der schließenden Kante.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Berechnet die Bounding Box des Polygons.
    /// Gibt `None` zurück, wenn das Polygon leer ist.
    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::from_points_iter(self.vertices.iter().copied())
    }

    /// Arithmetischer Mittelpunkt der Vertices (nicht der geometrische Schwerpunkt).
    pub fn vertex_centroid(&self) -> Option<Point2D> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self.vertices.iter().fold(Point2D::ZERO, |acc, &v| acc + v);
        Some(sum / self.vertices.len() as f64)
    }

    /// Stützfunktion h(u) = max_p (p·u). `None` für leere Polygone.
    pub fn support(&self, direction: Point2D) -> Option<f64> {
        self.vertices
            .iter()
            .map(|v| v.dot(direction))
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |m| m.max(d))))
    }

    /// Kehrt die Reihenfolge der Vertices um.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Verschiebt alle Vertices um `offset`.
    pub fn translated(&self, offset: Point2D) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| v + offset).collect(),
        }
    }

    /// Doppelte Shoelace-Summe / 2 ohne weitere Prüfungen.
    pub(crate) fn signed_area_raw(&self) -> f64 {
        self.edges().map(|(a, b)| a.perp_dot(b)).sum::<f64>() * 0.5
    }

    /// Konvertiert in ein `geo::Polygon` (geschlossener Außenring, keine Löcher).
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let coords: Vec<Coord<f64>> = self
            .vertices
            .iter()
            .map(|v| Coord { x: v.x, y: v.y })
            .collect();
        geo::Polygon::new(LineString::from(coords), Vec::new())
    }

    /// Übernimmt den Außenring eines `geo::Polygon`. Löcher werden ignoriert.
    pub fn from_geo(polygon: &geo::Polygon<f64>) -> Self {
        Self::new(
            polygon
                .exterior()
                .coords()
                .map(|c| Point2D::new(c.x, c.y))
                .collect(),
        )
    }
}

impl From<Vec<Point2D>> for Polygon {
    fn from(vertices: Vec<Point2D>) -> Self {
        Self::new(vertices)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.4}, {:.4})", v.x, v.y)?;
        }
        write!(f, "]")
    }
}
