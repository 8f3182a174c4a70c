// src/analysis/report.rs

use crate::math::{
    error::MathResult,
    geometry::{GeometryResult, Polygon},
    optimization::{RadiiFit, ScaleFit},
    types::Circle,
};
use serde::{Deserialize, Serialize};

/// Kreis über X, seine Polygonisierung und `B ⊕ Kreis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleFit {
    pub circle: Circle,
    pub polygon: Polygon,
    pub sum: Polygon,
    /// `hausdorff(A, sum)`
    pub distance: f64,
}

/// Abgeleitete Form mit ihrem Abstand zu A.
///
/// Ist die Form leer (etwa `B ⊕ X` bei leerem X), ist `distance = +∞`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDistance {
    pub shape: Polygon,
    pub distance: f64,
}

/// Vergleich eines Abstands mit `hausdorff(A, B)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineCheck {
    pub label: String,
    pub distance: f64,
    pub improved: bool,
}

/// Alle Ergebnisse eines Analyse-Laufs für ein Paar (A, B).
///
/// Abstände zu leeren Formen sind `+∞`. JSON kennt keine unendlichen Zahlen,
/// `serde_json` schreibt sie als `null`: ein `null`-Abstand im Bericht heißt
/// also "keine Form zum Vergleichen", nicht "Abstand 0".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub shape_a: Polygon,
    pub shape_b: Polygon,
    /// `hausdorff(A, B)`
    pub baseline_distance: f64,
    /// X = A ⊖ B
    pub difference: GeometryResult,
    pub difference_area: f64,
    pub inscribed: Option<CircleFit>,
    pub enclosing: Option<CircleFit>,
    /// B ⊕ X
    pub difference_sum: ShapeDistance,
    /// B ⊕ sX
    pub scale_fit: ScaleFit,
    /// Ein Eintrag pro Vertex-Anzahl m
    pub radius_fits: Vec<RadiiFit>,
    pub best_vertex_count: Option<usize>,
    pub baseline_checks: Vec<BaselineCheck>,
}

impl AnalysisReport {
    pub fn best_radius_fit(&self) -> Option<&RadiiFit> {
        let m = self.best_vertex_count?;
        self.radius_fits.iter().find(|f| f.vertex_count == m)
    }

    /// Kleinster erreichter Abstand über alle abgeleiteten Formen.
    pub fn best_distance(&self) -> f64 {
        self.baseline_checks
            .iter()
            .map(|c| c.distance)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn any_improvement(&self) -> bool {
        self.baseline_checks.iter().any(|c| c.improved)
    }

    pub fn to_json_pretty(&self) -> MathResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl BaselineCheck {
    pub fn new(label: impl Into<String>, distance: f64, baseline: f64) -> Self {
        Self {
            label: label.into(),
            distance,
            improved: distance < baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_check() {
        assert!(BaselineCheck::new("a", 0.1, 0.2).improved);
        assert!(!BaselineCheck::new("b", 0.2, 0.2).improved);
        assert!(!BaselineCheck::new("c", f64::INFINITY, 0.2).improved);
    }

    #[test]
    fn test_infinite_distance_is_written_as_null() {
        let empty = ShapeDistance {
            shape: Polygon::empty(),
            distance: f64::INFINITY,
        };
        let json = serde_json::to_string(&empty).unwrap();
        assert!(json.contains("\"distance\":null"));
    }
}
