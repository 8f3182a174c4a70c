// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    pub const EPSILON_SQUARED: f64 = EPSILON * EPSILON; // Für Vergleiche mit Längen
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Goldener Schnitt, Schrittweite der Golden-Section-Suche: (3 - sqrt(5)) / 2
    pub const GOLDEN_SECTION: f64 = 0.381_966_011_250_105_1;

    /// Standard-Anzahl der Richtungen für die Minkowski-Differenz (0.5° Auflösung)
    pub const DEFAULT_DIRECTION_COUNT: usize = 720;

    /// Praktische "Unendlichkeit" für Halbebenen. Muss groß gegenüber der Eingabe sein.
    pub const DEFAULT_PRACTICAL_INFINITY: f64 = 1e5;

    /// Standard-Rasterauflösung für die Inkreissuche
    pub const DEFAULT_GRID_RESOLUTION: usize = 100;

    /// Segmente, mit denen Kreise als Polygone diskretisiert werden
    pub const DEFAULT_CIRCLE_SEGMENTS: usize = 256;
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::TAU;
    use crate::math::types::Point2D;

    /// Gleichmäßig verteilte Einheitsvektoren über [0, 2π).
    /// Richtung `i` hat den Winkel `2π·i/count`.
    pub fn unit_directions(count: usize) -> Vec<Point2D> {
        (0..count)
            .map(|i| {
                let angle = TAU * i as f64 / count as f64;
                Point2D::new(angle.cos(), angle.sin())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_directions() {
        let dirs = angles::unit_directions(4);
        assert_eq!(dirs.len(), 4);
        assert_abs_diff_eq!(dirs[0].x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dirs[1].y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dirs[2].x, -1.0, epsilon = 1e-12);
        for d in &dirs {
            assert_abs_diff_eq!(d.length(), 1.0, epsilon = 1e-12);
        }
    }
}
