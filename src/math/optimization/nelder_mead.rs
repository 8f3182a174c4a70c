// src/math/optimization/nelder_mead.rs

use super::config::SimplexConfig;
use crate::math::error::{MathError, MathResult};
use log::trace;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Absoluter Schritt für Startkoordinaten gleich 0
const ZERO_COORDINATE_STEP: f64 = 0.00025;

/// Ergebnis einer mehrdimensionalen Minimierung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMinimum {
    pub x: DVector<f64>,
    pub value: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub converged: bool,
}

/// Box-Schranken pro Koordinate
#[derive(Debug, Clone, PartialEq)]
pub struct BoxBounds {
    lower: DVector<f64>,
    upper: DVector<f64>,
}

impl BoxBounds {
    pub fn new(lower: DVector<f64>, upper: DVector<f64>) -> MathResult<Self> {
        if lower.len() != upper.len() {
            return Err(MathError::DimensionMismatch {
                expected: lower.len(),
                actual: upper.len(),
            });
        }
        if lower
            .iter()
            .zip(upper.iter())
            .any(|(l, u)| !(l.is_finite() && u.is_finite()) || l > u)
        {
            return Err(MathError::invalid_parameter(
                "bounds",
                "every lower bound must be finite and not exceed its upper bound",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Gleiche Schranken `[lower, upper]` für alle `dimension` Koordinaten
    pub fn uniform(dimension: usize, (lower, upper): (f64, f64)) -> MathResult<Self> {
        Self::new(
            DVector::from_element(dimension, lower),
            DVector::from_element(dimension, upper),
        )
    }

    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    pub fn clamp(&self, x: &DVector<f64>) -> DVector<f64> {
        DVector::from_iterator(
            x.len(),
            x.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .map(|(&v, (&l, &u))| v.clamp(l, u)),
        )
    }
}

/// Nelder-Mead Simplex; jeder Kandidat wird vor der Auswertung auf die
/// Box-Schranken projiziert, `f` sieht also nie einen Punkt außerhalb.
pub fn minimize_bounded<F>(
    mut f: F,
    x0: &DVector<f64>,
    bounds: &BoxBounds,
    config: &SimplexConfig,
) -> MathResult<VectorMinimum>
where
    F: FnMut(&DVector<f64>) -> f64,
{
    config.validate()?;

    let n = x0.len();
    if n == 0 {
        return Err(MathError::invalid_parameter("x0", "empty start vector"));
    }
    if bounds.dimension() != n {
        return Err(MathError::DimensionMismatch {
            expected: n,
            actual: bounds.dimension(),
        });
    }

    let mut evaluations = 0;
    let mut evaluate = |x: &DVector<f64>| {
        evaluations += 1;
        f(x)
    };

    let start = bounds.clamp(x0);
    let mut simplex: Vec<(DVector<f64>, f64)> = Vec::with_capacity(n + 1);
    let start_value = evaluate(&start);
    simplex.push((start.clone(), start_value));

    for i in 0..n {
        let step = if start[i] != 0.0 {
            config.initial_step * start[i]
        } else {
            ZERO_COORDINATE_STEP
        };
        let mut vertex = start.clone();
        vertex[i] += step;
        // An der oberen Schranke in die Gegenrichtung ausweichen
        if vertex[i] > bounds.upper[i] {
            vertex[i] = start[i] - step.abs();
        }
        let vertex = bounds.clamp(&vertex);
        let value = evaluate(&vertex);
        simplex.push((vertex, value));
    }

    let max_iterations = config.max_iterations(n);
    let mut iterations = 0;
    let mut converged = false;

    loop {
        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));

        if has_converged(&simplex, config) {
            converged = true;
            break;
        }
        if iterations >= max_iterations {
            break;
        }
        iterations += 1;

        let worst = n;
        let centroid = simplex[..worst]
            .iter()
            .fold(DVector::zeros(n), |acc, (x, _)| acc + x)
            / n as f64;

        let reflected = bounds.clamp(&(&centroid + (&centroid - &simplex[worst].0) * REFLECTION));
        let f_reflected = evaluate(&reflected);

        if f_reflected < simplex[0].1 {
            let expanded =
                bounds.clamp(&(&centroid + (&reflected - &centroid) * EXPANSION));
            let f_expanded = evaluate(&expanded);
            simplex[worst] = if f_expanded < f_reflected {
                (expanded, f_expanded)
            } else {
                (reflected, f_reflected)
            };
            continue;
        }

        if f_reflected < simplex[worst - 1].1 {
            simplex[worst] = (reflected, f_reflected);
            continue;
        }

        // Kontraktion: außen, wenn die Reflexion besser als der schlechteste Punkt war
        let (contracted, f_contracted) = if f_reflected < simplex[worst].1 {
            let c = bounds.clamp(&(&centroid + (&reflected - &centroid) * CONTRACTION));
            let fc = evaluate(&c);
            (c, fc)
        } else {
            let c = bounds.clamp(&(&centroid + (&simplex[worst].0 - &centroid) * CONTRACTION));
            let fc = evaluate(&c);
            (c, fc)
        };

        if f_contracted < simplex[worst].1.min(f_reflected) {
            simplex[worst] = (contracted, f_contracted);
            continue;
        }

        let best = simplex[0].0.clone();
        for vertex in simplex.iter_mut().skip(1) {
            let shrunk = bounds.clamp(&(&best + (&vertex.0 - &best) * SHRINK));
            let value = evaluate(&shrunk);
            *vertex = (shrunk, value);
        }
    }

    let (x, value) = simplex.swap_remove(0);
    trace!(
        "nelder_mead: value = {value}, iterations = {iterations}, evaluations = {evaluations}, converged = {converged}"
    );

    Ok(VectorMinimum {
        x,
        value,
        iterations,
        evaluations,
        converged,
    })
}

/// Simplex-Durchmesser und Funktionsspreizung relativ zum besten Vertex
fn has_converged(simplex: &[(DVector<f64>, f64)], config: &SimplexConfig) -> bool {
    let (best_x, best_f) = &simplex[0];

    if !best_f.is_finite() {
        return false;
    }

    let x_spread = simplex[1..]
        .iter()
        .map(|(x, _)| (x - best_x).amax())
        .fold(0.0, f64::max);
    let f_spread = simplex[1..]
        .iter()
        .map(|(_, v)| (v - best_f).abs())
        .fold(0.0, f64::max);

    x_spread <= config.x_tolerance && f_spread <= config.f_tolerance
}
