// src/math/optimization/bounded_scalar.rs

use super::config::{ScalarSearchConfig, validate_bounds};
use crate::math::{error::MathResult, utils::constants::GOLDEN_SECTION};
use log::trace;
use serde::{Deserialize, Serialize};

/// Ergebnis einer beschränkten 1-D Minimierung
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarMinimum {
    pub x: f64,
    pub value: f64,
    pub evaluations: usize,
    /// `false`, wenn das Auswertungslimit vor der Toleranz erreicht wurde
    pub converged: bool,
}

/// Minimiert `f` auf `[lower, upper]` mit Brents Verfahren
/// (goldener Schnitt kombiniert mit parabolischer Interpolation).
///
/// Ableitungsfrei; `f` darf `+∞` liefern, solche Punkte werden einfach
/// nie als Minimum übernommen. Die erste Auswertung liegt bei
/// `lower + 0.382·(upper - lower)`, die Randpunkte selbst werden nie ausgewertet.
pub fn minimize_bounded<F>(
    mut f: F,
    (lower, upper): (f64, f64),
    config: &ScalarSearchConfig,
) -> MathResult<ScalarMinimum>
where
    F: FnMut(f64) -> f64,
{
    config.validate()?;
    validate_bounds("bounds", (lower, upper))?;

    let sqrt_eps = f64::EPSILON.sqrt();
    let xatol = config.tolerance;

    let (mut a, mut b) = (lower, upper);
    // x: bestes Argument, w: zweitbestes, v: vorheriger Wert von w
    let mut x = a + GOLDEN_SECTION * (b - a);
    let (mut w, mut v) = (x, x);
    let mut fx = f(x);
    let (mut fw, mut fv) = (fx, fx);
    let mut evaluations = 1;

    let mut step = 0.0_f64;
    let mut previous_step = 0.0_f64;
    let mut midpoint = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * x.abs() + xatol / 3.0;
    let mut tol2 = 2.0 * tol1;
    let mut converged = true;

    while (x - midpoint).abs() > tol2 - 0.5 * (b - a) {
        if evaluations >= config.max_evaluations {
            converged = false;
            break;
        }

        let mut golden = true;

        if previous_step.abs() > tol1 {
            // Parabel durch x, w, v
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            let older_step = previous_step;
            previous_step = step;

            if p.abs() < (0.5 * q * older_step).abs() && p > q * (a - x) && p < q * (b - x) {
                golden = false;
                step = p / q;
                let u = x + step;
                if (u - a) < tol2 || (b - u) < tol2 {
                    step = tol1 * sign_or_one(midpoint - x);
                }
            }
        }

        if golden {
            previous_step = if x >= midpoint { a - x } else { b - x };
            step = GOLDEN_SECTION * previous_step;
        }

        let u = x + sign_or_one(step) * step.abs().max(tol1);
        let fu = f(u);
        evaluations += 1;

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            (v, fv) = (w, fw);
            (w, fw) = (x, fx);
            (x, fx) = (u, fu);
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                (v, fv) = (w, fw);
                (w, fw) = (u, fu);
            } else if fu <= fv || v == x || v == w {
                (v, fv) = (u, fu);
            }
        }

        midpoint = 0.5 * (a + b);
        tol1 = sqrt_eps * x.abs() + xatol / 3.0;
        tol2 = 2.0 * tol1;
    }

    trace!(
        "minimize_bounded: x = {x}, f = {fx}, evaluations = {evaluations}, converged = {converged}"
    );

    Ok(ScalarMinimum {
        x,
        value: fx,
        evaluations,
        converged,
    })
}

fn sign_or_one(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
