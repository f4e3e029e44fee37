//! Root finding for the border cubic
//!
//! All three roots are found at once with the Durand-Kerner (Weierstrass)
//! iteration on the monic form of the cubic. Because the coefficients are
//! real, complex roots come in conjugate pairs; a root whose imaginary part
//! is rounding noise is snapped to the real axis and then polished with a
//! few real Newton steps so the kept value is accurate to working precision.

use num_complex::Complex64;

use crate::constants::{
    MAX_ROOT_STEPS, NEWTON_POLISH_STEPS, REAL_ROOT_TOLERANCE, ROOT_CONVERGENCE,
};
use crate::equation::Cubic;
use crate::types::*;

/// Find all three (complex) roots of `cubic`.
pub fn complex_roots(cubic: &Cubic) -> Result<[Complex64; 3]> {
    let [c3, c2, c1, c0] = cubic.coefficients();
    if c3 == 0.0 || !c3.is_finite() {
        return Err(BorderError::DegenerateCubic(c3));
    }

    let monic = [c2 / c3, c1 / c3, c0 / c3];
    if monic.iter().any(|a| !a.is_finite()) {
        return Err(BorderError::NoRealRoot);
    }

    let (roots, steps) = durand_kerner(&monic, MAX_ROOT_STEPS);
    match steps {
        Some(steps) => log::debug!("Durand-Kerner converged after {} steps", steps),
        None => log::warn!(
            "Root finding did not converge in {} steps, border may be inaccurate",
            MAX_ROOT_STEPS
        ),
    }

    if roots.iter().any(|r| !r.re.is_finite() || !r.im.is_finite()) {
        return Err(BorderError::NoRealRoot);
    }

    Ok(roots)
}

/// Run at most `max_steps` sweeps on a monic cubic `b^3 + a2 b^2 + a1 b + a0`.
///
/// Returns the estimates and the number of sweeps taken, or `None` for the
/// count if the corrections never dropped below [`ROOT_CONVERGENCE`].
fn durand_kerner(monic: &[f64; 3], max_steps: usize) -> ([Complex64; 3], Option<usize>) {
    // Cauchy bound: every root lies within this radius
    let radius = 1.0 + monic.iter().fold(0.0_f64, |m, a| m.max(a.abs()));

    let seed = Complex64::new(0.4, 0.9);
    let mut roots = [
        Complex64::new(radius, 0.0),
        seed * radius,
        seed * seed * radius,
    ];

    for step in 0..max_steps {
        let mut largest_correction = 0.0_f64;

        for i in 0..3 {
            let z = roots[i];
            let mut denominator = Complex64::new(1.0, 0.0);
            for (j, other) in roots.iter().enumerate() {
                if j != i {
                    denominator *= z - other;
                }
            }
            if denominator.norm() == 0.0 {
                continue;
            }

            let correction = eval_monic(monic, z) / denominator;
            roots[i] = z - correction;
            largest_correction = largest_correction.max(correction.norm() / z.norm().max(1.0));
        }

        if largest_correction <= ROOT_CONVERGENCE {
            return (roots, Some(step + 1));
        }
    }

    (roots, None)
}

/// Find the real roots of `cubic`, sorted ascending.
pub fn real_roots(cubic: &Cubic) -> Result<Vec<f64>> {
    let roots = complex_roots(cubic)?;

    let scale = roots.iter().fold(1.0_f64, |m, r| m.max(r.norm()));
    let tolerance = REAL_ROOT_TOLERANCE * scale;

    let mut real: Vec<f64> = roots
        .iter()
        .filter(|r| r.im.abs() <= tolerance)
        .map(|r| polish(cubic, r.re))
        .collect();
    real.sort_by(|a, b| a.total_cmp(b));

    log::debug!("cubic roots {:?}, real {:?}", roots, real);

    Ok(real)
}

fn eval_monic(monic: &[f64; 3], z: Complex64) -> Complex64 {
    ((z + monic[0]) * z + monic[1]) * z + monic[2]
}

fn polish(cubic: &Cubic, mut root: f64) -> f64 {
    for _ in 0..NEWTON_POLISH_STEPS {
        let slope = cubic.derivative_at(root);
        if slope == 0.0 || !slope.is_finite() {
            break;
        }
        let next = root - cubic.eval(root) / slope;
        if !next.is_finite() {
            break;
        }
        root = next;
    }
    root
}
