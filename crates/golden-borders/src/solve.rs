//! Border solving
//!
//! Turns the real roots of the border cubic into border solutions and picks
//! the one to use.

use crate::constants::REAL_ROOT_TOLERANCE;
use crate::equation::Cubic;
use crate::roots::real_roots;
use crate::types::*;

/// Solve the side and bottom borders for `dims`.
///
/// The smallest physically valid border is chosen. Every other real root is
/// returned as well, in [`Solved::alternatives`] when it gives a usable
/// border and in [`Solved::rejected`] when it does not, so the caller can
/// report the ambiguity.
///
/// # Arguments
/// * `dims` - Window size for `FromWindow`, mat size for `FromMat` (mm)
/// * `ratio` - Target mat area divided by window area
/// * `mode` - Which rectangle `dims` describes
pub fn solve_border(dims: RectSize, ratio: f64, mode: Mode) -> Result<Solved> {
    let cubic = Cubic::build(dims, ratio, mode)?;
    let roots = real_roots(&cubic)?;

    if roots.is_empty() {
        return Err(BorderError::NoRealRoot);
    }

    let scale = roots.iter().fold(1.0_f64, |m, r| m.max(r.abs()));
    let noise = REAL_ROOT_TOLERANCE * scale;

    let mut candidates = Vec::with_capacity(roots.len());
    let mut rejected = Vec::new();
    let mut singular = None;

    for root in roots {
        if root < -noise {
            log::debug!("Dropping negative border root {}", root);
            rejected.push(root);
            continue;
        }
        let side = root.max(0.0);

        let bottom = match derive_bottom_border(side, dims, mode) {
            Ok(bottom) => bottom,
            Err(err) => {
                log::debug!("Dropping border root {}: {}", side, err);
                if singular.is_none() {
                    singular = Some(err);
                }
                rejected.push(root);
                continue;
            }
        };

        let candidate = BorderSolution { side, bottom };
        if mode == Mode::FromMat && !leaves_window(&candidate, dims) {
            log::debug!("Dropping border root {}: no window left in the mat", side);
            rejected.push(root);
            continue;
        }
        candidates.push(candidate);
    }

    // Roots arrive sorted, so the first candidate has the smallest border
    let mut candidates = candidates.into_iter();
    let Some(solution) = candidates.next() else {
        return Err(singular.unwrap_or(BorderError::NoRealRoot));
    };

    Ok(Solved {
        solution,
        alternatives: candidates.collect(),
        rejected,
    })
}

/// Bottom border for a known side border.
///
/// Used directly in fixed-border mode, and by [`solve_border`] for every
/// candidate root.
pub fn derive_bottom_border(side: f64, dims: RectSize, mode: Mode) -> Result<f64> {
    dims.ensure_positive()?;
    Ok(side + bottom_extra(side, dims.width, mode)?)
}

/// The amount the bottom border exceeds the side border
fn bottom_extra(side: f64, width: f64, mode: Mode) -> Result<f64> {
    let denominator = match mode {
        Mode::FromWindow => width + side,
        Mode::FromMat => width - side,
    };

    if denominator <= 0.0 || !denominator.is_finite() {
        return Err(BorderError::DivisionSingularity {
            border: side,
            denominator,
        });
    }

    Ok(side * side / denominator)
}

fn leaves_window(candidate: &BorderSolution, mat: RectSize) -> bool {
    mat.width - 2.0 * candidate.side > 0.0
        && mat.height - candidate.side - candidate.bottom > 0.0
}
