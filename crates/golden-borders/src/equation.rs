//! Cubic equation in the side border
//!
//! The area condition `mat area = ratio * window area`, combined with the
//! bottom border relation, reduces to a cubic in the side border `b`. Both
//! directions (window known, mat known) are built here side by side.

use crate::types::*;

/// Coefficients of `c3*b^3 + c2*b^2 + c1*b + c0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub c3: f64,
    pub c2: f64,
    pub c1: f64,
    pub c0: f64,
}

impl Cubic {
    pub fn new(c3: f64, c2: f64, c1: f64, c0: f64) -> Self {
        Self { c3, c2, c1, c0 }
    }

    /// Build the border cubic for `dims` under `mode`.
    ///
    /// # Arguments
    /// * `dims` - Window size for `FromWindow`, mat size for `FromMat`
    /// * `ratio` - Target mat area divided by window area
    /// * `mode` - Which rectangle `dims` describes
    pub fn build(dims: RectSize, ratio: f64, mode: Mode) -> Result<Self> {
        dims.ensure_positive()?;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(BorderError::InvalidRatio(ratio));
        }

        let RectSize {
            width: x,
            height: y,
        } = dims;
        let phi = ratio;

        let cubic = match mode {
            // mat = (x + 2b) x (y + b + bottom), bottom = b + b^2 / (x + b)
            Mode::FromWindow => Self::new(
                6.0,
                7.0 * x + 2.0 * y,
                x * ((3.0 - phi) * y + 2.0 * x),
                (1.0 - phi) * x * x * y,
            ),
            // window = (x - 2b) x (y - b - bottom), bottom = b + b^2 / (x - b)
            Mode::FromMat => Self::new(
                -2.0 * phi,
                5.0 * x * phi + 2.0 * y * phi,
                -2.0 * x * x * phi - 3.0 * x * y * phi + x * y,
                x * x * y * (phi - 1.0),
            ),
        };

        Ok(cubic)
    }

    /// Coefficients from highest to lowest degree
    pub fn coefficients(&self) -> [f64; 4] {
        [self.c3, self.c2, self.c1, self.c0]
    }

    /// Evaluate at `b` (Horner form)
    pub fn eval(&self, b: f64) -> f64 {
        ((self.c3 * b + self.c2) * b + self.c1) * b + self.c0
    }

    /// Evaluate the first derivative at `b`
    pub fn derivative_at(&self, b: f64) -> f64 {
        (3.0 * self.c3 * b + 2.0 * self.c2) * b + self.c1
    }
}
