use thiserror::Error;

#[derive(Error, Debug)]
pub enum BorderError {
    #[error("No real solution found for the border size")]
    NoRealRoot,
    #[error(
        "Bottom border is undefined for border {border}: denominator {denominator} is not positive"
    )]
    DivisionSingularity { border: f64, denominator: f64 },
    #[error("Invalid dimensions {width} x {height}: both must be positive")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("Invalid area ratio {0}: must be positive")]
    InvalidRatio(f64),
    #[error("Leading coefficient {0} does not define a cubic")]
    DegenerateCubic(f64),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BorderError>;

/// Which rectangle the known dimensions describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Dimensions are the mat window; the mat grows around it
    #[default]
    FromWindow,
    /// Dimensions are the outer mat; the window is cut out of it
    FromMat,
}

/// Width and height in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectSize {
    pub width: f64,
    pub height: f64,
}

impl RectSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Same value on both axes
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when both sides are finite and strictly positive
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub(crate) fn ensure_positive(&self) -> Result<()> {
        if self.is_positive() {
            Ok(())
        } else {
            Err(BorderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Border widths around the window.
///
/// Top, left and right share `side`; `bottom` is enlarged so the window does
/// not look like it sinks into the mat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderSolution {
    pub side: f64,
    pub bottom: f64,
}

/// Outcome of a border solve: the chosen solution plus every other real
/// root the cubic produced, smallest border first.
///
/// Roots that give a usable border end up in `alternatives`; the rest
/// (negative, singular, or leaving no window) are kept as raw values in
/// `rejected`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solved {
    pub solution: BorderSolution,
    pub alternatives: Vec<BorderSolution>,
    pub rejected: Vec<f64>,
}

impl Solved {
    /// Real roots of the cubic, including the chosen one
    pub fn real_root_count(&self) -> usize {
        1 + self.alternatives.len() + self.rejected.len()
    }

    /// Non-fatal diagnostic for the caller when the cubic had more than one
    /// real root
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        if self.real_root_count() > 1 {
            Some(Diagnostic::MultipleRealRoots {
                chosen: self.solution,
                alternatives: self.alternatives.clone(),
                rejected: self.rejected.clone(),
            })
        } else {
            None
        }
    }
}

/// Recoverable conditions reported alongside a result
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The cubic had more than one real root; the smallest valid border
    /// was kept
    MultipleRealRoots {
        chosen: BorderSolution,
        alternatives: Vec<BorderSolution>,
        rejected: Vec<f64>,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MultipleRealRoots { .. } => {
                write!(f, "multiple solutions. Keeping smallest border.")
            }
        }
    }
}
