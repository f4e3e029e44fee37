use crate::constants::{DEFAULT_GOLDEN_EXPONENT, GOLDEN_RATIO};
use crate::types::*;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the size given by the user measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputKind {
    /// The print; the window is the print minus the overlap
    #[default]
    Print,
    /// The outer mat
    Mat,
}

impl InputKind {
    /// Solver direction for this input
    pub fn mode(self) -> Mode {
        match self {
            InputKind::Print => Mode::FromWindow,
            InputKind::Mat => Mode::FromMat,
        }
    }
}

/// Base of the area factor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FactorBase {
    /// The Golden Ratio
    #[default]
    Golden,
    /// Any positive number
    Value(f64),
}

impl FromStr for FactorBase {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "phi" | "gold" | "golden" | "golden-ratio" => Ok(FactorBase::Golden),
            other => other
                .parse::<f64>()
                .map(FactorBase::Value)
                .map_err(|_| BorderError::Parse(format!("Can't parse factor {:?}", other))),
        }
    }
}

/// Mat area divided by window area, as `base ^ exponent`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaFactor {
    pub base: FactorBase,
    /// Defaults to 1.5 for the Golden Ratio and 1 otherwise
    pub exponent: Option<f64>,
}

impl AreaFactor {
    pub fn golden() -> Self {
        Self::default()
    }

    pub fn value(value: f64) -> Self {
        Self {
            base: FactorBase::Value(value),
            exponent: None,
        }
    }

    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = Some(exponent);
        self
    }

    /// The resulting area ratio
    pub fn ratio(&self) -> Result<f64> {
        let ratio = match (self.base, self.exponent) {
            (FactorBase::Golden, exponent) => {
                GOLDEN_RATIO.powf(exponent.unwrap_or(DEFAULT_GOLDEN_EXPONENT))
            }
            (FactorBase::Value(value), None) => value,
            (FactorBase::Value(value), Some(exponent)) => value.powf(exponent),
        };

        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(BorderError::InvalidRatio(ratio));
        }
        Ok(ratio)
    }
}

/// Everything needed to lay out a mat
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatOptions {
    // Input
    pub size: RectSize,
    pub kind: InputKind,

    // Window overlap over the print, per axis
    pub overlap: RectSize,

    // Paper the print sits on, assumed centered on the print
    pub paper: RectSize,

    // Border sizing
    pub factor: AreaFactor,
    pub fixed_border: Option<f64>,
}

impl Default for MatOptions {
    fn default() -> Self {
        Self {
            size: RectSize::default(),
            kind: InputKind::Print,
            overlap: RectSize::default(),
            paper: RectSize::default(),
            factor: AreaFactor::golden(),
            fixed_border: None,
        }
    }
}

impl MatOptions {
    pub fn new(size: RectSize, kind: InputKind) -> Self {
        Self {
            size,
            kind,
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BorderError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BorderError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.size.ensure_positive()?;

        if !is_non_negative(self.overlap) {
            return Err(BorderError::Config(
                "Overlap must not be negative".to_string(),
            ));
        }

        if !is_non_negative(self.paper) {
            return Err(BorderError::Config(
                "Paper size must not be negative".to_string(),
            ));
        }

        if self.kind == InputKind::Print {
            let window = RectSize::new(
                self.size.width - 2.0 * self.overlap.width,
                self.size.height - 2.0 * self.overlap.height,
            );
            if !window.is_positive() {
                return Err(BorderError::Config(format!(
                    "Overlap {} x {} leaves no window in a {} x {} print",
                    self.overlap.width, self.overlap.height, self.size.width, self.size.height
                )));
            }
        }

        match self.fixed_border {
            Some(border) if !border.is_finite() || border <= 0.0 => {
                return Err(BorderError::Config(format!(
                    "Fixed border must be positive, got {}",
                    border
                )));
            }
            Some(_) => {}
            None => {
                self.factor.ratio()?;
            }
        }

        Ok(())
    }
}

fn is_non_negative(size: RectSize) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width >= 0.0 && size.height >= 0.0
}
