//! Shared constants for border computation
//!
//! This module centralizes magic numbers used by the solver and the unit
//! handling.

// =============================================================================
// Area Ratio
// =============================================================================

/// The Golden Ratio, (1 + sqrt(5)) / 2
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Exponent applied to the Golden Ratio when none is given
pub const DEFAULT_GOLDEN_EXPONENT: f64 = 1.5;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters per foot
pub const MM_PER_FOOT: f64 = 304.8;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// =============================================================================
// Root Finding
// =============================================================================

/// Maximum Durand-Kerner sweeps before giving up on convergence
pub const MAX_ROOT_STEPS: usize = 100;

/// Relative correction below which a root is considered converged
pub const ROOT_CONVERGENCE: f64 = 1e-14;

/// Imaginary parts smaller than this (relative to the root scale) are noise
pub const REAL_ROOT_TOLERANCE: f64 = 1e-9;

/// Newton steps applied to each real root after classification
pub const NEWTON_POLISH_STEPS: usize = 4;
