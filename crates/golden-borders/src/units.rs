//! Length units and dimension strings
//!
//! Dimensions are written as `<number><unit?>` (`12.5cm`) and pairs as
//! `<width><sep><height><unit?>` (`9x6in`). Everything is converted to
//! millimeters on the way in and back to the display unit on the way out.

use std::fmt;
use std::str::FromStr;

use crate::constants::{INCHES_PER_FOOT, MM_PER_FOOT, MM_PER_INCH};
use crate::types::*;

/// Separators accepted between the two halves of a dimension pair
const PAIR_SEPARATORS: &[char] = &['x', 'X', ',', ':', '-'];

/// Supported length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    #[default]
    Mm,
    Cm,
    Dm,
    M,
    In,
    Ft,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Mm, Unit::Cm, Unit::Dm, Unit::M, Unit::In, Unit::Ft];

    pub fn name(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::Dm => "dm",
            Unit::M => "m",
            Unit::In => "in",
            Unit::Ft => "ft",
        }
    }

    /// Millimeters in one of this unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::Cm => 10.0,
            Unit::Dm => 100.0,
            Unit::M => 1000.0,
            Unit::In => MM_PER_INCH,
            Unit::Ft => MM_PER_FOOT,
        }
    }

    /// Decimal places used when displaying a value in this unit
    pub fn precision(self) -> usize {
        match self {
            Unit::Mm => 1,
            Unit::Cm => 2,
            Unit::Dm => 3,
            Unit::M => 4,
            Unit::In => 2,
            Unit::Ft => 4,
        }
    }

    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }

    pub fn from_mm(self, mm: f64) -> f64 {
        mm / self.mm_per_unit()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| BorderError::Parse(format!("Unknown unit {:?}", s)))
    }
}

/// Parse a single dimension such as `25`, `2.5cm` or `-3mm` to millimeters.
///
/// A missing unit falls back to `default_unit`.
pub fn parse_dim(s: &str, default_unit: Unit) -> Result<f64> {
    let s = s.trim();
    let (number, rest) = split_number(s, true);
    let value = parse_number(number).ok_or_else(|| cant_parse("dimension", s))?;
    let unit = parse_unit_suffix(rest, default_unit).map_err(|_| cant_parse("dimension", s))?;
    Ok(unit.to_mm(value))
}

/// Parse a dimension pair such as `9x6in` or `300:200` to millimeters.
///
/// A lone dimension is accepted and used for both sides.
pub fn parse_dim_pair(s: &str, default_unit: Unit) -> Result<RectSize> {
    let s = s.trim();
    match split_pair(s) {
        Some((width, height, rest)) => {
            let unit =
                parse_unit_suffix(rest, default_unit).map_err(|_| cant_parse("dimension pair", s))?;
            Ok(RectSize::new(unit.to_mm(width), unit.to_mm(height)))
        }
        None => parse_dim(s, default_unit)
            .map(RectSize::uniform)
            .map_err(|_| cant_parse("dimension pair", s)),
    }
}

/// Format a millimeter value in `unit`.
///
/// Inches get a trailing `"`; feet are written as feet and inches (`3'4.50"`).
pub fn format_dim(mm: f64, unit: Unit) -> String {
    let value = unit.from_mm(mm);
    match unit {
        Unit::In => format!("{:.*}\"", Unit::In.precision(), value),
        Unit::Ft => {
            let sign = if value < 0.0 { "-" } else { "" };
            let value = value.abs();
            let feet = value.floor();
            let inches = (value - feet) * INCHES_PER_FOOT;
            if feet >= 1.0 {
                format!("{}{}'{:.*}\"", sign, feet, Unit::In.precision(), inches)
            } else {
                format!("{}{:.*}\"", sign, Unit::In.precision(), inches)
            }
        }
        _ => format!("{:.*} {}", unit.precision(), value, unit),
    }
}

/// Format a size as `<width> x <height>` in `unit`.
pub fn format_dim_pair(size: RectSize, unit: Unit) -> String {
    format!(
        "{} x {}",
        format_dim(size.width, unit),
        format_dim(size.height, unit)
    )
}

// ---- Helpers ----

/// Split the leading numeric run off `s`.
fn split_number(s: &str, allow_sign: bool) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (allow_sign && c == '-' && i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s.split_at(end)
}

fn split_pair(s: &str) -> Option<(f64, f64, &str)> {
    let (width, rest) = split_number(s, false);
    let width = parse_number(width)?;

    let sep = rest.chars().next().filter(|c| PAIR_SEPARATORS.contains(c))?;
    let rest = &rest[sep.len_utf8()..];

    let (height, rest) = split_number(rest, false);
    let height = parse_number(height)?;
    Some((width, height, rest))
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_unit_suffix(rest: &str, default_unit: Unit) -> Result<Unit> {
    let rest = rest.trim();
    if rest.is_empty() {
        Ok(default_unit)
    } else {
        rest.parse()
    }
}

fn cant_parse(what: &str, s: &str) -> BorderError {
    BorderError::Parse(format!("Can't parse {} {:?}", what, s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_number() {
        assert_eq!(split_number("12.5cm", true), ("12.5", "cm"));
        assert_eq!(split_number("-3", true), ("-3", ""));
        assert_eq!(split_number("-3", false), ("", "-3"));
        assert_eq!(split_number("in", true), ("", "in"));
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair("9x6in"), Some((9.0, 6.0, "in")));
        assert_eq!(split_pair("9-6"), Some((9.0, 6.0, "")));
        assert_eq!(split_pair("9"), None);
        assert_eq!(split_pair("9y6"), None);
    }
}
