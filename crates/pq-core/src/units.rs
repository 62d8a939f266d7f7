//! Water-column pressure units.
//!
//! Every pressure in the pipeline is a water-column height, in inches or
//! millimeters. The two are related by the exact linear factor 25.4 mm/in;
//! conversion has no offset and never rounds. Rounding happens only at
//! display time, outside the core.

use crate::error::PqError;
use crate::numeric::Real;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters of water column per inch of water column (exact).
pub const MM_PER_INCH: Real = 25.4;

/// Pressure unit for curve data and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureUnit {
    Inches,
    Millimeters,
}

impl PressureUnit {
    /// Column tag used by raw sample tables (`"in"` / `"mm"`).
    pub fn column_tag(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Millimeters => "mm",
        }
    }

    /// Resolve a raw column tag to a unit. Tags other than `"in"`/`"mm"`
    /// are not pressure tags.
    pub fn from_column_tag(tag: &str) -> Option<Self> {
        match tag {
            "in" => Some(Self::Inches),
            "mm" => Some(Self::Millimeters),
            _ => None,
        }
    }

    /// Axis/readout label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inches => "in H₂O",
            Self::Millimeters => "mm H₂O",
        }
    }

    /// Decimal places used when rendering a pressure readout.
    pub fn display_decimals(self) -> usize {
        match self {
            Self::Inches => 3,
            Self::Millimeters => 2,
        }
    }

    /// The opposite unit.
    pub fn other(self) -> Self {
        match self {
            Self::Inches => Self::Millimeters,
            Self::Millimeters => Self::Inches,
        }
    }
}

impl Default for PressureUnit {
    fn default() -> Self {
        Self::Inches
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inches => write!(f, "inches"),
            Self::Millimeters => write!(f, "millimeters"),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = PqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            _ => Err(PqError::InvalidArg {
                what: "pressure unit must be one of: in, inches, mm, millimeters",
            }),
        }
    }
}

/// Convert a water-column pressure value between units.
///
/// Identity when `from == to`; otherwise multiplies or divides by 25.4.
#[inline]
pub fn convert_pressure(value: Real, from: PressureUnit, to: PressureUnit) -> Real {
    match (from, to) {
        (PressureUnit::Inches, PressureUnit::Millimeters) => value * MM_PER_INCH,
        (PressureUnit::Millimeters, PressureUnit::Inches) => value / MM_PER_INCH,
        _ => value,
    }
}
