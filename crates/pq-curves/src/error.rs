//! Curve pipeline errors.

use thiserror::Error;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while turning a raw sample table into a curve.
///
/// All of these reject the record as a whole; the orchestration layer
/// degrades the affected side to "no curve data" rather than aborting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Required column tag absent from the layout.
    #[error("Missing '{tag}' column in sample table layout")]
    MissingColumn { tag: &'static str },

    /// A referenced field did not parse as a finite number (1-based
    /// line and column).
    #[error("Malformed numeric field at line {line}, column {column}")]
    MalformedField { line: usize, column: usize },

    /// A row has fewer fields than the layout references.
    #[error("Row at line {line} has {found} fields, expected at least {expected}")]
    RowTooShort {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Flow values must increase strictly down the table; equal adjacent
    /// flows would make interpolation divide by zero.
    #[error("Flow value at line {line} does not increase over the previous row")]
    UnsortedFlow { line: usize },
}

impl From<CurveError> for pq_core::PqError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::MissingColumn { .. } => pq_core::PqError::InvalidArg {
                what: "sample table layout is missing a required column tag",
            },
            CurveError::MalformedField { .. } => pq_core::PqError::InvalidArg {
                what: "sample table contains a malformed numeric field",
            },
            CurveError::RowTooShort { .. } => pq_core::PqError::InvalidArg {
                what: "sample table row is shorter than its layout",
            },
            CurveError::UnsortedFlow { .. } => pq_core::PqError::InvalidArg {
                what: "sample table flow values are not strictly increasing",
            },
        }
    }
}
