//! pq-curves: the numeric pipeline from raw sample tables to an operating
//! point.
//!
//! Stages, leaf-first:
//! - [`parse`]: raw tabular samples -> [`Curve`] in source units
//! - [`transform`]: quantity scaling + unit conversion -> display curve
//! - [`interp`]: clamped piecewise-linear evaluation
//! - [`intersect`]: merge-scan crossing of a fan and a filter curve
//!
//! Every stage is a pure function producing fresh values; the pipeline is
//! re-run from scratch on every state change.

pub mod curve;
pub mod error;
pub mod interp;
pub mod intersect;
pub mod parse;
pub mod transform;

pub use curve::{Curve, Point};
pub use error::{CurveError, CurveResult};
pub use interp::pressure_at;
pub use intersect::{operating_point, OperatingPoint};
pub use parse::parse_samples;
pub use transform::{fan_curve, filter_curve, rescale};
