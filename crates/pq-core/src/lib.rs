//! pq-core: stable foundation for the operating-point calculator.
//!
//! Contains:
//! - units (water-column pressure units + conversion)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PqError, PqResult};
pub use numeric::*;
pub use units::*;
