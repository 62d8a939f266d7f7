//! pq-app: orchestration layer over the catalog and curve crates.
//!
//! Resolves an [`OperatingState`] snapshot against a device catalog, runs
//! the curve pipeline for the fan and the filter side, and solves for the
//! operating point, degrading gracefully wherever data or selections are
//! missing. Front ends (CLI, GUI, web) consume [`PipelineOutput`] and the
//! unified [`AppError`].

pub mod error;
pub mod pipeline;
pub mod state;

pub use error::{AppError, AppResult};
pub use pipeline::{compute, compute_with_records, PipelineOutput};
pub use state::OperatingState;

use pq_catalog::Catalog;
use std::path::Path;

/// Load and validate a catalog file, dispatching on extension
/// (`.json`, `.yaml`, `.yml`).
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let catalog = match ext.as_str() {
        "json" => pq_catalog::load_json(path)?,
        "yaml" | "yml" => pq_catalog::load_yaml(path)?,
        other => {
            return Err(AppError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    Ok(catalog)
}
