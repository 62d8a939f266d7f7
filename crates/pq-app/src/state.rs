//! Selection state snapshot.

use pq_core::units::PressureUnit;
use serde::{Deserialize, Serialize};

/// One user-visible selection snapshot: which devices, how many of each,
/// and the display unit.
///
/// Owned by the surrounding layer (UI controls, URL state, preference
/// store, all external collaborators); the pipeline receives it by
/// reference and never mutates it. Quantities below 1 are read as 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingState {
    pub fan_id: Option<String>,
    pub fan_quantity: u32,
    pub filter_id: Option<String>,
    pub filter_size_index: Option<usize>,
    pub filter_quantity: u32,
    pub units: PressureUnit,
}

impl Default for OperatingState {
    fn default() -> Self {
        Self {
            fan_id: None,
            fan_quantity: 1,
            filter_id: None,
            filter_size_index: None,
            filter_quantity: 1,
            units: PressureUnit::Inches,
        }
    }
}
