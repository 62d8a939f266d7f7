//! Device catalog schema definitions.
//!
//! Matches the wire format of the catalog files: fan and filter records
//! carrying a tagged column layout and a raw comma-separated sample table.
//! Field names are camelCase on the wire (`availableSizes`).

use pq_core::units::PressureUnit;
use serde::{Deserialize, Serialize};

/// Column tag marking the flow column of a sample table.
pub const FLOW_TAG: &str = "cfm";

/// Ordered column tags for a raw sample table.
///
/// Exactly one `"cfm"` tag and exactly one `"mm"`/`"in"` tag are required
/// (enforced by [`crate::validate_catalog`]); each tag's position is the
/// corresponding value's column index in every data row. Other tags are
/// carried but ignored by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnLayout(pub Vec<String>);

impl ColumnLayout {
    pub fn new<S: Into<String>>(tags: Vec<S>) -> Self {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn tags(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the flow column (first `"cfm"` tag).
    pub fn flow_index(&self) -> Option<usize> {
        self.0.iter().position(|tag| tag == FLOW_TAG)
    }

    /// Index of the pressure column (first `"mm"` or `"in"` tag).
    pub fn pressure_index(&self) -> Option<usize> {
        self.0
            .iter()
            .position(|tag| PressureUnit::from_column_tag(tag).is_some())
    }

    /// Pressure unit the table's samples are expressed in, from the first
    /// `"mm"`/`"in"` tag. `None` when the layout carries no pressure tag;
    /// callers that already hold parsed samples fall back to inches.
    pub fn source_unit(&self) -> Option<PressureUnit> {
        self.0
            .iter()
            .find_map(|tag| PressureUnit::from_column_tag(tag))
    }
}

/// One selectable size of a filter assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSizeVariant {
    pub label: String,
    /// Filtration area in square feet.
    pub area: f64,
}

/// A fan or filter record from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub columns: ColumnLayout,
    /// Raw sample table: one row per line, comma-separated numeric fields
    /// matching `columns` in arity and order.
    pub data: String,
    /// Size variants; present on filter records only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_sizes: Option<Vec<FilterSizeVariant>>,
}

impl DeviceRecord {
    /// Bounds-checked size variant access.
    pub fn size_variant(&self, index: usize) -> Option<&FilterSizeVariant> {
        self.available_sizes.as_deref()?.get(index)
    }

    /// Case-insensitive substring match on id, name, and manufacturer.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
            || self.manufacturer.to_ascii_lowercase().contains(&query)
    }
}

/// The full device catalog: fan records and filter records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub fans: Vec<DeviceRecord>,
    #[serde(default)]
    pub filters: Vec<DeviceRecord>,
}

impl Catalog {
    /// Look up a fan record by id.
    pub fn fan(&self, id: &str) -> Option<&DeviceRecord> {
        self.fans.iter().find(|record| record.id == id)
    }

    /// Look up a filter record by id.
    pub fn filter(&self, id: &str) -> Option<&DeviceRecord> {
        self.filters.iter().find(|record| record.id == id)
    }
}
