//! Catalog validation logic.

use crate::schema::{Catalog, DeviceRecord, FLOW_TAG};
use pq_core::units::PressureUnit;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid column layout in record '{id}': {reason}")]
    InvalidColumns { id: String, reason: String },

    #[error("Invalid value: {field} in record '{id}' ({reason})")]
    InvalidValue {
        id: String,
        field: String,
        reason: String,
    },

    #[error("Sample table error in record '{id}' at line {line}: {reason}")]
    InvalidSampleRow {
        id: String,
        line: usize,
        reason: String,
    },
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), ValidationError> {
    let mut fan_ids = HashSet::new();
    for fan in &catalog.fans {
        if !fan_ids.insert(&fan.id) {
            return Err(ValidationError::DuplicateId {
                id: fan.id.clone(),
                context: "fans".to_string(),
            });
        }
        validate_columns(fan)?;
        validate_rows(fan)?;
        if fan.available_sizes.is_some() {
            return Err(ValidationError::InvalidValue {
                id: fan.id.clone(),
                field: "availableSizes".to_string(),
                reason: "fan records do not take size variants".to_string(),
            });
        }
    }

    let mut filter_ids = HashSet::new();
    for filter in &catalog.filters {
        if !filter_ids.insert(&filter.id) {
            return Err(ValidationError::DuplicateId {
                id: filter.id.clone(),
                context: "filters".to_string(),
            });
        }
        validate_columns(filter)?;
        validate_rows(filter)?;
        validate_sizes(filter)?;
    }

    Ok(())
}

fn validate_columns(record: &DeviceRecord) -> Result<(), ValidationError> {
    let flow_tags = record
        .columns
        .tags()
        .iter()
        .filter(|tag| *tag == FLOW_TAG)
        .count();
    if flow_tags != 1 {
        return Err(ValidationError::InvalidColumns {
            id: record.id.clone(),
            reason: format!("expected exactly one '{FLOW_TAG}' tag, found {flow_tags}"),
        });
    }

    let pressure_tags = record
        .columns
        .tags()
        .iter()
        .filter(|tag| PressureUnit::from_column_tag(tag).is_some())
        .count();
    if pressure_tags != 1 {
        return Err(ValidationError::InvalidColumns {
            id: record.id.clone(),
            reason: format!("expected exactly one 'mm'/'in' tag, found {pressure_tags}"),
        });
    }

    Ok(())
}

fn validate_rows(record: &DeviceRecord) -> Result<(), ValidationError> {
    let expected = record.columns.len();
    for (index, row) in record.data.lines().enumerate() {
        if row.trim().is_empty() {
            continue;
        }
        let found = row.split(',').count();
        if found != expected {
            return Err(ValidationError::InvalidSampleRow {
                id: record.id.clone(),
                line: index + 1,
                reason: format!("{found} fields, expected {expected}"),
            });
        }
    }
    Ok(())
}

fn validate_sizes(record: &DeviceRecord) -> Result<(), ValidationError> {
    let sizes = record.available_sizes.as_deref().unwrap_or_default();
    if sizes.is_empty() {
        return Err(ValidationError::InvalidValue {
            id: record.id.clone(),
            field: "availableSizes".to_string(),
            reason: "filter records require at least one size variant".to_string(),
        });
    }

    for size in sizes {
        if !size.area.is_finite() || size.area <= 0.0 {
            return Err(ValidationError::InvalidValue {
                id: record.id.clone(),
                field: format!("availableSizes['{}'].area", size.label),
                reason: format!("area must be positive and finite, got {}", size.area),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnLayout, FilterSizeVariant};

    fn fan(id: &str) -> DeviceRecord {
        DeviceRecord {
            id: id.to_string(),
            name: "Fan".to_string(),
            manufacturer: "AirWorks".to_string(),
            columns: ColumnLayout::new(vec!["cfm", "in"]),
            data: "0,2.0\n100,1.5".to_string(),
            available_sizes: None,
        }
    }

    fn filter(id: &str) -> DeviceRecord {
        DeviceRecord {
            id: id.to_string(),
            name: "Filter".to_string(),
            manufacturer: "CleanCo".to_string(),
            columns: ColumnLayout::new(vec!["cfm", "mm"]),
            data: "0,0.0\n100,10.0".to_string(),
            available_sizes: Some(vec![FilterSizeVariant {
                label: "12x12".to_string(),
                area: 1.0,
            }]),
        }
    }

    #[test]
    fn valid_catalog_passes() {
        let catalog = Catalog {
            fans: vec![fan("f1"), fan("f2")],
            filters: vec![filter("m1")],
        };
        validate_catalog(&catalog).unwrap();
    }

    #[test]
    fn duplicate_fan_id_rejected() {
        let catalog = Catalog {
            fans: vec![fan("f1"), fan("f1")],
            filters: vec![],
        };
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn missing_flow_tag_rejected() {
        let mut bad = fan("f1");
        bad.columns = ColumnLayout::new(vec!["rpm", "in"]);
        let catalog = Catalog {
            fans: vec![bad],
            filters: vec![],
        };
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::InvalidColumns { .. })
        ));
    }

    #[test]
    fn two_pressure_tags_rejected() {
        let mut bad = fan("f1");
        bad.columns = ColumnLayout::new(vec!["cfm", "in", "mm"]);
        bad.data = "0,2.0,50\n100,1.5,38".to_string();
        let catalog = Catalog {
            fans: vec![bad],
            filters: vec![],
        };
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::InvalidColumns { .. })
        ));
    }

    #[test]
    fn row_arity_mismatch_rejected() {
        let mut bad = fan("f1");
        bad.data = "0,2.0\n100".to_string();
        let catalog = Catalog {
            fans: vec![bad],
            filters: vec![],
        };
        match validate_catalog(&catalog) {
            Err(ValidationError::InvalidSampleRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected InvalidSampleRow, got {other:?}"),
        }
    }

    #[test]
    fn filter_without_sizes_rejected() {
        let mut bad = filter("m1");
        bad.available_sizes = Some(vec![]);
        let catalog = Catalog {
            fans: vec![],
            filters: vec![bad],
        };
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn non_positive_area_rejected() {
        let mut bad = filter("m1");
        bad.available_sizes = Some(vec![FilterSizeVariant {
            label: "12x12".to_string(),
            area: 0.0,
        }]);
        let catalog = Catalog {
            fans: vec![],
            filters: vec![bad],
        };
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn fan_with_sizes_rejected() {
        let mut bad = fan("f1");
        bad.available_sizes = Some(vec![FilterSizeVariant {
            label: "oops".to_string(),
            area: 1.0,
        }]);
        let catalog = Catalog {
            fans: vec![bad],
            filters: vec![],
        };
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
