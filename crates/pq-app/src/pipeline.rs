//! The full computation: records + selection state -> curves + operating
//! point.
//!
//! Pure function of its inputs: every call recomputes from the raw records,
//! nothing is cached, and identical inputs produce identical outputs. All
//! failures degrade to a partial or empty result; this layer never panics
//! or aborts.

use crate::state::OperatingState;
use pq_catalog::schema::{Catalog, DeviceRecord};
use pq_curves::{intersect, transform, Curve, OperatingPoint};
use tracing::{debug, warn};

/// Everything one computation produces.
///
/// Curves are exposed for external charting. An `operating_point` of
/// `None` means "no stable point"; presentation layers must render that
/// distinctly from "nothing selected yet" (curves also `None`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineOutput {
    pub fan_curve: Option<Curve>,
    pub filter_curve: Option<Curve>,
    pub operating_point: Option<OperatingPoint>,
}

/// Resolve the state's selections against a catalog and compute.
///
/// Ids that are unselected or unknown resolve to "no curve" for that
/// side; both are normal states, not failures.
pub fn compute(catalog: &Catalog, state: &OperatingState) -> PipelineOutput {
    let fan = state.fan_id.as_deref().and_then(|id| catalog.fan(id));
    let filter = state.filter_id.as_deref().and_then(|id| catalog.filter(id));
    compute_with_records(fan, filter, state)
}

/// Compute directly from already-resolved records.
pub fn compute_with_records(
    fan: Option<&DeviceRecord>,
    filter: Option<&DeviceRecord>,
    state: &OperatingState,
) -> PipelineOutput {
    let fan_curve = fan.and_then(|record| build_fan_curve(record, state));
    let filter_curve = filter.and_then(|record| build_filter_curve(record, state));

    let operating_point = match (&fan_curve, &filter_curve) {
        (Some(fan_curve), Some(filter_curve)) => {
            let point = intersect::operating_point(fan_curve, filter_curve);
            match &point {
                Some(point) => debug!(
                    flow = point.flow,
                    pressure = point.pressure,
                    units = %state.units,
                    "operating point found"
                ),
                None => debug!("curves do not cross in the shared flow range"),
            }
            point
        }
        _ => None,
    };

    PipelineOutput {
        fan_curve,
        filter_curve,
        operating_point,
    }
}

fn build_fan_curve(record: &DeviceRecord, state: &OperatingState) -> Option<Curve> {
    match transform::fan_curve(record, state.fan_quantity, state.units) {
        Ok(curve) => {
            debug!(
                id = %record.id,
                samples = curve.len(),
                quantity = state.fan_quantity,
                "fan curve ready"
            );
            Some(curve)
        }
        Err(err) => {
            warn!(id = %record.id, error = %err, "fan record unusable, dropping curve");
            None
        }
    }
}

fn build_filter_curve(record: &DeviceRecord, state: &OperatingState) -> Option<Curve> {
    // No size selected, or an index beyond the record's variants: a
    // normal "nothing to compute" state.
    let size_index = state.filter_size_index?;
    let size = record.size_variant(size_index)?;

    match transform::filter_curve(record, size, state.filter_quantity, state.units) {
        Ok(curve) => {
            debug!(
                id = %record.id,
                samples = curve.len(),
                size = %size.label,
                quantity = state.filter_quantity,
                "filter curve ready"
            );
            Some(curve)
        }
        Err(err) => {
            warn!(id = %record.id, error = %err, "filter record unusable, dropping curve");
            None
        }
    }
}
