//! Quantity scaling and unit conversion of parsed curves.
//!
//! Both entity transforms share one shape: scale the flow axis by a
//! factor, convert the pressure unit. This is the only stage where
//! quantity multipliers and unit targets apply; parser output is always
//! raw source units at per-unit scale.

use crate::curve::{Curve, Point};
use crate::error::CurveResult;
use crate::parse::parse_samples;
use pq_catalog::schema::{DeviceRecord, FilterSizeVariant};
use pq_core::units::{convert_pressure, PressureUnit};
use pq_core::Real;

/// Scale the flow axis by a positive factor and convert pressures between
/// water-column units. Produces a fresh curve; the input is untouched.
pub fn rescale(curve: &Curve, flow_scale: Real, from: PressureUnit, to: PressureUnit) -> Curve {
    curve
        .points()
        .iter()
        .map(|point| {
            Point::new(
                point.flow * flow_scale,
                convert_pressure(point.pressure, from, to),
            )
        })
        .collect()
}

/// Parse a fan record and scale it for `quantity` identical fans in
/// parallel: total flow multiplies, pressure only changes unit. Quantity 0
/// is treated as 1.
pub fn fan_curve(record: &DeviceRecord, quantity: u32, target: PressureUnit) -> CurveResult<Curve> {
    let raw = parse_samples(&record.data, &record.columns)?;
    let source = source_unit(record);
    Ok(rescale(&raw, Real::from(quantity.max(1)), source, target))
}

/// Parse a filter record and scale it for `quantity` assemblies of the
/// given size variant: the flow axis scales by total filtration area
/// (`area * quantity`), pressure only changes unit.
pub fn filter_curve(
    record: &DeviceRecord,
    size: &FilterSizeVariant,
    quantity: u32,
    target: PressureUnit,
) -> CurveResult<Curve> {
    let raw = parse_samples(&record.data, &record.columns)?;
    let source = source_unit(record);
    let total_area = size.area * Real::from(quantity.max(1));
    Ok(rescale(&raw, total_area, source, target))
}

// A successful parse implies a pressure tag; inches is the documented
// fallback for layouts without one.
fn source_unit(record: &DeviceRecord) -> PressureUnit {
    record.columns.source_unit().unwrap_or_default()
}
