//! Raw sample table parsing.
//!
//! Turns a record's comma-separated sample text into a [`Curve`] in the
//! record's source units at per-unit scale. Quantity multipliers and unit
//! targets are applied later, in [`crate::transform`].
//!
//! The parser rejects rather than repairs: a malformed or non-finite field
//! fails the whole record, and flow values must increase strictly down the
//! table so interpolation never divides by zero. Row order is preserved
//! as-is; the parser does not sort.

use crate::curve::{Curve, Point};
use crate::error::{CurveError, CurveResult};
use pq_catalog::schema::{ColumnLayout, FLOW_TAG};
use pq_core::{ensure_finite, Real};

/// Parse a raw sample table using the record's column layout.
///
/// The flow column is the first `"cfm"` tag, the pressure column the first
/// `"mm"`/`"in"` tag. Blank lines and whitespace around fields are
/// tolerated; columns outside the two referenced ones are ignored.
pub fn parse_samples(raw: &str, columns: &ColumnLayout) -> CurveResult<Curve> {
    let flow_index = columns
        .flow_index()
        .ok_or(CurveError::MissingColumn { tag: FLOW_TAG })?;
    let pressure_index = columns
        .pressure_index()
        .ok_or(CurveError::MissingColumn { tag: "mm/in" })?;

    let needed = flow_index.max(pressure_index) + 1;
    let mut points = Vec::new();
    let mut prev_flow: Option<Real> = None;

    for (index, row) in raw.lines().enumerate() {
        let line = index + 1;
        if row.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() < needed {
            return Err(CurveError::RowTooShort {
                line,
                expected: needed,
                found: fields.len(),
            });
        }

        let flow = parse_field(&fields, flow_index, line)?;
        let pressure = parse_field(&fields, pressure_index, line)?;

        if let Some(prev) = prev_flow {
            if flow <= prev {
                return Err(CurveError::UnsortedFlow { line });
            }
        }
        prev_flow = Some(flow);

        points.push(Point::new(flow, pressure));
    }

    Ok(Curve::new(points))
}

fn parse_field(fields: &[&str], column: usize, line: usize) -> CurveResult<Real> {
    let malformed = CurveError::MalformedField {
        line,
        column: column + 1,
    };
    let value: Real = fields[column]
        .trim()
        .parse()
        .map_err(|_| malformed.clone())?;
    ensure_finite(value, "sample field").map_err(|_| malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pq_catalog::schema::ColumnLayout;

    fn layout(tags: &[&str]) -> ColumnLayout {
        ColumnLayout::new(tags.to_vec())
    }

    #[test]
    fn parses_rows_in_order() {
        let curve = parse_samples("0,2.0\n100,1.5\n200,0.5", &layout(&["cfm", "in"])).unwrap();
        let points = curve.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0.0, 2.0));
        assert_eq!(points[2], Point::new(200.0, 0.5));
    }

    #[test]
    fn column_positions_follow_the_layout() {
        // Pressure first, extra trailing column ignored.
        let curve = parse_samples("50.8,0, 900\n25.4,100, 850", &layout(&["mm", "cfm", "rpm"]))
            .unwrap();
        assert_eq!(curve.points()[0], Point::new(0.0, 50.8));
        assert_eq!(curve.points()[1], Point::new(100.0, 25.4));
    }

    #[test]
    fn tolerates_blank_lines_and_whitespace() {
        let curve = parse_samples("\n 0 , 2.0 \n\n 100 , 1.5 \n", &layout(&["cfm", "in"])).unwrap();
        assert_eq!(curve.len(), 2);
    }

    #[test]
    fn empty_table_yields_empty_curve() {
        let curve = parse_samples("", &layout(&["cfm", "in"])).unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn missing_flow_tag_is_an_error_not_a_panic() {
        let err = parse_samples("0,2.0", &layout(&["rpm", "in"])).unwrap_err();
        assert_eq!(err, CurveError::MissingColumn { tag: "cfm" });
    }

    #[test]
    fn missing_pressure_tag_is_an_error() {
        let err = parse_samples("0,2.0", &layout(&["cfm", "rpm"])).unwrap_err();
        assert!(matches!(err, CurveError::MissingColumn { .. }));
    }

    #[test]
    fn malformed_field_names_line_and_column() {
        let err = parse_samples("0,2.0\n100,abc", &layout(&["cfm", "in"])).unwrap_err();
        assert_eq!(err, CurveError::MalformedField { line: 2, column: 2 });
    }

    #[test]
    fn non_finite_field_rejected() {
        let err = parse_samples("0,inf", &layout(&["cfm", "in"])).unwrap_err();
        assert!(matches!(err, CurveError::MalformedField { .. }));
    }

    #[test]
    fn short_row_rejected() {
        let err = parse_samples("0,2.0\n100", &layout(&["cfm", "in"])).unwrap_err();
        assert_eq!(
            err,
            CurveError::RowTooShort {
                line: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn duplicate_flow_rejected() {
        let err = parse_samples("0,2.0\n100,1.5\n100,1.4", &layout(&["cfm", "in"])).unwrap_err();
        assert_eq!(err, CurveError::UnsortedFlow { line: 3 });
    }

    #[test]
    fn decreasing_flow_rejected() {
        let err = parse_samples("100,1.5\n0,2.0", &layout(&["cfm", "in"])).unwrap_err();
        assert_eq!(err, CurveError::UnsortedFlow { line: 2 });
    }
}
