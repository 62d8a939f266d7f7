//! Operating-point solver.
//!
//! Finds the flow at which a fan's pressure curve and a filter assembly's
//! resistance curve cross. The fan curve typically falls with flow and the
//! filter curve rises, but the scan assumes nothing beyond sorted flow
//! values.
//!
//! ## Algorithm
//!
//! Merge-scan with sign-change detection:
//!
//! 1. Walk both curves with one cursor each, taking the next sample from
//!    whichever cursor has the smaller flow (ties take the fan sample, a
//!    fixed convention) and interpolating the other curve there.
//! 2. Track `diff = fan - filter` at each merged sample. A sign change
//!    against the previous sample (or either endpoint touching zero)
//!    brackets a crossing.
//! 3. Locate the crossing inside the bracket at
//!    `t = |prev_diff| / (|prev_diff| + |diff|)`, degenerating to `t = 0`
//!    when both diffs are zero, and read its pressure off the fan
//!    trajectory, a fixed convention; both curves agree at the true
//!    crossing. The first crossing terminates the scan.
//! 4. An exhausted scan means one curve dominates the other across the
//!    overlapping flow range: no stable operating point.

use crate::curve::Curve;
use crate::interp::pressure_at;
use pq_core::Real;

/// The flow/pressure pair where supplied pressure equals demanded
/// pressure, in whatever unit the input curves carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub flow: Real,
    pub pressure: Real,
}

/// Find the first crossing of a fan curve and a filter curve.
pub fn operating_point(fan: &Curve, filter: &Curve) -> Option<OperatingPoint> {
    let fan_points = fan.points();
    let filter_points = filter.points();

    let mut i = 0;
    let mut j = 0;
    // Previous merged sample: (flow, fan pressure, filter pressure).
    let mut prev: Option<(Real, Real, Real)> = None;

    while i < fan_points.len() && j < filter_points.len() {
        let (flow, fan_pressure, filter_pressure);
        if fan_points[i].flow <= filter_points[j].flow {
            flow = fan_points[i].flow;
            fan_pressure = Some(fan_points[i].pressure);
            filter_pressure = pressure_at(filter, flow);
            i += 1;
        } else {
            flow = filter_points[j].flow;
            filter_pressure = Some(filter_points[j].pressure);
            fan_pressure = pressure_at(fan, flow);
            j += 1;
        }

        // A sample missing either value neither tests for a crossing nor
        // becomes the previous sample; the cursor has already advanced.
        let (Some(fan_pressure), Some(filter_pressure)) = (fan_pressure, filter_pressure) else {
            continue;
        };

        let diff = fan_pressure - filter_pressure;
        if let Some((prev_flow, prev_fan, prev_filter)) = prev {
            let prev_diff = prev_fan - prev_filter;
            if prev_diff * diff <= 0.0 {
                let span = prev_diff.abs() + diff.abs();
                let t = if span == 0.0 {
                    0.0
                } else {
                    prev_diff.abs() / span
                };
                return Some(OperatingPoint {
                    flow: prev_flow + t * (flow - prev_flow),
                    pressure: prev_fan + t * (fan_pressure - prev_fan),
                });
            }
        }

        prev = Some((flow, fan_pressure, filter_pressure));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Point;
    use pq_core::{nearly_equal, Tolerances};

    fn curve(samples: &[(f64, f64)]) -> Curve {
        Curve::new(
            samples
                .iter()
                .map(|&(flow, pressure)| Point::new(flow, pressure))
                .collect(),
        )
    }

    #[test]
    fn falling_fan_meets_rising_filter() {
        // Diff sequence +2.0, +0.5, -1.5: the sign change sits between
        // flow 100 and 200, at t = 0.5 / (0.5 + 1.5).
        let fan = curve(&[(0.0, 2.0), (100.0, 1.5), (200.0, 0.5)]);
        let filter = curve(&[(0.0, 0.0), (100.0, 1.0), (200.0, 2.0)]);

        let point = operating_point(&fan, &filter).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(point.flow, 125.0, tol));
        assert!(nearly_equal(point.pressure, 1.25, tol));
    }

    #[test]
    fn dominating_fan_never_crosses() {
        let fan = curve(&[(0.0, 5.0), (100.0, 4.0), (200.0, 3.0)]);
        let filter = curve(&[(0.0, 0.0), (100.0, 1.0), (200.0, 2.0)]);
        assert_eq!(operating_point(&fan, &filter), None);
    }

    #[test]
    fn dominating_filter_never_crosses() {
        let fan = curve(&[(0.0, 1.0), (200.0, 0.5)]);
        let filter = curve(&[(0.0, 2.0), (200.0, 3.0)]);
        assert_eq!(operating_point(&fan, &filter), None);
    }

    #[test]
    fn exact_touch_at_a_shared_sample() {
        // Curves meet exactly at flow 100; the zero diff endpoint counts
        // as a crossing.
        let fan = curve(&[(0.0, 2.0), (100.0, 1.0), (200.0, 0.2)]);
        let filter = curve(&[(0.0, 0.0), (100.0, 1.0), (200.0, 2.0)]);

        let point = operating_point(&fan, &filter).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(point.flow, 100.0, tol));
        assert!(nearly_equal(point.pressure, 1.0, tol));
    }

    #[test]
    fn offset_grids_interpolate_the_other_curve() {
        // Fan sampled at even flows, filter at odd ones; the crossing is
        // between grid points of both curves.
        let fan = curve(&[(0.0, 3.0), (50.0, 2.0), (150.0, 0.0)]);
        let filter = curve(&[(25.0, 0.5), (75.0, 1.5), (125.0, 2.5)]);

        let point = operating_point(&fan, &filter).unwrap();
        // fan: 2 - 0.02 (flow - 50), filter: 0.5 + 0.02 (flow - 25);
        // equal at flow = 75, pressure = 1.5.
        let tol = Tolerances::default();
        assert!(nearly_equal(point.flow, 75.0, tol));
        assert!(nearly_equal(point.pressure, 1.5, tol));
    }

    #[test]
    fn empty_curves_have_no_crossing() {
        let fan = curve(&[(0.0, 2.0), (100.0, 1.0)]);
        assert_eq!(operating_point(&fan, &Curve::default()), None);
        assert_eq!(operating_point(&Curve::default(), &fan), None);
        assert_eq!(operating_point(&Curve::default(), &Curve::default()), None);
    }

    #[test]
    fn first_crossing_wins_when_curves_wiggle() {
        // Non-monotonic fan curve crossing twice; the scan stops at the
        // first bracket.
        let fan = curve(&[(0.0, 2.0), (100.0, 0.5), (200.0, 2.5)]);
        let filter = curve(&[(0.0, 1.0), (100.0, 1.0), (200.0, 1.0)]);

        let point = operating_point(&fan, &filter).unwrap();
        assert!(point.flow < 100.0);
    }

    #[test]
    fn identical_single_segment_curves_hit_at_the_first_shared_sample() {
        let fan = curve(&[(0.0, 1.0), (100.0, 1.0)]);
        let filter = curve(&[(0.0, 1.0), (100.0, 1.0)]);

        // Both diffs are zero: degenerate bracket resolves to the
        // previous sample.
        let point = operating_point(&fan, &filter).unwrap();
        assert_eq!(point.flow, 0.0);
        assert_eq!(point.pressure, 1.0);
    }
}
