//! Clamped piecewise-linear curve evaluation.

use crate::curve::Curve;
use pq_core::Real;

/// Evaluate a curve at an arbitrary flow value.
///
/// Returns `None` for an empty curve. Outside the sampled range the curve
/// clamps to its end samples; there is no extrapolation. Inside the range
/// the bracketing sample pair is interpolated linearly. Bracket flows are
/// strictly increasing (parser invariant), so the division is always
/// well-defined.
pub fn pressure_at(curve: &Curve, flow: Real) -> Option<Real> {
    let points = curve.points();
    let first = points.first()?;
    let last = points.last()?;

    if flow <= first.flow {
        return Some(first.pressure);
    }
    if flow >= last.flow {
        return Some(last.pressure);
    }

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if flow >= a.flow && flow <= b.flow {
            let t = (flow - a.flow) / (b.flow - a.flow);
            return Some(a.pressure + (b.pressure - a.pressure) * t);
        }
    }

    None
}
