//! Divide/multiply symmetric curve
//!
//! The lower half of the control range sweeps linearly from `minval` to 1,
//! the upper half from 1 to `maxval`. With reciprocal bounds (1/n, n) the
//! control midpoint is unity and equal motion either side divides or
//! multiplies by the same factor at the ends.

use crate::spec::WarpSpec;

pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    if value < 0.5 {
        let t = value * 2.0;
        spec.minval() + (1.0 - spec.minval()) * t
    } else {
        let t = (value - 0.5) * 2.0;
        1.0 + (spec.maxval() - 1.0) * t
    }
}

/// Values on `minval`'s side of 1 invert through the lower segment,
/// whichever way round the range runs.
pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    if (value - 1.0) * (spec.minval() - 1.0) > 0.0 {
        (value - spec.minval()) / (1.0 - spec.minval()) * 0.5
    } else {
        (value - 1.0) / (spec.maxval() - 1.0) * 0.5 + 0.5
    }
}
