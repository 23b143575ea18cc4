//! Square-law amplitude curve
//!
//! Ascending ranges use `v^2`; descending ranges mirror it around the
//! midpoint, `1 - (1 - v)^2`, so the fine resolution stays at the low
//! end of the range whichever way round it runs.

use crate::spec::WarpSpec;

pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    shape(spec.range(), value) * spec.range() + spec.minval()
}

pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    unshape(spec.range(), (value - spec.minval()) / spec.range())
}

/// Square-law shaping of a unit value, oriented by the sign of `range`
pub(crate) fn shape(range: f64, value: f64) -> f64 {
    if range >= 0.0 {
        value * value
    } else {
        let inv = 1.0 - value;
        1.0 - inv * inv
    }
}

/// Inverse of [`shape`]
pub(crate) fn unshape(range: f64, value: f64) -> f64 {
    if range >= 0.0 {
        value.sqrt()
    } else {
        1.0 - (1.0 - value).sqrt()
    }
}
