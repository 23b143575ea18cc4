//! Linear curve
//!
//! The other shaped curves (cosine, sine) are expressed as reshaped inputs
//! to this one.

use crate::spec::WarpSpec;

/// `value * range + minval`
pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    value * spec.range() + spec.minval()
}

/// `(value - minval) / range`
pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    (value - spec.minval()) / spec.range()
}
