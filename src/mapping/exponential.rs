//! Exponential curve
//!
//! Equal control motion multiplies the parameter by an equal factor, so a
//! frequency spec moves by the same musical interval everywhere on the
//! control. Both bounds must be nonzero and share a sign; nothing here
//! checks that.

use crate::spec::WarpSpec;

/// `ratio^value * minval`
pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    spec.ratio().powf(value) * spec.minval()
}

/// `ln(value / minval) / ln(ratio)`
pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    (value / spec.minval()).ln() / spec.ratio().ln()
}
