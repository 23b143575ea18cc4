//! Quarter-sine curve: fast at the start, flattening toward `maxval`

use std::f64::consts::{FRAC_PI_2, PI};

use super::linear;
use crate::spec::WarpSpec;

pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    linear::map(spec, (FRAC_PI_2 * value).sin())
}

/// Inverse of [`map`]: `asin(u) / (0.5 * PI)`
pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    linear::unmap(spec, value).asin() / FRAC_PI_2
}

/// Legacy inverse that evaluates `asin(u) / 0.5 * PI`, i.e. `asin(u) * 2 * PI`.
///
/// This does not invert [`map`]; it reproduces values from older
/// implementations that shipped this formula. Results range over `[0, PI^2]`.
pub fn unmap_literal(spec: &WarpSpec, value: f64) -> f64 {
    let value = spec.clip(value);
    linear::unmap(spec, value).asin() / 0.5 * PI
}
