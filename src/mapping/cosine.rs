//! Raised-cosine curve: slow at both ends, fastest through the middle

use std::f64::consts::PI;

use super::linear;
use crate::spec::WarpSpec;

pub fn map(spec: &WarpSpec, value: f64) -> f64 {
    linear::map(spec, 0.5 - (PI * value).cos() * 0.5)
}

pub fn unmap(spec: &WarpSpec, value: f64) -> f64 {
    (1.0 - 2.0 * linear::unmap(spec, value)).acos() / PI
}
