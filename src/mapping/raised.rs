//! Custom-exponent curve
//!
//! With `grow = e^g`, `a = range / (1 - grow)` and `b = minval + a`:
//!   map(v)   = b - a * grow^v
//!   unmap(x) = ln((b - x) / a) / g
//!
//! `g = 0` would make `a` infinite; `WarpSpec::new` keeps `|g| >= 0.001`.
//! Very large exponents are not defended against.

use crate::spec::WarpSpec;

fn coefficients(spec: &WarpSpec, exponent: f64) -> (f64, f64, f64) {
    let grow = exponent.exp();
    let a = spec.range() / (1.0 - grow);
    let b = spec.minval() + a;
    (grow, a, b)
}

pub fn map(spec: &WarpSpec, exponent: f64, value: f64) -> f64 {
    let (grow, a, b) = coefficients(spec, exponent);
    b - a * grow.powf(value)
}

pub fn unmap(spec: &WarpSpec, exponent: f64, value: f64) -> f64 {
    let (_, a, b) = coefficients(spec, exponent);
    ((b - value) / a).ln() / exponent
}
