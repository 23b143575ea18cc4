//! Curve family
//!
//! Each module supplies a `map`/`unmap` pair over a [`WarpSpec`]'s bounds.
//! `map` expects a control value already clamped to `[0, 1]` and `unmap`
//! a parameter value already clipped to the spec's range; the clamping
//! happens in `WarpSpec::map` and `WarpSpec::unmap`.
//!
//! [`WarpSpec`]: crate::spec::WarpSpec

pub mod amplitude;
pub mod cosine;
pub mod decibel;
pub mod divmul;
pub mod exponential;
pub mod linear;
pub mod raised;
pub mod sine;
