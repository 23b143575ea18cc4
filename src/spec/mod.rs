//! Warp specs and the built-in spec registry

mod curve;
mod defaults;
mod warp_spec;

pub use curve::{CurveKind, MIN_EXPONENT};
pub use defaults::{default_names, default_spec, is_default_name};
pub use warp_spec::WarpSpec;
