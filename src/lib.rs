//! Warpspec - control-to-parameter value warping
//!
//! Converts normalized control positions in `[0, 1]` (knobs, sliders) to
//! parameter values such as frequencies, gains and times, and back, using
//! a per-parameter curve so that equal control motion feels even.

pub mod config;
pub mod convert;
pub mod error;
pub mod mapping;
pub mod spec;

pub use config::WarpConfig;
pub use convert::{amp_to_db, db_to_amp, freq_to_midi, midi_to_freq};
pub use error::{Result, WarpError};
pub use spec::{default_spec, CurveKind, WarpSpec};
